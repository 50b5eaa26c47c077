use crate::tableau::BitSymplectic;

impl BitSymplectic {
    /// Right Hadamard: exchanges the X and Z columns of `qarg`.
    pub(crate) fn _right_multiply_h(&mut self, qarg: usize) {
        let x = self.xcol(qarg);
        let z = self.zcol(qarg);
        self.set_xcol(qarg, z);
        self.set_zcol(qarg, x);
        debug_assert!(self.check_symplectic());
    }
}
