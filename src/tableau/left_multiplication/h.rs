use crate::tableau::BitSymplectic;

impl BitSymplectic {
    /// Left Hadamard: exchanges the X and Z rows of `qarg`.
    pub(crate) fn _left_multiply_h(&mut self, qarg: usize) {
        let x = self.xrow(qarg);
        let z = self.zrow(qarg);
        self.set_xrow(qarg, z);
        self.set_zrow(qarg, x);
        debug_assert!(self.check_symplectic());
    }
}
