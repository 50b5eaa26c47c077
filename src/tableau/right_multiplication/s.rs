use crate::tableau::BitSymplectic;

impl BitSymplectic {
    /// Right Phase: xors the Z column of `qarg` into its X column.
    pub(crate) fn _right_multiply_s(&mut self, qarg: usize) {
        let z = self.zcol(qarg);
        self.xor_xcol(qarg, z);
        debug_assert!(self.check_symplectic());
    }
}
