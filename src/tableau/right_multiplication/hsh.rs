use crate::tableau::BitSymplectic;

impl BitSymplectic {
    /// Right HSH: xors the X column of `qarg` into its Z column.
    pub(crate) fn _right_multiply_hsh(&mut self, qarg: usize) {
        let x = self.xcol(qarg);
        self.xor_zcol(qarg, x);
        debug_assert!(self.check_symplectic());
    }
}
