use crate::tableau::BitSymplectic;

impl BitSymplectic {
    /// Left Phase: xors the X row of `qarg` into its Z row.
    pub(crate) fn _left_multiply_s(&mut self, qarg: usize) {
        let x = self.xrow(qarg);
        self.xor_zrow(qarg, x);
        debug_assert!(self.check_symplectic());
    }
}
