use crate::tableau::BitSymplectic;

impl BitSymplectic {
    /// Left HSH (the X-basis phase): xors the Z row of `qarg` into its X row.
    pub(crate) fn _left_multiply_hsh(&mut self, qarg: usize) {
        let z = self.zrow(qarg);
        self.xor_xrow(qarg, z);
        debug_assert!(self.check_symplectic());
    }
}
