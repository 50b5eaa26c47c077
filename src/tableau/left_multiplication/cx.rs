use crate::tableau::BitSymplectic;

impl BitSymplectic {
    /// Left CNOT: the target X row absorbs the control X row, the control
    /// Z row absorbs the target Z row.
    pub(crate) fn _left_multiply_cx(&mut self, ictrl: usize, inot: usize) {
        debug_assert_ne!(ictrl, inot);
        let x = self.xrow(ictrl);
        self.xor_xrow(inot, x);
        let z = self.zrow(inot);
        self.xor_zrow(ictrl, z);
        debug_assert!(self.check_symplectic());
    }
}
