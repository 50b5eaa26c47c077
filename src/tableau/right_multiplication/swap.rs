use crate::tableau::BitSymplectic;

impl BitSymplectic {
    /// Right SWAP: exchanges columns `q1` and `q2` of both blocks.
    pub(crate) fn _right_multiply_swap(&mut self, q1: usize, q2: usize) {
        let x1 = self.xcol(q1);
        let x2 = self.xcol(q2);
        self.set_xcol(q1, x2);
        self.set_xcol(q2, x1);
        let z1 = self.zcol(q1);
        let z2 = self.zcol(q2);
        self.set_zcol(q1, z2);
        self.set_zcol(q2, z1);
        debug_assert!(self.check_symplectic());
    }
}
