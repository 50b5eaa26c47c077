use crate::tableau::BitSymplectic;

impl BitSymplectic {
    /// Left SWAP: exchanges the row pairs of qubits `q1` and `q2`.
    pub(crate) fn _left_multiply_swap(&mut self, q1: usize, q2: usize) {
        let x1 = self.xrow(q1);
        let x2 = self.xrow(q2);
        self.set_xrow(q1, x2);
        self.set_xrow(q2, x1);
        let z1 = self.zrow(q1);
        let z2 = self.zrow(q2);
        self.set_zrow(q1, z2);
        self.set_zrow(q2, z1);
        debug_assert!(self.check_symplectic());
    }
}
