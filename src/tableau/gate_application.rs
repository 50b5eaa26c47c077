use crate::circuit::{CircPerm, CliffordGen, GenOp, Symmetry3, Symmetry3N};
use crate::error::Result;
use crate::tableau::BitSymplectic;

impl BitSymplectic {
    pub(crate) fn _left_multiply_genop(&mut self, op: GenOp, qarg: usize) {
        match op {
            GenOp::I => {}
            GenOp::HS => {
                self._left_multiply_h(qarg);
                self._left_multiply_s(qarg);
            }
            GenOp::SH => {
                self._left_multiply_s(qarg);
                self._left_multiply_h(qarg);
            }
        }
    }

    pub(crate) fn _right_multiply_genop(&mut self, op: GenOp, qarg: usize) {
        match op {
            GenOp::I => {}
            GenOp::HS => {
                self._right_multiply_h(qarg);
                self._right_multiply_s(qarg);
            }
            GenOp::SH => {
                self._right_multiply_s(qarg);
                self._right_multiply_h(qarg);
            }
        }
    }

    pub(crate) fn _left_multiply_gen(&mut self, generator: CliffordGen) {
        debug_assert!(!generator.is_null());
        self._left_multiply_genop(generator.op_ctrl(), generator.ictrl());
        self._left_multiply_genop(generator.op_not(), generator.inot());
        self._left_multiply_cx(generator.ictrl(), generator.inot());
    }

    pub(crate) fn _right_multiply_gen(&mut self, generator: CliffordGen) {
        debug_assert!(!generator.is_null());
        self._right_multiply_genop(generator.op_ctrl(), generator.ictrl());
        self._right_multiply_genop(generator.op_not(), generator.inot());
        self._right_multiply_cx(generator.ictrl(), generator.inot());
    }

    pub(crate) fn _left_multiply_sym3(&mut self, sym: Symmetry3, qarg: usize) {
        if sym.bit(0) {
            self._left_multiply_h(qarg);
        }
        if sym.bit(1) {
            self._left_multiply_s(qarg);
        }
        if sym.bit(2) {
            self._left_multiply_h(qarg);
        }
    }

    pub(crate) fn _left_multiply_sym3n(&mut self, sym: Symmetry3N) {
        for i in 0..self.n_qubits() {
            self._left_multiply_sym3(sym.get(i), i);
        }
    }

    pub(crate) fn _left_multiply_perm(&mut self, perm: CircPerm) {
        let n = self.n_qubits();
        perm.emit_by_swap(n, |a, b| self._left_multiply_swap(a, b));
    }

    pub(crate) fn _right_multiply_perm(&mut self, perm: CircPerm) {
        let n = self.n_qubits();
        perm.emit_by_swap(n, |a, b| self._right_multiply_swap(a, b));
    }

    /// Left-applies a generator: its control dressing, its target dressing,
    /// then its CNOT.
    pub fn apply_gen_l(&mut self, generator: CliffordGen) -> Result<()> {
        self.check_qubit_pair(generator.ictrl(), generator.inot())?;
        self._left_multiply_gen(generator);
        Ok(())
    }

    /// Right-applies a generator, mirroring [`BitSymplectic::apply_gen_l`]
    /// with column actions.
    pub fn apply_gen_r(&mut self, generator: CliffordGen) -> Result<()> {
        self.check_qubit_pair(generator.ictrl(), generator.inot())?;
        self._right_multiply_gen(generator);
        Ok(())
    }

    /// Left-applies a one-qubit symmetry at `qarg`.
    pub fn apply_sym3_l(&mut self, sym: Symmetry3, qarg: usize) -> Result<()> {
        self.check_qubit(qarg)?;
        self._left_multiply_sym3(sym, qarg);
        Ok(())
    }

    /// Left-applies a per-qubit symmetry word.
    pub fn apply_sym3n_l(&mut self, sym: Symmetry3N) {
        self._left_multiply_sym3n(sym);
    }

    /// Left-applies a row permutation. `perm` must map every qubit below
    /// the tableau size.
    pub fn apply_perm_l(&mut self, perm: CircPerm) {
        self._left_multiply_perm(perm);
    }

    /// Right-applies a column permutation. `perm` must map every qubit
    /// below the tableau size.
    pub fn apply_perm_r(&mut self, perm: CircPerm) {
        self._right_multiply_perm(perm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_application_keeps_symplecticity() {
        for generator in CliffordGen::all_generators(3) {
            let mut left = BitSymplectic::identity(3).unwrap();
            left.apply_gen_l(generator).unwrap();
            assert!(left.check_symplectic());

            let mut right = BitSymplectic::identity(3).unwrap();
            right.apply_gen_r(generator).unwrap();
            assert!(right.check_symplectic());
        }
    }

    #[test]
    fn test_gen_bounds_checked() {
        let mut matrix = BitSymplectic::identity(2).unwrap();
        let generator = CliffordGen::new(GenOp::I, GenOp::I, 0, 4);
        assert!(matrix.apply_gen_l(generator).is_err());
    }

    #[test]
    fn test_sym3_matches_explicit_sequence() {
        let mut via_sym = BitSymplectic::identity(2).unwrap();
        via_sym.apply_cx_l(0, 1).unwrap();
        let mut via_gates = via_sym;

        via_sym.apply_sym3_l(Symmetry3::HS, 1).unwrap();
        via_gates.apply_h_l(1).unwrap();
        via_gates.apply_s_l(1).unwrap();
        assert_eq!(via_sym, via_gates);

        via_sym.apply_sym3_l(Symmetry3::SH, 0).unwrap();
        via_gates.apply_s_l(0).unwrap();
        via_gates.apply_h_l(0).unwrap();
        assert_eq!(via_sym, via_gates);
    }

    #[test]
    fn test_perm_application_is_swap_sequence() {
        let mut matrix = BitSymplectic::identity(3).unwrap();
        matrix.apply_cx_l(0, 2).unwrap();
        let mut via_perm = matrix;
        via_perm.apply_perm_l(CircPerm::from_images([1, 0, 2]));
        matrix.apply_swap_l(0, 1).unwrap();
        assert_eq!(via_perm, matrix);
    }

    #[test]
    fn test_perm_left_right_commute() {
        let mut matrix = BitSymplectic::identity(3).unwrap();
        matrix.apply_cx_l(1, 2).unwrap();
        matrix.apply_s_l(0).unwrap();
        let perm = CircPerm::from_images([2, 0, 1]);

        let mut left_first = matrix;
        left_first.apply_perm_l(perm);
        left_first.apply_perm_r(perm.inverse(3));

        let mut right_first = matrix;
        right_first.apply_perm_r(perm.inverse(3));
        right_first.apply_perm_l(perm);

        assert_eq!(left_first, right_first);
    }
}
