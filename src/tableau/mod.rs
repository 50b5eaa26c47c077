use std::fmt;

use crate::bitvec::Bv;
use crate::error::{Error, Result};

mod gate_application;
mod left_multiplication;
mod right_multiplication;

/// The largest qubit count the packed representation supports.
pub const MAX_QUBITS: usize = 5;

/// A 2N x 2N binary symplectic matrix over F2, packed into two words.
///
/// The pair `(xrows, zrows)` holds the images of the X and Z generators
/// row-major: bit `i * 2N + j` of `xrows` is row `i`, column `j` of the
/// upper block, and likewise for `zrows` and the lower block. Every
/// construction and every gate action preserves the symplectic form, so a
/// value of this type always encodes a Clifford operator modulo Pauli and
/// phase.
///
/// Ordering compares `(xrows, zrows)` as packed integers, which is the
/// total order the canonical reductions minimize over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitSymplectic {
    n: usize,
    xrows: Bv,
    zrows: Bv,
}

/// Folds the two halves of an even-width vector together with OR.
pub(crate) fn chi(v: Bv) -> Bv {
    let half = v.width() / 2;
    debug_assert_eq!(half * 2, v.width());
    v.slice(0, half) | v.slice(half, half)
}

impl BitSymplectic {
    /// The identity tableau: `xrow(i)` has bit `i` set, `zrow(i)` bit `n + i`.
    pub fn identity(n: usize) -> Result<Self> {
        if n == 0 || n > MAX_QUBITS {
            return Err(Error::InvalidNumQubits(n));
        }
        let mut result = BitSymplectic {
            n,
            xrows: Bv::zero(2 * n * n),
            zrows: Bv::zero(2 * n * n),
        };
        for i in 0..n {
            result.set_xrow(i, Bv::new(2 * n, 1 << i));
            result.set_zrow(i, Bv::new(2 * n, 1 << (n + i)));
        }
        debug_assert!(result.check_symplectic());
        Ok(result)
    }

    /// Builds a tableau from its 2N rows (the N X rows followed by the
    /// N Z rows, each of width 2N).
    pub fn from_rows(rows: &[Bv]) -> Result<Self> {
        let n = rows.len() / 2;
        if n == 0 || n > MAX_QUBITS || rows.len() != 2 * n {
            return Err(Error::InvalidNumQubits(rows.len()));
        }
        let mut result = BitSymplectic {
            n,
            xrows: Bv::zero(2 * n * n),
            zrows: Bv::zero(2 * n * n),
        };
        for i in 0..n {
            result.set_xrow(i, rows[i]);
            result.set_zrow(i, rows[n + i]);
        }
        if !result.check_symplectic() {
            return Err(Error::NotSymplectic);
        }
        Ok(result)
    }

    /// Builds a tableau from N per-qubit rows of width 4N, each the X row
    /// concatenated with the Z row as returned by [`BitSymplectic::get_row`].
    pub fn from_qubit_rows(rows: &[Bv]) -> Result<Self> {
        let n = rows.len();
        if n == 0 || n > MAX_QUBITS {
            return Err(Error::InvalidNumQubits(n));
        }
        let result = Self::pack_qubit_rows(n, rows);
        if !result.check_symplectic() {
            return Err(Error::NotSymplectic);
        }
        Ok(result)
    }

    /// Packs per-qubit rows whose symplecticity is already known, e.g. a
    /// row-permuted copy of an existing tableau.
    pub(crate) fn pack_qubit_rows(n: usize, rows: &[Bv]) -> Self {
        debug_assert_eq!(rows.len(), n);
        let mut result = BitSymplectic {
            n,
            xrows: Bv::zero(2 * n * n),
            zrows: Bv::zero(2 * n * n),
        };
        for (i, row) in rows.iter().enumerate() {
            result.set_xrow(i, row.slice(0, 2 * n));
            result.set_zrow(i, row.slice(2 * n, 2 * n));
        }
        result
    }

    pub fn n_qubits(&self) -> usize {
        self.n
    }

    /// The raw `(xrows, zrows)` words.
    pub fn as_raw(&self) -> (u64, u64) {
        (self.xrows.uint(), self.zrows.uint())
    }

    /// The symplectic form of two row vectors of width 2N.
    pub fn omega(v1: Bv, v2: Bv) -> bool {
        let half = v1.width() / 2;
        let swapped = v2.slice(half, half).concat(v2.slice(0, half));
        v1.dot(swapped)
    }

    /// Checks the symplectic invariant: every row pairs with its own partner
    /// and with no other.
    pub fn check_symplectic(&self) -> bool {
        (0..self.n).all(|i| {
            Self::omega(self.xrow(i), self.zrow(i))
                && (0..i).all(|j| {
                    !Self::omega(self.xrow(i), self.zrow(j))
                        && !Self::omega(self.zrow(i), self.xrow(j))
                })
        })
    }

    pub fn get(&self, irow: usize, icol: usize) -> bool {
        let w = 2 * self.n;
        if irow < self.n {
            self.xrows.get(irow * w + icol)
        } else {
            self.zrows.get((irow - self.n) * w + icol)
        }
    }

    pub fn xrow(&self, irow: usize) -> Bv {
        self.xrows.slice(irow * 2 * self.n, 2 * self.n)
    }

    pub fn zrow(&self, irow: usize) -> Bv {
        self.zrows.slice(irow * 2 * self.n, 2 * self.n)
    }

    /// The full row of qubit `irow`: X row in the low half, Z row above it.
    pub fn get_row(&self, irow: usize) -> Bv {
        self.xrow(irow).concat(self.zrow(irow))
    }

    /// Column `icol` of the upper block over all 2N rows: the X-row bits in
    /// the low half, the Z-row bits above them.
    pub fn xcol(&self, icol: usize) -> Bv {
        let w = 2 * self.n;
        let mut result = Bv::zero(w);
        for i in 0..self.n {
            result = result.update(i, self.xrows.get(i * w + icol));
            result = result.update(i + self.n, self.zrows.get(i * w + icol));
        }
        result
    }

    pub fn zcol(&self, icol: usize) -> Bv {
        self.xcol(icol + self.n)
    }

    /// The column metric used to order columns during canonicalization: the
    /// number of qubits touching column `icol` in the X block plus the
    /// number touching it in the Z block.
    pub fn col_metric(&self, icol: usize) -> u32 {
        chi(self.xcol(icol)).count_ones() + chi(self.zcol(icol)).count_ones()
    }

    pub(crate) fn set_xrow(&mut self, irow: usize, value: Bv) {
        self.xrows = self.xrows.update_slice(irow * 2 * self.n, value);
    }

    pub(crate) fn set_zrow(&mut self, irow: usize, value: Bv) {
        self.zrows = self.zrows.update_slice(irow * 2 * self.n, value);
    }

    pub(crate) fn xor_xrow(&mut self, irow: usize, value: Bv) {
        self.xrows = self.xrows.xor_slice(irow * 2 * self.n, value);
    }

    pub(crate) fn xor_zrow(&mut self, irow: usize, value: Bv) {
        self.zrows = self.zrows.xor_slice(irow * 2 * self.n, value);
    }

    pub(crate) fn set_xcol(&mut self, icol: usize, value: Bv) {
        let w = 2 * self.n;
        for i in 0..self.n {
            self.xrows = self.xrows.update(i * w + icol, value.get(i));
            self.zrows = self.zrows.update(i * w + icol, value.get(i + self.n));
        }
    }

    pub(crate) fn set_zcol(&mut self, icol: usize, value: Bv) {
        self.set_xcol(icol + self.n, value);
    }

    pub(crate) fn xor_xcol(&mut self, icol: usize, value: Bv) {
        let w = 2 * self.n;
        for i in 0..self.n {
            self.xrows = self.xrows.xor_at(i * w + icol, value.get(i));
            self.zrows = self.zrows.xor_at(i * w + icol, value.get(i + self.n));
        }
    }

    pub(crate) fn xor_zcol(&mut self, icol: usize, value: Bv) {
        self.xor_xcol(icol + self.n, value);
    }

    fn check_qubit(&self, qarg: usize) -> Result<()> {
        if qarg >= self.n {
            return Err(Error::QubitIndexOutOfBounds(qarg, self.n));
        }
        Ok(())
    }

    fn check_qubit_pair(&self, q1: usize, q2: usize) -> Result<()> {
        self.check_qubit(q1)?;
        self.check_qubit(q2)?;
        if q1 == q2 {
            return Err(Error::DuplicateQubitIndices(q1));
        }
        Ok(())
    }

    /// Applies the Hadamard row action at `qarg`: swaps the X and Z rows.
    pub fn apply_h_l(&mut self, qarg: usize) -> Result<()> {
        self.check_qubit(qarg)?;
        self._left_multiply_h(qarg);
        Ok(())
    }

    /// Applies the Hadamard column action at `qarg`.
    pub fn apply_h_r(&mut self, qarg: usize) -> Result<()> {
        self.check_qubit(qarg)?;
        self._right_multiply_h(qarg);
        Ok(())
    }

    /// Applies the Phase row action at `qarg`: Z row ^= X row.
    pub fn apply_s_l(&mut self, qarg: usize) -> Result<()> {
        self.check_qubit(qarg)?;
        self._left_multiply_s(qarg);
        Ok(())
    }

    /// Applies the Phase column action at `qarg`.
    pub fn apply_s_r(&mut self, qarg: usize) -> Result<()> {
        self.check_qubit(qarg)?;
        self._right_multiply_s(qarg);
        Ok(())
    }

    /// Applies the HSH row action at `qarg`: X row ^= Z row.
    pub fn apply_hsh_l(&mut self, qarg: usize) -> Result<()> {
        self.check_qubit(qarg)?;
        self._left_multiply_hsh(qarg);
        Ok(())
    }

    /// Applies the HSH column action at `qarg`.
    pub fn apply_hsh_r(&mut self, qarg: usize) -> Result<()> {
        self.check_qubit(qarg)?;
        self._right_multiply_hsh(qarg);
        Ok(())
    }

    /// Applies the CNOT row action with control `ictrl` and target `inot`.
    pub fn apply_cx_l(&mut self, ictrl: usize, inot: usize) -> Result<()> {
        self.check_qubit_pair(ictrl, inot)?;
        self._left_multiply_cx(ictrl, inot);
        Ok(())
    }

    /// Applies the CNOT column action with control `ictrl` and target `inot`.
    pub fn apply_cx_r(&mut self, ictrl: usize, inot: usize) -> Result<()> {
        self.check_qubit_pair(ictrl, inot)?;
        self._right_multiply_cx(ictrl, inot);
        Ok(())
    }

    /// Swaps the rows of qubits `q1` and `q2`.
    pub fn apply_swap_l(&mut self, q1: usize, q2: usize) -> Result<()> {
        self.check_qubit_pair(q1, q2)?;
        self._left_multiply_swap(q1, q2);
        Ok(())
    }

    /// Swaps columns `q1` and `q2` of both blocks.
    pub fn apply_swap_r(&mut self, q1: usize, q2: usize) -> Result<()> {
        self.check_qubit_pair(q1, q2)?;
        self._right_multiply_swap(q1, q2);
        Ok(())
    }
}

impl fmt::Display for BitSymplectic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X[")?;
        for i in 0..self.n {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", self.xrow(i))?;
        }
        write!(f, "] Z[")?;
        for i in 0..self.n {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", self.zrow(i))?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_symplectic() {
        for n in 1..=MAX_QUBITS {
            let matrix = BitSymplectic::identity(n).unwrap();
            assert!(matrix.check_symplectic());
        }
        assert!(BitSymplectic::identity(0).is_err());
        assert!(BitSymplectic::identity(6).is_err());
    }

    #[test]
    fn test_hadamard_involution() {
        let identity = BitSymplectic::identity(5).unwrap();
        let mut matrix = identity;
        matrix.apply_h_l(1).unwrap();
        assert_ne!(matrix, identity);
        matrix.apply_h_l(1).unwrap();
        assert_eq!(matrix, identity);

        matrix.apply_h_r(1).unwrap();
        matrix.apply_h_r(1).unwrap();
        assert_eq!(matrix, identity);

        matrix.apply_h_l(1).unwrap();
        matrix.apply_h_l(2).unwrap();
        matrix.apply_h_r(1).unwrap();
        matrix.apply_h_r(2).unwrap();
        assert_eq!(matrix, identity);

        matrix.apply_h_r(4).unwrap();
        matrix.apply_h_r(4).unwrap();
        assert_eq!(matrix, identity);
    }

    #[test]
    fn test_phase_involution() {
        let identity = BitSymplectic::identity(5).unwrap();
        let mut matrix = identity;
        matrix.apply_s_l(4).unwrap();
        assert_ne!(matrix, identity);
        matrix.apply_s_l(4).unwrap();
        assert_eq!(matrix, identity);

        matrix.apply_s_r(1).unwrap();
        matrix.apply_s_r(1).unwrap();
        assert_eq!(matrix, identity);

        matrix.apply_s_l(1).unwrap();
        matrix.apply_s_l(2).unwrap();
        matrix.apply_s_r(1).unwrap();
        matrix.apply_s_r(2).unwrap();
        assert_eq!(matrix, identity);
    }

    #[test]
    fn test_cnot_involution() {
        let identity = BitSymplectic::identity(5).unwrap();
        let mut matrix = identity;
        matrix.apply_cx_l(1, 4).unwrap();
        assert_ne!(matrix, identity);
        matrix.apply_cx_l(1, 4).unwrap();
        assert_eq!(matrix, identity);

        matrix.apply_cx_r(2, 3).unwrap();
        matrix.apply_cx_r(2, 3).unwrap();
        assert_eq!(matrix, identity);

        matrix.apply_cx_l(1, 0).unwrap();
        matrix.apply_cx_l(2, 0).unwrap();
        matrix.apply_cx_r(1, 0).unwrap();
        matrix.apply_cx_r(2, 0).unwrap();
        assert_eq!(matrix, identity);

        matrix.apply_h_r(4).unwrap();
        matrix.apply_cx_r(3, 4).unwrap();
        matrix.apply_h_r(4).unwrap();
        assert_ne!(matrix, identity);
        matrix.apply_h_r(3).unwrap();
        matrix.apply_cx_r(4, 3).unwrap();
        matrix.apply_h_r(3).unwrap();
        assert_eq!(matrix, identity);
    }

    #[test]
    fn test_swap_involution() {
        let identity = BitSymplectic::identity(3).unwrap();
        let mut matrix = identity;
        matrix.apply_cx_l(0, 2).unwrap();
        let scrambled = matrix;
        matrix.apply_swap_l(0, 1).unwrap();
        matrix.apply_swap_l(0, 1).unwrap();
        assert_eq!(matrix, scrambled);
        matrix.apply_swap_r(1, 2).unwrap();
        matrix.apply_swap_r(1, 2).unwrap();
        assert_eq!(matrix, scrambled);
    }

    #[test]
    fn test_bounds_are_checked() {
        let mut matrix = BitSymplectic::identity(2).unwrap();
        assert!(matrix.apply_h_l(2).is_err());
        assert!(matrix.apply_cx_l(0, 0).is_err());
        assert!(matrix.apply_swap_r(1, 5).is_err());
    }

    #[test]
    fn test_row_round_trip() {
        let mut matrix = BitSymplectic::identity(3).unwrap();
        matrix.apply_cx_l(0, 1).unwrap();
        matrix.apply_s_l(2).unwrap();

        let rows: Vec<_> = (0..3)
            .map(|i| matrix.xrow(i))
            .chain((0..3).map(|i| matrix.zrow(i)))
            .collect();
        assert_eq!(BitSymplectic::from_rows(&rows).unwrap(), matrix);

        let qubit_rows: Vec<_> = (0..3).map(|i| matrix.get_row(i)).collect();
        assert_eq!(BitSymplectic::from_qubit_rows(&qubit_rows).unwrap(), matrix);
    }

    #[test]
    fn test_from_rows_rejects_non_symplectic() {
        let rows: Vec<_> = (0..4).map(|_| Bv::new(4, 0b0001)).collect();
        assert!(matches!(
            BitSymplectic::from_rows(&rows),
            Err(Error::NotSymplectic)
        ));
    }

    #[test]
    fn test_identity_column_metric() {
        let matrix = BitSymplectic::identity(4).unwrap();
        for j in 0..4 {
            assert_eq!(matrix.col_metric(j), 2);
        }
    }

    #[test]
    fn test_columns_mirror_rows() {
        let mut matrix = BitSymplectic::identity(2).unwrap();
        matrix.apply_cx_l(0, 1).unwrap();
        for i in 0..4 {
            for j in 0..2 {
                assert_eq!(matrix.xcol(j).get(i), matrix.get(i, j));
                assert_eq!(matrix.zcol(j).get(i), matrix.get(i, j + 2));
            }
        }
    }
}
