use crate::circuit::{CircPerm, Symmetry3N};
use crate::reduce::left::{left_reduce, left_reduce_row_backtrack};
use crate::tableau::BitSymplectic;

/// Canonicalizes under row symmetries and row order: [`left_reduce`]
/// followed by sorting the per-qubit rows (X row concatenated with Z row)
/// ascending. Symplecticity pairs each X row with its Z row, so sorting
/// whole qubit rows keeps the invariant.
pub fn leftorder_reduce(input: BitSymplectic) -> BitSymplectic {
    let input = left_reduce(input);
    let n = input.n_qubits();
    let mut rows: Vec<_> = (0..n).map(|i| input.get_row(i)).collect();
    rows.sort_unstable();
    let sorted = BitSymplectic::pack_qubit_rows(n, &rows);
    debug_assert!(sorted.check_symplectic());
    sorted
}

/// Sorts the left-reduced rows of `reduced` while mirroring every swap onto
/// `matrix`, and returns the permutation: entry `i` is the original qubit
/// now at position `i`.
fn sort_rows_tracked(reduced: &mut BitSymplectic, matrix: &mut BitSymplectic) -> Vec<usize> {
    let n = reduced.n_qubits();
    let mut perm: Vec<usize> = (0..n).collect();
    for i in 0..n {
        for j in 0..i {
            if reduced.get_row(i) < reduced.get_row(j) {
                reduced._left_multiply_swap(i, j);
                matrix._left_multiply_swap(i, j);
                perm.swap(i, j);
            }
        }
    }
    perm
}

/// Recovers `(sym, perm)` with `perm · (sym · base) = target`, given that
/// the two matrices share a [`leftorder_reduce`] form.
pub fn leftorder_reduce_backtrack(
    base: BitSymplectic,
    target: BitSymplectic,
) -> (Symmetry3N, CircPerm) {
    let n = base.n_qubits();
    let mut base_sorted = base;
    let mut target_sorted = target;
    let mut base_reduced = left_reduce(base);
    let mut target_reduced = left_reduce(target);

    let base_perm = sort_rows_tracked(&mut base_reduced, &mut base_sorted);
    let target_perm = sort_rows_tracked(&mut target_reduced, &mut target_sorted);
    debug_assert_eq!(base_reduced, target_reduced);

    let mut left_sym = Symmetry3N::identity();
    let mut left_perm = CircPerm::empty();
    for i in 0..n {
        left_sym = left_sym.update(
            base_perm[i],
            left_reduce_row_backtrack(base_sorted, target_sorted, i),
        );
        left_perm = left_perm.update(base_perm[i], target_perm[i]);
    }

    #[cfg(debug_assertions)]
    {
        let mut check = base;
        check._left_multiply_sym3n(left_sym);
        check._left_multiply_perm(left_perm);
        debug_assert_eq!(check, target);
    }

    (left_sym, left_perm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leftorder_strips_symmetries_and_row_order() {
        let identity = BitSymplectic::identity(5).unwrap();
        let mut matrix = identity;
        matrix.apply_s_l(1).unwrap();
        matrix.apply_h_l(2).unwrap();
        matrix.apply_hsh_l(3).unwrap();
        matrix.apply_swap_l(0, 4).unwrap();
        matrix.apply_swap_l(1, 2).unwrap();
        assert_eq!(leftorder_reduce(matrix), identity);
    }

    #[test]
    fn test_leftorder_idempotent() {
        let mut matrix = BitSymplectic::identity(3).unwrap();
        matrix.apply_cx_l(0, 1).unwrap();
        matrix.apply_cx_l(1, 2).unwrap();
        matrix.apply_s_l(0).unwrap();
        let reduced = leftorder_reduce(matrix);
        assert_eq!(leftorder_reduce(reduced), reduced);
    }
}
