use crate::circuit::Symmetry3;
use crate::tableau::BitSymplectic;

/// Canonicalizes row `irow` under the one-qubit symmetry group: afterwards
/// the triple (X row, Z row, X^Z) is in strictly ascending order. The
/// six symmetries permute the triple as S3, so three comparison-driven
/// swaps reach the unique sorted representative.
pub fn left_reduce_row(mut input: BitSymplectic, irow: usize) -> BitSymplectic {
    let mut x = input.xrow(irow);
    let mut z = input.zrow(irow);
    let mut y = x ^ z;
    debug_assert!(x != z && x != y && y != z);

    if x > z {
        std::mem::swap(&mut x, &mut z);
        input._left_multiply_h(irow);
    }
    if z > y {
        std::mem::swap(&mut z, &mut y);
        input._left_multiply_s(irow);
    }
    if x > z {
        std::mem::swap(&mut x, &mut z);
        input._left_multiply_h(irow);
    }

    debug_assert_eq!(x, input.xrow(irow));
    debug_assert_eq!(z, input.zrow(irow));
    debug_assert_eq!(y, input.xrow(irow) ^ input.zrow(irow));
    debug_assert!(x < z && z < y);
    input
}

/// Canonicalizes every row under the per-qubit symmetry group.
pub fn left_reduce(mut input: BitSymplectic) -> BitSymplectic {
    for i in 0..input.n_qubits() {
        input = left_reduce_row(input, i);
    }
    input
}

/// Recovers the one-qubit symmetry whose left action carries row `irow` of
/// `base` onto row `irow` of `target`. The rows must be related by a
/// symmetry, i.e. their [`left_reduce_row`] forms must agree.
pub fn left_reduce_row_backtrack(
    base: BitSymplectic,
    target: BitSymplectic,
    irow: usize,
) -> Symmetry3 {
    for sym in Symmetry3::ALL {
        let mut matrix = base;
        matrix._left_multiply_sym3(sym, irow);
        if matrix.xrow(irow) == target.xrow(irow) && matrix.zrow(irow) == target.zrow(irow) {
            return sym;
        }
    }
    unreachable!("rows are not related by a one-qubit symmetry")
}
