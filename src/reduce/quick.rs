use crate::circuit::{CircPerm, Symmetry3N};
use crate::math::{factorial, power};
use crate::reduce::leftorder::{leftorder_reduce, leftorder_reduce_backtrack};
use crate::reduce::permutation_helper::next_permutation_in;
use crate::tableau::BitSymplectic;

/// Maximal runs of length > 1 under `eq`, as half-open index ranges.
pub(crate) fn collect_eq_blocks<F: Fn(usize, usize) -> bool>(
    len: usize,
    eq: F,
) -> Vec<(usize, usize)> {
    let mut blocks = Vec::new();
    let mut last = 0;
    for i in 1..len {
        if !eq(i, last) {
            if i - last > 1 {
                blocks.push((last, i));
            }
            last = i;
        }
    }
    if len - last > 1 {
        blocks.push((last, len));
    }
    blocks
}

/// The full canonical form: the minimum of [`leftorder_reduce`] over every
/// right column permutation that preserves the ascending column-metric
/// vector. Columns with equal metrics form equivalence blocks; only
/// permutations within blocks can compete, so the walk is exhaustive.
pub fn quick_reduce(input: BitSymplectic) -> BitSymplectic {
    let n = input.n_qubits();
    let mut matrix = input;
    let mut metrics: Vec<u32> = (0..n).map(|j| matrix.col_metric(j)).collect();

    for i in 0..n {
        for j in 0..i {
            if metrics[i] < metrics[j] {
                matrix._right_multiply_swap(i, j);
                metrics.swap(i, j);
            }
        }
    }
    debug_assert!(metrics.windows(2).all(|w| w[0] <= w[1]));

    let blocks = collect_eq_blocks(n, |a, b| metrics[a] == metrics[b]);
    let mut perm: Vec<usize> = (0..n).collect();
    let mut best = leftorder_reduce(matrix);

    loop {
        let mut advanced = false;
        for &(lo, hi) in &blocks {
            if next_permutation_in(&mut perm, lo, hi, &mut |a, b| {
                matrix._right_multiply_swap(a, b)
            }) {
                advanced = true;
                break;
            }
        }
        if !advanced {
            break;
        }
        debug_assert!((0..n).all(|j| matrix.col_metric(j) == metrics[j]));
        let candidate = leftorder_reduce(matrix);
        if candidate < best {
            best = candidate;
        }
    }
    best
}

/// The symmetries relating two equivalent matrices:
/// `left_perm · (left_sym · base) · right_perm = target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickReduceBacktrack {
    pub left_perm: CircPerm,
    pub left_sym: Symmetry3N,
    pub right_perm: CircPerm,
}

/// Recovers the symmetry triple carrying `base` onto `target`, or `None`
/// when the two are not in the same equivalence class. Walks the right
/// column permutations until the left-order forms agree, then backtracks
/// the left symmetries.
pub fn quick_reduce_backtrack(
    base: BitSymplectic,
    target: BitSymplectic,
) -> Option<QuickReduceBacktrack> {
    let n = base.n_qubits();
    let mut permuted = base;
    let mut perm: Vec<usize> = (0..n).collect();
    let target_reduced = leftorder_reduce(target);

    loop {
        if leftorder_reduce(permuted) == target_reduced {
            break;
        }
        if !next_permutation_in(&mut perm, 0, n, &mut |a, b| {
            permuted._right_multiply_swap(a, b)
        }) {
            return None;
        }
    }

    let (left_sym, left_perm) = leftorder_reduce_backtrack(permuted, target);
    let right_perm = CircPerm::from_inverse(perm.iter().copied());

    #[cfg(debug_assertions)]
    {
        let mut check = base;
        check._left_multiply_sym3n(left_sym);
        check._left_multiply_perm(left_perm);
        check._right_multiply_perm(right_perm);
        debug_assert_eq!(check, target);
    }

    Some(QuickReduceBacktrack { left_perm, left_sym, right_perm })
}

/// The orbit size of `input` under the full symmetry group, computed as
/// (N!)^2 * 6^N divided by the number of column permutations fixing the
/// left-order form.
pub fn quick_reduce_eqcount(input: BitSymplectic) -> u64 {
    let n = input.n_qubits();
    let input_reduced = leftorder_reduce(input);
    let mut matrix = input;
    let mut perm: Vec<usize> = (0..n).collect();
    let mut aut = 1u64;
    while next_permutation_in(&mut perm, 0, n, &mut |a, b| {
        matrix._right_multiply_swap(a, b)
    }) {
        if leftorder_reduce(matrix) == input_reduced {
            aut += 1;
        }
    }
    factorial(n) * factorial(n) * power(6, n as u32) / aut
}
