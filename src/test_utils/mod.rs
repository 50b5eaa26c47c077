//! Helpers shared by the randomized reduction and search tests.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::circuit::{CircPerm, Symmetry3, Symmetry3N, random_generators};
use crate::tableau::BitSymplectic;

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A pseudo-random tableau: `gate_count` random generators applied to the
/// identity.
pub fn random_tableau<R: Rng>(n: usize, gate_count: usize, rng: &mut R) -> BitSymplectic {
    let mut matrix = BitSymplectic::identity(n).unwrap();
    for generator in random_generators(n, gate_count, rng) {
        matrix.apply_gen_l(generator).unwrap();
    }
    matrix
}

/// A uniformly random per-qubit symmetry word.
pub fn random_symmetry<R: Rng>(n: usize, rng: &mut R) -> Symmetry3N {
    let mut sym = Symmetry3N::identity();
    for i in 0..n {
        sym = sym.update(i, Symmetry3::ALL[rng.gen_range(0..Symmetry3::ALL.len())]);
    }
    sym
}

/// A uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> CircPerm {
    let mut images: Vec<usize> = (0..n).collect();
    images.shuffle(rng);
    CircPerm::from_images(images)
}

/// Scrambles `matrix` in place with `times` random operations drawn from
/// the symmetry group the canonical form quotients out: left one-qubit
/// symmetries, left row swaps and right column swaps.
pub fn scramble_in_class<R: Rng>(matrix: &mut BitSymplectic, times: usize, rng: &mut R) {
    let n = matrix.n_qubits();
    for _ in 0..times {
        match rng.gen_range(0..3) {
            0 => {
                let sym = Symmetry3::ALL[rng.gen_range(0..Symmetry3::ALL.len())];
                matrix.apply_sym3_l(sym, rng.gen_range(0..n)).unwrap();
            }
            1 => {
                let a = rng.gen_range(0..n);
                let b = (a + rng.gen_range(1..n)) % n;
                matrix.apply_swap_l(a, b).unwrap();
            }
            _ => {
                let a = rng.gen_range(0..n);
                let b = (a + rng.gen_range(1..n)) % n;
                matrix.apply_swap_r(a, b).unwrap();
            }
        }
    }
}
