use rand::Rng;

use crate::circuit::CliffordGen;

/// Draws `len` generators uniformly at random from the canonical list for
/// `n` qubits. Used by the randomized reduction tests; with a seeded RNG the
/// sequence is reproducible.
pub fn random_generators<R: Rng>(n: usize, len: usize, rng: &mut R) -> Vec<CliffordGen> {
    let all = CliffordGen::all_generators(n);
    (0..len).map(|_| all[rng.gen_range(0..all.len())]).collect()
}
