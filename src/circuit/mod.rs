use crate::error::{Error, Result};
use crate::tableau::BitSymplectic;

mod generator;
pub use generator::{CliffordGen, GenOp};

mod permutation;
pub use permutation::CircPerm;

mod symmetry;
pub use symmetry::{Symmetry3, Symmetry3N};

mod random;
pub use random::random_generators;

/// Left-applies the generators named by `indices` (into the canonical list
/// for `n` qubits) to the identity, in order: the first index acts first.
pub fn apply_generators(n: usize, indices: &[u8]) -> Result<BitSymplectic> {
    let mut matrix = BitSymplectic::identity(n)?;
    let gens = CliffordGen::all_generators(n);
    for &index in indices {
        let generator = gens
            .get(index as usize)
            .ok_or(Error::GeneratorIndexOutOfBounds(index as usize, gens.len()))?;
        matrix._left_multiply_gen(*generator);
    }
    Ok(matrix)
}
