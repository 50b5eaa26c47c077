use log::{debug, info};

use crate::circuit::CliffordGen;
use crate::error::{Error, Result};
use crate::math::symplectic_group_order;
use crate::reduce::{quick_reduce, quick_reduce_eqcount};
use crate::table::BSearchVec;
use crate::tableau::{BitSymplectic, MAX_QUBITS};
use crate::tree::{GroupedSpanBuilder, Tree};

/// The result of a completed search: the prefix tree of optimal circuits
/// plus the accounting that certifies completeness.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// One byte per gate, one root-to-leaf path per canonical circuit.
    pub tree: Tree,
    /// Distinct canonical matrices found, the identity included.
    pub class_count: u64,
    /// Total symplectic matrices covered by the found classes; equals the
    /// order of Sp(2n, F2) when the generator set saturates the group.
    pub coset_total: u64,
}

/// Breadth-first enumeration of all canonical n-qubit Clifford circuits by
/// optimal generator count.
///
/// Layer 0 of the tree lists every generator index as a root. Each
/// extension walks the current root-to-leaf paths, left-applies every
/// generator, canonicalizes the product and keeps only classes absent from
/// the previous two layers and the layer under construction; a class any
/// older would contradict optimality, since generators change circuit
/// length by at most one. The search ends when a layer stays empty.
pub fn search(n: usize) -> Result<SearchOutcome> {
    if !(2..=MAX_QUBITS).contains(&n) {
        return Err(Error::InvalidNumQubits(n));
    }
    let gens = CliffordGen::all_generators(n);
    let identity = BitSymplectic::identity(n)?;
    info!("searching over {} qubits with {} generators", n, gens.len());

    let mut tree = Tree::from_roots(0..gens.len() as u8);
    let mut class_count: u64 = 1;
    let mut coset_total = quick_reduce_eqcount(identity);

    // Length-1 classes: the generators themselves, deduplicated.
    let mut first = BSearchVec::new();
    for generator in &gens {
        let mut matrix = identity;
        matrix._left_multiply_gen(*generator);
        let reduced = quick_reduce(matrix);
        if reduced == identity || first.contains(&reduced) {
            continue;
        }
        coset_total += quick_reduce_eqcount(reduced);
        class_count += 1;
        first.insert(reduced);
    }
    let mut last2: Vec<BitSymplectic> = vec![identity];
    let mut last: Vec<BitSymplectic> = first.build_sorted();
    debug!(
        "length 1: {} classes ({} matrices so far)",
        last.len(),
        coset_total
    );

    while !last.is_empty() {
        let depth = tree.n_layers();
        let mut builder = GroupedSpanBuilder::new();
        let mut current = BSearchVec::new();

        let mut iter = tree.paths(depth);
        while iter.is_valid() {
            let mut matrix = identity;
            for layer in 0..depth {
                matrix._left_multiply_gen(gens[iter.byte(layer) as usize]);
            }

            builder.new_span();
            for (index, generator) in gens.iter().enumerate() {
                let mut extended = matrix;
                extended._left_multiply_gen(*generator);
                let reduced = quick_reduce(extended);
                if last.binary_search(&reduced).is_ok() {
                    continue;
                }
                if last2.binary_search(&reduced).is_ok() {
                    continue;
                }
                if current.contains(&reduced) {
                    continue;
                }
                builder.add(index as u8);
                coset_total += quick_reduce_eqcount(reduced);
                class_count += 1;
                current.insert(reduced);
            }
            iter.advance();
        }

        let fresh = current.len();
        tree.add_layer(builder.build());
        last2 = last;
        last = current.build_sorted();
        debug!(
            "length {}: {} new classes ({} matrices so far)",
            depth + 1,
            fresh,
            coset_total
        );
    }

    info!(
        "search complete: {} classes covering {} of {} symplectic matrices",
        class_count,
        coset_total,
        symplectic_group_order(n)
    );
    debug_assert_eq!(coset_total, symplectic_group_order(n));
    Ok(SearchOutcome { tree, class_count, coset_total })
}
