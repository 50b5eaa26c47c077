use std::fmt;

use crate::bitvec::Bv;

const UNMAPPED: u64 = 0o7;

/// An injective partial map on qubit indices, stored as five 3-bit slots in
/// one word. Slot value 7 means "unmapped".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CircPerm {
    slots: u16,
}

impl Default for CircPerm {
    fn default() -> Self {
        CircPerm::empty()
    }
}

impl CircPerm {
    /// The everywhere-unmapped partial map.
    pub fn empty() -> Self {
        CircPerm { slots: 0o77777 }
    }

    /// The identity map on all five slots.
    pub fn identity() -> Self {
        CircPerm { slots: 0o43210 }
    }

    /// Builds a permutation from its images: element `i` of `images` is the
    /// destination of `i`.
    pub fn from_images<I: IntoIterator<Item = usize>>(images: I) -> Self {
        let mut result = CircPerm::empty();
        for (i, v) in images.into_iter().enumerate() {
            result = result.update(i, v);
        }
        result
    }

    /// Builds the inverse of the permutation listed by `images`: if element
    /// `i` is `v`, the result maps `v` to `i`.
    pub fn from_inverse<I: IntoIterator<Item = usize>>(images: I) -> Self {
        let mut result = CircPerm::empty();
        for (i, v) in images.into_iter().enumerate() {
            result = result.update(v, i);
        }
        result
    }

    fn bv(&self) -> Bv {
        Bv::new(15, self.slots as u64)
    }

    /// The destination of `qarg`, or `None` when the slot is unmapped.
    pub fn get(&self, qarg: usize) -> Option<usize> {
        let value = self.bv().slice(qarg * 3, 3).uint();
        if value == UNMAPPED { None } else { Some(value as usize) }
    }

    /// The destination of `qarg`; panics on an unmapped slot.
    pub fn image(&self, qarg: usize) -> usize {
        self.get(qarg).expect("qubit is not mapped")
    }

    /// Returns a copy mapping `from` to `to`.
    pub fn update(&self, from: usize, to: usize) -> Self {
        CircPerm {
            slots: self.bv().update_slice(from * 3, Bv::new(3, to as u64)).uint() as u16,
        }
    }

    /// Returns a copy with the images of `a` and `b` exchanged.
    pub fn swapped(&self, a: usize, b: usize) -> Self {
        self.update(a, self.image(b)).update(b, self.image(a))
    }

    /// The inverse map on slots `0..n`.
    pub fn inverse(&self, n: usize) -> Self {
        let mut result = CircPerm::empty();
        for i in 0..n {
            result = result.update(self.image(i), i);
        }
        result
    }

    /// Decomposes the permutation into transpositions via a left-to-right
    /// selection pass and reports each one through `swap`. Applying the
    /// reported swaps in order realizes this permutation: the column or row
    /// at position `q` ends up at position `image(q)`.
    pub fn emit_by_swap<F: FnMut(usize, usize)>(&self, n: usize, mut swap: F) {
        debug_assert!(n <= 5);
        let mut perm = *self;
        for i in 0..n {
            for j in i + 1..n {
                if perm.image(i) > perm.image(j) {
                    perm = perm.swapped(i, j);
                    swap(i, j);
                }
            }
        }
    }
}

impl fmt::Display for CircPerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Perm[")?;
        let mut first = true;
        for i in 0..5 {
            if let Some(q) = self.get(i) {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{i}:{q}")?;
                first = false;
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_maps_in_place() {
        let perm = CircPerm::identity();
        for i in 0..5 {
            assert_eq!(perm.get(i), Some(i));
        }
        assert_eq!(CircPerm::empty().get(3), None);
    }

    #[test]
    fn test_swapped_composition() {
        let perm = CircPerm::identity().swapped(2, 1).swapped(1, 4).swapped(0, 3);
        assert_eq!(perm, CircPerm::from_images([3, 4, 1, 0, 2]));

        let mut undone = perm;
        perm.emit_by_swap(5, |a, b| undone = undone.swapped(a, b));
        assert_eq!(undone, CircPerm::identity());
    }

    #[test]
    fn test_inverse() {
        let perm = CircPerm::from_images([3, 4, 1, 0, 2]);
        let inverse = perm.inverse(5);
        for i in 0..5 {
            assert_eq!(inverse.image(perm.image(i)), i);
        }
        assert_eq!(CircPerm::from_inverse([3, 4, 1, 0, 2]), inverse);
    }

    #[test]
    fn test_emit_by_swap_realizes_images() {
        let perm = CircPerm::from_images([2, 0, 1]);
        let mut slots = [0usize, 1, 2];
        perm.emit_by_swap(3, |a, b| slots.swap(a, b));
        // slots[p] holds the element that moved to position p
        for q in 0..3 {
            assert_eq!(slots[perm.image(q)], q);
        }
    }
}
