use std::fmt;

use crate::bitvec::Bv;

/// An element of the six-element group generated by H and S on one qubit.
///
/// Encoded in three bits read from bit 0 upward: H if bit 0 is set, then S
/// if bit 1 is set, then H if bit 2 is set. The six words below give each
/// of the six distinct products exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Symmetry3 {
    data: u8,
}

impl Symmetry3 {
    pub const I: Symmetry3 = Symmetry3 { data: 0b000 };
    pub const H: Symmetry3 = Symmetry3 { data: 0b001 };
    pub const S: Symmetry3 = Symmetry3 { data: 0b010 };
    pub const HSH: Symmetry3 = Symmetry3 { data: 0b111 };
    pub const SH: Symmetry3 = Symmetry3 { data: 0b110 };
    pub const HS: Symmetry3 = Symmetry3 { data: 0b011 };

    pub const ALL: [Symmetry3; 6] = [
        Symmetry3::I,
        Symmetry3::H,
        Symmetry3::S,
        Symmetry3::HSH,
        Symmetry3::SH,
        Symmetry3::HS,
    ];

    pub fn bv(&self) -> Bv {
        Bv::new(3, self.data as u64)
    }

    /// Whether the generator at position `i` of the H-S-H word is present.
    pub fn bit(&self, i: usize) -> bool {
        self.bv().get(i)
    }
}

impl From<Bv> for Symmetry3 {
    fn from(bv: Bv) -> Self {
        Symmetry3 { data: bv.uint() as u8 }
    }
}

impl fmt::Display for Symmetry3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Symmetry3::I => "I",
            Symmetry3::H => "H",
            Symmetry3::S => "S",
            Symmetry3::HSH => "HSH",
            Symmetry3::SH => "SH",
            Symmetry3::HS => "HS",
            _ => "?",
        };
        write!(f, "{name}")
    }
}

/// One [`Symmetry3`] per qubit, packed three bits apiece into a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Symmetry3N {
    data: u16,
}

impl Symmetry3N {
    pub fn identity() -> Self {
        Symmetry3N::default()
    }

    fn bv(&self) -> Bv {
        Bv::new(15, self.data as u64)
    }

    pub fn get(&self, qarg: usize) -> Symmetry3 {
        Symmetry3::from(self.bv().slice(qarg * 3, 3))
    }

    /// Returns a copy with the element at `qarg` replaced.
    pub fn update(&self, qarg: usize, sym: Symmetry3) -> Self {
        Symmetry3N {
            data: self.bv().update_slice(qarg * 3, sym.bv()).uint() as u16,
        }
    }
}

impl fmt::Display for Symmetry3N {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..5 {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", i, self.get(i))?;
        }
        write!(f, "]")
    }
}
