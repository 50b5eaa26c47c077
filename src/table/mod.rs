mod bsearch_vec;
pub use bsearch_vec::BSearchVec;
