mod left;
pub use left::{left_reduce, left_reduce_row, left_reduce_row_backtrack};

mod leftorder;
pub use leftorder::{leftorder_reduce, leftorder_reduce_backtrack};

mod permutation_helper;

mod quick;
pub use quick::{QuickReduceBacktrack, quick_reduce, quick_reduce_backtrack, quick_reduce_eqcount};
