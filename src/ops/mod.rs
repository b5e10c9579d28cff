//! Numeric helpers: binning and sorted-sequence operations

mod binning;
mod sorting;

pub use binning::{bin_edges, bin_rows, binned_column, MAX_BINS};
pub use sorting::{
    frequency_of_ints, merge_sorted, merge_sorted_indices, MergedElements, SortedMerge,
};
