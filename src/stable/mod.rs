// Top-down merge sort, the default engine algorithm.
pub mod merge_sort;

// Quadratic baseline, useful to demonstrate comparison growth.
pub mod insertion_sort;

// Call std::slice::sort_by.
pub mod rust_std;
