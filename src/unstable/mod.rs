// Introsort with heapsort fallback.
pub mod quicksort;

pub mod heapsort;

// Call std::slice::sort_unstable_by.
pub mod rust_std;
