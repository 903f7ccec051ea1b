//! Filesystem utilities for review-inputs.

pub mod atomic;

pub use atomic::atomic_write_file;
