//! The tools module provides the helpers around the coding core of wordzip.
//!
//! The tools are:
//! - cli: Command line interface and program options.
//! - freq_count: Concurrent word frequency count.
//! - words: Splitting text into words.
//!
pub mod cli;
pub mod freq_count;
pub mod words;
