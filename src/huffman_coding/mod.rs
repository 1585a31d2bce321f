//! The huffman_coding module holds the compression engine of wordzip.
//!
//! A table of word counts becomes a binary code tree (huffman), the tree becomes a
//! word → bit string table (code_table), and the two together encode word lists into a
//! single bit string and decode it again (coder).
//!
//! Codes are paths from the root to a leaf, '0' for a left step and '1' for a right step.
//! Since no leaf sits above another, no code is the prefix of another, and the codes can
//! be joined with no separators.
//!
//! Trees and tables never change once built. Any number of threads may encode and decode
//! with the same coder at the same time.
//!

pub mod code_table;
pub mod coder;
pub mod huffman;
