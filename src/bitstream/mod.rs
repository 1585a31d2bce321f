//! The bitstream module turns encoded bit strings into something compact to store.
//!
//! A bit string can start with any number of zeros, which a plain base-2 number would
//! drop. bit_number keeps them with a sentinel bit, and gives the result either as a
//! decimal string or as big-endian bytes.
//!
pub mod bit_number;
