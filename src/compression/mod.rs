//! The compression module manages whole files for wordzip.
//!
//! Compression happens in the following steps:
//! - Split the text into words on whitespace.
//! - Count the words, several partitions at once.
//! - Build the Huffman code for those counts and encode the words.
//! - Write the counts and the encoded bits into a container (see container).
//!
//! Decompression reads the container, builds the same code from the stored counts and
//! walks the tree to get the words back. Words are written separated by single spaces,
//! so the original line breaks and spacing are not restored.
//!

pub mod compress;
pub mod container;
pub mod decompress;
