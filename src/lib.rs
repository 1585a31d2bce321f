//! Word level Huffman compression.
//!
//! wordzip treats every whitespace separated word of a text as one symbol. It counts the
//! words, builds a minimum-redundancy binary prefix code over them and stores the text
//! as the concatenation of the word codes. Tree building breaks weight ties on the
//! alphabetical order of words, so a given count table always yields the same code.
//!
//! Basic usage of the library:
//!
//! ```
//! use wordzip::huffman_coding::coder::WordCoder;
//! use wordzip::tools::freq_count::FreqCounter;
//! use wordzip::bitstream::bit_number::{number_as_sequence_of_bits, sequence_of_bits_as_number};
//!
//! let text = ["the", "cat", "and", "the", "hat"];
//! let coder = WordCoder::from_words(&text, &FreqCounter::two_way()).unwrap();
//! let bits = coder.compress(&text).unwrap();
//! assert_eq!(coder.decompress(&bits).unwrap(), text);
//!
//! let number = sequence_of_bits_as_number(&bits).unwrap();
//! assert_eq!(number_as_sequence_of_bits(&number).unwrap(), bits);
//! ```
//!
//! From the command line:
//!
//! `$> wordzip notes.txt` writes notes.txt.wz, and `$> wordzip -d notes.txt.wz`
//! writes the words back to notes.txt.out.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use error::CodingError;
