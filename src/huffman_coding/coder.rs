use log::{debug, info};

use std::collections::HashMap;
use std::hash::BuildHasher;

use super::code_table::CodeTable;
use super::huffman::{build_tree, Node, NodeData};
use crate::error::CodingError;
use crate::tools::freq_count::FreqCounter;

/// Encode `words` as the concatenation of their codes, with nothing in between.
///
/// Fails on an empty word list or on a word the table does not know. No partial
/// output is returned on failure.
pub fn encode<S: AsRef<str>>(table: &CodeTable, words: &[S]) -> Result<String, CodingError> {
    if words.is_empty() {
        return Err(CodingError::EmptyInput("encode"));
    }
    let mut bits = String::with_capacity(words.len() * table.max_code_len().min(8));
    for word in words {
        let word = word.as_ref();
        match table.code(word) {
            Some(code) => bits.push_str(code),
            None => return Err(CodingError::UnknownSymbol(word.to_string())),
        }
    }
    Ok(bits)
}

/// Decode a bit string by walking the tree: '0' goes left, '1' goes right, and every
/// leaf reached emits its word and sends the walk back to the root.
///
/// Fails on an empty bit string, on any character other than '0' or '1', when the
/// bits run out before the walk reaches a leaf, and when `root` is itself a leaf.
pub fn decode<'t>(root: &'t Node, bits: &str) -> Result<Vec<&'t str>, CodingError> {
    if bits.is_empty() {
        return Err(CodingError::EmptyInput("decode"));
    }
    let mut words = Vec::new();
    let mut current = root;
    let mut consumed = 0;
    for (position, bit) in bits.chars().enumerate() {
        let (left, right) = match current.node_data() {
            NodeData::Kids(left, right) => (&**left, &**right),
            // The walk restarts at the root after every leaf, so only a leaf root gets here.
            NodeData::Leaf(_) => return Err(CodingError::LeafRoot),
        };
        current = match bit {
            '0' => left,
            '1' => right,
            found => return Err(CodingError::InvalidBit { position, found }),
        };
        consumed = position + 1;
        if let NodeData::Leaf(word) = current.node_data() {
            words.push(word.as_str());
            current = root;
        }
    }
    if !std::ptr::eq(current, root) {
        return Err(CodingError::TruncatedCode(consumed));
    }
    Ok(words)
}

/// A code tree together with the table derived from it. Both are fixed once built,
/// so one coder can serve any number of callers at the same time.
#[derive(Debug, Clone)]
pub struct WordCoder {
    root: Node,
    table: CodeTable,
}

impl WordCoder {
    /// Build the tree and its table from a table of word counts.
    pub fn from_freqs<S: BuildHasher>(freqs: &HashMap<String, u64, S>) -> Result<Self, CodingError> {
        let root = build_tree(freqs)?;
        let table = CodeTable::from_tree(&root);
        debug!(
            "Code table ready: {} words, longest code {} bits",
            table.len(),
            table.max_code_len()
        );
        Ok(Self { root, table })
    }

    /// Count `words` with `counter`, then build the coder for those counts.
    pub fn from_words<S: AsRef<str> + Sync>(
        words: &[S],
        counter: &FreqCounter,
    ) -> Result<Self, CodingError> {
        let freqs = counter.count(words);
        info!("Counted {} words, {} distinct.", words.len(), freqs.len());
        Self::from_freqs(&freqs)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Turn a list of words into a bit string of '0' and '1'.
    pub fn compress<S: AsRef<str>>(&self, words: &[S]) -> Result<String, CodingError> {
        encode(&self.table, words)
    }

    /// Turn a bit string made by [`WordCoder::compress`] back into the words.
    pub fn decompress(&self, bits: &str) -> Result<Vec<String>, CodingError> {
        Ok(decode(&self.root, bits)?
            .into_iter()
            .map(str::to_string)
            .collect())
    }
}
