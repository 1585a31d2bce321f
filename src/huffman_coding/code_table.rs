use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

use super::huffman::{Node, NodeData};

/// Word → code lookup derived from a code tree. A code is the root-to-leaf path written
/// as '0' (left) and '1' (right), so no code is a prefix of another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: FxHashMap<String, String>,
}

impl CodeTable {
    /// Walk the tree depth first and record the path to every leaf.
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = FxHashMap::default();
        let mut path = String::with_capacity(root.depth() as usize);
        collect_codes(root, &mut path, &mut codes);
        Self { codes }
    }

    /// The code of `word`, if the word is in the table.
    pub fn code(&self, word: &str) -> Option<&str> {
        self.codes.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.codes.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All (word, code) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.codes.iter().map(|(w, c)| (w.as_str(), c.as_str()))
    }

    /// All (word, code) pairs sorted by word. Handy for reports and stable output.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        pairs
    }

    /// Length of the longest code.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(String::len).max().unwrap_or(0)
    }

    /// Number of bits needed to encode a text with the given word counts, i.e. the
    /// weighted path length of the tree. None if a counted word has no code.
    pub fn encoded_len<S: BuildHasher>(&self, freqs: &HashMap<String, u64, S>) -> Option<u64> {
        freqs.iter().try_fold(0_u64, |acc, (word, &f)| {
            let len = self.codes.get(word)?.len() as u64;
            acc.checked_add(len.checked_mul(f)?)
        })
    }
}

/// Recursively walk the tree, pushing '0' going left and '1' going right.
/// The path buffer is shared and trimmed on the way back up.
fn collect_codes(node: &Node, path: &mut String, codes: &mut FxHashMap<String, String>) {
    match node.node_data() {
        NodeData::Kids(left, right) => {
            path.push('0');
            collect_codes(left, path, codes);
            path.pop();
            path.push('1');
            collect_codes(right, path, codes);
            path.pop();
        }
        NodeData::Leaf(word) => {
            codes.insert(word.clone(), path.clone());
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::huffman::build_tree;

    fn table(entries: &[(&str, u64)]) -> FxHashMap<String, u64> {
        entries.iter().map(|&(w, f)| (w.to_string(), f)).collect()
    }

    #[test]
    fn two_words_get_one_bit_each() {
        let codes = CodeTable::from_tree(&build_tree(&table(&[("a", 1), ("b", 1)])).unwrap());
        assert_eq!(codes.code("a"), Some("0"));
        assert_eq!(codes.code("b"), Some("1"));
        assert_eq!(codes.len(), 2);
    }

    #[test]
    fn classic_codes_test() {
        let freqs = table(&[("a", 5), ("b", 9), ("c", 12), ("d", 13), ("e", 16), ("f", 45)]);
        let codes = CodeTable::from_tree(&build_tree(&freqs).unwrap());
        assert_eq!(
            codes.sorted(),
            vec![
                ("a", "1100"),
                ("b", "1101"),
                ("c", "100"),
                ("d", "101"),
                ("e", "111"),
                ("f", "0"),
            ]
        );
        assert_eq!(codes.max_code_len(), 4);
        // 5*4 + 9*4 + 12*3 + 13*3 + 16*3 + 45*1
        assert_eq!(codes.encoded_len(&freqs), Some(224));
    }

    #[test]
    fn kraft_sum_is_one() {
        let freqs = table(&[("a", 5), ("b", 9), ("c", 12), ("d", 13), ("e", 16), ("f", 45)]);
        let codes = CodeTable::from_tree(&build_tree(&freqs).unwrap());
        let sum: f64 = codes.iter().map(|(_, c)| 0.5_f64.powi(c.len() as i32)).sum();
        assert_eq!(sum, 1.0);
    }

    #[test]
    fn no_code_is_a_prefix_of_another() {
        let freqs = table(&[("one", 1), ("two", 2), ("three", 3), ("four", 4), ("five", 5), ("six", 1)]);
        let codes = CodeTable::from_tree(&build_tree(&freqs).unwrap());
        for (w1, c1) in codes.iter() {
            for (w2, c2) in codes.iter() {
                if w1 != w2 {
                    assert!(!c2.starts_with(c1), "{} ({}) prefixes {} ({})", w1, c1, w2, c2);
                }
            }
        }
    }

    #[test]
    fn encoded_len_of_unknown_word() {
        let codes = CodeTable::from_tree(&build_tree(&table(&[("a", 1), ("b", 1)])).unwrap());
        assert_eq!(codes.encoded_len(&table(&[("a", 2), ("zzz", 1)])), None);
    }
}
