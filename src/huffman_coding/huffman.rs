use log::{debug, trace};

use crate::error::CodingError;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::BuildHasher;

/// What a node holds: either two owned children or the word of a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(String),
}

/// A node of the code tree. Nodes are only made by [`build_tree`], so every tree is
/// strictly binary and every internal weight is the sum of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    weight: u64,
    depth: u32,
    /// Alphabetical rank of the smallest word below this node. Used to break weight ties.
    rank: usize,
    node_data: NodeData,
}

impl Node {
    fn leaf(weight: u64, rank: usize, word: String) -> Node {
        Node {
            weight,
            depth: 0,
            rank,
            node_data: NodeData::Leaf(word),
        }
    }

    /// Join two subtrees. The first argument becomes the left (0) child.
    fn join(left: Node, right: Node) -> Node {
        Node {
            weight: left.weight + right.weight,
            depth: left.depth.max(right.depth) + 1,
            rank: left.rank.min(right.rank),
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }

    /// Sum of the counts of all words below (or at) this node.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Length of the longest path from this node down to a leaf.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn node_data(&self) -> &NodeData {
        &self.node_data
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// The word of a leaf, None for an internal node.
    pub fn word(&self) -> Option<&str> {
        match &self.node_data {
            NodeData::Leaf(word) => Some(word.as_str()),
            NodeData::Kids(..) => None,
        }
    }

    /// Left and right child of an internal node, None for a leaf.
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match &self.node_data {
            NodeData::Kids(left, right) => Some((&**left, &**right)),
            NodeData::Leaf(_) => None,
        }
    }

    /// Number of leaves (distinct words) below this node.
    pub fn leaf_count(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => left.leaf_count() + right.leaf_count(),
            NodeData::Leaf(_) => 1,
        }
    }
}

/// Heap entry. BinaryHeap is a max-heap, so the order is reversed: the lightest node
/// comes out first and equal weights come out in alphabetical order of their smallest word.
struct Queued(Node);

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .weight
            .cmp(&self.0.weight)
            .then_with(|| other.0.rank.cmp(&self.0.rank))
    }
}
impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Queued {}

/// Build a Huffman tree from a table of word counts.
///
/// The table needs at least two distinct words and every count must be positive.
/// Words are ranked alphabetically before they enter the queue, and weight ties are
/// broken on that rank, so a given table always gives the same tree no matter how the
/// map happens to iterate.
pub fn build_tree<S: BuildHasher>(freqs: &HashMap<String, u64, S>) -> Result<Node, CodingError> {
    if freqs.len() < 2 {
        return Err(CodingError::Build(format!(
            "need at least two distinct words, got {}",
            freqs.len()
        )));
    }

    // Fix the order in which words are processed.
    let mut words: Vec<(&String, u64)> = freqs.iter().map(|(w, &f)| (w, f)).collect();
    words.sort_unstable_by(|a, b| a.0.cmp(b.0));

    if let Some((word, _)) = words.iter().find(|(_, f)| *f == 0) {
        return Err(CodingError::Build(format!("word {:?} has a count of zero", word)));
    }
    // Internal weights never exceed the total, so checking it once covers every join.
    let total = words
        .iter()
        .try_fold(0_u64, |acc, (_, f)| acc.checked_add(*f))
        .ok_or_else(|| CodingError::Build("total count does not fit in 64 bits".to_string()))?;

    let mut queue: BinaryHeap<Queued> = words
        .into_iter()
        .enumerate()
        .map(|(rank, (word, f))| Queued(Node::leaf(f, rank, word.clone())))
        .collect();

    // Pull off the two lightest nodes and join them until only the root is left.
    let root = loop {
        let Queued(left) = queue
            .pop()
            .ok_or_else(|| CodingError::Build("empty queue".to_string()))?;
        match queue.pop() {
            Some(Queued(right)) => {
                trace!("join {} + {}", left.weight, right.weight);
                queue.push(Queued(Node::join(left, right)));
            }
            None => break left,
        }
    };

    debug!(
        "Built code tree: {} words, total weight {}, depth {}",
        freqs.len(),
        total,
        root.depth
    );
    Ok(root)
}
