//! Huffman tree construction.
//!
//! Nodes are merged greedily: repeatedly take the two lowest-priority
//! nodes and join them under a new internal node until one root remains.
//!
//! Priority is a total order so that a given input always yields the same
//! tree:
//!
//! 1. lower frequency first;
//! 2. between two leaves, lower symbol first;
//! 3. between two internal nodes, lower creation order first;
//! 4. between a leaf and an internal node, the leaf first.
//!
//! Creation order comes from a [`CreationOrder`] owned by a single build,
//! so concurrent builds never share a counter.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use crate::codebook::CodeBook;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;

/// Monotonic sequence numbers for the nodes of one tree build.
#[derive(Debug, Default)]
pub struct CreationOrder {
    next: u64,
}

impl CreationOrder {
    /// A counter starting at 0.
    pub fn new() -> Self {
        Self { next: 0 }
    }

    fn take(&mut self) -> u64 {
        let n = self.next;
        self.next += 1;
        n
    }
}

/// Huffman tree node.
///
/// Fields are private: nodes come only from [`Node::leaf`] and
/// [`Node::merge`], so an internal node's frequency is always the sum of
/// its two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<S> {
    freq: u64,
    order: u64,
    pub(crate) kind: NodeKind<S>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NodeKind<S> {
    Leaf {
        symbol: S,
    },
    /// `left` is reached by a 0 bit, `right` by a 1.
    Internal {
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    /// Create a leaf, taking the next creation number from `order`.
    pub fn leaf(symbol: S, freq: u64, order: &mut CreationOrder) -> Self {
        Node {
            freq,
            order: order.take(),
            kind: NodeKind::Leaf { symbol },
        }
    }

    /// Join two nodes under a new internal node. `first` becomes the left
    /// child.
    ///
    /// # Errors
    ///
    /// Returns `Error::FrequencyOverflow` if the summed frequency does not
    /// fit in a `u64`.
    pub fn merge(first: Self, second: Self, order: &mut CreationOrder) -> Result<Self> {
        let freq = first
            .freq
            .checked_add(second.freq)
            .ok_or(Error::FrequencyOverflow)?;
        Ok(Self::join(freq, first, second, order))
    }

    fn join(freq: u64, first: Self, second: Self, order: &mut CreationOrder) -> Self {
        Node {
            freq,
            order: order.take(),
            kind: NodeKind::Internal {
                left: Box::new(first),
                right: Box::new(second),
            },
        }
    }

    /// Frequency of this node (sum over its leaves).
    pub fn freq(&self) -> u64 {
        self.freq
    }

    /// Creation sequence number.
    pub fn order(&self) -> u64 {
        self.order
    }

    /// The symbol, for leaves.
    pub fn symbol(&self) -> Option<&S> {
        match &self.kind {
            NodeKind::Leaf { symbol } => Some(symbol),
            NodeKind::Internal { .. } => None,
        }
    }

    /// `(left, right)`, for internal nodes.
    pub fn children(&self) -> Option<(&Node<S>, &Node<S>)> {
        match &self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Internal { left, right } => Some((&**left, &**right)),
        }
    }

    /// True for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    fn leaf_count(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf { .. } => 1,
            NodeKind::Internal { left, right } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf { .. } => 0,
            NodeKind::Internal { left, right } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl<S: Ord> Node<S> {
    /// Merge priority. `Less` means dequeued first.
    pub fn priority_cmp(&self, other: &Self) -> Ordering {
        self.freq
            .cmp(&other.freq)
            .then_with(|| match (&self.kind, &other.kind) {
                (NodeKind::Leaf { symbol: a }, NodeKind::Leaf { symbol: b }) => {
                    a.cmp(b).then(self.order.cmp(&other.order))
                }
                (NodeKind::Internal { .. }, NodeKind::Internal { .. }) => {
                    self.order.cmp(&other.order)
                }
                (NodeKind::Leaf { .. }, NodeKind::Internal { .. }) => Ordering::Less,
                (NodeKind::Internal { .. }, NodeKind::Leaf { .. }) => Ordering::Greater,
            })
    }
}

/// Heap entry with priority reversed, so `BinaryHeap` pops the minimum.
struct Pending<S>(Node<S>);

impl<S: Ord> Ord for Pending<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.priority_cmp(&self.0) // Min-priority queue
    }
}

impl<S: Ord> PartialOrd for Pending<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Ord> PartialEq for Pending<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: Ord> Eq for Pending<S> {}

/// A full binary prefix-code tree.
///
/// Owns its nodes exclusively. Cloning gives an exact structural copy,
/// which decodes identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Node<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Build the tree for a frequency table.
    ///
    /// Returns `None` for an empty table: there is nothing to code.
    pub fn from_frequencies(table: &FrequencyTable<S>) -> Option<Self> {
        let mut order = CreationOrder::new();
        let mut heap: BinaryHeap<Pending<S>> = table
            .iter()
            .map(|(s, n)| Pending(Node::leaf(s.clone(), n, &mut order)))
            .collect();

        // Every merged frequency is bounded by the table total, which
        // FrequencyTable keeps within u64.
        while heap.len() > 1 {
            let (Some(Pending(first)), Some(Pending(second))) = (heap.pop(), heap.pop()) else {
                break;
            };
            let freq = first.freq + second.freq;
            heap.push(Pending(Node::join(freq, first, second, &mut order)));
        }

        let root = heap.pop()?.0;
        tracing::trace!(
            symbols = table.len(),
            weight = root.freq(),
            depth = root.depth(),
            "built huffman tree"
        );
        Some(Self { root })
    }

    /// Count `data` and build its tree.
    pub fn from_symbols<I>(data: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
    {
        Self::from_frequencies(&FrequencyTable::from_symbols(data))
    }

    /// Derive the code table for this tree.
    pub fn codes(&self) -> CodeBook<S> {
        CodeBook::from_tree(self)
    }
}

impl<S> HuffmanTree<S> {
    /// Wrap an already-built node as a tree.
    pub fn from_root(root: Node<S>) -> Self {
        Self { root }
    }

    /// The root node.
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// Total frequency, equal to the length of the input it was built from.
    pub fn weight(&self) -> u64 {
        self.root.freq()
    }

    /// Number of leaves, one per distinct symbol.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Length of the longest root-to-leaf path. 0 for a single leaf.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// True when the root is itself a leaf (one distinct symbol).
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }
}

impl<S: fmt::Debug> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, &self.root, 0, "root")
    }
}

fn write_node<S: fmt::Debug>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<S>,
    depth: usize,
    label: &str,
) -> fmt::Result {
    let indent = "  ".repeat(depth);
    let freq = node.freq;
    match &node.kind {
        NodeKind::Leaf { symbol } => {
            writeln!(f, "{indent}{label}-> Leaf {symbol:?} [weight: {freq}]")
        }
        NodeKind::Internal { left, right } => {
            writeln!(f, "{indent}{label}-> Internal [weight: {freq}]")?;
            write_node(f, left, depth + 1, "L")?;
            write_node(f, right, depth + 1, "R")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaves<const N: usize>(weights: [(char, u64); N]) -> (Vec<Node<char>>, CreationOrder) {
        let mut order = CreationOrder::new();
        let nodes = weights
            .into_iter()
            .map(|(s, f)| Node::leaf(s, f, &mut order))
            .collect();
        (nodes, order)
    }

    #[test]
    fn test_lower_frequency_first() {
        let (n, _) = leaves([('z', 1), ('a', 2)]);
        assert_eq!(n[0].priority_cmp(&n[1]), Ordering::Less);
        assert_eq!(n[1].priority_cmp(&n[0]), Ordering::Greater);
    }

    #[test]
    fn test_leaf_tie_broken_by_symbol() {
        let (n, _) = leaves([('d', 5), ('a', 5)]);
        assert_eq!(n[1].priority_cmp(&n[0]), Ordering::Less);
        assert_eq!(n[0].priority_cmp(&n[0]), Ordering::Equal);
    }

    #[test]
    fn test_internal_tie_broken_by_creation_order() {
        let (mut n, mut order) = leaves([('a', 1), ('b', 1), ('c', 1), ('d', 1)]);
        let d = n.pop().unwrap();
        let c = n.pop().unwrap();
        let b = n.pop().unwrap();
        let a = n.pop().unwrap();
        let older = Node::merge(c, d, &mut order).unwrap();
        let newer = Node::merge(a, b, &mut order).unwrap();
        assert_eq!(older.freq(), newer.freq());
        assert_eq!(older.priority_cmp(&newer), Ordering::Less);
    }

    #[test]
    fn test_leaf_before_internal_on_tie() {
        let (mut n, mut order) = leaves([('a', 1), ('b', 1)]);
        let b = n.pop().unwrap();
        let a = n.pop().unwrap();
        let internal = Node::merge(a, b, &mut order).unwrap();
        let leaf = Node::leaf('z', 2, &mut order);
        assert_eq!(leaf.priority_cmp(&internal), Ordering::Less);
        assert_eq!(internal.priority_cmp(&leaf), Ordering::Greater);
    }

    #[test]
    fn test_merge_weight_is_sum_of_children() {
        let (mut n, mut order) = leaves([('a', 4), ('b', 7)]);
        let b = n.pop().unwrap();
        let a = n.pop().unwrap();
        let joined = Node::merge(a, b, &mut order).unwrap();
        assert_eq!(joined.freq(), 11);
        assert_eq!(joined.order(), 2);
        assert!(joined.symbol().is_none());
        let (left, right) = joined.children().unwrap();
        assert_eq!((left.symbol(), right.symbol()), (Some(&'a'), Some(&'b')));
    }

    #[test]
    fn test_merge_rejects_overflowing_weight() {
        let (mut n, mut order) = leaves([('a', u64::MAX), ('b', 1)]);
        let b = n.pop().unwrap();
        let a = n.pop().unwrap();
        assert_eq!(
            Node::merge(a, b, &mut order).unwrap_err(),
            Error::FrequencyOverflow
        );
    }

    #[test]
    fn test_empty_table_has_no_tree() {
        assert!(HuffmanTree::<char>::from_symbols("".chars()).is_none());
    }

    #[test]
    fn test_single_symbol_is_single_leaf() {
        let tree = HuffmanTree::from_symbols("aaa".chars()).unwrap();
        assert!(tree.is_single_leaf());
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.weight(), 3);
        assert_eq!(tree.root().symbol(), Some(&'a'));
    }

    #[test]
    fn test_equal_frequencies_shape() {
        let tree = HuffmanTree::from_symbols("aaabbbddd".chars()).unwrap();

        // a, b tie and are merged first; d then joins the pair.
        let mut order = CreationOrder::new();
        let a = Node::leaf('a', 3, &mut order);
        let b = Node::leaf('b', 3, &mut order);
        let d = Node::leaf('d', 3, &mut order);
        let ab = Node::merge(a, b, &mut order).unwrap();
        let expected = HuffmanTree::from_root(Node::merge(d, ab, &mut order).unwrap());

        assert_eq!(tree, expected);
        assert_eq!(tree.root().order(), 4);
    }

    #[test]
    fn test_uniform_eight_symbols_balanced() {
        let tree = HuffmanTree::from_symbols("abcdefghabcdefgh".chars()).unwrap();
        assert_eq!(tree.leaf_count(), 8);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.weight(), 16);

        let (left, right) = tree.root().children().unwrap();
        assert_eq!(left.freq(), 8);
        assert_eq!(right.freq(), 8);
    }

    #[test]
    fn test_lowest_frequency_goes_left() {
        let table = FrequencyTable::from_counts([('a', 3), ('b', 2), ('c', 1)]).unwrap();
        let tree = HuffmanTree::from_frequencies(&table).unwrap();
        let (left, right) = tree.root().children().unwrap();
        assert_eq!(left.symbol(), Some(&'a'));
        let (rl, rr) = right.children().unwrap();
        assert_eq!(rl.symbol(), Some(&'c'));
        assert_eq!(rr.symbol(), Some(&'b'));
    }

    #[test]
    fn test_build_is_deterministic() {
        let input = "the bird is the word";
        let t1 = HuffmanTree::from_symbols(input.chars()).unwrap();
        let t2 = HuffmanTree::from_symbols(input.chars()).unwrap();
        assert_eq!(t1, t2);
    }

    #[test]
    fn test_display_lists_structure() {
        let tree = HuffmanTree::from_symbols("aab".chars()).unwrap();
        let text = tree.to_string();
        assert_eq!(
            text,
            "root-> Internal [weight: 3]\n  L-> Leaf 'b' [weight: 1]\n  R-> Leaf 'a' [weight: 2]\n"
        );
    }
}
