//! Symbol-to-code tables derived from a tree.

use std::collections::BTreeMap;

use crate::bits::BitString;
use crate::error::{Error, Result};
use crate::symbol::Symbol;
use crate::tree::{HuffmanTree, Node, NodeKind};

/// Maps each symbol to its code: the path from the root to its leaf,
/// 0 for a left edge and 1 for a right edge.
///
/// A single-leaf tree has an empty path; its symbol gets the code `0`
/// instead so every occurrence still costs one bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBook<S> {
    codes: BTreeMap<S, BitString>,
}

impl<S: Symbol> CodeBook<S> {
    /// Walk `tree` depth-first and record each leaf's path.
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        let mut codes = BTreeMap::new();
        let mut prefix = BitString::new();
        Self::build_codes(tree.root(), &mut prefix, &mut codes);
        Self { codes }
    }

    fn build_codes(node: &Node<S>, prefix: &mut BitString, codes: &mut BTreeMap<S, BitString>) {
        match &node.kind {
            NodeKind::Leaf { symbol } => {
                let code = if prefix.is_empty() {
                    BitString::from(vec![false])
                } else {
                    prefix.clone()
                };
                codes.insert(symbol.clone(), code);
            }
            NodeKind::Internal { left, right } => {
                prefix.push(false);
                Self::build_codes(left, prefix, codes);
                prefix.pop();

                prefix.push(true);
                Self::build_codes(right, prefix, codes);
                prefix.pop();
            }
        }
    }

    /// Code for `symbol`.
    pub fn get(&self, symbol: &S) -> Option<&BitString> {
        self.codes.get(symbol)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True when the book holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitString)> + '_ {
        self.codes.iter()
    }

    /// Longest code length.
    pub fn max_len(&self) -> usize {
        self.codes.values().map(BitString::len).max().unwrap_or(0)
    }

    /// True if no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&BitString> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !b.starts_with(a))
        })
    }

    /// Number of bits `data` encodes to.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownSymbol` for the first symbol without a code.
    pub fn encoded_len(&self, data: &[S]) -> Result<usize> {
        data.iter().enumerate().try_fold(0, |acc, (position, s)| {
            self.get(s)
                .map(|code| acc + code.len())
                .ok_or_else(|| Error::UnknownSymbol {
                    symbol: format!("{s:?}"),
                    position,
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;
    use crate::tree::CreationOrder;

    fn code(book: &CodeBook<char>, s: char) -> String {
        book.get(&s).unwrap().to_string()
    }

    #[test]
    fn test_hand_built_tree_codes() {
        // a:3 on its own, b:2 and c:1 joined underneath.
        let mut order = CreationOrder::new();
        let a = Node::leaf('a', 3, &mut order);
        let b = Node::leaf('b', 2, &mut order);
        let c = Node::leaf('c', 1, &mut order);
        let bc = Node::merge(b, c, &mut order).unwrap();
        let tree = HuffmanTree::from_root(Node::merge(a, bc, &mut order).unwrap());

        let book = CodeBook::from_tree(&tree);
        assert_eq!(book.len(), 3);
        assert_eq!(code(&book, 'a'), "0");
        assert_eq!(code(&book, 'b'), "10");
        assert_eq!(code(&book, 'c'), "11");
    }

    #[test]
    fn test_greedy_tree_codes() {
        let table = FrequencyTable::from_counts([('a', 3), ('b', 2), ('c', 1)]).unwrap();
        let book = HuffmanTree::from_frequencies(&table).unwrap().codes();
        assert_eq!(code(&book, 'a'), "0");
        assert_eq!(code(&book, 'c'), "10");
        assert_eq!(code(&book, 'b'), "11");
    }

    #[test]
    fn test_equal_frequency_codes() {
        let book = HuffmanTree::from_symbols("aaabbbddd".chars())
            .unwrap()
            .codes();
        assert_eq!(code(&book, 'd'), "0");
        assert_eq!(code(&book, 'a'), "10");
        assert_eq!(code(&book, 'b'), "11");
    }

    #[test]
    fn test_uniform_codes_are_three_bits() {
        let book = HuffmanTree::from_symbols("abcdefghabcdefgh".chars())
            .unwrap()
            .codes();
        let got: Vec<String> = book.iter().map(|(_, c)| c.to_string()).collect();
        assert_eq!(
            got,
            ["000", "001", "010", "011", "100", "101", "110", "111"]
        );
        assert_eq!(book.max_len(), 3);
    }

    #[test]
    fn test_single_leaf_falls_back_to_zero() {
        let book = HuffmanTree::from_symbols("zzzz".chars()).unwrap().codes();
        assert_eq!(book.len(), 1);
        assert_eq!(code(&book, 'z'), "0");
    }

    #[test]
    fn test_prefix_free() {
        let book = HuffmanTree::from_symbols("mississippi river".chars())
            .unwrap()
            .codes();
        assert!(book.is_prefix_free());
    }

    #[test]
    fn test_encoded_len() {
        let data: Vec<char> = "aaabbbddd".chars().collect();
        let book = HuffmanTree::from_symbols(data.iter().copied())
            .unwrap()
            .codes();
        assert_eq!(book.encoded_len(&data), Ok(15));

        let err = book.encoded_len(&['a', 'q']).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownSymbol {
                symbol: "'q'".to_string(),
                position: 1
            }
        );
    }
}
