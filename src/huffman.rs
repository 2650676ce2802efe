//! Huffman encoding and decoding.
//!
//! The encoder concatenates code-book entries; the decoder walks the tree
//! one bit at a time and returns to the root after every leaf. The tree is
//! a side channel: it is not recoverable from the bits, so the caller
//! keeps the tree returned by [`encode`] and hands it to [`decode`].
//!
//! # Determinism
//!
//! Huffman's 1952 construction leaves ties open: any choice among equal
//! weights yields an optimal code, but a different one. Here ties follow
//! the fixed order in [`crate::tree`], so the same input always produces
//! the same bits.

use crate::bits::BitString;
use crate::codebook::CodeBook;
use crate::error::{Error, Malformed, Result};
use crate::symbol::Symbol;
use crate::tree::{HuffmanTree, Node, NodeKind};

/// Huffman encoder.
#[derive(Debug, Clone)]
pub struct HuffmanEncoder<S> {
    book: CodeBook<S>,
}

impl<S: Symbol> HuffmanEncoder<S> {
    /// Encoder over an existing code book.
    pub fn new(book: CodeBook<S>) -> Self {
        Self { book }
    }

    /// Encoder for the codes of `tree`.
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        Self::new(tree.codes())
    }

    /// The code book in use.
    pub fn codebook(&self) -> &CodeBook<S> {
        &self.book
    }

    /// Encode a symbol sequence into a bit-string.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownSymbol` if a symbol has no code, which happens
    /// when the book was derived from a different input.
    pub fn encode(&self, data: &[S]) -> Result<BitString> {
        data.iter()
            .enumerate()
            .try_fold(BitString::new(), |mut bits, (position, s)| -> Result<BitString> {
                let code = self.book.get(s).ok_or_else(|| Error::UnknownSymbol {
                    symbol: format!("{s:?}"),
                    position,
                })?;
                bits.extend_from(code);
                Ok(bits)
            })
    }
}

/// Huffman decoder.
#[derive(Debug, Clone)]
pub struct HuffmanDecoder<'a, S> {
    root: Option<&'a Node<S>>,
}

impl<'a, S: Symbol> HuffmanDecoder<'a, S> {
    /// Decoder walking `tree`. `None` decodes only the empty bit-string.
    pub fn new(tree: Option<&'a HuffmanTree<S>>) -> Self {
        Self {
            root: tree.map(HuffmanTree::root),
        }
    }

    /// Decode a bit-string into a symbol sequence.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedInput` if the bits end part-way through a
    /// code, or if bits are given without a tree. Nothing is returned from
    /// a partial decode.
    pub fn decode(&self, bits: &BitString) -> Result<Vec<S>> {
        let root = match self.root {
            Some(root) => root,
            None if bits.is_empty() => return Ok(Vec::new()),
            None => return Err(malformed(0, Malformed::MissingTree)),
        };

        // A lone leaf has no edges: every bit stands for one symbol.
        if let NodeKind::Leaf { symbol } = &root.kind {
            return Ok(vec![symbol.clone(); bits.len()]);
        }

        let mut out = Vec::new();
        let mut curr = root;
        let mut code_start = 0;

        for (i, bit) in bits.iter().enumerate() {
            curr = match &curr.kind {
                NodeKind::Internal { left, right } => {
                    if bit {
                        &**right
                    } else {
                        &**left
                    }
                }
                NodeKind::Leaf { .. } => return Err(malformed(i, Malformed::DescentFromLeaf)),
            };

            if let NodeKind::Leaf { symbol } = &curr.kind {
                out.push(symbol.clone());
                curr = root;
                code_start = i + 1;
            }
        }

        if code_start != bits.len() {
            return Err(malformed(
                code_start,
                Malformed::TruncatedCode {
                    pending: bits.len() - code_start,
                },
            ));
        }
        Ok(out)
    }
}

fn malformed(position: usize, reason: Malformed) -> Error {
    tracing::debug!(position, %reason, "huffman decode failed");
    Error::MalformedInput { position, reason }
}

/// Encode `data` with a tree built from its own frequencies.
///
/// Returns the bits and the tree needed to decode them. Empty input gives
/// an empty bit-string and no tree.
///
/// # Errors
///
/// Cannot fail for a tree built from `data` itself; the `Result` carries
/// `Error::UnknownSymbol` from the encoder for uniformity.
pub fn encode<S: Symbol>(data: &[S]) -> Result<(BitString, Option<HuffmanTree<S>>)> {
    let Some(tree) = HuffmanTree::from_symbols(data.iter().cloned()) else {
        return Ok((BitString::new(), None));
    };
    let bits = HuffmanEncoder::from_tree(&tree).encode(data)?;
    Ok((bits, Some(tree)))
}

/// Decode `bits` by walking `tree`. Inverse of [`encode`].
///
/// # Errors
///
/// See [`HuffmanDecoder::decode`].
pub fn decode<S: Symbol>(bits: &BitString, tree: Option<&HuffmanTree<S>>) -> Result<Vec<S>> {
    HuffmanDecoder::new(tree).decode(bits)
}

/// Code table of `tree`, for inspection.
pub fn generate_codes<S: Symbol>(tree: &HuffmanTree<S>) -> CodeBook<S> {
    CodeBook::from_tree(tree)
}
