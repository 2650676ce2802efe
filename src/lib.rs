//! # Huffman Coding
//!
//! *Deterministic prefix codes built from symbol frequencies.*
//!
//! ## Intuition First
//!
//! Imagine writing a message in Morse code where you get to pick the codes.
//! You would give the shortest codes to the letters you use most. Huffman
//! coding does exactly that, and guarantees no code is the start of
//! another, so the bits can be read back without separators.
//!
//! ## The Problem
//!
//! Fixed-width codes spend the same number of bits on every symbol. When
//! some symbols are far more common than others, that wastes space:
//! - **Fixed width**: simple, but `log2(alphabet)` bits per symbol regardless of frequency.
//! - **Huffman**: the optimal whole-bit prefix code for the observed frequencies.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Shannon-Fano coding: top-down splitting, not always optimal
//! 1952  Huffman     Bottom-up greedy merging: optimal prefix codes
//! 1964  Schwartz    Canonical Huffman codes
//! 1993  Katz        DEFLATE pairs LZ77 with Huffman coding
//! ```
//!
//! ## Algorithm
//!
//! 1. Count each distinct symbol ([`FrequencyTable`]).
//! 2. Put one leaf per symbol in a min-priority queue.
//! 3. Pop the two lowest nodes, join them under a new node whose weight is
//!    their sum, push it back. Repeat until one node remains ([`HuffmanTree`]).
//! 4. Read each leaf's path from the root as its code: left is `0`,
//!    right is `1` ([`CodeBook`]).
//!
//! Ties are broken by a fixed total order (frequency, then symbol for
//! leaves, then creation order for internal nodes, leaves before internal
//! nodes), so identical inputs always give identical trees and bits.
//!
//! ## Complexity Analysis
//!
//! - **Tree construction**: $O(n \log n)$ for $n$ distinct symbols.
//! - **Encoding**: $O(m)$ table lookups for a message of length $m$.
//! - **Decoding**: $O(b)$ for $b$ encoded bits, one tree step per bit.
//!
//! ## Failure Modes
//!
//! 1. **Missing side channel**: the tree is not embedded in the bits. Decoding
//!    needs the same tree (or an exact copy) that produced them.
//! 2. **Single symbol**: a one-leaf tree has no edges. The symbol is given the
//!    code `0` and the decoder emits it once per bit.
//!
//! ## Example
//!
//! ```rust
//! let data: Vec<char> = "abracadabra".chars().collect();
//! let (bits, tree) = huffcode::encode(&data)?;
//! assert_eq!(huffcode::decode(&bits, tree.as_ref())?, data);
//! # Ok::<(), huffcode::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cover, T. M., Thomas, J. A. (2006). "Elements of Information Theory", ch. 5.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod codebook;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod symbol;
pub mod tree;

pub use bits::BitString;
pub use codebook::CodeBook;
pub use error::{Error, Malformed, Result};
pub use frequency::FrequencyTable;
pub use huffman::{decode, encode, generate_codes, HuffmanDecoder, HuffmanEncoder};
pub use symbol::Symbol;
pub use tree::{CreationOrder, HuffmanTree, Node};
