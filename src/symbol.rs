//! The input alphabet.

use std::fmt::Debug;

/// An atomic unit of input: a byte, a `char`, a token.
///
/// Symbols need a total order so that frequency ties break the same way on
/// every run, and `Debug` so errors can name them.
pub trait Symbol: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> Symbol for T {}
