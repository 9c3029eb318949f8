//! A balanced, byte-oriented rope for large, mutable text buffers.
//!
//! A [`Rope`] stores its bytes as a binary tree of chunks rather than one
//! contiguous allocation, so inserting or removing a span in the middle of
//! a large buffer doesn't require shifting everything after it. The tree
//! self-balances on every merge (see the [`rebalance`] module), keeping
//! split, insert and remove at `O(log n)` instead of `O(n)`.
//!
//! Indices throughout this crate are byte offsets, not character or
//! grapheme offsets — this rope has no notion of Unicode; it is exactly as
//! encoding-agnostic as a `Vec<u8>`. Callers working with UTF-8 text are
//! responsible for keeping their offsets on character boundaries if that
//! matters to them.
//!
//! Further reading on the underlying data structure:
//!
//! - Boehm, Atkinson & Plass, ["Ropes: An Alternative to Strings"][ropes-paper]
//! - [the Wikipedia article on ropes](https://en.wikipedia.org/wiki/Rope_(data_structure))
//!
//! [ropes-paper]: https://www.cs.rit.edu/usr/local/pub/jeh/courses/QUARTERS/FP/Labs/CedarRope/rope-paper.pdf

mod chunk;
mod error;
mod merge;
mod node;
mod rebalance;
mod split;


pub use error::{Result, RopeError};

use node::Node;
use std::fmt;
use std::fs;
use std::ops;
use std::path::Path;

/// A balanced, byte-oriented rope.
///
/// An empty rope is represented by a `None` root rather than an empty leaf,
/// so every leaf reachable from `root` is guaranteed non-empty.
#[derive(Clone)]
pub struct Rope {
    root: Option<Box<Node>>,
    chunk_size: usize,
}

impl Rope {
    /// An empty rope.
    pub fn new() -> Rope {
        Rope {
            root: None,
            chunk_size: chunk::chunk_size_for(0),
        }
    }

    /// Builds a rope from a flat byte buffer, chunking it into
    /// newline-aligned leaves and arranging them into a balanced tree.
    pub fn from_bytes(bytes: &[u8]) -> Rope {
        Rope {
            root: chunk::chunk_tree(bytes),
            chunk_size: chunk::chunk_size_for(bytes.len()),
        }
    }

    /// Number of bytes stored in the rope.
    pub fn length(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.total_weight())
    }

    /// Alias for [`Rope::length`], for `len`/`is_empty` ergonomics.
    pub fn len(&self) -> usize {
        self.length()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Flattens the rope into a single contiguous buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.length());
        if let Some(root) = &self.root {
            root.traverse_preorder(&mut out);
        }
        out
    }

    /// Flattens the rope and decodes it as UTF-8, replacing any invalid
    /// sequences. Named `to_string` rather than going through [`ToString`]
    /// because the blanket [`Display`] impl would otherwise have to perform
    /// this same flattening one formatter `write_str` call at a time.
    #[allow(clippy::inherent_to_string_shadow_display)]
    pub fn to_string(&self) -> String {
        String::from_utf8_lossy(&self.to_bytes()).into_owned()
    }

    /// Appends `bytes` to the end of the rope.
    pub fn append(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        let root = self.root.take();
        self.root = merge::merge(root, chunk::chunk_tree(bytes));
    }

    /// Prepends `bytes` to the start of the rope.
    pub fn prepend(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        let root = self.root.take();
        self.root = merge::merge(chunk::chunk_tree(bytes), root);
    }

    /// Inserts `bytes` at byte offset `pos`.
    ///
    /// A multi-chunk payload is inserted chunk by chunk, in order, each one
    /// landing immediately after the last — not as a single combined
    /// merge — so that a payload spanning many newlines ends up with the
    /// same newline-aligned leaf boundaries it would have gotten from
    /// [`Rope::from_bytes`].
    ///
    /// `pos` is never out of range: any `pos >= self.length()` delegates to
    /// [`Rope::append`] rather than erroring, matching the facade's "insert
    /// past the end just appends" contract.
    pub fn insert(&mut self, pos: usize, bytes: &[u8]) -> Result<()> {
        let len = self.length();
        if bytes.is_empty() {
            return Ok(());
        }
        if pos == 0 {
            self.prepend(bytes);
            return Ok(());
        }
        if pos >= len {
            self.append(bytes);
            return Ok(());
        }

        let mut offset = pos;
        for piece in chunk::chunk_newline_aligned(bytes) {
            let root = self.root.take();
            let (left, right) = split::split(root, offset);
            let leaf = Node::new_leaf(piece.to_vec());
            self.root = merge::merge(merge::merge(left, Some(leaf)), right);
            offset += piece.len();
        }
        Ok(())
    }

    /// Inserts the full contents of `other` at byte offset `pos`, leaving
    /// `other` consumed. Unlike [`Rope::insert`], this splices in `other`'s
    /// tree directly with a single split and two merges, rather than
    /// re-chunking its bytes.
    ///
    /// `pos` is never out of range: any `pos >= self.length()` appends
    /// `other` at the end rather than erroring, matching [`Rope::insert`].
    pub fn insert_rope(&mut self, pos: usize, other: Rope) -> Result<()> {
        let len = self.length();
        if other.is_empty() {
            return Ok(());
        }
        if pos == 0 {
            let root = self.root.take();
            self.root = merge::merge(other.root, root);
        } else if pos >= len {
            let root = self.root.take();
            self.root = merge::merge(root, other.root);
        } else {
            let root = self.root.take();
            let (left, right) = split::split(root, pos);
            self.root = merge::merge(merge::merge(left, other.root), right);
        }
        Ok(())
    }

    /// Splices `other` into `self` at `pos`. An alias for [`Rope::insert_rope`]
    /// kept under the name used by the paste/cut pairing.
    pub fn paste(&mut self, pos: usize, other: Rope) -> Result<()> {
        self.insert_rope(pos, other)
    }

    /// Removes `len` bytes starting at `start`.
    ///
    /// If `start + len` overruns the end of the rope, `len` is silently
    /// clamped to `self.length() - start` rather than treated as an error —
    /// only `start` itself landing past the end is an error.
    ///
    /// # Errors
    ///
    /// Returns [`RopeError::OutOfRange`] if `start > self.length()`.
    pub fn remove(&mut self, start: usize, len: usize) -> Result<()> {
        let total = self.length();
        if start > total {
            return Err(RopeError::OutOfRange { index: start, len: total });
        }
        let len = len.min(total - start);
        if len == 0 {
            return Ok(());
        }
        let root = self.root.take();
        let (head, rest) = split::split(root, start);
        let (_, tail) = split::split(rest, len);
        self.root = merge::merge(head, tail);
        Ok(())
    }

    /// Returns a new, independent rope holding a copy of the bytes in
    /// `[start, end)`, leaving `self` unmodified. Unlike [`Rope::remove`],
    /// `cut` never mutates its receiver — "cut" here names the extraction,
    /// not the classic clipboard cut-as-delete.
    ///
    /// # Errors
    ///
    /// Returns [`RopeError::OutOfRange`] if `start > end` or `end > self.length()`.
    pub fn cut(&self, start: usize, end: usize) -> Result<Rope> {
        let total = self.length();
        if start > end || end > total {
            return Err(RopeError::OutOfRange { index: end, len: total });
        }
        let (_, rest) = split::split(self.root.clone(), start);
        let (middle, _) = split::split(rest, end - start);
        Ok(Rope {
            chunk_size: chunk::chunk_size_for(end - start),
            root: middle,
        })
    }

    /// Replaces the rope's contents with the file at `path`, read in full.
    ///
    /// # Errors
    ///
    /// Returns [`RopeError::Io`] if the file can't be read.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let bytes = fs::read(path)?;
        self.chunk_size = chunk::chunk_size_for(bytes.len());
        self.root = chunk::chunk_tree(&bytes);
        Ok(())
    }

    /// Writes the rope's flattened contents to `path`, overwriting it.
    ///
    /// # Errors
    ///
    /// Returns [`RopeError::Io`] if the file can't be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_bytes())?;
        Ok(())
    }
}

impl Default for Rope {
    fn default() -> Rope {
        Rope::new()
    }
}

impl fmt::Display for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string())
    }
}

impl fmt::Debug for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rope")
            .field("len", &self.length())
            .field("chunk_size", &self.chunk_size)
            .finish()
    }
}

impl PartialEq for Rope {
    fn eq(&self, other: &Rope) -> bool {
        self.length() == other.length() && self.to_bytes() == other.to_bytes()
    }
}

impl Eq for Rope {}

impl From<&[u8]> for Rope {
    fn from(bytes: &[u8]) -> Rope {
        Rope::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for Rope {
    fn from(bytes: Vec<u8>) -> Rope {
        Rope::from_bytes(&bytes)
    }
}

impl From<&str> for Rope {
    fn from(s: &str) -> Rope {
        Rope::from_bytes(s.as_bytes())
    }
}

impl From<String> for Rope {
    fn from(s: String) -> Rope {
        Rope::from_bytes(s.as_bytes())
    }
}

impl ops::Add for Rope {
    type Output = Rope;

    fn add(mut self, other: Rope) -> Rope {
        self.root = merge::merge(self.root.take(), other.root);
        self
    }
}

impl ops::AddAssign for Rope {
    fn add_assign(&mut self, other: Rope) {
        self.root = merge::merge(self.root.take(), other.root);
    }
}
