//! Pair and PairSet definitions.
//!
//! A `Pair` is an unordered contact between two 1-based positions, stored
//! with the 5'-side index first. Two 16-bit indices (`NAIDX`) pack into a
//! 32-bit integer key (`P1KEY`) for cheap set membership.
//!
//! A `PairSet` collects unordered contacts exactly once, no matter how
//! often (or in which orientation) they are inserted. It remembers the
//! order in which contacts were first seen.
//!

use std::fmt;
use nohash_hasher::IntSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::RelationError;
use crate::NAIDX;
use crate::P1KEY;


/// A base pair (i, j) with i < j.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(NAIDX, NAIDX)", into = "(NAIDX, NAIDX)"))]
pub struct Pair {
    i: NAIDX,
    j: NAIDX,
}

impl Pair {
    /// Create a new pair (i, j). Panics in debug if i >= j.
    pub fn new(i: NAIDX, j: NAIDX) -> Self {
        debug_assert!(i < j);
        Pair { i, j }
    }

    /// Create a pair from two distinct positions given in any order.
    pub fn unordered(a: NAIDX, b: NAIDX) -> Self {
        if a < b { Pair::new(a, b) } else { Pair::new(b, a) }
    }

    /// Return the 5'-side index.
    pub fn i(&self) -> NAIDX {
        self.i
    }

    /// Return the 3'-side index.
    pub fn j(&self) -> NAIDX {
        self.j
    }

    /// Compact 32-bit key encoding both indices.
    pub fn key(&self) -> P1KEY {
        ((self.i as P1KEY) << 16) | (self.j as P1KEY)
    }

    /// Decode a key back into a `Pair`.
    pub fn from_key(key: P1KEY) -> Self {
        let i = (key >> 16) as NAIDX;
        let j = (key & 0xFFFF) as NAIDX;
        debug_assert!(i < j);
        Pair { i, j }
    }
}

impl From<Pair> for (NAIDX, NAIDX) {
    fn from(p: Pair) -> Self {
        (p.i, p.j)
    }
}

/// Checked construction: requires 1 <= i < j.
impl TryFrom<(NAIDX, NAIDX)> for Pair {
    type Error = RelationError;

    fn try_from((i, j): (NAIDX, NAIDX)) -> Result<Self, Self::Error> {
        if i < 1 {
            Err(RelationError::InvalidIndex(i))
        } else if i >= j {
            Err(RelationError::Unordered(i, j))
        } else {
            Ok(Pair { i, j })
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.i, self.j)
    }
}

/// A duplicate-free collection of unordered contacts, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairSet {
    keys: IntSet<P1KEY>,
    pairs: Vec<Pair>,
}

impl PairSet {
    /// Create an empty pair set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pairs contained in the set.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Insert a new pair; returns true if it was newly inserted.
    pub fn insert(&mut self, pair: Pair) -> bool {
        let fresh = self.keys.insert(pair.key());
        if fresh {
            self.pairs.push(pair);
        }
        fresh
    }

    /// Check if a pair exists in the set.
    pub fn contains(&self, pair: &Pair) -> bool {
        self.keys.contains(&pair.key())
    }

    /// Iterator over all pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = Pair> + '_ {
        self.pairs.iter().copied()
    }

    /// Return all pairs sorted by (i, j) (for deterministic inspection).
    pub fn to_vec(&self) -> Vec<Pair> {
        let mut v = self.pairs.clone();
        v.sort_unstable_by_key(|p| (p.i(), p.j()));
        v
    }

    /// Consume the set, keeping first-seen order.
    pub fn into_vec(self) -> Vec<Pair> {
        self.pairs
    }
}

impl fmt::Display for PairSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for pair in self.to_vec() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}", pair)?;
            first = false;
        }
        Ok(())
    }
}
