//! Symmetric, insertion-ordered pair relation.
//!
//! Stores base pairs as adjacency lists: position -> partners. Adding the
//! pair (i, j) records both i -> j and j -> i. Nothing is deduplicated and
//! nothing is resolved here; a position may have any number of partners.
//!
//! Iteration follows the order in which positions first appeared as keys,
//! and each partner list keeps insertion order. The derived pair maps
//! depend on this order.
//!

use std::collections::hash_map::Entry;
use nohash_hasher::IntMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::RelationError;
use crate::NAIDX;

/// Flat form of a relation: (position, partners) in key insertion order.
pub type Adjacency = Vec<(NAIDX, Vec<NAIDX>)>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Adjacency", into = "Adjacency"))]
pub struct PairRelation {
    keys: Vec<NAIDX>,
    partners: IntMap<NAIDX, Vec<NAIDX>>,
}

impl PairRelation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pair (i, j) in both directions.
    pub fn insert(&mut self, i: NAIDX, j: NAIDX) {
        debug_assert!(i != j);
        self.push(i, j);
        self.push(j, i);
    }

    fn push(&mut self, key: NAIDX, partner: NAIDX) {
        match self.partners.entry(key) {
            Entry::Occupied(e) => e.into_mut().push(partner),
            Entry::Vacant(e) => {
                self.keys.push(key);
                e.insert(vec![partner]);
            }
        }
    }

    /// Returns true if no pair was ever recorded.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of positions with at least one partner.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// All recorded partners of `i` (duplicates included).
    pub fn partners(&self, i: NAIDX) -> &[NAIDX] {
        self.partners.get(&i).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterator over (position, partners) in key insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NAIDX, &[NAIDX])> + '_ {
        self.keys.iter().map(|&k| (k, self.partners(k)))
    }

    /// The largest position referenced by the relation.
    pub fn max_position(&self) -> Option<NAIDX> {
        // Every partner is also a key.
        self.keys.iter().copied().max()
    }

    /// The relation as (position, partners) entries, in key insertion order.
    pub fn to_adjacency(&self) -> Adjacency {
        self.iter().map(|(k, p)| (k, p.to_vec())).collect()
    }

    fn count(&self, i: NAIDX, j: NAIDX) -> usize {
        self.partners(i).iter().filter(|&&p| p == j).count()
    }
}

impl From<PairRelation> for Adjacency {
    fn from(rel: PairRelation) -> Self {
        rel.to_adjacency()
    }
}

/// Rebuild a relation entry by entry, keeping key and partner order.
///
/// Rejects position 0, self-pairs, repeated keys and entries without their
/// mirror image, so the result holds the same invariants as one built with
/// [`PairRelation::insert`].
impl TryFrom<Adjacency> for PairRelation {
    type Error = RelationError;

    fn try_from(entries: Adjacency) -> Result<Self, Self::Error> {
        let mut rel = PairRelation::new();
        for (key, partners) in entries {
            if rel.partners.contains_key(&key) {
                return Err(RelationError::DuplicateKey(key));
            }
            for partner in partners {
                if key < 1 {
                    return Err(RelationError::InvalidIndex(key));
                }
                if partner < 1 || partner == key {
                    return Err(RelationError::InvalidIndex(partner));
                }
                rel.push(key, partner);
            }
        }
        for (i, partners) in rel.iter() {
            for &j in partners {
                if rel.count(i, j) != rel.count(j, i) {
                    return Err(RelationError::Asymmetric(i, j));
                }
            }
        }
        Ok(rel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_insert() {
        let mut rel = PairRelation::new();
        assert!(rel.is_empty());
        rel.insert(3, 7);
        assert_eq!(rel.partners(3), &[7]);
        assert_eq!(rel.partners(7), &[3]);
        assert_eq!(rel.partners(5), &[] as &[NAIDX]);
        assert_eq!(rel.len(), 2);
        assert!(!rel.is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut rel = PairRelation::new();
        rel.insert(1, 4);
        rel.insert(4, 1);
        rel.insert(1, 4);
        assert_eq!(rel.partners(1), &[4, 4, 4]);
        assert_eq!(rel.partners(4), &[1, 1, 1]);
        assert_eq!(rel.len(), 2);
    }

    #[test]
    fn test_iteration_order() {
        let mut rel = PairRelation::new();
        rel.insert(9, 2);
        rel.insert(5, 9);
        rel.insert(2, 5);
        let seen: Vec<(NAIDX, Vec<NAIDX>)> = rel.iter()
            .map(|(k, p)| (k, p.to_vec()))
            .collect();
        assert_eq!(seen, vec![
            (9, vec![2, 5]),
            (2, vec![9, 5]),
            (5, vec![9, 2]),
        ]);
        assert_eq!(rel.max_position(), Some(9));
        assert_eq!(PairRelation::new().max_position(), None);
    }

    fn rebuild(adj: Adjacency) -> Result<PairRelation, RelationError> {
        PairRelation::try_from(adj)
    }

    #[test]
    fn test_adjacency_rebuild() {
        let mut rel = PairRelation::new();
        rel.insert(9, 2);
        rel.insert(5, 9);
        rel.insert(9, 2);
        let adj = rel.to_adjacency();
        assert_eq!(adj, vec![(9, vec![2, 5, 2]), (2, vec![9, 9]), (5, vec![9])]);
        assert_eq!(rebuild(adj), Ok(rel));
        assert_eq!(rebuild(Adjacency::new()), Ok(PairRelation::new()));
    }

    #[test]
    fn test_adjacency_rejects_broken_relations() {
        assert_eq!(
            rebuild(vec![(3, vec![3])]),
            Err(RelationError::InvalidIndex(3))
        );
        assert_eq!(
            rebuild(vec![(0, vec![4]), (4, vec![0])]),
            Err(RelationError::InvalidIndex(0))
        );
        assert_eq!(
            rebuild(vec![(5, vec![2])]),
            Err(RelationError::Asymmetric(5, 2))
        );
        assert_eq!(
            rebuild(vec![(1, vec![2, 2]), (2, vec![1])]),
            Err(RelationError::Asymmetric(1, 2))
        );
        assert_eq!(
            rebuild(vec![(1, vec![2]), (2, vec![1]), (1, vec![2])]),
            Err(RelationError::DuplicateKey(1))
        );
    }
}
