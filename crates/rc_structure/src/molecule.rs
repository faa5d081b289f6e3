//! The RNA molecule: an append-only chain of bases plus two pair relations.
//!
//! Secondary pairs and tertiary contacts are stored as symmetric,
//! possibly redundant relations (see [`PairRelation`]). Formats that allow
//! only one partner per base use the derived [`RnaMolecule::simplified_pair_map`],
//! formats with long-range contacts use [`RnaMolecule::tertiary_structure`].
//!
//! All derived views are recomputed on every call.
//!

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::Adjacency;
use crate::Base;
use crate::Pair;
use crate::PairMap;
use crate::PairRelation;
use crate::PairSet;
use crate::PairingError;
use crate::NAIDX;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MoleculeRecord", into = "MoleculeRecord"))]
pub struct RnaMolecule {
    id: usize,
    chain: Vec<Base>,
    pairs: PairRelation,
    tertiary_pairs: PairRelation,
}

impl RnaMolecule {
    /// Create an empty molecule.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            chain: Vec::new(),
            pairs: PairRelation::new(),
            tertiary_pairs: PairRelation::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Append a base at position `len() + 1`.
    ///
    /// Unknown symbols are rejected with [`PairingError::InvalidBase`]
    /// carrying the position the base would have taken.
    pub fn append_base(&mut self, symbol: char) -> Result<(), PairingError> {
        let position = self.chain.len() + 1;
        let base = Base::try_from(symbol)
            .ok()
            .filter(|_| position <= NAIDX::MAX as usize)
            .ok_or_else(|| {
                debug!(
                    "Molecule {}: rejected base {:?} at position {}.",
                    self.id, symbol, position
                );
                PairingError::InvalidBase { molecule_id: self.id, position }
            })?;
        self.chain.push(base);
        Ok(())
    }

    /// Record the secondary pair (first, second).
    pub fn add_pair(&mut self, first: NAIDX, second: NAIDX) -> Result<(), PairingError> {
        self.check_pair(first, second)?;
        trace!("Molecule {}: pair ({}, {}).", self.id, first, second);
        self.pairs.insert(first, second);
        Ok(())
    }

    /// Record the tertiary contact (first, second).
    pub fn add_tertiary_pair(&mut self, first: NAIDX, second: NAIDX) -> Result<(), PairingError> {
        self.check_pair(first, second)?;
        trace!("Molecule {}: tertiary pair ({}, {}).", self.id, first, second);
        self.tertiary_pairs.insert(first, second);
        Ok(())
    }

    fn check_pair(&self, first: NAIDX, second: NAIDX) -> Result<(), PairingError> {
        let offending = if first < 1 {
            first
        } else if second < 1 || second == first {
            second
        } else {
            return Ok(());
        };
        debug!("Molecule {}: rejected pair ({}, {}).", self.id, first, second);
        Err(PairingError::InvalidPairIndex {
            molecule_id: self.id,
            position: offending as usize,
        })
    }

    /// Number of appended bases.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// The base at a 1-based position.
    pub fn base(&self, position: NAIDX) -> Option<Base> {
        (position as usize).checked_sub(1).and_then(|i| self.chain.get(i)).copied()
    }

    /// The bases in position order, as a string of symbols.
    pub fn sequence(&self) -> String {
        self.chain.iter().map(|&b| char::from(b)).collect()
    }

    /// The raw secondary pair relation.
    pub fn pairs(&self) -> &PairRelation {
        &self.pairs
    }

    /// The raw tertiary pair relation.
    pub fn tertiary_pairs(&self) -> &PairRelation {
        &self.tertiary_pairs
    }

    /// Largest position referenced by any pair or tertiary contact (0 if none).
    /// May exceed `len()`: pairs can be added before their bases.
    pub fn max_reference(&self) -> NAIDX {
        self.pairs.max_position()
            .max(self.tertiary_pairs.max_position())
            .unwrap_or(0)
    }

    /// Greedy single-pass reduction of the secondary pairs.
    ///
    /// For every recorded (key, partner): map key -> partner if key is
    /// still free, otherwise map partner -> key if partner is still free.
    /// First-seen pairs win. With more than two partners per position the
    /// result is not guaranteed to be symmetric; prefer
    /// [`RnaMolecule::simplified_pair_map`].
    pub fn pair_map(&self) -> PairMap {
        let mut map = PairMap::default();
        for (key, partners) in self.pairs.iter() {
            for &partner in partners {
                if !map.contains_key(&key) {
                    map.insert(key, partner);
                } else if !map.contains_key(&partner) {
                    map.insert(partner, key);
                }
            }
        }
        map
    }

    /// Symmetric one-partner-per-base reduction of the secondary pairs.
    ///
    /// Keys are visited in insertion order. An unmapped key takes the first
    /// of its candidates that is still unmapped, in both directions.
    /// Positions without a free candidate stay unpaired.
    pub fn simplified_pair_map(&self) -> PairMap {
        let mut map = PairMap::default();
        for (key, partners) in self.pairs.iter() {
            if map.contains_key(&key) {
                continue;
            }
            if let Some(&partner) = partners.iter().find(|&&p| !map.contains_key(&p)) {
                map.insert(key, partner);
                map.insert(partner, key);
            }
        }
        map
    }

    pub fn has_tertiary_contacts(&self) -> bool {
        !self.tertiary_pairs.is_empty()
    }

    /// Every tertiary contact exactly once, as an unordered pair (i < j).
    pub fn tertiary_structure(&self) -> Vec<Pair> {
        if !self.has_tertiary_contacts() {
            return Vec::new();
        }
        let mut contacts = PairSet::new();
        for (key, partners) in self.tertiary_pairs.iter() {
            for &partner in partners {
                contacts.insert(Pair::unordered(key, partner));
            }
        }
        contacts.into_vec()
    }
}

/// Serialized form of an [`RnaMolecule`].
///
/// Loading a record replays it through the mutation checks: every base goes
/// through [`RnaMolecule::append_base`] and every stored pair through the
/// same validation as [`RnaMolecule::add_pair`].
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoleculeRecord {
    pub id: usize,
    pub sequence: String,
    pub pairs: Adjacency,
    pub tertiary_pairs: Adjacency,
}

#[cfg(feature = "serde")]
impl From<RnaMolecule> for MoleculeRecord {
    fn from(m: RnaMolecule) -> Self {
        Self {
            id: m.id,
            sequence: m.sequence(),
            pairs: m.pairs.to_adjacency(),
            tertiary_pairs: m.tertiary_pairs.to_adjacency(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<MoleculeRecord> for RnaMolecule {
    type Error = PairingError;

    fn try_from(record: MoleculeRecord) -> Result<Self, Self::Error> {
        let mut m = RnaMolecule::new(record.id);
        for symbol in record.sequence.chars() {
            m.append_base(symbol)?;
        }
        m.pairs = m.replay_relation(record.pairs)?;
        m.tertiary_pairs = m.replay_relation(record.tertiary_pairs)?;
        Ok(m)
    }
}

#[cfg(feature = "serde")]
impl RnaMolecule {
    fn replay_relation(&self, entries: Adjacency) -> Result<PairRelation, PairingError> {
        for (key, partners) in &entries {
            for &partner in partners {
                self.check_pair(*key, partner)?;
            }
        }
        PairRelation::try_from(entries).map_err(|e| {
            debug!("Molecule {}: rejected relation ({}).", self.id, e);
            PairingError::InvalidPairIndex {
                molecule_id: self.id,
                position: e.position() as usize,
            }
        })
    }
}
