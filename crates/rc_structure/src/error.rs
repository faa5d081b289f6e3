use thiserror::Error;

use crate::NAIDX;

/// Rejected mutation of an [`RnaMolecule`](crate::RnaMolecule).
///
/// Both variants carry the id of the molecule and the offending position.
/// A rejected call never leaves partial state behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PairingError {
    /// Unrecognized base symbol (or chain full) at the position it would have taken.
    #[error("molecule {molecule_id}: invalid base at position {position}")]
    InvalidBase { molecule_id: usize, position: usize },

    /// Pair endpoint that is < 1 or equal to the other endpoint.
    #[error("molecule {molecule_id}: invalid pair index {position}")]
    InvalidPairIndex { molecule_id: usize, position: usize },
}

impl PairingError {
    pub fn molecule_id(&self) -> usize {
        match *self {
            PairingError::InvalidBase { molecule_id, .. }
            | PairingError::InvalidPairIndex { molecule_id, .. } => molecule_id,
        }
    }

    pub fn position(&self) -> usize {
        match *self {
            PairingError::InvalidBase { position, .. }
            | PairingError::InvalidPairIndex { position, .. } => position,
        }
    }
}

/// A pair relation (or a single pair) assembled from raw adjacency data
/// that does not hold the relation's invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RelationError {
    /// Position 0, or a position paired with itself.
    #[error("invalid pair index {0}")]
    InvalidIndex(NAIDX),

    /// A position listed twice as a key.
    #[error("position {0} appears twice as a key")]
    DuplicateKey(NAIDX),

    /// i -> j recorded a different number of times than j -> i.
    #[error("pair ({0}, {1}) is not recorded symmetrically")]
    Asymmetric(NAIDX, NAIDX),

    /// A pair given with i >= j.
    #[error("pair ({0}, {1}) is not ordered")]
    Unordered(NAIDX, NAIDX),
}

impl RelationError {
    /// The position that made the relation invalid.
    pub fn position(&self) -> NAIDX {
        match *self {
            RelationError::InvalidIndex(i) | RelationError::DuplicateKey(i) => i,
            RelationError::Asymmetric(_, j) | RelationError::Unordered(_, j) => j,
        }
    }
}
