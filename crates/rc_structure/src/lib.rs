//! The rc_structure crate.
//!
//! Provides the RNA molecule model used by rnaconv:
//!  - Bases (the A, C, G, U, N alphabet)
//!  - Secondary and tertiary pair relations
//!  - Derived views: pair maps and deduplicated tertiary contacts
//!

mod error;
mod base;
mod pair_set;
mod relation;
mod molecule;

pub use error::*;
pub use base::*;
pub use pair_set::*;
pub use relation::*;
pub use molecule::*;

use nohash_hasher::IntMap;


/// Nucleic Acid INdeX: we use `u16` (0 to 65k), which is plenty for nucleic acids.
/// Positions in this crate are **1-based**, so 0 never denotes a valid base.
/// `P1KEY` needs to be *twice as large* (in bits) as `NAIDX`, since pairs
/// `(NAIDX, NAIDX)` are compacted into one `P1KEY`.
pub type NAIDX = u16;

/// Pair key. Must be >= 2×`NAIDX` in bit width so we can safely pack two indices.
pub type P1KEY = u32;

/// One partner per position, as derived from a (possibly multi-valued) pair relation.
pub type PairMap = IntMap<NAIDX, NAIDX>;

/// Compile-time sanity check: 2×NAIDX bits must fit into P1KEY.
const _: () = {
    debug_assert!(2 * NAIDX::BITS <= P1KEY::BITS);
};

