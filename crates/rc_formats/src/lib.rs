//! The rc_formats crate.
//!
//! Serializes [`RnaMolecule`](rc_structure::RnaMolecule)s into text formats:
//!  - Connectivity table (CT), one partner per base.
//!
//! Encoders only read a molecule through its derived views. Where the text
//! ends up (file, socket, buffer) is up to the caller.
//!

mod writer;
mod ct;

pub use writer::*;
pub use ct::*;

