//! The RNA base alphabet.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One base of an RNA chain. `Unknown` is written as `N`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Base { A, C, G, U, Unknown }

impl TryFrom<char> for Base {
    type Error = char;

    /// Only the exact symbols of the alphabet are accepted, so that
    /// `char::from(Base::try_from(c)?) == c` always holds.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            'A' => Base::A,
            'C' => Base::C,
            'G' => Base::G,
            'U' => Base::U,
            'N' => Base::Unknown,
            _ => return Err(c),
        })
    }
}

impl From<Base> for char {
    fn from(b: Base) -> Self {
        match b {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
            Base::Unknown => 'N',
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}
