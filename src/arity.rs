use crate::Error;

use core::convert::TryFrom;

#[cfg(feature = "derive")]
use serde::{Deserialize, Serialize};

/// How many of the tokens following a flag it may absorb as values.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "derive", derive(Serialize, Deserialize))]
pub enum Arity {
    // presence only, the next token is positional
    None,
    UpTo(usize),
    // everything up to the next flag token
    Unbounded,
}

impl Default for Arity {
    fn default() -> Self {
        Arity::None
    }
}

impl Arity {
    /// Whether a flag already holding `held` values takes one more.
    pub fn accepts(&self, held: usize) -> bool {
        match *self {
            Arity::None => false,
            Arity::UpTo(max) => held < max,
            Arity::Unbounded => true,
        }
    }
}

/// Integer form: `0` is none, `n > 0` is a bound and `-1` is unbounded.
impl TryFrom<i32> for Arity {
    type Error = Error;

    fn try_from(count: i32) -> Result<Self, Error> {
        match count {
            -1 => Ok(Arity::Unbounded),
            0 => Ok(Arity::None),
            n if n > 0 => Ok(Arity::UpTo(n as usize)),
            n => Err(Error::InvalidArity(n)),
        }
    }
}

impl From<usize> for Arity {
    fn from(count: usize) -> Self {
        match count {
            0 => Arity::None,
            n => Arity::UpTo(n),
        }
    }
}
