//! Validated frame count.

use std::fmt;
use std::num::NonZeroUsize;

use crate::common::config::DEFAULT_CAPACITY;
use crate::common::{Error, Result};

/// Number of physical frames available to a run.
///
/// A `Capacity` is always at least one, so engines never have to handle a
/// zero-sized pool. Invalid values are rejected here, before any engine is
/// built.
///
/// # Example
/// ```
/// use pagesim::{Capacity, Error};
///
/// let cap = Capacity::new(3).unwrap();
/// assert_eq!(cap.get(), 3);
///
/// assert_eq!(Capacity::new(0), Err(Error::InvalidCapacity(0)));
/// assert_eq!(Capacity::try_from(-2i64), Err(Error::InvalidCapacity(-2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    /// [`DEFAULT_CAPACITY`] frames.
    pub const DEFAULT: Capacity = match NonZeroUsize::new(DEFAULT_CAPACITY) {
        Some(frames) => Capacity(frames),
        None => panic!("DEFAULT_CAPACITY must be non-zero"),
    };

    /// Validate a frame count.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `frames` is 0
    pub fn new(frames: usize) -> Result<Self> {
        NonZeroUsize::new(frames)
            .map(Capacity)
            .ok_or(Error::InvalidCapacity(0))
    }

    /// Number of frames.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for Capacity {
    type Error = Error;

    fn try_from(frames: i64) -> Result<Self> {
        if frames <= 0 {
            return Err(Error::InvalidCapacity(frames));
        }
        usize::try_from(frames)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Capacity)
            .ok_or(Error::InvalidCapacity(frames))
    }
}

impl From<NonZeroUsize> for Capacity {
    fn from(frames: NonZeroUsize) -> Self {
        Capacity(frames)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} frames", self.0)
    }
}
