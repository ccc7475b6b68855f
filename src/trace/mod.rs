//! Reference traces: the workload a simulation replays.
//!
//! A [`ReferenceTrace`] is an ordered, immutable sequence of [`PageId`]s.
//! Every engine reads the same trace; none of them can modify it.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::common::{Error, PageId, Result};

/// An ordered sequence of page references.
///
/// # Example
/// ```
/// use pagesim::ReferenceTrace;
///
/// let trace: ReferenceTrace = "7 0 1 2, 0 3".parse().unwrap();
/// assert_eq!(trace.len(), 6);
/// assert_eq!(trace.distinct_pages(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ReferenceTrace {
    pages: Vec<PageId>,
}

impl ReferenceTrace {
    /// Create a trace from page ids.
    pub fn new(pages: Vec<PageId>) -> Self {
        Self { pages }
    }

    /// Create a trace from raw integer ids.
    pub fn from_ids(ids: &[i64]) -> Self {
        ids.iter().copied().collect()
    }

    /// Number of references.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True if the trace has no references.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The reference at `position`, if any.
    #[inline]
    pub fn get(&self, position: usize) -> Option<PageId> {
        self.pages.get(position).copied()
    }

    /// All references in order.
    #[inline]
    pub fn as_slice(&self) -> &[PageId] {
        &self.pages
    }

    /// Iterate over the references in order.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages.iter().copied()
    }

    /// References strictly after `position`.
    ///
    /// This is the look-ahead window handed to engines. Past the end it is
    /// empty.
    #[inline]
    pub fn upcoming(&self, position: usize) -> &[PageId] {
        self.pages.get(position + 1..).unwrap_or(&[])
    }

    /// Number of distinct pages referenced.
    ///
    /// Every distinct page faults at least once, so this is a lower bound on
    /// the fault count of any policy.
    pub fn distinct_pages(&self) -> usize {
        self.pages.iter().collect::<HashSet<_>>().len()
    }
}

impl FromIterator<PageId> for ReferenceTrace {
    fn from_iter<I: IntoIterator<Item = PageId>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<i64> for ReferenceTrace {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        iter.into_iter().map(PageId::new).collect()
    }
}

impl From<Vec<i64>> for ReferenceTrace {
    fn from(ids: Vec<i64>) -> Self {
        ids.into_iter().collect()
    }
}

impl FromStr for ReferenceTrace {
    type Err = Error;

    /// Parse page ids separated by whitespace and/or commas.
    ///
    /// # Errors
    /// - `Error::MalformedTrace` for the first token that is not an integer
    fn from_str(s: &str) -> Result<Self> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(position, token)| {
                token
                    .parse::<i64>()
                    .map(PageId::new)
                    .map_err(|_| Error::MalformedTrace {
                        position,
                        token: token.to_string(),
                    })
            })
            .collect()
    }
}

impl fmt::Display for ReferenceTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", page.0)?;
        }
        write!(f, "]")
    }
}
