//! Page identifier type.

use std::fmt;

/// Identifies a referenced page.
///
/// Pages are opaque: only equality matters to the replacement policies.
/// The sign carries no meaning, so any `i64` is a valid identifier and no
/// value is reserved as an "empty" marker. Empty frames are `None`.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(-3);
/// assert_eq!(page_id.0, -3);
/// assert_eq!(PageId::from(7), PageId::new(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }
}

impl From<i64> for PageId {
    #[inline]
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
    }

    #[test]
    fn test_page_id_negative_is_ordinary() {
        // -1 is just another page, not an empty-slot sentinel
        assert_ne!(PageId::new(-1), PageId::new(1));
        assert_eq!(PageId::from(-1), PageId::new(-1));
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "Page(42)");
        assert_eq!(format!("{}", PageId::new(-5)), "Page(-5)");
    }
}
