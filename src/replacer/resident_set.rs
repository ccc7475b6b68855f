//! The fixed pool of frames every policy manages.

use std::fmt;

use crate::common::{Capacity, FrameId, PageId};

/// Pages currently held in physical frames.
///
/// A `ResidentSet` has exactly `capacity` slots, each empty (`None`) or
/// holding one page. A page occupies at most one slot, so the set can never
/// hold more than `capacity` pages.
///
/// Lookups are linear scans. Capacities are small (single or double digit
/// frame counts), so a scan over a `Vec` beats hashing.
///
/// Iteration order is slot order (frame 0 first). Policies that break ties
/// "by first encountered" use this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidentSet {
    slots: Vec<Option<PageId>>,
}

impl ResidentSet {
    /// Create an empty set with `capacity` frames.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            slots: vec![None; capacity.get()],
        }
    }

    /// Number of frames.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied frames.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True if no frame is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// True if every frame is occupied.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// True if `page` is resident.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.frame_of(page).is_some()
    }

    /// Frame holding `page`, if resident.
    pub fn frame_of(&self, page: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| *slot == Some(page))
            .map(FrameId::new)
    }

    /// Lowest-numbered empty frame.
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none).map(FrameId::new)
    }

    /// Page held by `frame`.
    ///
    /// # Panics
    /// Panics if `frame` is out of range.
    #[inline]
    pub fn get(&self, frame: FrameId) -> Option<PageId> {
        self.slots[frame.0]
    }

    /// Put `page` into `frame`, returning the page it displaced.
    ///
    /// # Panics
    /// Panics if `frame` is out of range, or (debug builds) if `page` is
    /// already resident in another frame.
    pub fn place(&mut self, frame: FrameId, page: PageId) -> Option<PageId> {
        debug_assert!(
            self.frame_of(page).map_or(true, |f| f == frame),
            "{} already resident",
            page
        );
        self.slots[frame.0].replace(page)
    }

    /// Occupied frames and their pages, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|page| (FrameId::new(i), page)))
    }

    /// Copy of the current frame contents.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frames: self.slots.clone(),
        }
    }

    /// Empty every frame.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }
}

/// Frame contents at one point of a run, in slot order.
///
/// Displays like `[1, 2, -]`, with `-` for an empty frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot {
    frames: Vec<Option<PageId>>,
}

impl Snapshot {
    /// Frame contents, one entry per frame.
    #[inline]
    pub fn frames(&self) -> &[Option<PageId>] {
        &self.frames
    }

    /// Resident pages in slot order, skipping empty frames.
    pub fn pages(&self) -> Vec<PageId> {
        self.frames.iter().flatten().copied().collect()
    }

    /// True if `page` is in some frame.
    pub fn contains(&self, page: PageId) -> bool {
        self.frames.contains(&Some(page))
    }

    /// True if every frame is empty.
    pub fn is_empty(&self) -> bool {
        self.frames.iter().all(Option::is_none)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match frame {
                Some(page) => write!(f, "{}", page.0)?,
                None => write!(f, "-")?,
            }
        }
        write!(f, "]")
    }
}
