//! Wrapping index arithmetic for the image carousel and content switcher.
//!
//! Both the modal image carousel and the previous/next content navigation
//! step through a list whose ends are joined: advancing past the last entry
//! lands on the first, retreating before the first lands on the last.

/// Direction of a single carousel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Step `index` one position in `direction` within a list of `len` entries.
///
/// An empty list always yields `0`. An out-of-range `index` is first reduced
/// modulo `len`.
///
/// ```
/// use folio_core::carousel::{step, Direction};
///
/// assert_eq!(step(2, 3, Direction::Next), 0);
/// assert_eq!(step(0, 3, Direction::Prev), 2);
/// assert_eq!(step(0, 0, Direction::Next), 0);
/// ```
pub fn step(index: usize, len: usize, direction: Direction) -> usize {
    if len == 0 {
        return 0;
    }
    let index = index % len;
    match direction {
        Direction::Next => (index + 1) % len,
        Direction::Prev => (index + len - 1) % len,
    }
}

/// Clamp an externally supplied index (e.g. from a query string) into range.
pub fn normalize(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index % len
    }
}

/// Position within a non-owning list of `len` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(index: usize, len: usize) -> Self {
        Self {
            index: normalize(index, len),
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether step controls make sense (more than one entry).
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn next_index(&self) -> usize {
        step(self.index, self.len, Direction::Next)
    }

    pub fn prev_index(&self) -> usize {
        step(self.index, self.len, Direction::Prev)
    }
}

/// Find the neighbour of the entry whose key equals `current` in `keys`.
///
/// Returns `None` if `current` is not present. Used to re-open the content
/// modal against the adjacent row.
pub fn adjacent<'a, K: PartialEq + ?Sized>(
    keys: &[&'a K],
    current: &K,
    direction: Direction,
) -> Option<&'a K> {
    let position = keys.iter().position(|k| *k == current)?;
    keys.get(step(position, keys.len(), direction)).copied()
}
