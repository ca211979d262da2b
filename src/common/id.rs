use cds::aformat;
use std::{
    fmt,
    sync::atomic::{AtomicUsize, Ordering},
};

/// Handle of a change observer registered with [`Header::subscribe`](crate::Header::subscribe).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct ObserverId(pub(crate) usize);

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(aformat!(32, "observer#{}", self.0)?.as_str())
    }
}

impl fmt::Debug for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(aformat!(32, "ObserverId({})", self.0)?.as_str())
    }
}

// ----------------------------------------------------------------------------

#[derive(Debug)]
pub(crate) struct IdGenerator {
    next: AtomicUsize,
}

impl IdGenerator {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            next: AtomicUsize::new(1),
        }
    }

    #[cfg(test)]
    #[inline]
    pub(crate) const fn with_seed(s: usize) -> Self {
        Self {
            next: AtomicUsize::new(s),
        }
    }

    #[inline]
    pub(crate) fn next(&self) -> ObserverId {
        ObserverId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

// shared by all headers; an id is never handed out twice
pub(crate) static OBSERVER_ID: IdGenerator = IdGenerator::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let id = ObserverId(17);
        assert_eq!(format!("{}", id), "observer#17");
        assert_eq!(format!("{:?}", id), "ObserverId(17)");
    }

    #[test]
    fn test_id_generator() {
        let g = IdGenerator::new();
        assert_eq!(g.next().0, 1);
        assert_eq!(g.next().0, 2);

        let g = IdGenerator::with_seed(40);
        assert_eq!(g.next().0, 40);
        assert_eq!(g.next().0, 41);
    }

    #[test]
    fn test_global_ids_are_unique() {
        let a = OBSERVER_ID.next();
        let b = OBSERVER_ID.next();
        assert_ne!(a, b);
    }
}
