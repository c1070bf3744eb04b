use std::fmt;
use std::sync::atomic::{self, AtomicU64};

/// The identity of a single multi-select control instance.
///
/// Assigned once at construction and owned by the control. When the host
/// rebuilds a control after an external data reload, the replacement gets a
/// fresh [`Id`]; stale adapter references can be detected by comparing ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Id(u64);

static COUNT: AtomicU64 = AtomicU64::new(0);

impl Id {
    /// Creates a new unique instance [`Id`].
    pub fn unique() -> Id {
        Id(COUNT.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
