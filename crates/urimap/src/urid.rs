//! URID and registry identity types.
//!
//! A [`Urid`] is the integer stand-in for an interned URI. Comparing two
//! URIDs is a single integer compare, which is what real-time code relies
//! on instead of string comparison.

use std::fmt;
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use urimap_abi::{Lv2Urid, URID_INVALID};

/// An interned URI identifier.
///
/// Never zero: 0 is reserved as [`URID_INVALID`] by the LV2 URID
/// extension, so `Option<Urid>` has the same size as `u32`.
///
/// # Examples
///
/// ```
/// use urimap::Urid;
///
/// let urid = Urid::new(42).ok_or("zero")?;
/// assert_eq!(urid.get(), 42);
/// assert!(Urid::new(0).is_none());
/// # Ok::<(), &str>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Urid(NonZeroU32);

impl Urid {
    /// Create a URID from a raw value. Returns `None` for the sentinel.
    #[must_use]
    pub const fn new(raw: Lv2Urid) -> Option<Self> {
        match NonZeroU32::new(raw) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// The raw value passed across the ABI.
    #[must_use]
    pub const fn get(self) -> Lv2Urid {
        self.0.get()
    }

    /// Raw value of an optional URID, with `None` mapped to the sentinel.
    #[must_use]
    pub const fn to_raw(urid: Option<Self>) -> Lv2Urid {
        match urid {
            Some(urid) => urid.get(),
            None => URID_INVALID,
        }
    }

    /// Position of this URID in the registry's reverse table.
    pub(crate) fn index(self) -> usize {
        // URIDs start at 1; u32 -> usize is lossless on supported targets.
        (self.get() - 1) as usize
    }
}

impl fmt::Display for Urid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Urid> for Lv2Urid {
    fn from(urid: Urid) -> Self {
        urid.get()
    }
}

/// Identity of a [`UridMap`](crate::UridMap) instance.
///
/// URIDs are only meaningful relative to the registry that issued them.
/// Values cached from one registry and compared against another would
/// silently mismatch, so cached sets remember where they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistryId(u64);

impl RegistryId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw identity value. Unique within the process.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RegistryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_not_a_urid() {
        assert!(Urid::new(0).is_none());
        assert_eq!(Urid::to_raw(None), URID_INVALID);
    }

    #[test]
    fn test_option_urid_is_u32_sized() {
        assert_eq!(std::mem::size_of::<Option<Urid>>(), 4);
    }

    #[test]
    fn test_index_is_zero_based() {
        assert_eq!(Urid::new(1).map(Urid::index), Some(0));
        assert_eq!(Urid::new(17).map(Urid::index), Some(16));
    }

    #[test]
    fn test_registry_ids_are_unique() {
        let a = RegistryId::next();
        let b = RegistryId::next();
        assert_ne!(a, b);
        assert_eq!(format!("{a}"), format!("#{}", a.get()));
    }
}
