//! Boundary adapter between [`UridMap`] and the LV2 URID ABI.
//!
//! Everything that touches raw pointers lives here. The registry itself is
//! safe Rust; this module wraps it in the two `extern "C"` callbacks and
//! the fixed-layout records that plugin instances receive.
//!
//! # Callback guarantees
//!
//! - Null handles or URIs yield [`URID_INVALID`] / null instead of UB.
//! - Registry errors and panics are converted to the sentinel; nothing
//!   unwinds into foreign code.
//! - Strings returned by `unmap` are the registry's permanent copies.

use std::ffi::{CStr, c_char, c_void};
use std::panic::{self, AssertUnwindSafe};
use std::ptr;
use std::sync::OnceLock;

use tracing::{error, warn};
use urimap_abi::{
    Lv2Feature, Lv2Urid, Lv2UridMap, Lv2UridUnmap, URID_INVALID, URID_MAP_URI, URID_UNMAP_URI,
};

use crate::registry::UridMap;

/// The `map` / `unmap` features of one registry.
#[derive(Debug, Clone, Copy)]
pub struct Features<'a> {
    /// `http://lv2plug.in/ns/ext/urid#map`
    pub map: &'a Lv2Feature,
    /// `http://lv2plug.in/ns/ext/urid#unmap`
    pub unmap: &'a Lv2Feature,
}

impl Features<'_> {
    /// Null-terminated pointer array in the form plugin instantiation expects.
    ///
    /// The pointers stay valid for as long as the registry lives.
    pub fn as_ptrs(&self) -> [*const Lv2Feature; 3] {
        [ptr::from_ref(self.map), ptr::from_ref(self.unmap), ptr::null()]
    }
}

struct FeaturePair {
    map: Lv2Feature,
    unmap: Lv2Feature,
}

/// Capability records owned by a [`UridMap`].
///
/// Built once with the registry's own address as handle. The records sit
/// inside the registry's `Arc` allocation, so their addresses are stable.
pub(crate) struct FeatureRecords {
    map: Lv2UridMap,
    unmap: Lv2UridUnmap,
    features: OnceLock<FeaturePair>,
}

// SAFETY: the records are never mutated after construction. The handle
// points at the owning `UridMap`, which is `Sync`, and the feature URIs are
// `'static` C strings.
unsafe impl Send for FeatureRecords {}
// SAFETY: see above.
unsafe impl Sync for FeatureRecords {}

impl FeatureRecords {
    pub(crate) fn new(registry: *const UridMap) -> Self {
        let handle = registry.cast_mut().cast::<c_void>();
        Self {
            map: Lv2UridMap {
                handle,
                map: urid_map,
            },
            unmap: Lv2UridUnmap {
                handle,
                unmap: urid_unmap,
            },
            features: OnceLock::new(),
        }
    }

    pub(crate) fn map(&self) -> &Lv2UridMap {
        &self.map
    }

    pub(crate) fn unmap(&self) -> &Lv2UridUnmap {
        &self.unmap
    }

    // Built lazily from `&self` so `data` captures the final address of the
    // records rather than a pre-move temporary.
    pub(crate) fn features(&self) -> Features<'_> {
        let pair = self.features.get_or_init(|| FeaturePair {
            map: Lv2Feature {
                uri: URID_MAP_URI.as_ptr(),
                data: ptr::from_ref(&self.map).cast_mut().cast::<c_void>(),
            },
            unmap: Lv2Feature {
                uri: URID_UNMAP_URI.as_ptr(),
                data: ptr::from_ref(&self.unmap).cast_mut().cast::<c_void>(),
            },
        });
        Features {
            map: &pair.map,
            unmap: &pair.unmap,
        }
    }
}

/// Recover the registry from a callback handle.
///
/// # Safety
///
/// `handle` must be null or the handle of a record owned by a live
/// `UridMap`.
unsafe fn registry<'a>(handle: *mut c_void) -> Option<&'a UridMap> {
    // SAFETY: caller guarantees the pointer is null or a live registry.
    unsafe { handle.cast::<UridMap>().cast_const().as_ref() }
}

/// `map` callback stored in every [`Lv2UridMap`] a registry hands out.
///
/// # Safety
///
/// `handle` must come from a record of a registry that is still alive, and
/// `uri` must be null or a NUL-terminated string valid for the call.
unsafe extern "C" fn urid_map(handle: *mut c_void, uri: *const c_char) -> Lv2Urid {
    // SAFETY: forwarded callback contract.
    let Some(registry) = (unsafe { registry(handle) }) else {
        warn!("URID map called with a null handle");
        return URID_INVALID;
    };
    if uri.is_null() {
        warn!(registry = %registry.id(), "URID map called with a null URI");
        return URID_INVALID;
    }
    // SAFETY: non-null and NUL-terminated per the callback contract.
    let uri = unsafe { CStr::from_ptr(uri) };

    match panic::catch_unwind(AssertUnwindSafe(|| registry.resolve_or_create(uri))) {
        Ok(Ok(urid)) => urid.get(),
        // Already logged by the registry.
        Ok(Err(_)) => URID_INVALID,
        Err(_) => {
            error!(registry = %registry.id(), "Panic while mapping URI");
            URID_INVALID
        }
    }
}

/// `unmap` callback stored in every [`Lv2UridUnmap`] a registry hands out.
///
/// # Safety
///
/// `handle` must come from a record of a registry that is still alive.
unsafe extern "C" fn urid_unmap(handle: *mut c_void, urid: Lv2Urid) -> *const c_char {
    // SAFETY: forwarded callback contract.
    let Some(registry) = (unsafe { registry(handle) }) else {
        warn!("URID unmap called with a null handle");
        return ptr::null();
    };

    panic::catch_unwind(AssertUnwindSafe(|| registry.lookup_ptr(urid))).unwrap_or_else(|_| {
        error!(registry = %registry.id(), urid, "Panic while unmapping URID");
        ptr::null()
    })
}
