//! ABI record definitions.
//!
//! Field order and types match the LV2 C headers exactly. The records carry
//! raw pointers, so they are plain data here: who owns the handle and how
//! long it lives is decided by the host that fills them in.

use core::ffi::{c_char, c_void};

/// URID as seen across the ABI.
pub type Lv2Urid = u32;

/// Signature of the `map` callback: `(handle, uri) -> urid`.
///
/// # Safety
/// - `handle` must be the handle stored next to this function pointer
/// - `uri` must be null or point to a NUL-terminated string that stays
///   valid for the duration of the call
///
/// # Returns
/// - The URID for `uri` (never 0 on success)
/// - [`URID_INVALID`](crate::URID_INVALID) if no URID could be produced
pub type MapFn = unsafe extern "C" fn(handle: *mut c_void, uri: *const c_char) -> Lv2Urid;

/// Signature of the `unmap` callback: `(handle, urid) -> uri`.
///
/// # Safety
/// - `handle` must be the handle stored next to this function pointer
///
/// # Returns
/// - A NUL-terminated string owned by the host, valid while the host's map lives
/// - Null if `urid` was never issued
pub type UnmapFn = unsafe extern "C" fn(handle: *mut c_void, urid: Lv2Urid) -> *const c_char;

/// Host feature passed to a plugin at instantiation (`LV2_Feature`).
///
/// # Memory Layout
///
/// | Field | Type              |
/// |-------|-------------------|
/// | uri   | `*const c_char`   |
/// | data  | `*mut c_void`     |
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lv2Feature {
    /// NUL-terminated URI identifying the feature
    pub uri: *const c_char,
    /// Feature specific data, e.g. a pointer to an [`Lv2UridMap`]
    pub data: *mut c_void,
}

/// URI to URID capability record (`LV2_URID_Map`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Lv2UridMap {
    /// Opaque host data passed back as the first argument of `map`
    pub handle: *mut c_void,
    /// Map callback
    pub map: MapFn,
}

/// URID to URI capability record (`LV2_URID_Unmap`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Lv2UridUnmap {
    /// Opaque host data passed back as the first argument of `unmap`
    pub handle: *mut c_void,
    /// Unmap callback
    pub unmap: UnmapFn,
}

impl Lv2UridMap {
    /// Invoke the `map` callback.
    ///
    /// # Safety
    ///
    /// The record must have been filled in by a live host, and `uri` must be
    /// null or a valid NUL-terminated string.
    pub unsafe fn call(&self, uri: *const c_char) -> Lv2Urid {
        // SAFETY: forwarded caller contract.
        unsafe { (self.map)(self.handle, uri) }
    }
}

impl Lv2UridUnmap {
    /// Invoke the `unmap` callback.
    ///
    /// # Safety
    ///
    /// The record must have been filled in by a live host.
    pub unsafe fn call(&self, urid: Lv2Urid) -> *const c_char {
        // SAFETY: forwarded caller contract.
        unsafe { (self.unmap)(self.handle, urid) }
    }
}

static_assertions::const_assert_eq!(
    core::mem::size_of::<Lv2Feature>(),
    2 * core::mem::size_of::<usize>()
);
static_assertions::const_assert_eq!(
    core::mem::size_of::<Lv2UridMap>(),
    2 * core::mem::size_of::<usize>()
);
static_assertions::const_assert_eq!(
    core::mem::size_of::<Lv2UridUnmap>(),
    2 * core::mem::size_of::<usize>()
);
static_assertions::const_assert_eq!(
    core::mem::align_of::<Lv2UridMap>(),
    core::mem::align_of::<usize>()
);
