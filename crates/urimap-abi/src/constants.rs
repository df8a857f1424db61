//! ABI version and sentinel constants.

use core::ffi::CStr;

use crate::types::Lv2Urid;

/// Version of the records in this crate.
///
/// Format: major version (16 bits) << 16 | minor version (16 bits)
/// Version 1.0 = 0x0001_0000
pub const URIMAP_ABI_VERSION: u32 = 0x0001_0000;

/// Reserved URID value.
///
/// Never assigned to a URI. `map` returns it when no URID can be produced
/// (null arguments, exhausted id space, or an internal failure).
pub const URID_INVALID: Lv2Urid = 0;

/// Feature URI under which an [`Lv2UridMap`](crate::Lv2UridMap) is offered.
pub const URID_MAP_URI: &CStr = c"http://lv2plug.in/ns/ext/urid#map";

/// Feature URI under which an [`Lv2UridUnmap`](crate::Lv2UridUnmap) is offered.
pub const URID_UNMAP_URI: &CStr = c"http://lv2plug.in/ns/ext/urid#unmap";
