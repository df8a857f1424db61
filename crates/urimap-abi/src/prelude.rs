//! Convenience re-exports for common ABI types.
//!
//! # Example
//!
//! ```
//! use urimap_abi::prelude::*;
//!
//! assert_eq!(URID_INVALID, 0);
//! assert!(URID_MAP_URI.to_bytes().ends_with(b"#map"));
//! ```

pub use crate::constants::{URID_INVALID, URID_MAP_URI, URID_UNMAP_URI, URIMAP_ABI_VERSION};

pub use crate::types::{Lv2Feature, Lv2Urid, Lv2UridMap, Lv2UridUnmap, MapFn, UnmapFn};

pub use crate::uris;
