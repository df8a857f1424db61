//! C ABI definitions for the LV2 URID map extension.
//!
//! This crate defines the fixed-layout records a host hands to plugin
//! instances so they can translate URIs to integer URIDs and back:
//! - [`Lv2Feature`]: the `(uri, data)` pair used for feature negotiation
//! - [`Lv2UridMap`]: `(handle, map)` capability record
//! - [`Lv2UridUnmap`]: `(handle, unmap)` capability record
//! - The [`URID_INVALID`] sentinel and the well-known URIs in [`uris`]
//!
//! The crate contains no logic. The host side implementation of the
//! callbacks lives in the `urimap` crate.
//!
//! # ABI Stability Guarantees
//!
//! All records are `#[repr(C)]` and consist of exactly two pointer-sized
//! fields, matching `LV2_Feature`, `LV2_URID_Map` and `LV2_URID_Unmap` from
//! the LV2 C headers. Layout is checked at compile time.
//!
//! # Callback contract
//!
//! - `map(handle, uri)` never returns 0 for a valid, NUL-terminated `uri`.
//!   0 is reserved and signals that no URID could be produced.
//! - `unmap(handle, urid)` returns null for a URID the host never issued.
//!   A non-null result stays valid for as long as the host's map lives.
//! - Either callback may be invoked from any thread, including the audio
//!   render thread.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod constants;
pub mod prelude;
pub mod types;
pub mod uris;

pub use constants::{URID_INVALID, URID_MAP_URI, URID_UNMAP_URI, URIMAP_ABI_VERSION};
pub use types::{Lv2Feature, Lv2Urid, Lv2UridMap, Lv2UridUnmap, MapFn, UnmapFn};
