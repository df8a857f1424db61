//! URI <-> URID interning for LV2 plugin hosts.
//!
//! Plugins and host compare small integer URIDs instead of URI strings,
//! because string comparison has unbounded latency on the audio thread.
//! This crate provides:
//! - [`UridMap`]: the thread-safe bidirectional registry
//! - The `urid#map` / `urid#unmap` capability records handed to plugins
//! - [`CachedUrids`]: a lock-free snapshot of well-known URIDs
//!
//! # Guarantees
//!
//! - URIDs start at 1 and are never reused, renumbered or expired.
//! - Mapping the same URI always returns the same URID, even when the
//!   first mapping races on several threads.
//! - Strings returned through `unmap` live as long as the registry.
//! - Nothing unwinds across the plugin ABI.
//!
//! URIDs from different registries are not comparable. A host creates one
//! registry and shares it:
//!
//! ```
//! use urimap::{UridMap, UridMapConfig, Vocabulary};
//!
//! let map = UridMap::with_config(UridMapConfig::default().with_vocabulary(Vocabulary::SURROUND));
//! let urids = map.init_configured_urids()?;
//! assert!(map.owns(&urids));
//!
//! // Handed to plugin instantiation as a null-terminated array.
//! let features = map.features().as_ptrs();
//! assert!(features[2].is_null());
//! # Ok::<(), urimap::UridMapError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod features;
pub mod prelude;
pub mod registry;
pub mod urid;
pub mod vocabulary;

pub use config::UridMapConfig;
pub use error::{Result, UridMapError};
pub use features::Features;
pub use registry::UridMap;
pub use urid::{RegistryId, Urid};
pub use vocabulary::{AutomationUrids, CachedUrids, CoreUrids, SurroundUrids, Vocabulary};

pub use urimap_abi;
