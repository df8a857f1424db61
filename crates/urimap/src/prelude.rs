//! Convenience re-exports for common types.

pub use crate::config::UridMapConfig;
pub use crate::error::{Result, UridMapError};
pub use crate::features::Features;
pub use crate::registry::UridMap;
pub use crate::urid::{RegistryId, Urid};
pub use crate::vocabulary::{AutomationUrids, CachedUrids, CoreUrids, SurroundUrids, Vocabulary};

pub use urimap_abi::{Lv2Feature, Lv2Urid, Lv2UridMap, Lv2UridUnmap, URID_INVALID};
