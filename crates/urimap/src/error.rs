//! Error types for URID mapping.

use thiserror::Error;

use crate::urid::RegistryId;

/// Error type for URID map operations.
///
/// None of these ever cross the plugin ABI. The `extern "C"` callbacks turn
/// every error into [`URID_INVALID`](urimap_abi::URID_INVALID) or a null
/// string before returning to foreign code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UridMapError {
    /// The URI cannot be represented as a NUL-terminated string.
    #[error("Invalid URI: {reason}")]
    InvalidUri {
        /// Reason for the failure.
        reason: String,
    },

    /// No further URIDs can be issued.
    #[error("URID space exhausted after {limit} entries")]
    Exhausted {
        /// Number of entries the registry is allowed to hold.
        limit: u32,
    },

    /// The registry's cached URID set has already been populated.
    #[error("Cached URIDs already populated for registry {registry}")]
    AlreadyPopulated {
        /// Registry holding the cached set.
        registry: RegistryId,
    },

    /// URIDs resolved by one registry were presented to another.
    #[error("URIDs from registry {actual} used with registry {expected}")]
    ForeignRegistry {
        /// Registry the caller operated on.
        expected: RegistryId,
        /// Registry that resolved the URIDs.
        actual: RegistryId,
    },
}

impl UridMapError {
    /// Whether the registry stays usable after this error.
    ///
    /// Exhaustion is permanent: ids are never reclaimed, so every later
    /// insertion fails the same way.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, UridMapError::Exhausted { .. })
    }
}

/// A specialized `Result` type for URID map operations.
pub type Result<T> = std::result::Result<T, UridMapError>;
