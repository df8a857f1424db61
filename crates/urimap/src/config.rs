//! Registry configuration.

use serde::{Deserialize, Serialize};

use crate::vocabulary::Vocabulary;

/// Configuration for a [`UridMap`](crate::UridMap).
///
/// Deserializable so hosts can embed it in their own configuration files.
/// Missing fields take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UridMapConfig {
    /// Optional vocabulary groups resolved by
    /// [`UridMap::init_configured_urids`](crate::UridMap::init_configured_urids).
    pub vocabulary: Vocabulary,
    /// Number of entries to reserve up front in both tables.
    pub initial_capacity: usize,
    /// Maximum number of URIDs the registry will ever issue.
    pub max_entries: u32,
    /// Emit a debug event for every newly minted URID.
    pub log_new_urids: bool,
}

impl Default for UridMapConfig {
    fn default() -> Self {
        Self {
            vocabulary: Vocabulary::empty(),
            initial_capacity: 256,
            max_entries: u32::MAX,
            log_new_urids: true,
        }
    }
}

impl UridMapConfig {
    /// Upper bound on the number of entries reserved up front.
    pub const MAX_INITIAL_CAPACITY: usize = 1 << 16;

    /// `initial_capacity` clamped to `max_entries` and
    /// [`MAX_INITIAL_CAPACITY`](Self::MAX_INITIAL_CAPACITY).
    ///
    /// Tables still grow past this on demand.
    pub fn effective_capacity(&self) -> usize {
        let max_entries = usize::try_from(self.max_entries).unwrap_or(usize::MAX);
        self.initial_capacity
            .min(max_entries)
            .min(Self::MAX_INITIAL_CAPACITY)
    }

    /// Configuration resolving every optional vocabulary group.
    pub fn extended() -> Self {
        Self {
            vocabulary: Vocabulary::EXTENDED,
            ..Default::default()
        }
    }

    /// Set the optional vocabulary groups
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Set the initial table capacity
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set the maximum number of entries
    pub fn with_max_entries(mut self, max_entries: u32) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Enable or disable per-URID debug events
    pub fn with_log_new_urids(mut self, enabled: bool) -> Self {
        self.log_new_urids = enabled;
        self
    }
}
