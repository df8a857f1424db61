//! The URI <-> URID registry.
//!
//! # Design
//!
//! The registry maintains two tables behind one lock:
//! - `forward`: maps URI -> URID (for `map`)
//! - `reverse`: maps URID - 1 -> URI (for `unmap`)
//!
//! Both tables share a single `Arc<CStr>` per URI, which is the registry's
//! own permanent copy. Entries are never removed, so the address of every
//! stored string is stable for the registry's lifetime and can be handed to
//! foreign code as a plain `const char*`.
//!
//! # Concurrency
//!
//! Lookups take the shared side of a `parking_lot::RwLock`. Insertion takes
//! the exclusive side and re-checks the forward table first, so concurrent
//! first-time callers for the same URI all observe a single winner.

use std::collections::HashMap;
use std::ffi::{CStr, CString, c_char};
use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use tracing::{debug, error, warn};
use urimap_abi::{Lv2Feature, Lv2UridMap, Lv2UridUnmap};

use crate::config::UridMapConfig;
use crate::error::{Result, UridMapError};
use crate::features::{FeatureRecords, Features};
use crate::urid::{RegistryId, Urid};
use crate::vocabulary::{CachedUrids, Vocabulary};

struct Tables {
    forward: HashMap<Arc<CStr>, Urid>,
    reverse: Vec<Arc<CStr>>,
}

impl Tables {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            forward: HashMap::with_capacity(capacity),
            reverse: Vec::with_capacity(capacity),
        }
    }

    fn insert(&mut self, uri: &CStr, limit: u32) -> Result<Urid> {
        let next = u32::try_from(self.reverse.len())
            .ok()
            .filter(|&len| len < limit)
            .and_then(|len| len.checked_add(1))
            .and_then(Urid::new)
            .ok_or(UridMapError::Exhausted { limit })?;

        let entry: Arc<CStr> = Arc::from(uri);
        self.forward.insert(Arc::clone(&entry), next);
        self.reverse.push(entry);
        Ok(next)
    }

    fn get(&self, urid: u32) -> Option<&Arc<CStr>> {
        Urid::new(urid).and_then(|urid| self.reverse.get(urid.index()))
    }
}

/// Thread-safe bidirectional URI <-> URID map.
///
/// A registry is created explicitly and shared as `Arc<UridMap>`. URIDs
/// issued by one registry mean nothing to another, so a host creates one
/// registry at startup and hands clones of the `Arc` to every component
/// that needs interning.
///
/// # Examples
///
/// ```
/// use urimap::UridMap;
///
/// let map = UridMap::new();
///
/// let a = map.resolve_or_create(c"urn:a")?;
/// let b = map.resolve_or_create(c"urn:b")?;
/// assert_eq!(map.resolve_or_create(c"urn:a")?, a);
/// assert_ne!(a, b);
///
/// assert_eq!(map.lookup_string(b.get()).as_deref(), Some(c"urn:b"));
/// assert!(map.lookup_string(99).is_none());
/// # Ok::<(), urimap::UridMapError>(())
/// ```
pub struct UridMap {
    id: RegistryId,
    config: UridMapConfig,
    tables: RwLock<Tables>,
    records: FeatureRecords,
    urids: OnceLock<CachedUrids>,
}

impl UridMap {
    /// Create a registry with the default configuration.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Self::with_config(UridMapConfig::default())
    }

    /// Create a registry with the given configuration.
    ///
    /// The capability records point back at the registry, so it is built
    /// directly inside its `Arc` and never moves afterwards.
    #[must_use]
    pub fn with_config(config: UridMapConfig) -> Arc<Self> {
        Arc::new_cyclic(|this| {
            let id = RegistryId::next();
            debug!(registry = %id, max_entries = config.max_entries, "Creating URID map");
            let capacity = config.effective_capacity();
            if capacity < config.initial_capacity {
                warn!(
                    registry = %id,
                    requested = config.initial_capacity,
                    reserved = capacity,
                    "Initial capacity clamped"
                );
            }
            Self {
                id,
                tables: RwLock::new(Tables::with_capacity(capacity)),
                records: FeatureRecords::new(this.as_ptr()),
                urids: OnceLock::new(),
                config,
            }
        })
    }

    /// Identity of this registry.
    pub fn id(&self) -> RegistryId {
        self.id
    }

    /// Configuration the registry was created with.
    pub fn config(&self) -> &UridMapConfig {
        &self.config
    }

    /// Return the URID for `uri`, issuing a new one if it was never seen.
    ///
    /// The registry copies `uri`; the caller's storage only needs to live
    /// for the duration of the call. Calling this twice with equal strings
    /// returns equal URIDs, including when the calls race on different
    /// threads.
    ///
    /// # Errors
    ///
    /// Returns [`UridMapError::Exhausted`] once the configured maximum
    /// number of entries has been issued.
    pub fn resolve_or_create(&self, uri: &CStr) -> Result<Urid> {
        if let Some(&urid) = self.tables.read().forward.get(uri) {
            return Ok(urid);
        }

        let urid = {
            let mut tables = self.tables.write();
            if let Some(&urid) = tables.forward.get(uri) {
                return Ok(urid);
            }
            tables.insert(uri, self.config.max_entries)
        };

        match urid {
            Ok(urid) => {
                if self.config.log_new_urids {
                    debug!(
                        registry = %self.id,
                        urid = urid.get(),
                        uri = %uri.to_string_lossy(),
                        "Mapped new URI"
                    );
                }
                Ok(urid)
            }
            Err(err) => {
                error!(
                    registry = %self.id,
                    uri = %uri.to_string_lossy(),
                    error = %err,
                    "Cannot map URI"
                );
                Err(err)
            }
        }
    }

    /// [`resolve_or_create`](Self::resolve_or_create) for Rust strings.
    ///
    /// # Errors
    ///
    /// Returns [`UridMapError::InvalidUri`] if `uri` contains a NUL byte,
    /// or any error of `resolve_or_create`.
    pub fn resolve_or_create_str(&self, uri: &str) -> Result<Urid> {
        let uri = CString::new(uri).map_err(|e| UridMapError::InvalidUri {
            reason: format!("interior NUL byte at position {}", e.nul_position()),
        })?;
        self.resolve_or_create(&uri)
    }

    /// Return the URID for `uri` without issuing a new one.
    pub fn get(&self, uri: &CStr) -> Option<Urid> {
        self.tables.read().forward.get(uri).copied()
    }

    /// Return the URI for `urid`, or `None` if it was never issued.
    ///
    /// The returned handle shares the registry's permanent copy.
    pub fn lookup_string(&self, urid: u32) -> Option<Arc<CStr>> {
        self.tables.read().get(urid).cloned()
    }

    /// [`lookup_string`](Self::lookup_string) as an owned Rust string.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD.
    pub fn lookup_str(&self, urid: u32) -> Option<String> {
        self.tables
            .read()
            .get(urid)
            .map(|uri| uri.to_string_lossy().into_owned())
    }

    /// Pointer to the registry's copy of the URI for `urid`, or null.
    ///
    /// Valid for as long as the registry lives, since entries are never
    /// removed. Used by the `unmap` callback to avoid touching reference
    /// counts on the audio thread.
    pub(crate) fn lookup_ptr(&self, urid: u32) -> *const c_char {
        self.tables
            .read()
            .get(urid)
            .map_or(std::ptr::null(), |uri| uri.as_ptr())
    }

    /// Number of URIs interned so far.
    pub fn len(&self) -> usize {
        self.tables.read().reverse.len()
    }

    /// Whether no URI has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every `(urid, uri)` pair in issue order.
    pub fn entries(&self) -> Vec<(Urid, Arc<CStr>)> {
        self.tables
            .read()
            .reverse
            .iter()
            .zip(1..)
            .filter_map(|(uri, raw)| Urid::new(raw).map(|urid| (urid, Arc::clone(uri))))
            .collect()
    }

    /// Resolve the cached URID set for this registry, once.
    ///
    /// # Errors
    ///
    /// Returns [`UridMapError::AlreadyPopulated`] if the set was already
    /// resolved, or any error of [`resolve_or_create`](Self::resolve_or_create).
    pub fn init_urids(&self, vocabulary: Vocabulary) -> Result<CachedUrids> {
        let already = UridMapError::AlreadyPopulated { registry: self.id };
        if self.urids.get().is_some() {
            return Err(already);
        }

        let urids = CachedUrids::populate(self, vocabulary)?;
        if self.urids.set(urids).is_err() {
            return Err(already);
        }
        Ok(urids)
    }

    /// [`init_urids`](Self::init_urids) with the configured vocabulary.
    ///
    /// # Errors
    ///
    /// As for `init_urids`.
    pub fn init_configured_urids(&self) -> Result<CachedUrids> {
        self.init_urids(self.config.vocabulary)
    }

    /// The cached URID set, if it has been resolved.
    pub fn urids(&self) -> Option<&CachedUrids> {
        self.urids.get()
    }

    /// Whether `urids` was resolved by this registry.
    pub fn owns(&self, urids: &CachedUrids) -> bool {
        urids.registry() == self.id
    }

    /// Check that `urids` was resolved by this registry.
    ///
    /// # Errors
    ///
    /// Returns [`UridMapError::ForeignRegistry`] if it was not.
    pub fn verify(&self, urids: &CachedUrids) -> Result<()> {
        if self.owns(urids) {
            Ok(())
        } else {
            Err(UridMapError::ForeignRegistry {
                expected: self.id,
                actual: urids.registry(),
            })
        }
    }

    /// The `map` capability record.
    pub fn urid_map(&self) -> &Lv2UridMap {
        self.records.map()
    }

    /// The `unmap` capability record.
    pub fn urid_unmap(&self) -> &Lv2UridUnmap {
        self.records.unmap()
    }

    /// The `urid#map` feature, with `data` pointing at [`urid_map`](Self::urid_map).
    pub fn map_feature(&self) -> &Lv2Feature {
        self.records.features().map
    }

    /// The `urid#unmap` feature, with `data` pointing at [`urid_unmap`](Self::urid_unmap).
    pub fn unmap_feature(&self) -> &Lv2Feature {
        self.records.features().unmap
    }

    /// Both features, for the plugin loader's feature array.
    pub fn features(&self) -> Features<'_> {
        self.records.features()
    }
}

impl fmt::Debug for UridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UridMap")
            .field("id", &self.id)
            .field("len", &self.len())
            .field("urids_populated", &self.urids.get().is_some())
            .finish_non_exhaustive()
    }
}
