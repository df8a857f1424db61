//! Cached URIDs for real-time code.
//!
//! Real-time code recognizes atoms and events by comparing URIDs, so the
//! URIDs of a fixed vocabulary are resolved once at startup and then read
//! without any locking. The vocabulary is closed: adding a member means
//! adding a field here.
//!
//! # Usage
//!
//! ```
//! use urimap::{UridMap, Vocabulary};
//!
//! let map = UridMap::new();
//! let urids = map.init_urids(Vocabulary::AUTOMATION)?;
//!
//! // Hot path: plain integer comparison.
//! let event_type = map.resolve_or_create(c"http://lv2plug.in/ns/ext/midi#MidiEvent")?;
//! assert_eq!(event_type, urids.core.midi_midi_event);
//! assert!(urids.automation.is_some());
//! assert!(urids.surround.is_none());
//! # Ok::<(), urimap::UridMapError>(())
//! ```

use std::ffi::CStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use tracing::info;
use urimap_abi::uris::{atom, automate, log, midi, patch, state, surround, time};

use crate::error::Result;
use crate::registry::UridMap;
use crate::urid::{RegistryId, Urid};

bitflags! {
    /// Optional vocabulary groups.
    ///
    /// The core group is always resolved. These flags select the host
    /// extension groups that only some plugins understand.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Vocabulary: u32 {
        /// `http://ardour.org/lv2/automate#` terms
        const AUTOMATION = 0b0000_0001;

        /// `http://ardour.org/lv2/surround#` terms
        const SURROUND   = 0b0000_0010;

        /// Every optional group
        const EXTENDED   = Self::AUTOMATION.bits() | Self::SURROUND.bits();
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::empty()
    }
}

/// Declares a group of cached URIDs: the struct, its URI table and the
/// resolver.
macro_rules! urid_group {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($field:ident => $uri:expr,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            $(
                #[doc = concat!("URID of `", stringify!($uri), "`")]
                pub $field: Urid,
            )*
        }

        impl $name {
            /// Every member URI, in field order.
            pub const URIS: &'static [&'static CStr] = &[$($uri,)*];

            fn resolve(registry: &UridMap) -> Result<Self> {
                Ok(Self {
                    $($field: registry.resolve_or_create($uri)?,)*
                })
            }

            /// `(uri, urid)` pairs in field order.
            pub fn entries(&self) -> Vec<(&'static CStr, Urid)> {
                vec![$(($uri, self.$field),)*]
            }
        }
    };
}

urid_group! {
    /// URIDs of the always-present vocabulary.
    pub struct CoreUrids {
        atom_chunk => atom::CHUNK,
        atom_path => atom::PATH,
        atom_sequence => atom::SEQUENCE,
        atom_event_transfer => atom::EVENT_TRANSFER,
        atom_urid => atom::URID,
        atom_blank => atom::BLANK,
        atom_object => atom::OBJECT,
        atom_double => atom::DOUBLE,
        atom_float => atom::FLOAT,
        atom_long => atom::LONG,
        atom_int => atom::INT,
        log_error => log::ERROR,
        log_note => log::NOTE,
        log_trace => log::TRACE,
        log_warning => log::WARNING,
        midi_midi_event => midi::MIDI_EVENT,
        time_position => time::POSITION,
        time_bar => time::BAR,
        time_bar_beat => time::BAR_BEAT,
        time_beat_unit => time::BEAT_UNIT,
        time_beats_per_bar => time::BEATS_PER_BAR,
        time_beats_per_minute => time::BEATS_PER_MINUTE,
        time_frame => time::FRAME,
        time_speed => time::SPEED,
        time_scale => time::SCALE,
        patch_get => patch::GET,
        patch_set => patch::SET,
        patch_property => patch::PROPERTY,
        patch_value => patch::VALUE,
        state_state_changed => state::STATE_CHANGED,
    }
}

urid_group! {
    /// URIDs of the automation group ([`Vocabulary::AUTOMATION`]).
    pub struct AutomationUrids {
        event => automate::EVENT,
        setup => automate::SETUP,
        finalize => automate::FINALIZE,
        start => automate::START,
        end => automate::END,
        parameter => automate::PARAMETER,
        value => automate::VALUE,
    }
}

urid_group! {
    /// URIDs of the surround group ([`Vocabulary::SURROUND`]).
    pub struct SurroundUrids {
        meta_data => surround::META_DATA,
        channel => surround::CHANNEL,
        pos_x => surround::POS_X,
        pos_y => surround::POS_Y,
        pos_z => surround::POS_Z,
        size => surround::SIZE,
        snap => surround::SNAP,
        settings => surround::SETTINGS,
        binaural_render_mode => surround::BINAURAL_RENDER_MODE,
        channel_count => surround::CHANNEL_COUNT,
        downmix_mode => surround::DOWNMIX_MODE,
        warp_mode => surround::WARP_MODE,
        export_start => surround::EXPORT_START,
        export_stop => surround::EXPORT_STOP,
    }
}

/// URIDs of the host's well-known vocabulary, resolved once.
///
/// Plain `Copy` data: after population it can be read from any thread,
/// including the audio thread, without synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachedUrids {
    registry: RegistryId,
    vocabulary: Vocabulary,
    /// Always-present vocabulary
    pub core: CoreUrids,
    /// Present when populated with [`Vocabulary::AUTOMATION`]
    pub automation: Option<AutomationUrids>,
    /// Present when populated with [`Vocabulary::SURROUND`]
    pub surround: Option<SurroundUrids>,
}

impl CachedUrids {
    /// Resolve every member of the core group and of the selected optional
    /// groups against `registry`.
    ///
    /// Call once, before any real-time code reads the result. Prefer
    /// [`UridMap::init_urids`], which also enforces the once.
    ///
    /// # Errors
    ///
    /// Returns any error of [`UridMap::resolve_or_create`].
    pub fn populate(registry: &UridMap, vocabulary: Vocabulary) -> Result<Self> {
        let core = CoreUrids::resolve(registry)?;
        let automation = if vocabulary.contains(Vocabulary::AUTOMATION) {
            Some(AutomationUrids::resolve(registry)?)
        } else {
            None
        };
        let surround = if vocabulary.contains(Vocabulary::SURROUND) {
            Some(SurroundUrids::resolve(registry)?)
        } else {
            None
        };

        let urids = Self {
            registry: registry.id(),
            vocabulary,
            core,
            automation,
            surround,
        };
        info!(
            registry = %registry.id(),
            vocabulary = ?vocabulary,
            count = urids.len(),
            "Cached URIDs populated"
        );
        Ok(urids)
    }

    /// Registry that resolved these URIDs.
    pub fn registry(&self) -> RegistryId {
        self.registry
    }

    /// Optional groups this set was populated with.
    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary
    }

    /// `(uri, urid)` pairs for every populated member.
    pub fn entries(&self) -> Vec<(&'static CStr, Urid)> {
        let mut entries = self.core.entries();
        if let Some(automation) = &self.automation {
            entries.extend(automation.entries());
        }
        if let Some(surround) = &self.surround {
            entries.extend(surround.entries());
        }
        entries
    }

    /// Number of populated members.
    pub fn len(&self) -> usize {
        CoreUrids::URIS.len()
            + self.automation.map_or(0, |_| AutomationUrids::URIS.len())
            + self.surround.map_or(0, |_| SurroundUrids::URIS.len())
    }

    /// Always false: the core group is never empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_group_sizes() {
        assert_eq!(CoreUrids::URIS.len(), 30);
        assert_eq!(AutomationUrids::URIS.len(), 7);
        assert_eq!(SurroundUrids::URIS.len(), 14);
    }

    #[test]
    fn test_core_only() -> TestResult {
        let map = UridMap::new();
        let urids = CachedUrids::populate(&map, Vocabulary::empty())?;

        assert!(urids.automation.is_none());
        assert!(urids.surround.is_none());
        assert_eq!(urids.len(), 30);
        assert_eq!(map.len(), 30);
        Ok(())
    }

    #[test]
    fn test_first_core_member_gets_first_urid() -> TestResult {
        let map = UridMap::new();
        let urids = CachedUrids::populate(&map, Vocabulary::empty())?;
        assert_eq!(urids.core.atom_chunk.get(), 1);
        assert_eq!(urids.core.state_state_changed.get(), 30);
        Ok(())
    }

    #[test]
    fn test_extended_populates_everything() -> TestResult {
        let map = UridMap::new();
        let urids = CachedUrids::populate(&map, Vocabulary::EXTENDED)?;

        assert!(urids.automation.is_some());
        assert!(urids.surround.is_some());
        assert_eq!(urids.len(), 51);
        assert_eq!(urids.entries().len(), 51);
        assert_eq!(map.len(), 51);
        Ok(())
    }

    #[test]
    fn test_vocabulary_flags() {
        assert_eq!(Vocabulary::EXTENDED, Vocabulary::AUTOMATION | Vocabulary::SURROUND);
        assert_eq!(Vocabulary::default(), Vocabulary::empty());
    }
}
