//! Unit tests for the URID registry.
//!
//! These tests exercise the public API the way a host uses it: one shared
//! registry, URIs interned at plugin instantiation, URIDs translated back
//! for logging and serialization.

use std::ffi::CStr;

use urimap::prelude::*;
use urimap_abi::uris;

type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

mod interning {
    use super::*;

    #[test]
    fn test_basic_scenario() -> TestResult {
        let map = UridMap::new();

        let a = map.resolve_or_create(c"urn:a")?;
        let b = map.resolve_or_create(c"urn:b")?;
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
        assert_eq!(map.resolve_or_create(c"urn:a")?, a);

        assert_eq!(map.lookup_string(2).as_deref(), Some(c"urn:b"));
        assert!(map.lookup_string(99).is_none());
        Ok(())
    }

    #[test]
    fn test_empty_uri_is_a_valid_key() -> TestResult {
        let map = UridMap::new();
        let urid = map.resolve_or_create(c"")?;
        assert_eq!(map.lookup_string(urid.get()).as_deref(), Some(c""));
        Ok(())
    }

    #[test]
    fn test_str_and_cstr_agree() -> TestResult {
        let map = UridMap::new();
        let from_cstr = map.resolve_or_create(c"urn:same")?;
        let from_str = map.resolve_or_create_str("urn:same")?;
        assert_eq!(from_cstr, from_str);
        assert_eq!(map.len(), 1);
        Ok(())
    }

    #[test]
    fn test_interior_nul_is_rejected() {
        let map = UridMap::new();
        let result = map.resolve_or_create_str("urn:bad\0uri");
        assert_eq!(
            result,
            Err(UridMapError::InvalidUri {
                reason: "interior NUL byte at position 7".to_string(),
            })
        );
        assert!(map.is_empty());
    }

    #[test]
    fn test_non_utf8_uri_round_trips() -> TestResult {
        let map = UridMap::new();
        let raw = CStr::from_bytes_with_nul(b"urn:\xff\0")?;
        let urid = map.resolve_or_create(raw)?;

        assert_eq!(map.lookup_string(urid.get()).as_deref(), Some(raw));
        assert_eq!(map.lookup_str(urid.get()).as_deref(), Some("urn:\u{fffd}"));
        Ok(())
    }

    #[test]
    fn test_caller_storage_is_not_retained() -> TestResult {
        let map = UridMap::new();
        let urid = {
            let owned = std::ffi::CString::new("urn:temporary")?;
            map.resolve_or_create(&owned)?
        };
        assert_eq!(map.lookup_str(urid.get()).as_deref(), Some("urn:temporary"));
        Ok(())
    }
}

mod lookup {
    use super::*;

    #[test]
    fn test_sentinel_and_unknown_ids() -> TestResult {
        let map = UridMap::new();
        map.resolve_or_create(c"urn:only")?;

        assert!(map.lookup_string(URID_INVALID).is_none());
        assert!(map.lookup_string(2).is_none());
        assert!(map.lookup_string(u32::MAX).is_none());
        assert!(map.lookup_str(2).is_none());
        Ok(())
    }

    #[test]
    fn test_entries_are_in_issue_order() -> TestResult {
        let map = UridMap::new();
        for uri in ["urn:z", "urn:y", "urn:x"] {
            map.resolve_or_create_str(uri)?;
        }

        let entries: Vec<(u32, String)> = map
            .entries()
            .into_iter()
            .map(|(urid, uri)| (urid.get(), uri.to_string_lossy().into_owned()))
            .collect();

        assert_eq!(
            entries,
            vec![
                (1, "urn:z".to_string()),
                (2, "urn:y".to_string()),
                (3, "urn:x".to_string()),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_lookup_shares_registry_copy() -> TestResult {
        let map = UridMap::new();
        let urid = map.resolve_or_create(c"urn:shared")?;

        let first = map.lookup_string(urid.get()).ok_or("missing")?;
        let second = map.lookup_string(urid.get()).ok_or("missing")?;
        assert_eq!(first.as_ptr(), second.as_ptr());
        Ok(())
    }
}

mod registry_identity {
    use super::*;

    #[test]
    fn test_registries_are_independent() -> TestResult {
        let first = UridMap::new();
        let second = UridMap::new();
        assert_ne!(first.id(), second.id());

        first.resolve_or_create(c"urn:first-only")?;
        let b = second.resolve_or_create(c"urn:second-only")?;

        assert_eq!(b.get(), 1);
        assert!(first.get(c"urn:second-only").is_none());
        Ok(())
    }

    #[test]
    fn test_foreign_cached_urids_are_detected() -> TestResult {
        let host = UridMap::new();
        let other = UridMap::new();
        let urids = other.init_urids(Vocabulary::empty())?;

        assert!(!host.owns(&urids));
        assert_eq!(
            host.verify(&urids),
            Err(UridMapError::ForeignRegistry {
                expected: host.id(),
                actual: other.id(),
            })
        );
        assert_eq!(other.verify(&urids), Ok(()));
        Ok(())
    }
}

mod cached_urids {
    use super::*;

    #[test]
    fn test_accessor_is_empty_before_init() {
        let map = UridMap::new();
        assert!(map.urids().is_none());
    }

    #[test]
    fn test_init_is_once() -> TestResult {
        let map = UridMap::new();
        let urids = map.init_urids(Vocabulary::AUTOMATION)?;
        assert_eq!(map.urids(), Some(&urids));

        let again = map.init_urids(Vocabulary::EXTENDED);
        assert_eq!(
            again,
            Err(UridMapError::AlreadyPopulated { registry: map.id() })
        );
        assert_eq!(map.urids().map(CachedUrids::vocabulary), Some(Vocabulary::AUTOMATION));
        Ok(())
    }

    #[test]
    fn test_fields_match_registry() -> TestResult {
        let map = UridMap::new();
        let urids = map.init_urids(Vocabulary::EXTENDED)?;

        for (uri, urid) in urids.entries() {
            assert_eq!(map.resolve_or_create(uri)?, urid, "{uri:?}");
        }
        assert_eq!(map.len(), urids.len());
        Ok(())
    }

    #[test]
    fn test_named_fields() -> TestResult {
        let map = UridMap::new();
        let urids = map.init_urids(Vocabulary::EXTENDED)?;
        let surround = urids.surround.ok_or("surround not populated")?;
        let automation = urids.automation.ok_or("automation not populated")?;

        assert_eq!(map.get(uris::atom::SEQUENCE), Some(urids.core.atom_sequence));
        assert_eq!(map.get(uris::midi::MIDI_EVENT), Some(urids.core.midi_midi_event));
        assert_eq!(map.get(uris::automate::PARAMETER), Some(automation.parameter));
        assert_eq!(map.get(uris::surround::POS_Z), Some(surround.pos_z));
        Ok(())
    }

    #[test]
    fn test_populate_reuses_existing_urids() -> TestResult {
        let map = UridMap::new();
        let preexisting = map.resolve_or_create(uris::midi::MIDI_EVENT)?;
        let urids = CachedUrids::populate(&map, Vocabulary::empty())?;

        assert_eq!(urids.core.midi_midi_event, preexisting);
        assert_eq!(preexisting.get(), 1);
        Ok(())
    }

    #[test]
    fn test_reads_are_stable() -> TestResult {
        let map = UridMap::new();
        let urids = map.init_urids(Vocabulary::empty())?;
        map.resolve_or_create(c"urn:later")?;

        let cached = map.urids().ok_or("not populated")?;
        for _ in 0..1_000 {
            assert_eq!(cached.core.atom_float, urids.core.atom_float);
        }
        Ok(())
    }

    #[test]
    fn test_configured_vocabulary() -> TestResult {
        let map = UridMap::with_config(UridMapConfig::extended());
        let urids = map.init_configured_urids()?;
        assert_eq!(urids.vocabulary(), Vocabulary::EXTENDED);
        assert!(urids.surround.is_some());
        Ok(())
    }

    #[test]
    fn test_exhaustion_during_populate() {
        let map = UridMap::with_config(UridMapConfig::default().with_max_entries(4));
        let result = map.init_urids(Vocabulary::empty());

        assert_eq!(result, Err(UridMapError::Exhausted { limit: 4 }));
        assert!(map.urids().is_none());
        assert_eq!(map.len(), 4);
    }
}

mod config {
    use super::*;

    #[test]
    fn test_json_round_trip() -> TestResult {
        let config = UridMapConfig::default()
            .with_vocabulary(Vocabulary::AUTOMATION)
            .with_max_entries(1024);

        let json = serde_json::to_string(&config)?;
        let restored: UridMapConfig = serde_json::from_str(&json)?;
        assert_eq!(config, restored);
        Ok(())
    }

    #[test]
    fn test_missing_fields_take_defaults() -> TestResult {
        let config: UridMapConfig = serde_json::from_str(r#"{ "max_entries": 10 }"#)?;
        assert_eq!(config.max_entries, 10);
        assert_eq!(config.initial_capacity, UridMapConfig::default().initial_capacity);
        assert!(config.log_new_urids);
        assert!(config.vocabulary.is_empty());
        Ok(())
    }

    #[test]
    fn test_deserialized_oversized_capacity() -> TestResult {
        let config: UridMapConfig =
            serde_json::from_str(r#"{ "initial_capacity": 18446744073709551615 }"#)?;
        assert_eq!(config.initial_capacity, usize::MAX);

        let Ok(map) = std::panic::catch_unwind(|| UridMap::with_config(config)) else {
            return Err("constructor panicked on a deserialized config".into());
        };
        assert_eq!(map.resolve_or_create(c"urn:after-config")?.get(), 1);
        assert_eq!(map.config().initial_capacity, usize::MAX);
        Ok(())
    }

    #[test]
    fn test_registry_keeps_config() {
        let config = UridMapConfig::default().with_initial_capacity(4);
        let map = UridMap::with_config(config.clone());
        assert_eq!(map.config(), &config);
    }
}
