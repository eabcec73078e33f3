//! Locale bundle checks, read straight from the embedded `.ftl` sources.
//!
//! - every locale defines every key of the `en-US` fallback, exactly once
//! - no locale carries a translation of the visible navbar labels, which are
//!   fixed in `ui::config`
//!
//! New locale: add `ui/i18n/<locale>/folio-ui.ftl` and register it in `LOCALES`.

use std::collections::{BTreeMap, BTreeSet};

use ui::config::{BRAND_NAME, NAV_ITEMS};

const EN_US: &str = include_str!("../i18n/en-US/folio-ui.ftl");

const LOCALES: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/folio-ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/folio-ui.ftl")),
];

/// Single-line messages only (`key = value`); comments, attributes and
/// continuation lines are skipped. Duplicate ids are reported, not merged.
fn parse_messages(src: &str) -> (BTreeMap<String, String>, Vec<String>) {
    let mut messages = BTreeMap::new();
    let mut duplicates = Vec::new();

    for line in src.lines() {
        if line.starts_with([' ', '\t', '#', '.']) {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            continue;
        }
        if messages
            .insert(key.to_string(), value.trim().to_string())
            .is_some()
        {
            duplicates.push(key.to_string());
        }
    }

    (messages, duplicates)
}

#[test]
fn fallback_has_unique_keys() {
    let (messages, duplicates) = parse_messages(EN_US);
    assert!(!messages.is_empty(), "en-US bundle contains no messages");
    assert!(duplicates.is_empty(), "en-US duplicates: {duplicates:?}");
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let (fallback, _) = parse_messages(EN_US);
    let fallback_keys: BTreeSet<_> = fallback.keys().cloned().collect();

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let (messages, duplicates) = parse_messages(src);
        if !duplicates.is_empty() {
            failures.push(format!("{locale} duplicates: {}", duplicates.join(", ")));
        }
        let keys: BTreeSet<_> = messages.keys().cloned().collect();
        let missing: Vec<_> = fallback_keys.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing: {}", missing.join(", ")));
        }
        let empty: Vec<_> = messages
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(key, _)| key.clone())
            .collect();
        if !empty.is_empty() {
            failures.push(format!("{locale} has empty values: {}", empty.join(", ")));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n  {}\nHint: copy the missing keys from en-US, then translate.",
        failures.join("\n  ")
    );
}

#[test]
fn visible_labels_are_not_translated() {
    let mut sources = vec![("en-US", EN_US)];
    sources.extend_from_slice(LOCALES);

    for (locale, src) in sources {
        let (messages, _) = parse_messages(src);
        for value in messages.values() {
            for item in NAV_ITEMS {
                assert_ne!(value, item.label, "{locale} translates `{}`", item.label);
            }
            for label in [BRAND_NAME, "Light Mode", "Dark Mode"] {
                assert_ne!(value, label, "{locale} translates `{label}`");
            }
        }
        assert!(
            messages.keys().all(|key| !key.starts_with("nav-")),
            "{locale} carries nav label keys"
        );
    }
}

#[test]
fn fallback_control_strings() {
    let (fallback, _) = parse_messages(EN_US);
    let expect = [
        ("brand-home-label", "Back to top"),
        ("theme-toggle-label", "Toggle theme"),
        ("menu-toggle-label", "Toggle menu"),
    ];
    for (key, value) in expect {
        assert_eq!(fallback.get(key).map(String::as_str), Some(value), "{key}");
    }
}
