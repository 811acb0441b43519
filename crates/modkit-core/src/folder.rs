//! Enabled/disabled state encoded in a mod folder's name.
//!
//! A disabled mod keeps its folder but carries a reserved prefix. Two
//! spellings exist on disk: the canonical `DISABLED_` and the older
//! `DISABLED` without the separator. Everything here is pure string work and
//! compares ASCII case-insensitively.

use std::borrow::Cow;
use std::path::Path;

pub const DISABLED_PREFIX: &str = "DISABLED_";
pub const ALT_DISABLED_PREFIX: &str = "DISABLED";

/// Marker spelling found at the start of a folder name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledMarker {
    Canonical,
    Legacy,
}

impl DisabledMarker {
    pub fn prefix(self) -> &'static str {
        match self {
            DisabledMarker::Canonical => DISABLED_PREFIX,
            DisabledMarker::Legacy => ALT_DISABLED_PREFIX,
        }
    }

    /// Canonical wins over legacy since the legacy spelling is its prefix.
    pub fn detect(name: &str) -> Option<Self> {
        [DisabledMarker::Canonical, DisabledMarker::Legacy]
            .into_iter()
            .find(|m| starts_with_ignore_case(name, m.prefix()))
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Final path segment, or the input itself when it has none (`/`, `..`, empty).
fn last_segment(name: &str) -> Cow<'_, str> {
    match Path::new(name).file_name() {
        Some(seg) => seg.to_string_lossy(),
        None => Cow::Borrowed(name),
    }
}

/// Folder name without its leading disabled marker. Only the leading
/// occurrence is removed; the marker text elsewhere in the name is kept.
pub fn strip_disabled_marker(name: &str) -> String {
    match DisabledMarker::detect(name) {
        Some(m) => name[m.prefix().len()..].to_string(),
        None => name.to_string(),
    }
}

/// Folder name with the canonical disabled marker. A legacy lead is rewritten
/// to the canonical spelling; an already canonical name is returned as is.
pub fn apply_disabled_marker(name: &str) -> String {
    match DisabledMarker::detect(name) {
        Some(DisabledMarker::Canonical) => name.to_string(),
        Some(DisabledMarker::Legacy) => {
            format!("{}{}", DISABLED_PREFIX, &name[ALT_DISABLED_PREFIX.len()..])
        }
        None => format!("{}{}", DISABLED_PREFIX, name),
    }
}

pub fn names_equal_ignoring_state(a: &str, b: &str, treat_as_paths: bool) -> bool {
    let (a, b) = if treat_as_paths {
        (last_segment(a), last_segment(b))
    } else {
        (Cow::Borrowed(a), Cow::Borrowed(b))
    };
    strip_disabled_marker(&a).eq_ignore_ascii_case(&strip_disabled_marker(&b))
}

pub fn has_disabled_marker(name: &str, treat_as_path: bool) -> bool {
    let name = if treat_as_path {
        last_segment(name)
    } else {
        Cow::Borrowed(name)
    };
    DisabledMarker::detect(&name).is_some()
}
