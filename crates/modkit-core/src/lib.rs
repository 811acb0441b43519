//! modkit-core: folder-state codec, key-swap INI parsing, and mod library scans
//!
//! This crate keeps a small surface:
//! - `folder`: enabled/disabled state carried by a mod folder's name
//! - `ini`: tolerant INI line helpers and the key-swap record parser
//! - `library`: read-only scans of a mods directory built on the two above
//!
pub mod error;
pub mod folder;
pub mod ini;
pub mod library;

pub use error::{ModError, Result};
pub use folder::{
    ALT_DISABLED_PREFIX, DISABLED_PREFIX, DisabledMarker, apply_disabled_marker,
    has_disabled_marker, names_equal_ignoring_state, strip_disabled_marker,
};
pub use ini::{KeyNames, KeySwapRecord, parse_key_swap, parse_key_swap_with, parse_key_swaps};
pub use library::{ModFolder, ScanOpts};
