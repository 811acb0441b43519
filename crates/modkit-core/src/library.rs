use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace, warn};
use serde_json::json;
use walkdir::WalkDir;

use crate::error::{ModError, Result};
use crate::folder::{
    apply_disabled_marker, has_disabled_marker, names_equal_ignoring_state, strip_disabled_marker,
};
use crate::ini::{KeyNames, KeySwapRecord, parse_key_swaps_with};

#[derive(Debug, Clone)]
pub struct ScanOpts {
    pub max_depth: usize,
    pub skip_disabled_files: bool,
    pub extension: String,
    pub keys: KeyNames,
}

impl Default for ScanOpts {
    fn default() -> Self {
        Self {
            max_depth: 8,
            skip_disabled_files: true,
            extension: "ini".to_string(),
            keys: KeyNames::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModFolder {
    pub name: String,
    pub path: PathBuf,
    pub enabled: bool,
}

impl ModFolder {
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().into_owned();
        Some(Self {
            enabled: !has_disabled_marker(&name, false),
            path: path.to_path_buf(),
            name,
        })
    }

    /// Folder name with any disabled marker removed.
    pub fn display_name(&self) -> String {
        strip_disabled_marker(&self.name)
    }
}

impl From<&ModFolder> for serde_json::Value {
    fn from(m: &ModFolder) -> Self {
        json!({
            "name": m.display_name(),
            "folder": m.name,
            "path": m.path.to_string_lossy(),
            "enabled": m.enabled,
        })
    }
}

fn ensure_dir(p: &Path) -> Result<()> {
    if !p.exists() {
        return Err(ModError::NotFound(p.to_path_buf()));
    }
    if !p.is_dir() {
        return Err(ModError::NotADirectory(p.to_path_buf()));
    }
    Ok(())
}

/// Immediate subdirectories of `root`, sorted by display name.
pub fn list_mod_folders(root: &Path) -> Result<Vec<ModFolder>> {
    ensure_dir(root)?;
    let mut out = Vec::new();
    for e in fs::read_dir(root)? {
        let p = e?.path();
        if !p.is_dir() {
            continue;
        }
        if let Some(m) = ModFolder::from_path(&p) {
            trace!("mod folder {} (enabled={})", m.name, m.enabled);
            out.push(m);
        }
    }
    out.sort_by_key(|m| (m.display_name().to_ascii_lowercase(), m.name.clone()));
    debug!("found {} mod folder(s) in {}", out.len(), root.display());
    Ok(out)
}

/// Mod folder under `root` whose name matches `name`, whatever its state.
pub fn find_mod_folder(root: &Path, name: &str) -> Result<Option<ModFolder>> {
    Ok(list_mod_folders(root)?
        .into_iter()
        .find(|m| names_equal_ignoring_state(&m.name, name, true)))
}

/// Mod folder at `path`, which must be an existing directory.
pub fn folder_status(path: &Path) -> Result<ModFolder> {
    ensure_dir(path)?;
    ModFolder::from_path(path).ok_or_else(|| ModError::NotFound(path.to_path_buf()))
}

/// Path the folder takes once enabled or disabled. No rename is performed.
/// A name that is nothing but a marker keeps its path.
pub fn toggled_path(path: &Path, enable: bool) -> PathBuf {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
        return path.to_path_buf();
    };
    let next = if enable {
        strip_disabled_marker(&name)
    } else {
        apply_disabled_marker(&name)
    };
    if next.is_empty() {
        return path.to_path_buf();
    }
    path.with_file_name(next)
}

/// Validated rename target for enabling or disabling `path`. Returns `path`
/// itself when the folder is already in the requested state.
pub fn plan_toggle(path: &Path, enable: bool) -> Result<PathBuf> {
    ensure_dir(path)?;
    let bare_marker = path
        .file_name()
        .is_some_and(|n| strip_disabled_marker(&n.to_string_lossy()).is_empty());
    if enable && bare_marker {
        return Err(ModError::EmptyName(path.to_path_buf()));
    }
    let target = toggled_path(path, enable);
    if target != path && target.exists() {
        return Err(ModError::AlreadyExists(target));
    }
    Ok(target)
}

/// Config files below `mod_dir` matching the configured extension.
pub fn ini_files(mod_dir: &Path, opts: &ScanOpts) -> Result<Vec<PathBuf>> {
    ensure_dir(mod_dir)?;
    let mut out = Vec::new();
    for entry in WalkDir::new(mod_dir).max_depth(opts.max_depth) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let ext_ok = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&opts.extension));
        if !ext_ok {
            continue;
        }
        if opts.skip_disabled_files && has_disabled_marker(&path.to_string_lossy(), true) {
            trace!("skipping disabled config {}", path.display());
            continue;
        }
        out.push(path.to_path_buf());
    }
    out.sort();
    Ok(out)
}

pub fn read_key_swaps(file: &Path) -> Result<Vec<KeySwapRecord>> {
    read_key_swaps_with(file, &KeyNames::default())
}

pub fn read_key_swaps_with(file: &Path, keys: &KeyNames) -> Result<Vec<KeySwapRecord>> {
    let data = fs::read(file)?;
    let text = String::from_utf8_lossy(&data);
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    let lines: Vec<&str> = text.lines().collect();
    Ok(parse_key_swaps_with(&lines, keys))
}

/// Key-swap records per config file of a mod. Files without records are left
/// out; unreadable files are logged and skipped.
pub fn mod_key_swaps(mod_dir: &Path, opts: &ScanOpts) -> Result<Vec<(PathBuf, Vec<KeySwapRecord>)>> {
    let mut out = Vec::new();
    for file in ini_files(mod_dir, opts)? {
        match read_key_swaps_with(&file, &opts.keys) {
            Ok(records) if records.is_empty() => {}
            Ok(records) => {
                debug!("{} key swap(s) in {}", records.len(), file.display());
                out.push((file, records));
            }
            Err(e) => warn!("skipping {}: {}", file.display(), e),
        }
    }
    Ok(out)
}
