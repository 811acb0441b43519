//! Tolerant line helpers for mod INI files and the key-swap record parser.
//!
//! Nothing in here fails: malformed lines are skipped or produce partial
//! values, and a section without recognized keys yields `None`.

use serde_json::json;

pub const FORWARD_INI_KEY: &str = "key_forward";
pub const BACKWARD_INI_KEY: &str = "key_backward";
pub const TYPE_INI_KEY: &str = "key_type";
pub const SWAP_VAR_INI_KEY: &str = "key_swapvar";

/// Key names recognized inside a key-swap section.
///
/// Matching is a case-insensitive prefix test on the trimmed line, so no name
/// may be a prefix of another one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNames {
    pub forward: String,
    pub backward: String,
    pub swap_type: String,
    pub swap_var: String,
}

impl Default for KeyNames {
    fn default() -> Self {
        Self {
            forward: FORWARD_INI_KEY.to_string(),
            backward: BACKWARD_INI_KEY.to_string(),
            swap_type: TYPE_INI_KEY.to_string(),
            swap_var: SWAP_VAR_INI_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySwapRecord {
    pub section_key: String,
    pub forward_hotkey: Option<String>,
    pub backward_hotkey: Option<String>,
    pub swap_type: Option<String>,
    pub swap_var: Option<Vec<String>>,
}

impl KeySwapRecord {
    pub fn any_values(&self) -> bool {
        self.forward_hotkey.is_some()
            || self.backward_hotkey.is_some()
            || self.swap_type.is_some()
            || self.swap_var.is_some()
    }

    /// Section header followed by one `key = value` line per present field.
    pub fn to_ini_lines(&self, keys: &KeyNames) -> Vec<String> {
        let header = if self.section_key.starts_with('[') {
            self.section_key.clone()
        } else {
            format!("[{}]", self.section_key)
        };
        let swap_var = self.swap_var.as_ref().map(|v| v.join(","));
        let mut out = vec![header];
        out.extend(
            [
                format_ini_key(&keys.forward, self.forward_hotkey.as_deref()),
                format_ini_key(&keys.backward, self.backward_hotkey.as_deref()),
                format_ini_key(&keys.swap_type, self.swap_type.as_deref()),
                format_ini_key(&keys.swap_var, swap_var.as_deref()),
            ]
            .into_iter()
            .flatten(),
        );
        out
    }
}

impl From<&KeySwapRecord> for serde_json::Value {
    fn from(r: &KeySwapRecord) -> Self {
        json!({
            "sectionKey": r.section_key,
            "forwardHotkey": r.forward_hotkey,
            "backwardHotkey": r.backward_hotkey,
            "type": r.swap_type,
            "swapVar": r.swap_var,
        })
    }
}

pub fn parse_key_swap<S: AsRef<str>>(lines: &[S], section_line: &str) -> Option<KeySwapRecord> {
    parse_key_swap_with(lines, section_line, &KeyNames::default())
}

/// Scan one section body into a record, stopping at the next section header.
pub fn parse_key_swap_with<S: AsRef<str>>(
    lines: &[S],
    section_line: &str,
    keys: &KeyNames,
) -> Option<KeySwapRecord> {
    let mut rec = KeySwapRecord {
        section_key: section_line.trim().to_string(),
        ..Default::default()
    };

    for line in lines {
        let line: &str = line.as_ref();
        if is_comment(line) {
            continue;
        }
        if is_ini_key(line, &keys.forward) {
            rec.forward_hotkey = get_ini_value(line);
        } else if is_ini_key(line, &keys.backward) {
            rec.backward_hotkey = get_ini_value(line);
        } else if is_ini_key(line, &keys.swap_type) {
            rec.swap_type = get_ini_value(line);
        } else if is_ini_key(line, &keys.swap_var) {
            rec.swap_var =
                get_ini_value(line).map(|v| v.split(',').map(str::to_string).collect());
        } else if is_section(line, None) {
            break;
        }
    }

    rec.any_values().then_some(rec)
}

/// Every meaningful key-swap record of a whole document, in order.
pub fn parse_key_swaps<S: AsRef<str>>(lines: &[S]) -> Vec<KeySwapRecord> {
    parse_key_swaps_with(lines, &KeyNames::default())
}

pub fn parse_key_swaps_with<S: AsRef<str>>(lines: &[S], keys: &KeyNames) -> Vec<KeySwapRecord> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, l)| is_section(l.as_ref(), None))
        .filter_map(|(i, header)| parse_key_swap_with(&lines[i + 1..], header.as_ref(), keys))
        .collect()
}

/// Index of the header line of the named section.
pub fn find_section<S: AsRef<str>>(lines: &[S], section_key: &str) -> Option<usize> {
    lines
        .iter()
        .position(|l| is_section(l.as_ref(), Some(section_key)))
}

/// Value after the first `=`. Further `=` are dropped and the pieces glued
/// together, so `a=b=c` gives `bc`. Lines without `=` have no value.
pub fn get_ini_value(line: &str) -> Option<String> {
    if is_comment(line) {
        return None;
    }
    let parts: Vec<&str> = line.split('=').collect();
    match parts.len() {
        0 | 1 => None,
        2 => Some(parts[1].trim().to_string()),
        _ => Some(parts[1..].concat().trim().to_string()),
    }
}

pub fn get_ini_key(line: &str) -> Option<String> {
    if is_comment(line) {
        return None;
    }
    line.split('=').next().map(|k| k.trim().to_string())
}

pub fn is_comment(line: &str) -> bool {
    line.trim().starts_with(';')
}

/// A section line both starts with `[` and ends with `]`. With a key it must
/// also be `[key]` or `key`, ignoring case.
pub fn is_section(line: &str, section_key: Option<&str>) -> bool {
    let line = line.trim();
    if !(line.starts_with('[') && line.ends_with(']')) {
        return false;
    }
    match section_key {
        None => true,
        Some(key) => {
            line.eq_ignore_ascii_case(&format!("[{}]", key)) || line.eq_ignore_ascii_case(key)
        }
    }
}

pub fn is_ini_key(line: &str, key: &str) -> bool {
    let line = line.trim();
    line.get(..key.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(key))
}

pub fn format_ini_key(key: &str, value: Option<&str>) -> Option<String> {
    value.map(|v| format!("{} = {}", key, v))
}
