use std::fs;
use std::path::Path;

use modkit_core::ModError;
use modkit_core::library::{
    ScanOpts, find_mod_folder, folder_status, ini_files, list_mod_folders, mod_key_swaps, plan_toggle,
    read_key_swaps, toggled_path,
};

const MERGED_INI: &str = "\
; Merged Mod
[Constants]
global persist $swapvar = 0

[KeySwap]
condition = $active == 1
key_forward = VK_RIGHT
key_backward = VK_LEFT
key_type = cycle
key_swapvar = 0,1,2

[TextureOverrideBody]
hash = 0a1b2c3d
";

fn mods_tree(root: &Path) {
    for d in ["Keqing", "DISABLED_Ayaka", "DISABLEDNahida", "Zhongli/textures"] {
        fs::create_dir_all(root.join(d)).unwrap();
    }
    fs::write(root.join("readme.txt"), "not a mod").unwrap();
    fs::write(root.join("Keqing/merged.ini"), MERGED_INI).unwrap();
    fs::write(root.join("Keqing/DISABLED_old.ini"), MERGED_INI).unwrap();
    fs::write(root.join("Keqing/notes.txt"), "key_forward = X").unwrap();
}

#[test]
fn list_mod_folders_reports_state() {
    let dir = tempfile::tempdir().unwrap();
    mods_tree(dir.path());
    let mods = list_mod_folders(dir.path()).unwrap();
    let names: Vec<String> = mods.iter().map(|m| m.display_name()).collect();
    assert_eq!(names, ["Ayaka", "Keqing", "Nahida", "Zhongli"]);
    let enabled: Vec<bool> = mods.iter().map(|m| m.enabled).collect();
    assert_eq!(enabled, [false, true, false, true]);
    let js = serde_json::Value::from(&mods[0]);
    assert_eq!(js["name"], serde_json::json!("Ayaka"));
    assert_eq!(js["folder"], serde_json::json!("DISABLED_Ayaka"));
}

#[test]
fn list_mod_folders_rejects_missing_root() {
    let dir = tempfile::tempdir().unwrap();
    let err = list_mod_folders(&dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, ModError::NotFound(_)));
    fs::write(dir.path().join("file"), "x").unwrap();
    let err = list_mod_folders(&dir.path().join("file")).unwrap_err();
    assert!(matches!(err, ModError::NotADirectory(_)));
}

#[test]
fn find_mod_folder_ignores_state() {
    let dir = tempfile::tempdir().unwrap();
    mods_tree(dir.path());
    let m = find_mod_folder(dir.path(), "ayaka").unwrap().expect("found");
    assert_eq!(m.name, "DISABLED_Ayaka");
    let m = find_mod_folder(dir.path(), "DISABLED_Keqing").unwrap().expect("found");
    assert!(m.enabled);
    assert!(find_mod_folder(dir.path(), "Xiao").unwrap().is_none());
}

#[test]
fn toggled_paths() {
    let p = Path::new("mods/Keqing");
    assert_eq!(toggled_path(p, false), Path::new("mods/DISABLED_Keqing"));
    assert_eq!(toggled_path(p, true), p);
    let d = Path::new("mods/DISABLEDNahida");
    assert_eq!(toggled_path(d, true), Path::new("mods/Nahida"));
    assert_eq!(toggled_path(d, false), Path::new("mods/DISABLED_Nahida"));
}

#[test]
fn plan_toggle_refuses_existing_target() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("Keqing")).unwrap();
    fs::create_dir_all(dir.path().join("DISABLED_Keqing")).unwrap();
    let err = plan_toggle(&dir.path().join("Keqing"), false).unwrap_err();
    assert!(matches!(err, ModError::AlreadyExists(_)));
    let same = plan_toggle(&dir.path().join("Keqing"), true).unwrap();
    assert_eq!(same, dir.path().join("Keqing"));
    assert!(matches!(
        plan_toggle(&dir.path().join("Xiao"), true),
        Err(ModError::NotFound(_))
    ));
}

#[test]
fn ini_files_skip_disabled_and_other_extensions() {
    let dir = tempfile::tempdir().unwrap();
    mods_tree(dir.path());
    let keqing = dir.path().join("Keqing");
    let files = ini_files(&keqing, &ScanOpts::default()).unwrap();
    assert_eq!(files, [keqing.join("merged.ini")]);
    let opts = ScanOpts {
        skip_disabled_files: false,
        ..Default::default()
    };
    assert_eq!(ini_files(&keqing, &opts).unwrap().len(), 2);
}

#[test]
fn read_key_swaps_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("merged.ini");
    fs::write(&p, format!("\u{feff}{}", MERGED_INI.replace('\n', "\r\n"))).unwrap();
    let recs = read_key_swaps(&p).unwrap();
    assert_eq!(recs.len(), 1);
    let r = &recs[0];
    assert_eq!(r.section_key, "[KeySwap]");
    assert_eq!(r.forward_hotkey.as_deref(), Some("VK_RIGHT"));
    assert_eq!(r.backward_hotkey.as_deref(), Some("VK_LEFT"));
    assert_eq!(r.swap_type.as_deref(), Some("cycle"));
    assert_eq!(
        r.swap_var.as_deref(),
        Some(&["0".to_string(), "1".to_string(), "2".to_string()][..])
    );
}

#[test]
fn mod_key_swaps_collects_per_file() {
    let dir = tempfile::tempdir().unwrap();
    mods_tree(dir.path());
    let found = mod_key_swaps(&dir.path().join("Keqing"), &ScanOpts::default()).unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].0.ends_with("merged.ini"));
    assert_eq!(found[0].1.len(), 1);
    let none = mod_key_swaps(&dir.path().join("Zhongli"), &ScanOpts::default()).unwrap();
    assert!(none.is_empty());
}

#[test]
fn folder_status_requires_existing_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("DISABLED_Foo")).unwrap();
    let m = folder_status(&dir.path().join("DISABLED_Foo")).unwrap();
    assert_eq!(m.display_name(), "Foo");
    assert!(!m.enabled);
    let err = folder_status(&dir.path().join("DISABLED_Missing")).unwrap_err();
    assert!(matches!(err, ModError::NotFound(_)));
    fs::write(dir.path().join("DISABLED_file"), "x").unwrap();
    let err = folder_status(&dir.path().join("DISABLED_file")).unwrap_err();
    assert!(matches!(err, ModError::NotADirectory(_)));
}

#[test]
fn bare_marker_folder_is_not_renamed_to_parent() {
    let dir = tempfile::tempdir().unwrap();
    for d in ["DISABLED_", "DISABLED"] {
        let p = dir.path().join(d);
        fs::create_dir_all(&p).unwrap();
        assert_eq!(toggled_path(&p, true), p);
        assert!(matches!(plan_toggle(&p, true), Err(ModError::EmptyName(_))));
    }
    let p = dir.path().join("DISABLED");
    assert!(matches!(plan_toggle(&p, false), Err(ModError::AlreadyExists(_))));
    let p = dir.path().join("DISABLED_");
    assert_eq!(plan_toggle(&p, false).unwrap(), p);
}

#[test]
fn list_orders_same_display_name_by_folder() {
    let dir = tempfile::tempdir().unwrap();
    for d in ["Foo", "DISABLED_Foo", "DISABLEDfoo"] {
        fs::create_dir_all(dir.path().join(d)).unwrap();
    }
    let mods = list_mod_folders(dir.path()).unwrap();
    let folders: Vec<&str> = mods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(folders, ["DISABLED_Foo", "DISABLEDfoo", "Foo"]);
    let m = find_mod_folder(dir.path(), "foo").unwrap().unwrap();
    assert_eq!(m.name, "DISABLED_Foo");
}
