use std::path::{Path, PathBuf};
use crate::builtin_sound::BuiltinSound;

#[test]
fn test_catalog_has_five_distinct_slots() {
    let mut names: Vec<&str> = BuiltinSound::ALL.iter().map(|builtin| builtin.name()).collect();
    names.sort();
    names.dedup();

    assert_eq!(names.len(), 5);
}

#[test]
fn test_builtin_path_in_assets_dir() {
    let path = BuiltinSound::MenuClick.path_in(Path::new("assets"));

    assert_eq!(path, PathBuf::from("assets/menu_click.wav"));
}

#[test]
fn test_builtin_from_str() {
    assert_eq!("fart".parse::<BuiltinSound>(), Ok(BuiltinSound::Fart));
    assert_eq!("Error-Beep".parse::<BuiltinSound>(), Ok(BuiltinSound::ErrorBeep));
    assert_eq!(" clown_horn ".parse::<BuiltinSound>(), Ok(BuiltinSound::ClownHorn));
    assert!("kazoo".parse::<BuiltinSound>().is_err());
}

#[test]
fn test_builtin_name_round_trips_through_from_str() {
    for builtin in BuiltinSound::ALL {
        assert_eq!(builtin.to_string().parse::<BuiltinSound>(), Ok(builtin));
    }
}
