use std::path::PathBuf;
use clap::Parser;
use log::LevelFilter;
use soundhouse_core::builtin_sound::BuiltinSound;
use crate::{build_backend, log_level, Args, BackendKind, LogTime, DEFAULT_DURATION_MS};

#[test]
fn test_args_defaults() {
    let args = Args::try_parse_from(["soundhouse"]).unwrap();

    assert_eq!(args.debug, 0);
    assert_eq!(args.log_time, LogTime::Clock);
    assert_eq!(args.backend, BackendKind::default());
    assert_eq!(args.assets_dir, PathBuf::from("assets"));
    assert!(args.builtins.is_empty());
    assert!(args.files.is_empty());
    assert_eq!(args.duration_ms, DEFAULT_DURATION_MS);
}

#[test]
fn test_args_sounds_and_options() {
    let args = Args::try_parse_from([
        "soundhouse",
        "-b", "fart",
        "--builtin", "menu-click",
        "-f", "boing.wav",
        "-B", "passive",
        "--log-time", "off",
        "-t", "100",
        "-d", "2",
    ]).unwrap();

    assert_eq!(args.builtins, vec![BuiltinSound::Fart, BuiltinSound::MenuClick]);
    assert_eq!(args.files, vec![PathBuf::from("boing.wav")]);
    assert_eq!(args.backend, BackendKind::Passive);
    assert_eq!(args.log_time, LogTime::Off);
    assert_eq!(args.duration_ms, 100);
    assert_eq!(args.debug, 2);
}

#[test]
fn test_args_reject_unknown_builtin() {
    let result = Args::try_parse_from(["soundhouse", "-b", "kazoo"]);

    assert!(result.is_err());
}

#[test]
fn test_log_level_from_debug_flag() {
    assert_eq!(log_level(0), LevelFilter::Info);
    assert_eq!(log_level(1), LevelFilter::Debug);
    assert_eq!(log_level(2), LevelFilter::Trace);
    assert_eq!(log_level(9), LevelFilter::Trace);
}

#[test]
fn test_build_passive_backend() {
    let backend = build_backend(BackendKind::Passive).unwrap();

    assert_eq!(backend.name(), "SoundBackendPassive");
}

#[cfg(not(feature = "sdl2"))]
#[test]
fn test_build_sdl2_backend_without_feature_fails() {
    let result = build_backend(BackendKind::Sdl2);

    assert!(matches!(result, Err(crate::SoundhouseError::UnsupportedBackend(_))));
}
