use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::thread::sleep;
use std::time::Duration;
use clap::{Parser, ValueEnum};
use log::{debug, error, info, LevelFilter};
use simplelog::{ConfigBuilder, SimpleLogger};
use soundhouse_core::builtin_sound::{BuiltinSound, DEFAULT_ASSETS_DIR};
use soundhouse_core::sound::Sound;
use soundhouse_core::sound_backend::{SoundBackend, SoundBackendError};
use soundhouse_core::sound_backend_passive::SoundBackendPassive;
#[cfg(feature = "sdl2")]
use soundhouse_core::sound_backend_sdl2::SoundBackendSDL2;
use soundhouse_core::sound_manager::{SoundManagerBuilder, SoundManagerError};

#[cfg(test)]
mod tests;

const DEFAULT_DURATION_MS: u64 = 500;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
enum BackendKind {
    Sdl2,
    Passive,
}

impl Default for BackendKind {
    #[cfg(feature = "sdl2")]
    fn default() -> Self {
        BackendKind::Sdl2
    }

    #[cfg(not(feature = "sdl2"))]
    fn default() -> Self {
        BackendKind::Passive
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Default)]
enum LogTime {
    #[default]
    Clock,
    Rfc3339,
    Rfc2822,
    Off,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(
        short = 'd',
        long = "debug",
        help = "debug mode",
        default_value_t = 0
    )]
    debug: u8,

    #[arg(
        long = "log-time",
        help = "timestamp style of log lines",
        value_enum,
        default_value_t = LogTime::default()
    )]
    log_time: LogTime,

    #[arg(
        short = 'B',
        long = "backend",
        help = "audio backend",
        value_enum,
        default_value_t = BackendKind::default()
    )]
    backend: BackendKind,

    #[arg(
        short = 'a',
        long = "assets-dir",
        help = "directory holding the builtin sounds",
        default_value = DEFAULT_ASSETS_DIR
    )]
    assets_dir: PathBuf,

    #[arg(
        short = 'b',
        long = "builtin",
        help = "builtin sound to play (fart, menu_click, menu_hover, error_beep, clown_horn)"
    )]
    builtins: Vec<BuiltinSound>,

    #[arg(
        short = 'f',
        long = "file",
        help = "wav file to load and play"
    )]
    files: Vec<PathBuf>,

    #[arg(
        short = 't',
        long = "duration-ms",
        help = "how long each sound plays before being stopped",
        default_value_t = DEFAULT_DURATION_MS
    )]
    duration_ms: u64,
}

#[derive(Debug)]
enum SoundhouseError {
    LoggerError(String),
    BackendError(SoundBackendError),
    ManagerError(SoundManagerError),
    #[cfg(not(feature = "sdl2"))]
    UnsupportedBackend(String),
}

impl From<SoundBackendError> for SoundhouseError {
    fn from(error: SoundBackendError) -> Self {
        SoundhouseError::BackendError(error)
    }
}

impl From<SoundManagerError> for SoundhouseError {
    fn from(error: SoundManagerError) -> Self {
        SoundhouseError::ManagerError(error)
    }
}

impl Display for SoundhouseError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            SoundhouseError::LoggerError(s) => { write!(f, "logger error: {}", s) }
            SoundhouseError::BackendError(e) => { write!(f, "backend error: {}", e) }
            SoundhouseError::ManagerError(e) => { write!(f, "manager error: {}", e) }
            #[cfg(not(feature = "sdl2"))]
            SoundhouseError::UnsupportedBackend(s) => { write!(f, "unsupported backend: {}", s) }
        }
    }
}

fn log_level(debug: u8) -> LevelFilter {
    match debug {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn logger_init(debug: u8, log_time: LogTime) -> Result<(), SoundhouseError> {
    let mut builder = ConfigBuilder::new();

    match log_time {
        LogTime::Clock => {},
        LogTime::Rfc3339 => { builder.set_time_format_rfc3339(); },
        LogTime::Rfc2822 => { builder.set_time_format_rfc2822(); },
        LogTime::Off => { builder.set_time_level(LevelFilter::Off); },
    };

    SimpleLogger::init(log_level(debug), builder.build())
        .map_err(|e| SoundhouseError::LoggerError(e.to_string()))
}

fn build_backend(kind: BackendKind) -> Result<Box<dyn SoundBackend>, SoundhouseError> {
    debug!("creating backend: {:?}", kind);

    let backend: Box<dyn SoundBackend> = match kind {
        #[cfg(feature = "sdl2")]
        BackendKind::Sdl2 => Box::new(SoundBackendSDL2::new()?),
        #[cfg(not(feature = "sdl2"))]
        BackendKind::Sdl2 => {
            return Err(SoundhouseError::UnsupportedBackend("built without the sdl2 feature".to_string()));
        },
        BackendKind::Passive => Box::new(SoundBackendPassive::new()),
    };

    Ok(backend)
}

fn main() -> Result<(), SoundhouseError> {
    let args: Args = Args::parse();

    logger_init(args.debug, args.log_time)?;

    let backend = build_backend(args.backend)?;
    info!("soundhouse starting with backend {}", backend.name());

    let mut manager = SoundManagerBuilder::new()
        .with_backend(backend)
        .with_assets_dir(args.assets_dir)
        .build()?;

    let mut sounds: Vec<Sound> = args.builtins
        .iter()
        .map(|which| manager.get_builtin(*which))
        .collect();

    for file in &args.files {
        match manager.try_load(file) {
            Ok(sound) => sounds.push(sound),
            Err(e) => error!("skipping {}: {}", file.display(), e),
        }
    }

    if args.builtins.is_empty() && args.files.is_empty() {
        sounds.push(manager.get_builtin(BuiltinSound::Fart));
    }

    let duration = Duration::from_millis(args.duration_ms);

    for sound in &sounds {
        if !sound.is_valid() {
            error!("{} cannot be played", sound);
            continue;
        }

        manager.play(*sound);
        sleep(duration);
        manager.stop(*sound);
    }

    for sound in sounds {
        manager.unload(sound);
    }

    info!("soundhouse done");
    Ok(())
}
