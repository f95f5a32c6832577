use log::LevelFilter;
use simplelog::{Config, TestLogger};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

mod sound;
mod builtin_sound;
#[cfg(feature = "sdl2")]
mod sound_backend_sdl2;

const SAMPLE_RATE: u32 = 22_050;
const SAMPLE_COUNT: usize = 64;

static START: Once = Once::new();

fn init_logger_for_test() {
    START.call_once(|| TestLogger::init(LevelFilter::Trace, Config::default()).unwrap());
}

pub fn init() {
    init_logger_for_test();
}

pub fn assets_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("assets")
}

// 16-bit mono PCM
pub fn write_wav(dir: &Path, name: &str) -> PathBuf {
    let samples: Vec<i16> = (0..SAMPLE_COUNT).map(|i| (i as i16) * 256).collect();
    let data_len = (samples.len() * 2) as u32;

    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());

    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }

    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

pub fn write_garbage(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"this is definitely not a waveform").unwrap();
    path
}
