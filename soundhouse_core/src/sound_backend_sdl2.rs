use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::path::Path;
use log::{debug, error, info, warn};
use sdl2::audio::{AudioCVT, AudioFormat, AudioQueue, AudioSpecDesired, AudioSpecWAV, AudioStatus};
use sdl2::{AudioSubsystem, Sdl};
use crate::sound_backend::{PlaybackState, ResourceId, SoundBackend, SoundBackendError, SoundError};

const DEFAULT_NAME: &str = "SoundBackendSDL2";
const F32_BYTES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundFormat {
    pub freq: i32,
    pub channels: u8,
    pub source: AudioFormat,
}

struct SDL2Sound {
    samples: Vec<f32>,
    format: SoundFormat,
    queue: AudioQueue<f32>,
}

impl SDL2Sound {
    fn release(self) {
        self.queue.clear();
        self.queue.pause();
    }
}

// sounds are dropped before the audio subsystem and SDL itself
pub struct SoundBackendSDL2 {
    name: String,
    sounds: HashMap<ResourceId, SDL2Sound>,
    next_id: u32,
    audio_subsystem: AudioSubsystem,
    _sdl: Sdl,
}

impl Debug for SoundBackendSDL2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundBackendSDL2")
            .field("name", &self.name)
            .field("sounds", &self.sounds.len())
            .finish()
    }
}

impl SoundBackend for SoundBackendSDL2 {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn load_sound(&mut self, path: &Path) -> Result<ResourceId, SoundError> {
        if !path.exists() {
            warn!("{}: sound file {} does not exist", self.name, path.display());
            return Err(SoundError::MissingAsset(path.to_path_buf()));
        }

        let (samples, format) = SoundBackendSDL2::decode(path).map_err(|e| {
            error!("{}: failed to load WAV {}: {}", self.name, path.display(), e);
            e
        })?;

        // a failure here drops the decoded samples with it
        let queue = self.open_device(&format).map_err(|e| {
            error!("{}: {}", self.name, e);
            e
        })?;

        queue.resume();

        let id = ResourceId::new(self.next_id);
        self.next_id += 1;

        info!("{}: loaded sound: {} (freq={}, channels={}, format={:?})",
            self.name, path.display(), format.freq, format.channels, format.source);

        self.sounds.insert(id, SDL2Sound {
            samples,
            format,
            queue,
        });

        Ok(id)
    }

    fn unload_sound(&mut self, id: ResourceId) {
        if let Some(sound) = self.sounds.remove(&id) {
            sound.release();
            info!("{}: unloaded sound: {}", self.name, id);
        }
    }

    fn play(&mut self, id: ResourceId) {
        if let Some(sound) = self.sounds.get(&id) {
            sound.queue.clear();

            if let Err(e) = sound.queue.queue_audio(&sound.samples) {
                error!("{}: failed to queue sound {}: {}", self.name, id, e);
                return;
            }

            sound.queue.resume();
            info!("{}: playing sound: {}", self.name, id);
        }
    }

    fn stop(&mut self, id: ResourceId) {
        if let Some(sound) = self.sounds.get(&id) {
            sound.queue.clear();
            sound.queue.pause();
            info!("{}: stopped sound: {}", self.name, id);
        }
    }

    fn set_volume(&mut self, id: ResourceId, volume: f32) {
        if self.sounds.contains_key(&id) {
            warn!("{}: volume control is not implemented, ignoring level {} for sound {}", self.name, volume, id);
        }
    }

    fn playback_state(&self, id: ResourceId) -> Option<PlaybackState> {
        self.sounds.get(&id).map(|sound| match sound.queue.status() {
            AudioStatus::Paused => PlaybackState::Paused,
            AudioStatus::Playing if sound.queue.size() > 0 => PlaybackState::Playing,
            _ => PlaybackState::Idle,
        })
    }
}

impl SoundBackendSDL2 {
    pub fn new() -> Result<Self, SoundBackendError> {
        SoundBackendSDL2::with_name(DEFAULT_NAME)
    }

    pub fn with_name(name: &str) -> Result<Self, SoundBackendError> {
        info!("{}: initializing SDL audio", name);

        let sdl = sdl2::init().map_err(|e| {
            error!("{}: failed to initialize SDL2: {}", name, e);
            SoundBackendError::SubsystemInit(e)
        })?;

        let audio_subsystem = sdl.audio().map_err(|e| {
            error!("{}: failed to initialize SDL2 audio: {}", name, e);
            SoundBackendError::SubsystemInit(e)
        })?;

        debug!("{}: audio driver: {}", name, audio_subsystem.current_audio_driver());

        Ok(SoundBackendSDL2 {
            name: name.to_string(),
            sounds: HashMap::new(),
            next_id: 0,
            audio_subsystem,
            _sdl: sdl,
        })
    }

    pub fn format(&self, id: ResourceId) -> Option<SoundFormat> {
        self.sounds.get(&id).map(|sound| sound.format)
    }

    /// Bytes still waiting in the device queue of a sound.
    pub fn queued_bytes(&self, id: ResourceId) -> Option<u32> {
        self.sounds.get(&id).map(|sound| sound.queue.size())
    }

    pub fn release_all(&mut self) {
        let count = self.sounds.len();

        for (_, sound) in self.sounds.drain() {
            sound.release();
        }

        if count > 0 {
            info!("{}: released {} outstanding sounds", self.name, count);
        }
    }

    fn decode(path: &Path) -> Result<(Vec<f32>, SoundFormat), SoundError> {
        let wav = AudioSpecWAV::load_wav(path)
            .map_err(|e| SoundError::DecodeFailure(format!("{}: {}", path.display(), e)))?;

        let format = SoundFormat {
            freq: wav.freq,
            channels: wav.channels,
            source: wav.format,
        };

        let cvt = AudioCVT::new(
            wav.format, wav.channels, wav.freq,
            AudioFormat::f32_sys(), wav.channels, wav.freq
        ).map_err(|e| SoundError::DecodeFailure(format!("{}: {}", path.display(), e)))?;

        let bytes = cvt.convert(wav.buffer().to_vec());
        Ok((samples_from_bytes(&bytes), format))
    }

    fn open_device(&self, format: &SoundFormat) -> Result<AudioQueue<f32>, SoundError> {
        let desired_spec = AudioSpecDesired {
            freq: Some(format.freq),
            channels: Some(format.channels),
            samples: None,
        };

        self.audio_subsystem
            .open_queue::<f32, _>(None, &desired_spec)
            .map_err(SoundError::DeviceUnavailable)
    }
}

impl Drop for SoundBackendSDL2 {
    fn drop(&mut self) {
        self.release_all();
    }
}

pub(crate) fn samples_from_bytes(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(F32_BYTES)
        .map(|chunk| f32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}
