use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use log::{debug, error, info, warn};
use crate::sound_backend::{PlaybackState, ResourceId, SoundBackend, SoundError};

const DEFAULT_NAME: &str = "SoundBackendPassive";
const WAVE_HEADER_SIZE: usize = 12;
const RIFF_MAGIC: &[u8] = b"RIFF";
const WAVE_MAGIC: &[u8] = b"WAVE";
const DEFAULT_VOLUME: f32 = 1.0;

#[derive(Debug)]
struct PassiveSound {
    path: PathBuf,
    length: usize,
    queued: usize,
    state: PlaybackState,
    volume: f32,
}

/// Backend that keeps the bookkeeping of a real device without producing any sound.
#[derive(Debug)]
pub struct SoundBackendPassive {
    name: String,
    sounds: HashMap<ResourceId, PassiveSound>,
    next_id: u32,
    device_available: bool,
    released: Option<Arc<AtomicUsize>>,
}

impl SoundBackend for SoundBackendPassive {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn load_sound(&mut self, path: &Path) -> Result<ResourceId, SoundError> {
        if !path.exists() {
            warn!("{}: sound file {} does not exist", self.name, path.display());
            return Err(SoundError::MissingAsset(path.to_path_buf()));
        }

        let length = self.decode(path).map_err(|e| {
            error!("{}: failed to load WAV {}: {}", self.name, path.display(), e);
            e
        })?;

        if !self.device_available {
            error!("{}: failed to open audio device for {}", self.name, path.display());
            return Err(SoundError::DeviceUnavailable(format!("{}: no device", self.name)));
        }

        let id = ResourceId::new(self.next_id);
        self.next_id += 1;

        self.sounds.insert(id, PassiveSound {
            path: path.to_path_buf(),
            length,
            queued: 0,
            state: PlaybackState::Idle,
            volume: DEFAULT_VOLUME,
        });

        info!("{}: loaded sound: {} ({} bytes of samples)", self.name, path.display(), length);
        Ok(id)
    }

    fn unload_sound(&mut self, id: ResourceId) {
        if let Some(sound) = self.sounds.remove(&id) {
            self.count_released(1);
            info!("{}: unloaded sound: {} ({})", self.name, id, sound.path.display());
        }
    }

    fn play(&mut self, id: ResourceId) {
        if let Some(sound) = self.sounds.get_mut(&id) {
            // restart: whatever was still queued is replaced by the full buffer
            sound.queued = sound.length;
            sound.state = PlaybackState::Playing;
            info!("{}: playing sound: {}", self.name, id);
        }
    }

    fn stop(&mut self, id: ResourceId) {
        if let Some(sound) = self.sounds.get_mut(&id) {
            sound.queued = 0;
            sound.state = PlaybackState::Paused;
            info!("{}: stopped sound: {}", self.name, id);
        }
    }

    fn set_volume(&mut self, id: ResourceId, volume: f32) {
        if let Some(sound) = self.sounds.get_mut(&id) {
            sound.volume = volume;
            warn!("{}: volume of sound {} recorded as {}, volume control is not implemented", self.name, id, volume);
        }
    }

    fn playback_state(&self, id: ResourceId) -> Option<PlaybackState> {
        self.sounds.get(&id).map(|sound| sound.state)
    }
}

impl SoundBackendPassive {
    pub fn new() -> Self {
        SoundBackendPassive::with_name(DEFAULT_NAME)
    }

    pub fn with_name(name: &str) -> Self {
        SoundBackendPassive {
            name: name.to_string(),
            sounds: HashMap::new(),
            next_id: 0,
            device_available: true,
            released: None,
        }
    }

    /// Every decodable file then fails as if no playback device could be opened.
    pub fn with_device_unavailable(mut self) -> Self {
        self.device_available = false;
        self
    }

    /// Every resource released from now on, by unload or teardown, increments `counter`.
    pub fn with_release_counter(mut self, counter: Arc<AtomicUsize>) -> Self {
        self.released = Some(counter);
        self
    }

    pub fn resource_count(&self) -> usize {
        self.sounds.len()
    }

    pub fn path(&self, id: ResourceId) -> Option<&Path> {
        self.sounds.get(&id).map(|sound| sound.path.as_path())
    }

    pub fn length(&self, id: ResourceId) -> Option<usize> {
        self.sounds.get(&id).map(|sound| sound.length)
    }

    /// Bytes of samples queued for output and not yet played.
    pub fn queued(&self, id: ResourceId) -> Option<usize> {
        self.sounds.get(&id).map(|sound| sound.queued)
    }

    pub fn volume(&self, id: ResourceId) -> Option<f32> {
        self.sounds.get(&id).map(|sound| sound.volume)
    }

    pub fn release_all(&mut self) {
        let count = self.sounds.len();
        self.sounds.clear();
        self.count_released(count);

        if count > 0 {
            info!("{}: released {} outstanding sounds", self.name, count);
        }
    }

    fn count_released(&self, count: usize) {
        if let Some(released) = &self.released {
            released.fetch_add(count, Ordering::SeqCst);
        }
    }

    fn decode(&self, path: &Path) -> Result<usize, SoundError> {
        let bytes = fs::read(path)?;

        if bytes.len() < WAVE_HEADER_SIZE {
            return Err(SoundError::DecodeFailure(format!("{}: truncated header", path.display())));
        }

        if &bytes[0..4] != RIFF_MAGIC || &bytes[8..12] != WAVE_MAGIC {
            return Err(SoundError::DecodeFailure(format!("{}: not a RIFF/WAVE file", path.display())));
        }

        debug!("{}: {} is a RIFF/WAVE file", self.name, path.display());
        Ok(bytes.len() - WAVE_HEADER_SIZE)
    }
}

impl Default for SoundBackendPassive {
    fn default() -> Self {
        SoundBackendPassive::new()
    }
}

impl Drop for SoundBackendPassive {
    fn drop(&mut self) {
        self.release_all();
    }
}
