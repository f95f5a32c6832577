use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::path::{Path, PathBuf};
#[cfg(test)]
use mockall::automock;
use crate::sound::SoundId;

/// Identity of a resource inside one backend's resource table.
///
/// Unrelated to [`SoundId`]: the manager records the value a backend returns and
/// forwards exactly that value back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(u32);

impl ResourceId {
    pub fn new(id: u32) -> Self {
        ResourceId(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    Paused,
}

/// Capabilities every audio backend offers to the sound manager.
///
/// Every call is synchronous. Operations addressing an unknown resource are no-ops.
#[cfg_attr(test, automock)]
pub trait SoundBackend: Debug {
    fn name(&self) -> String;

    /// Decodes `path` and opens a playback device for it.
    fn load_sound(&mut self, path: &Path) -> Result<ResourceId, SoundError>;

    /// Stops pending playback and releases the device and the decoded buffer.
    fn unload_sound(&mut self, id: ResourceId);

    /// Restarts playback from the beginning, discarding whatever was still queued.
    fn play(&mut self, id: ResourceId);

    fn stop(&mut self, id: ResourceId);

    /// Placeholder: no backend applies the level to the output yet.
    fn set_volume(&mut self, id: ResourceId, volume: f32);

    fn playback_state(&self, id: ResourceId) -> Option<PlaybackState>;
}

#[derive(Debug, PartialEq)]
pub enum SoundError {
    MissingAsset(PathBuf),
    DecodeFailure(String),
    DeviceUnavailable(String),
    UnknownHandle(Option<SoundId>),
}

impl Error for SoundError {}

impl From<std::io::Error> for SoundError {
    fn from(error: std::io::Error) -> Self {
        SoundError::DecodeFailure(error.to_string())
    }
}

impl Display for SoundError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            SoundError::MissingAsset(path) => { write!(f, "sound file {} does not exist", path.display()) },
            SoundError::DecodeFailure(s) => { write!(f, "failed to decode sound: {}", s) },
            SoundError::DeviceUnavailable(s) => { write!(f, "failed to open audio device: {}", s) },
            SoundError::UnknownHandle(Some(id)) => { write!(f, "unknown sound handle {}", id) },
            SoundError::UnknownHandle(None) => { write!(f, "invalid sound handle") },
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum SoundBackendError {
    SubsystemInit(String),
}

impl Error for SoundBackendError {}

impl Display for SoundBackendError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            SoundBackendError::SubsystemInit(s) => write!(f, "failed to initialize audio subsystem: {}", s)
        }
    }
}
