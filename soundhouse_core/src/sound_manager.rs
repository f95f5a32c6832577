use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use log::{debug, error, info, warn};
use crate::builtin_sound::{BuiltinSound, DEFAULT_ASSETS_DIR};
use crate::sound::{Sound, SoundId, SoundKind};
use crate::sound_backend::{PlaybackState, ResourceId, SoundBackend, SoundError};

/// Proof of origin required to mint a builtin handle. Only this module can build one.
#[derive(Debug)]
pub(crate) struct BuiltinToken(());

#[derive(Debug)]
struct SoundRecord {
    path: PathBuf,
    resource: ResourceId,
}

/// Every sound effect, builtin or not, goes through the manager.
#[derive(Debug)]
pub struct SoundManager {
    backend: Box<dyn SoundBackend>,
    sounds: HashMap<SoundId, SoundRecord>,
    builtin_records: HashMap<SoundId, SoundRecord>,
    builtins: HashMap<BuiltinSound, Sound>,
    next_id: u32,
}

impl SoundManager {
    pub fn new(backend: Box<dyn SoundBackend>) -> Self {
        SoundManager::with_assets_dir(backend, Path::new(DEFAULT_ASSETS_DIR))
    }

    fn with_assets_dir(backend: Box<dyn SoundBackend>, assets_dir: &Path) -> Self {
        let mut manager = SoundManager {
            backend,
            sounds: HashMap::new(),
            builtin_records: HashMap::new(),
            builtins: HashMap::new(),
            next_id: 0,
        };

        manager.load_all_builtin_sounds(assets_dir);
        manager
    }

    /// Loads `path`; a failure yields an invalid handle and leaves nothing recorded.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Sound {
        self.try_load(path).unwrap_or_default()
    }

    pub fn try_load<P: AsRef<Path>>(&mut self, path: P) -> Result<Sound, SoundError> {
        let path = path.as_ref();

        let resource = self.backend.load_sound(path).map_err(|e| {
            debug!("manager: load of {} refused: {}", path.display(), e);
            e
        })?;

        let id = self.next_sound_id();

        self.sounds.insert(id, SoundRecord {
            path: path.to_path_buf(),
            resource,
        });

        debug!("manager: sound {} -> backend resource {} ({})", id, resource, path.display());
        Ok(Sound::dynamic(id))
    }

    /// Releases a dynamic sound. Builtin and invalid handles are ignored.
    pub fn unload(&mut self, sound: Sound) {
        if sound.is_builtin() {
            debug!("manager: unload ignored for {}", sound);
            return;
        }

        let record = sound.id().and_then(|id| self.sounds.get(&id).map(|record| (id, record.resource)));

        match record {
            Some((id, resource)) => {
                self.backend.unload_sound(resource);
                self.sounds.remove(&id);
                debug!("manager: sound {} unloaded", id);
            },

            None => {
                warn!("manager: unload ignored: {}", SoundError::UnknownHandle(sound.id()));
            }
        }
    }

    /// Decodes a dynamic sound again from its recorded path, keeping its handle.
    ///
    /// The current resource is only released once the new one is loaded: on failure
    /// the sound keeps playing from what was decoded before.
    pub fn reload(&mut self, sound: Sound) -> Result<(), SoundError> {
        if sound.is_builtin() {
            return Err(SoundError::UnknownHandle(sound.id()));
        }

        let id = sound.id().ok_or(SoundError::UnknownHandle(None))?;
        let path = self.sounds
            .get(&id)
            .map(|record| record.path.clone())
            .ok_or(SoundError::UnknownHandle(Some(id)))?;

        let resource = self.backend.load_sound(&path).map_err(|e| {
            warn!("manager: reload of sound {} from {} failed, keeping previous data: {}", id, path.display(), e);
            e
        })?;

        if let Some(record) = self.sounds.get_mut(&id) {
            let previous = std::mem::replace(&mut record.resource, resource);
            self.backend.unload_sound(previous);
            debug!("manager: sound {} reloaded -> backend resource {} (was {})", id, resource, previous);
        }

        Ok(())
    }

    pub fn play(&mut self, sound: Sound) {
        match self.resource(sound) {
            Ok(resource) => self.backend.play(resource),
            Err(e) => warn!("manager: play ignored: {}", e),
        }
    }

    pub fn stop(&mut self, sound: Sound) {
        match self.resource(sound) {
            Ok(resource) => self.backend.stop(resource),
            Err(e) => warn!("manager: stop ignored: {}", e),
        }
    }

    pub fn set_volume(&mut self, sound: Sound, volume: f32) {
        match self.resource(sound) {
            Ok(resource) => self.backend.set_volume(resource, volume),
            Err(e) => warn!("manager: set volume ignored: {}", e),
        }
    }

    pub fn get_builtin(&self, which: BuiltinSound) -> Sound {
        self.builtins.get(&which).copied().unwrap_or_else(|| Sound::builtin(BuiltinToken(()), None))
    }

    pub fn is_loaded(&self, sound: Sound) -> bool {
        self.record(sound).is_some()
    }

    pub fn path(&self, sound: Sound) -> Option<&Path> {
        self.record(sound).map(|record| record.path.as_path())
    }

    pub fn playback_state(&self, sound: Sound) -> Option<PlaybackState> {
        self.resource(sound)
            .ok()
            .and_then(|resource| self.backend.playback_state(resource))
    }

    /// Number of live dynamic sounds.
    pub fn loaded_count(&self) -> usize {
        self.sounds.len()
    }

    fn next_sound_id(&mut self) -> SoundId {
        let id = SoundId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn record(&self, sound: Sound) -> Option<&SoundRecord> {
        let id = sound.id()?;

        match sound.kind() {
            SoundKind::Dynamic => self.sounds.get(&id),
            SoundKind::Builtin => self.builtin_records.get(&id),
        }
    }

    fn resource(&self, sound: Sound) -> Result<ResourceId, SoundError> {
        self.record(sound)
            .map(|record| record.resource)
            .ok_or(SoundError::UnknownHandle(sound.id()))
    }

    fn load_builtin_sound(&mut self, which: BuiltinSound, assets_dir: &Path) -> Sound {
        let path = which.path_in(assets_dir);

        match self.backend.load_sound(&path) {
            Ok(resource) => {
                let id = self.next_sound_id();
                debug!("manager: builtin {} is sound {} -> backend resource {}", which, id, resource);

                self.builtin_records.insert(id, SoundRecord { path, resource });
                Sound::builtin(BuiltinToken(()), Some(id))
            },

            Err(e) => {
                error!("manager: builtin sound {} unavailable: {}", which, e);
                Sound::builtin(BuiltinToken(()), None)
            }
        }
    }

    fn load_all_builtin_sounds(&mut self, assets_dir: &Path) {
        info!("manager: loading builtin sounds from {}", assets_dir.display());

        for which in BuiltinSound::ALL {
            let sound = self.load_builtin_sound(which, assets_dir);
            self.builtins.insert(which, sound);
        }

        let loaded = self.builtins.values().filter(|sound| sound.is_valid()).count();
        info!("manager: {}/{} builtin sounds loaded", loaded, BuiltinSound::ALL.len());
    }
}

#[derive(Debug)]
pub enum SoundManagerError {
    BuilderError(String),
}

impl Error for SoundManagerError {}

impl Display for SoundManagerError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            SoundManagerError::BuilderError(s) => { write!(f, "builder error: {}", s) }
        }
    }
}

pub struct SoundManagerBuilder {
    backend: Option<Box<dyn SoundBackend>>,
    assets_dir: PathBuf,
}

impl SoundManagerBuilder {
    pub fn new() -> Self {
        SoundManagerBuilder {
            backend: None,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }

    pub fn with_backend(mut self, backend: Box<dyn SoundBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn with_assets_dir<P: Into<PathBuf>>(mut self, assets_dir: P) -> Self {
        self.assets_dir = assets_dir.into();
        debug!("setting assets dir: {}", self.assets_dir.display());

        self
    }

    pub fn build(self) -> Result<SoundManager, SoundManagerError> {
        let backend = self.backend
            .ok_or(SoundManagerError::BuilderError("backend not specified".to_string()))?;

        Ok(SoundManager::with_assets_dir(backend, &self.assets_dir))
    }
}

impl Default for SoundManagerBuilder {
    fn default() -> Self {
        SoundManagerBuilder::new()
    }
}
