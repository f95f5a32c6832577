use std::fmt::{Display, Formatter};
use crate::sound_manager::BuiltinToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SoundId(u32);

impl SoundId {
    pub(crate) fn new(id: u32) -> Self {
        SoundId(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Display for SoundId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKind {
    #[default]
    Dynamic,
    Builtin,
}

/// Handle to a sound known by a [`SoundManager`](crate::sound_manager::SoundManager).
///
/// A handle owns nothing: it only routes operations to the manager that minted it,
/// and it means nothing once that manager is gone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sound {
    id: Option<SoundId>,
    kind: SoundKind,
}

impl Sound {
    pub fn invalid() -> Self {
        Sound::default()
    }

    pub(crate) fn dynamic(id: SoundId) -> Self {
        Sound {
            id: Some(id),
            kind: SoundKind::Dynamic,
        }
    }

    // only the manager can hand out a token, so only the manager mints builtin handles
    pub(crate) fn builtin(_token: BuiltinToken, id: Option<SoundId>) -> Self {
        Sound {
            id,
            kind: SoundKind::Builtin,
        }
    }

    pub fn id(&self) -> Option<SoundId> {
        self.id
    }

    pub fn kind(&self) -> SoundKind {
        self.kind
    }

    pub fn is_valid(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_builtin(&self) -> bool {
        self.kind == SoundKind::Builtin
    }
}

impl Display for Sound {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let kind = match self.kind {
            SoundKind::Dynamic => "dynamic",
            SoundKind::Builtin => "builtin",
        };

        match self.id {
            Some(id) => write!(f, "{} sound {}", kind, id),
            None => write!(f, "invalid {} sound", kind),
        }
    }
}
