use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Effects shipped with the application and loaded once when the manager starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinSound {
    Fart,
    MenuClick,
    MenuHover,
    ErrorBeep,
    ClownHorn,
}

impl BuiltinSound {
    pub const ALL: [BuiltinSound; 5] = [
        BuiltinSound::Fart,
        BuiltinSound::MenuClick,
        BuiltinSound::MenuHover,
        BuiltinSound::ErrorBeep,
        BuiltinSound::ClownHorn,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BuiltinSound::Fart => "fart",
            BuiltinSound::MenuClick => "menu_click",
            BuiltinSound::MenuHover => "menu_hover",
            BuiltinSound::ErrorBeep => "error_beep",
            BuiltinSound::ClownHorn => "clown_horn",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.wav", self.name())
    }

    pub fn path_in(&self, assets_dir: &Path) -> PathBuf {
        assets_dir.join(self.file_name())
    }
}

impl Display for BuiltinSound {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BuiltinSound {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('-', "_");

        BuiltinSound::ALL
            .iter()
            .find(|builtin| builtin.name() == name)
            .copied()
            .ok_or_else(|| format!("unknown builtin sound: {}", s))
    }
}
