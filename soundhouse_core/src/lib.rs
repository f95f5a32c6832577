pub mod sound;
pub mod sound_backend;
pub mod sound_backend_passive;
#[cfg(feature = "sdl2")]
pub mod sound_backend_sdl2;
pub mod builtin_sound;
pub mod sound_manager;
#[cfg(test)]
mod tests;
