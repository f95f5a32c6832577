use std::path::Path;
use crate::sound_backend::{PlaybackState, SoundBackend, SoundError};
use crate::sound_backend_sdl2::{samples_from_bytes, SoundBackendSDL2};
use crate::tests::{assets_dir, init};

#[test]
fn test_samples_from_native_endian_bytes() {
    let expected = [0.0f32, 0.5, -1.0];
    let bytes: Vec<u8> = expected.iter().flat_map(|sample| sample.to_ne_bytes()).collect();

    assert_eq!(samples_from_bytes(&bytes), expected.to_vec());
}

#[test]
fn test_samples_from_bytes_drops_trailing_partial_sample() {
    let mut bytes = 0.25f32.to_ne_bytes().to_vec();
    bytes.extend_from_slice(&[0x01, 0x02]);

    assert_eq!(samples_from_bytes(&bytes), vec![0.25]);
}

// fart.wav: 600ms of 16-bit mono at 22050Hz, decoded to f32
const FART_FREQ: i32 = 22_050;
const FART_FRAMES: u32 = 13_230;
const F32_BYTES: u32 = 4;

// SDL refuses to initialize from a second thread, so the whole device lifecycle lives in one test
#[test]
fn test_dummy_device_lifecycle() {
    init();
    std::env::set_var("SDL_AUDIODRIVER", "dummy");

    let mut backend = SoundBackendSDL2::new().unwrap();

    assert_eq!(
        backend.load_sound(Path::new("does/not/exist.wav")),
        Err(SoundError::MissingAsset("does/not/exist.wav".into()))
    );

    let id = backend.load_sound(&assets_dir().join("fart.wav")).unwrap();
    let format = backend.format(id).unwrap();
    assert_eq!(format.freq, FART_FREQ);
    assert_eq!(format.channels, 1);

    let buffer_bytes = FART_FRAMES * F32_BYTES;

    backend.play(id);
    backend.play(id);

    let queued = backend.queued_bytes(id).unwrap();
    assert!(queued > 0);
    assert!(queued <= buffer_bytes, "queued {} bytes, one buffer is {}", queued, buffer_bytes);

    backend.stop(id);
    assert_eq!(backend.queued_bytes(id), Some(0));
    assert_eq!(backend.playback_state(id), Some(PlaybackState::Paused));

    backend.stop(id);
    assert_eq!(backend.playback_state(id), Some(PlaybackState::Paused));

    backend.unload_sound(id);
    assert_eq!(backend.playback_state(id), None);
    assert_eq!(backend.queued_bytes(id), None);
}
