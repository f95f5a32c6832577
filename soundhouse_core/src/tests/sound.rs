use crate::sound::{Sound, SoundId, SoundKind};

#[test]
fn test_default_sound_is_invalid_and_dynamic() {
    let sound = Sound::default();

    assert!(!sound.is_valid());
    assert!(!sound.is_builtin());
    assert_eq!(sound.id(), None);
    assert_eq!(sound.kind(), SoundKind::Dynamic);
    assert_eq!(sound, Sound::invalid());
}

#[test]
fn test_dynamic_sound_carries_its_id() {
    let sound = Sound::dynamic(SoundId::new(7));

    assert!(sound.is_valid());
    assert!(!sound.is_builtin());
    assert_eq!(sound.id().map(|id| id.value()), Some(7));
}

#[test]
fn test_sound_id_zero_is_valid() {
    let sound = Sound::dynamic(SoundId::new(0));

    assert!(sound.is_valid());
}

#[test]
fn test_sound_display() {
    assert_eq!(Sound::dynamic(SoundId::new(3)).to_string(), "dynamic sound #3");
    assert_eq!(Sound::invalid().to_string(), "invalid dynamic sound");
}
