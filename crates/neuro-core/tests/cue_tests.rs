// Host-side tests for audio cue decisions.

use neuro_core::*;

fn with(focus: f32, stress: f32) -> BrainSignals {
    BrainSignals {
        focus,
        stress,
        ..BrainSignals::default()
    }
}

#[test]
fn midi_reference_pitches() {
    assert!((midi_to_hz(69.0) - 440.0).abs() < 1e-3);
    assert!((midi_to_hz(60.0) - 261.6256).abs() < 1e-2);
    assert!((midi_to_hz(57.0) - 220.0).abs() < 1e-3);
}

#[test]
fn tone_cues_per_zone() {
    let high = ToneCue::for_zone(FocusZone::High).unwrap();
    assert!((high.frequency_hz - 261.6256).abs() < 1e-2);
    assert_eq!(high.filter_hz, 2000.0);
    assert_eq!(high.duration_sec, 0.25);

    let low = ToneCue::for_zone(FocusZone::Low).unwrap();
    assert!((low.frequency_hz - 220.0).abs() < 1e-3);
    assert_eq!(low.filter_hz, 500.0);
    assert!(ToneCue::for_zone(FocusZone::Mid).is_none());
}

#[test]
fn tones_fire_on_zone_entry_only() {
    let mut t = CueTracker::default();
    assert!(t.update(&with(50.0, 50.0)).is_empty());

    let events = t.update(&with(85.0, 50.0));
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], CueEvent::Tone(c) if c.filter_hz == 2000.0));
    assert_eq!(t.zone(), FocusZone::High);

    // Staying in the zone stays silent.
    assert!(t.update(&with(90.0, 50.0)).is_empty());

    // Back to mid emits nothing, entering low emits the low tone.
    assert!(t.update(&with(50.0, 50.0)).is_empty());
    let events = t.update(&with(10.0, 50.0));
    assert!(matches!(events[0], CueEvent::Tone(c) if c.filter_hz == 500.0));
}

#[test]
fn focus_boundaries_are_strict() {
    assert_eq!(FocusZone::of(80.0), FocusZone::Mid);
    assert_eq!(FocusZone::of(80.5), FocusZone::High);
    assert_eq!(FocusZone::of(20.0), FocusZone::Mid);
    assert_eq!(FocusZone::of(19.9), FocusZone::Low);
}

#[test]
fn noise_bed_follows_stress_threshold() {
    let mut t = CueTracker::default();
    assert_eq!(t.update(&with(50.0, 81.0)).as_slice(), &[CueEvent::NoiseOn]);
    assert!(t.noise_on());
    assert!(t.update(&with(50.0, 95.0)).is_empty());
    assert_eq!(t.update(&with(50.0, 80.0)).as_slice(), &[CueEvent::NoiseOff]);
    assert!(!t.noise_on());
}

#[test]
fn tone_and_noise_in_one_frame() {
    let mut t = CueTracker::default();
    let events = t.update(&with(90.0, 90.0));
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], CueEvent::Tone(_)));
    assert_eq!(events[1], CueEvent::NoiseOn);
}

#[test]
fn noise_volume_gain() {
    assert!((db_to_gain(-20.0) - 0.1).abs() < 1e-6);
    assert!((db_to_gain(0.0) - 1.0).abs() < 1e-6);
}
