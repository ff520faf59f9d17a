// Host-side tests for the signal store.

use neuro_core::*;
use proptest::prelude::*;

fn manual_store() -> SignalStore {
    let mut store = SignalStore::new(42);
    store.apply(SignalUpdate::SetMode(ControlMode::Manual)).unwrap();
    store
}

#[test]
fn starts_in_auto_with_neutral_defaults() {
    let store = SignalStore::new(1);
    assert!(store.is_auto());
    assert_eq!(*store.signals(), BrainSignals::default());
    assert_eq!(store.signals().emotion, Emotion::Neutral);
    assert_eq!(store.revision(), 0);
    assert_eq!(store.last_source(), UpdateSource::Init);
}

#[test]
fn break_reduces_stress_and_fatigue() {
    let mut store = SignalStore::with_signals(
        BrainSignals {
            stress: 50.0,
            mental_fatigue: 50.0,
            ..BrainSignals::default()
        },
        3,
    );
    store.apply(SignalUpdate::TakeBreak).unwrap();
    assert_eq!(store.signals().stress, 30.0);
    assert_eq!(store.signals().mental_fatigue, 30.0);
}

#[test]
fn break_floors_at_zero() {
    let mut store = SignalStore::with_signals(
        BrainSignals {
            stress: 10.0,
            mental_fatigue: 5.0,
            ..BrainSignals::default()
        },
        3,
    );
    store.apply(SignalUpdate::TakeBreak).unwrap();
    assert_eq!(store.signals().stress, 0.0);
    assert_eq!(store.signals().mental_fatigue, 0.0);
}

#[test]
fn manual_edits_rejected_in_auto_mode() {
    let mut store = SignalStore::new(5);
    let before = *store.signals();
    let err = store
        .apply(SignalUpdate::Manual {
            field: SignalField::Focus,
            value: 90.0,
        })
        .unwrap_err();
    assert_eq!(err, UpdateError::ManualDisabled);
    assert_eq!(
        store.apply(SignalUpdate::ManualEmotion(Emotion::Happy)),
        Err(UpdateError::ManualDisabled)
    );
    assert_eq!(*store.signals(), before);
    assert_eq!(store.revision(), 0);
}

#[test]
fn switching_to_manual_stops_auto_ticks_and_enables_edits() {
    let mut store = SignalStore::new(9);
    store.apply(SignalUpdate::AutoTick).unwrap();
    store.apply(SignalUpdate::ToggleMode).unwrap();
    assert_eq!(store.mode(), ControlMode::Manual);

    let frozen = *store.signals();
    for _ in 0..10 {
        assert_eq!(
            store.apply(SignalUpdate::AutoTick),
            Err(UpdateError::NotAutomatic)
        );
    }
    assert_eq!(*store.signals(), frozen);

    store
        .apply(SignalUpdate::Manual {
            field: SignalField::Attention,
            value: 77.0,
        })
        .unwrap();
    store.apply(SignalUpdate::ManualEmotion(Emotion::Sad)).unwrap();
    assert_eq!(store.signals().attention, 77.0);
    assert_eq!(store.signals().emotion, Emotion::Sad);
}

#[test]
fn auto_tick_keeps_emotion_and_bounds_deltas() {
    let mut store = SignalStore::new(11);
    store.apply(SignalUpdate::Detected(Emotion::Surprised)).unwrap();
    for _ in 0..500 {
        let before = *store.signals();
        store.apply(SignalUpdate::AutoTick).unwrap();
        let after = *store.signals();
        assert_eq!(after.emotion, Emotion::Surprised);
        for field in SignalField::ALL {
            let range = if field == SignalField::MentalFatigue {
                5.0
            } else {
                10.0
            };
            let d = (after.get(field) - before.get(field)).abs();
            assert!(d <= range + 1e-4, "{field:?} moved {d}");
        }
        assert!(after.in_range());
    }
}

#[test]
fn auto_tick_is_reproducible_per_seed() {
    let mut a = SignalStore::new(1234);
    let mut b = SignalStore::new(1234);
    for _ in 0..50 {
        a.apply(SignalUpdate::AutoTick).unwrap();
        b.apply(SignalUpdate::AutoTick).unwrap();
    }
    assert_eq!(a.signals(), b.signals());
}

#[test]
fn detector_writes_in_both_modes_last_write_wins() {
    let mut store = SignalStore::new(2);
    store.apply(SignalUpdate::Detected(Emotion::Angry)).unwrap();
    assert_eq!(store.signals().emotion, Emotion::Angry);
    assert_eq!(store.last_source(), UpdateSource::Detector);

    store.apply(SignalUpdate::ToggleMode).unwrap();
    store.apply(SignalUpdate::ManualEmotion(Emotion::Happy)).unwrap();
    assert_eq!(store.last_source(), UpdateSource::Manual);
    store.apply(SignalUpdate::Detected(Emotion::Fearful)).unwrap();
    assert_eq!(store.signals().emotion, Emotion::Fearful);
    assert_eq!(store.revision(), 4);
}

#[test]
fn replace_clamps_whole_vector() {
    let mut store = manual_store();
    store
        .apply(SignalUpdate::Replace(BrainSignals {
            focus: 140.0,
            cognitive_load: -3.0,
            stress: f32::NAN,
            attention: 55.5,
            emotion: Emotion::Disgusted,
            mental_fatigue: 100.0,
        }))
        .unwrap();
    let s = store.signals();
    assert_eq!(s.focus, 100.0);
    assert_eq!(s.cognitive_load, 0.0);
    assert_eq!(s.stress, 0.0);
    assert_eq!(s.attention, 55.5);
    assert_eq!(s.emotion, Emotion::Disgusted);
    assert_eq!(s.mental_fatigue, 100.0);
}

#[test]
fn emotion_tags_parse() {
    for e in Emotion::ALL {
        assert_eq!(e.as_str().parse::<Emotion>().unwrap(), e);
    }
    assert_eq!("Happy".parse::<Emotion>().unwrap(), Emotion::Happy);
    assert!("bored".parse::<Emotion>().is_err());
}

fn any_field() -> impl Strategy<Value = SignalField> {
    prop::sample::select(SignalField::ALL.to_vec())
}

fn any_update() -> impl Strategy<Value = SignalUpdate> {
    prop_oneof![
        Just(SignalUpdate::AutoTick),
        Just(SignalUpdate::TakeBreak),
        Just(SignalUpdate::ToggleMode),
        (any_field(), -500.0f32..500.0).prop_map(|(field, value)| SignalUpdate::Manual {
            field,
            value
        }),
        (0usize..7).prop_map(|i| SignalUpdate::Detected(Emotion::ALL[i])),
    ]
}

proptest! {
    #[test]
    fn numeric_fields_stay_in_range(
        seed in any::<u64>(),
        updates in prop::collection::vec(any_update(), 0..200),
    ) {
        let mut store = SignalStore::new(seed);
        for u in updates {
            let _ = store.apply(u);
            prop_assert!(store.signals().in_range(), "{:?}", store.signals());
        }
    }
}
