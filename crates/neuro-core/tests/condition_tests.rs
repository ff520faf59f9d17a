// Host-side tests for the condition classifier.

use neuro_core::*;

fn signals(focus: f32, load: f32, stress: f32, attention: f32) -> BrainSignals {
    BrainSignals {
        focus,
        cognitive_load: load,
        stress,
        attention,
        ..BrainSignals::default()
    }
}

#[test]
fn defaults_are_neutral() {
    assert_eq!(classify(&BrainSignals::default()), Condition::Neutral);
    assert_eq!(
        condition_label(&BrainSignals::default()),
        "😐 Neutral State"
    );
}

#[test]
fn stress_rule_beats_focus_and_attention() {
    let s = signals(90.0, 50.0, 85.0, 90.0);
    assert_eq!(classify(&s), Condition::HighlyStressed);
    assert_eq!(classify(&s).label(), "🔴 Highly Stressed!");
}

#[test]
fn each_rule_reachable_in_order() {
    let cases = [
        (signals(50.0, 50.0, 81.0, 50.0), "🔴 Highly Stressed!"),
        (signals(50.0, 50.0, 61.0, 50.0), "😓 Moderately Stressed"),
        (signals(81.0, 50.0, 50.0, 81.0), "🎯 In the Zone"),
        (signals(81.0, 50.0, 50.0, 50.0), "🧠 Deeply Focused"),
        (signals(19.0, 50.0, 50.0, 50.0), "😶‍🌫️ Unfocused"),
        (signals(50.0, 50.0, 50.0, 19.0), "🦋 Distracted"),
        (signals(50.0, 81.0, 50.0, 50.0), "🤯 Mentally Overloaded"),
        (signals(50.0, 19.0, 50.0, 81.0), "😌 Relaxed and Alert"),
        (signals(61.0, 61.0, 50.0, 50.0), "🤔 Concentrating Hard"),
        (signals(50.0, 50.0, 29.0, 81.0), "😊 Calmly Attentive"),
    ];
    for (s, label) in cases {
        assert_eq!(condition_label(&s), label, "signals: {s:?}");
    }
}

#[test]
fn thresholds_are_strict() {
    assert_eq!(classify(&signals(50.0, 50.0, 80.0, 50.0)), Condition::ModeratelyStressed);
    assert_eq!(classify(&signals(50.0, 50.0, 60.0, 50.0)), Condition::Neutral);
    assert_eq!(classify(&signals(80.0, 50.0, 50.0, 50.0)), Condition::Neutral);
    assert_eq!(classify(&signals(20.0, 50.0, 50.0, 50.0)), Condition::Neutral);
}

#[test]
fn overlap_resolution_follows_table_order() {
    // Unfocused is checked before Distracted.
    assert_eq!(classify(&signals(10.0, 50.0, 50.0, 10.0)), Condition::Unfocused);
    // Relaxed and Alert beats Calmly Attentive.
    assert_eq!(classify(&signals(50.0, 10.0, 10.0, 90.0)), Condition::RelaxedAndAlert);
    // Deeply Focused beats Concentrating Hard.
    assert_eq!(classify(&signals(85.0, 70.0, 50.0, 50.0)), Condition::DeeplyFocused);
}

#[test]
fn rule_table_has_ten_ordered_rules() {
    assert_eq!(CONDITION_RULES.len(), 10);
    assert_eq!(CONDITION_RULES[0].1, Condition::HighlyStressed);
    assert_eq!(CONDITION_RULES[1].1, Condition::ModeratelyStressed);
    assert_eq!(CONDITION_RULES[9].1, Condition::CalmlyAttentive);
}

#[test]
fn classify_is_deterministic() {
    let mut store = SignalStore::new(7);
    for _ in 0..200 {
        store.apply(SignalUpdate::AutoTick).unwrap();
        let s = *store.signals();
        assert_eq!(classify(&s), classify(&s));
    }
}
