//! Fixed-rule labelling of the signal vector.
//!
//! Rules overlap (high stress and high focus can both hold), so evaluation
//! order is part of the contract: the table is walked top-down and the first
//! matching predicate decides.

use crate::signals::BrainSignals;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    HighlyStressed,
    ModeratelyStressed,
    InTheZone,
    DeeplyFocused,
    Unfocused,
    Distracted,
    MentallyOverloaded,
    RelaxedAndAlert,
    ConcentratingHard,
    CalmlyAttentive,
    Neutral,
}

impl Condition {
    pub fn label(self) -> &'static str {
        match self {
            Condition::HighlyStressed => "🔴 Highly Stressed!",
            Condition::ModeratelyStressed => "😓 Moderately Stressed",
            Condition::InTheZone => "🎯 In the Zone",
            Condition::DeeplyFocused => "🧠 Deeply Focused",
            Condition::Unfocused => "😶‍🌫️ Unfocused",
            Condition::Distracted => "🦋 Distracted",
            Condition::MentallyOverloaded => "🤯 Mentally Overloaded",
            Condition::RelaxedAndAlert => "😌 Relaxed and Alert",
            Condition::ConcentratingHard => "🤔 Concentrating Hard",
            Condition::CalmlyAttentive => "😊 Calmly Attentive",
            Condition::Neutral => "😐 Neutral State",
        }
    }
}

pub type ConditionRule = (fn(&BrainSignals) -> bool, Condition);

pub const CONDITION_RULES: &[ConditionRule] = &[
    (highly_stressed, Condition::HighlyStressed),
    (moderately_stressed, Condition::ModeratelyStressed),
    (in_the_zone, Condition::InTheZone),
    (deeply_focused, Condition::DeeplyFocused),
    (unfocused, Condition::Unfocused),
    (distracted, Condition::Distracted),
    (overloaded, Condition::MentallyOverloaded),
    (relaxed_and_alert, Condition::RelaxedAndAlert),
    (concentrating_hard, Condition::ConcentratingHard),
    (calmly_attentive, Condition::CalmlyAttentive),
];

fn highly_stressed(s: &BrainSignals) -> bool {
    s.stress > 80.0
}
fn moderately_stressed(s: &BrainSignals) -> bool {
    s.stress > 60.0
}
fn in_the_zone(s: &BrainSignals) -> bool {
    s.focus > 80.0 && s.attention > 80.0
}
fn deeply_focused(s: &BrainSignals) -> bool {
    s.focus > 80.0
}
fn unfocused(s: &BrainSignals) -> bool {
    s.focus < 20.0
}
fn distracted(s: &BrainSignals) -> bool {
    s.attention < 20.0
}
fn overloaded(s: &BrainSignals) -> bool {
    s.cognitive_load > 80.0
}
fn relaxed_and_alert(s: &BrainSignals) -> bool {
    s.cognitive_load < 20.0 && s.attention > 80.0
}
fn concentrating_hard(s: &BrainSignals) -> bool {
    s.focus > 60.0 && s.cognitive_load > 60.0
}
fn calmly_attentive(s: &BrainSignals) -> bool {
    s.attention > 80.0 && s.stress < 30.0
}

pub fn classify(signals: &BrainSignals) -> Condition {
    CONDITION_RULES
        .iter()
        .find(|(pred, _)| pred(signals))
        .map(|(_, c)| *c)
        .unwrap_or(Condition::Neutral)
}

#[inline]
pub fn condition_label(signals: &BrainSignals) -> &'static str {
    classify(signals).label()
}
