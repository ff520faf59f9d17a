//! The six-signal brain state vector.
//!
//! Five numeric percentages and one categorical emotion. The vector is always
//! fully populated; numeric fields are kept inside `[SIGNAL_MIN, SIGNAL_MAX]`
//! by every mutation path in [`crate::store`].

use crate::constants::{SIGNAL_DEFAULT, SIGNAL_MAX, SIGNAL_MIN};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of facial expressions, in the order the detector reports them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Emotion {
    #[default]
    Neutral,
    Happy,
    Sad,
    Angry,
    Fearful,
    Disgusted,
    Surprised,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Neutral,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Fearful,
        Emotion::Disgusted,
        Emotion::Surprised,
    ];

    /// Lowercase tag, matching the expression keys of the face detector.
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Neutral => "neutral",
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Fearful => "fearful",
            Emotion::Disgusted => "disgusted",
            Emotion::Surprised => "surprised",
        }
    }

    /// Capitalized name for selector options.
    pub fn display_name(self) -> &'static str {
        match self {
            Emotion::Neutral => "Neutral",
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Angry => "Angry",
            Emotion::Fearful => "Fearful",
            Emotion::Disgusted => "Disgusted",
            Emotion::Surprised => "Surprised",
        }
    }

    /// Emoji shown as the floating emotion icon.
    pub fn icon(self) -> &'static str {
        match self {
            Emotion::Neutral => "😐",
            Emotion::Happy => "😄",
            Emotion::Sad => "😢",
            Emotion::Angry => "😠",
            Emotion::Fearful => "😨",
            Emotion::Disgusted => "🤢",
            Emotion::Surprised => "😲",
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown emotion tag: {0:?}")]
pub struct UnknownEmotion(pub String);

impl FromStr for Emotion {
    type Err = UnknownEmotion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .iter()
            .copied()
            .find(|e| e.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownEmotion(s.to_string()))
    }
}

/// Names one numeric signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalField {
    Focus,
    CognitiveLoad,
    Stress,
    Attention,
    MentalFatigue,
}

impl SignalField {
    pub const ALL: [SignalField; 5] = [
        SignalField::Focus,
        SignalField::CognitiveLoad,
        SignalField::Stress,
        SignalField::Attention,
        SignalField::MentalFatigue,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SignalField::Focus => "focus",
            SignalField::CognitiveLoad => "cognitiveLoad",
            SignalField::Stress => "stress",
            SignalField::Attention => "attention",
            SignalField::MentalFatigue => "mentalFatigue",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SignalField::Focus => "Focus",
            SignalField::CognitiveLoad => "Cognitive Load",
            SignalField::Stress => "Stress",
            SignalField::Attention => "Attention",
            SignalField::MentalFatigue => "Mental Fatigue",
        }
    }
}

/// Clamp a signal value into range. Non-finite input maps to the floor.
#[inline]
pub fn clamp_signal(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(SIGNAL_MIN, SIGNAL_MAX)
    } else {
        SIGNAL_MIN
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrainSignals {
    pub focus: f32,
    pub cognitive_load: f32,
    pub stress: f32,
    pub attention: f32,
    pub emotion: Emotion,
    pub mental_fatigue: f32,
}

impl Default for BrainSignals {
    fn default() -> Self {
        Self {
            focus: SIGNAL_DEFAULT,
            cognitive_load: SIGNAL_DEFAULT,
            stress: SIGNAL_DEFAULT,
            attention: SIGNAL_DEFAULT,
            emotion: Emotion::Neutral,
            mental_fatigue: SIGNAL_DEFAULT,
        }
    }
}

impl BrainSignals {
    pub fn get(&self, field: SignalField) -> f32 {
        match field {
            SignalField::Focus => self.focus,
            SignalField::CognitiveLoad => self.cognitive_load,
            SignalField::Stress => self.stress,
            SignalField::Attention => self.attention,
            SignalField::MentalFatigue => self.mental_fatigue,
        }
    }

    /// Set one numeric field, clamped.
    pub fn set(&mut self, field: SignalField, value: f32) {
        let v = clamp_signal(value);
        match field {
            SignalField::Focus => self.focus = v,
            SignalField::CognitiveLoad => self.cognitive_load = v,
            SignalField::Stress => self.stress = v,
            SignalField::Attention => self.attention = v,
            SignalField::MentalFatigue => self.mental_fatigue = v,
        }
    }

    /// Copy with every numeric field clamped into range.
    pub fn clamped(mut self) -> Self {
        for field in SignalField::ALL {
            let v = self.get(field);
            self.set(field, v);
        }
        self
    }

    pub fn in_range(&self) -> bool {
        SignalField::ALL
            .iter()
            .all(|f| (SIGNAL_MIN..=SIGNAL_MAX).contains(&self.get(*f)))
    }
}
