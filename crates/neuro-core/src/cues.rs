//! Audio cue decisions.
//!
//! The tracker turns the per-frame signal vector into discrete events so the
//! audio layer only touches WebAudio when something changes: a short tone
//! when focus crosses into the high or low zone, and start/stop of the noise
//! bed when stress crosses its threshold.

use crate::constants::{
    CUE_TEMPO_BPM, FOCUS_HIGH, FOCUS_LOW, HIGH_FOCUS_FILTER_HZ, HIGH_FOCUS_MIDI,
    LOW_FOCUS_FILTER_HZ, LOW_FOCUS_MIDI, NOISE_STRESS_THRESHOLD,
};
use crate::signals::BrainSignals;
use smallvec::SmallVec;

pub fn midi_to_hz(midi: f32) -> f32 {
    440.0 * (2.0_f32).powf((midi - 69.0) / 12.0)
}

/// Length of an eighth note at the cue tempo.
#[inline]
pub fn eighth_note_sec() -> f32 {
    60.0 / CUE_TEMPO_BPM / 2.0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusZone {
    Low,
    Mid,
    High,
}

impl FocusZone {
    pub fn of(focus: f32) -> Self {
        if focus > FOCUS_HIGH {
            FocusZone::High
        } else if focus < FOCUS_LOW {
            FocusZone::Low
        } else {
            FocusZone::Mid
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneCue {
    pub frequency_hz: f32,
    pub duration_sec: f32,
    /// Target cutoff for the noise-bed filter.
    pub filter_hz: f32,
}

impl ToneCue {
    pub fn for_zone(zone: FocusZone) -> Option<Self> {
        let (midi, filter_hz) = match zone {
            FocusZone::High => (HIGH_FOCUS_MIDI, HIGH_FOCUS_FILTER_HZ),
            FocusZone::Low => (LOW_FOCUS_MIDI, LOW_FOCUS_FILTER_HZ),
            FocusZone::Mid => return None,
        };
        Some(Self {
            frequency_hz: midi_to_hz(midi as f32),
            duration_sec: eighth_note_sec(),
            filter_hz,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CueEvent {
    Tone(ToneCue),
    NoiseOn,
    NoiseOff,
}

#[inline]
pub fn noise_active(stress: f32) -> bool {
    stress > NOISE_STRESS_THRESHOLD
}

#[derive(Clone, Debug)]
pub struct CueTracker {
    zone: FocusZone,
    noise_on: bool,
}

impl Default for CueTracker {
    fn default() -> Self {
        Self {
            zone: FocusZone::Mid,
            noise_on: false,
        }
    }
}

impl CueTracker {
    pub fn update(&mut self, signals: &BrainSignals) -> SmallVec<[CueEvent; 2]> {
        let mut out = SmallVec::new();
        let zone = FocusZone::of(signals.focus);
        if zone != self.zone {
            if let Some(cue) = ToneCue::for_zone(zone) {
                out.push(CueEvent::Tone(cue));
            }
            self.zone = zone;
        }
        let noise = noise_active(signals.stress);
        if noise != self.noise_on {
            out.push(if noise {
                CueEvent::NoiseOn
            } else {
                CueEvent::NoiseOff
            });
            self.noise_on = noise;
        }
        out
    }

    #[inline]
    pub fn zone(&self) -> FocusZone {
        self.zone
    }

    #[inline]
    pub fn noise_on(&self) -> bool {
        self.noise_on
    }
}

/// Decibels to linear gain.
#[inline]
pub fn db_to_gain(db: f32) -> f32 {
    10.0_f32.powf(db / 20.0)
}
