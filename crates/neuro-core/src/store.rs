use crate::constants::{AUTO_DELTA_RANGE, AUTO_FATIGUE_DELTA_RANGE, BREAK_RELIEF};
use crate::signals::{clamp_signal, BrainSignals, Emotion, SignalField};
use rand::prelude::*;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlMode {
    #[default]
    Auto,
    Manual,
}

impl ControlMode {
    pub fn toggled(self) -> Self {
        match self {
            ControlMode::Auto => ControlMode::Manual,
            ControlMode::Manual => ControlMode::Auto,
        }
    }
}

/// Where an accepted write came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateSource {
    Init,
    Timer,
    Manual,
    Detector,
    Break,
    Mode,
}

/// Every mutation of the signal vector goes through one of these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SignalUpdate {
    Replace(BrainSignals),
    Manual { field: SignalField, value: f32 },
    ManualEmotion(Emotion),
    AutoTick,
    Detected(Emotion),
    TakeBreak,
    SetMode(ControlMode),
    ToggleMode,
}

impl SignalUpdate {
    pub fn source(&self) -> UpdateSource {
        match self {
            SignalUpdate::Replace(_)
            | SignalUpdate::Manual { .. }
            | SignalUpdate::ManualEmotion(_) => UpdateSource::Manual,
            SignalUpdate::AutoTick => UpdateSource::Timer,
            SignalUpdate::Detected(_) => UpdateSource::Detector,
            SignalUpdate::TakeBreak => UpdateSource::Break,
            SignalUpdate::SetMode(_) | SignalUpdate::ToggleMode => UpdateSource::Mode,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UpdateError {
    #[error("manual edits are disabled while auto simulation is running")]
    ManualDisabled,
    #[error("auto tick ignored in manual mode")]
    NotAutomatic,
}

/// Random walk parameters for the auto simulation.
#[derive(Clone, Debug)]
pub struct SimulationParams {
    pub delta_range: f32,
    pub fatigue_delta_range: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            delta_range: AUTO_DELTA_RANGE,
            fatigue_delta_range: AUTO_FATIGUE_DELTA_RANGE,
        }
    }
}

/// Owns the signal vector and the auto/manual flag.
///
/// Writers never coordinate: the last accepted update wins. `revision` and
/// `last_source` make that observable.
pub struct SignalStore {
    signals: BrainSignals,
    mode: ControlMode,
    pub params: SimulationParams,
    rng: StdRng,
    revision: u64,
    last_source: UpdateSource,
}

impl SignalStore {
    pub fn new(seed: u64) -> Self {
        Self::with_signals(BrainSignals::default(), seed)
    }

    pub fn with_signals(signals: BrainSignals, seed: u64) -> Self {
        Self {
            signals: signals.clamped(),
            mode: ControlMode::Auto,
            params: SimulationParams::default(),
            rng: StdRng::seed_from_u64(seed),
            revision: 0,
            last_source: UpdateSource::Init,
        }
    }

    #[inline]
    pub fn signals(&self) -> &BrainSignals {
        &self.signals
    }

    #[inline]
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    #[inline]
    pub fn is_auto(&self) -> bool {
        self.mode == ControlMode::Auto
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    pub fn last_source(&self) -> UpdateSource {
        self.last_source
    }

    pub fn apply(&mut self, update: SignalUpdate) -> Result<UpdateSource, UpdateError> {
        match update {
            SignalUpdate::Replace(next) => {
                self.require_manual()?;
                self.signals = next.clamped();
            }
            SignalUpdate::Manual { field, value } => {
                self.require_manual()?;
                self.signals.set(field, value);
            }
            SignalUpdate::ManualEmotion(emotion) => {
                self.require_manual()?;
                self.signals.emotion = emotion;
            }
            SignalUpdate::AutoTick => {
                if !self.is_auto() {
                    return Err(UpdateError::NotAutomatic);
                }
                self.random_step();
            }
            SignalUpdate::Detected(emotion) => {
                self.signals.emotion = emotion;
            }
            SignalUpdate::TakeBreak => {
                self.signals.stress = clamp_signal(self.signals.stress - BREAK_RELIEF);
                self.signals.mental_fatigue =
                    clamp_signal(self.signals.mental_fatigue - BREAK_RELIEF);
            }
            SignalUpdate::SetMode(mode) => self.set_mode(mode),
            SignalUpdate::ToggleMode => self.set_mode(self.mode.toggled()),
        }
        let source = update.source();
        self.revision += 1;
        self.last_source = source;
        Ok(source)
    }

    fn require_manual(&self) -> Result<(), UpdateError> {
        if self.is_auto() {
            Err(UpdateError::ManualDisabled)
        } else {
            Ok(())
        }
    }

    fn set_mode(&mut self, mode: ControlMode) {
        if mode != self.mode {
            log::debug!("[store] mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    // Emotion is left alone; only the detector and manual edits change it.
    fn random_step(&mut self) {
        let r = self.params.delta_range;
        let rf = self.params.fatigue_delta_range;
        for field in SignalField::ALL {
            let range = if field == SignalField::MentalFatigue { rf } else { r };
            let delta = if range > 0.0 {
                self.rng.gen_range(-range..=range)
            } else {
                0.0
            };
            let v = self.signals.get(field) + delta;
            self.signals.set(field, v);
        }
    }
}
