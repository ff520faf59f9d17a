use crate::dom::Interval;
use neuro_core::constants::AUTO_TICK_MS;
use neuro_core::{ControlMode, SignalStore, SignalUpdate};
use std::cell::RefCell;
use std::rc::Rc;

/// Owns the 1 s auto-simulation interval. The interval only exists while
/// the store is in auto mode.
pub struct AutoSimulation {
    store: Rc<RefCell<SignalStore>>,
    interval: Option<Interval>,
}

impl AutoSimulation {
    pub fn new(store: Rc<RefCell<SignalStore>>) -> Self {
        Self {
            store,
            interval: None,
        }
    }

    pub fn sync(&mut self, mode: ControlMode) {
        match (mode, self.interval.is_some()) {
            (ControlMode::Auto, false) => {
                let store = self.store.clone();
                match Interval::new(AUTO_TICK_MS, move || {
                    if let Err(e) = store.borrow_mut().apply(SignalUpdate::AutoTick) {
                        log::debug!("[sim] {e}");
                    }
                }) {
                    Ok(i) => {
                        log::info!("[sim] auto simulation started");
                        self.interval = Some(i);
                    }
                    Err(e) => log::error!("[sim] {e:?}"),
                }
            }
            (ControlMode::Manual, true) => {
                self.interval = None;
                log::info!("[sim] auto simulation stopped");
            }
            _ => {}
        }
    }
}
