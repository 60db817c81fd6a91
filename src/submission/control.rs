use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// The submit button's disabled state. Set while a submission is in flight.
#[derive(Debug, Default)]
pub struct SubmitControl {
    disabled: Arc<AtomicBool>,
}

impl SubmitControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Acquire)
    }

    /// Read-only handle sharing this control's state.
    pub fn view(&self) -> ControlView {
        ControlView {
            disabled: self.disabled.clone(),
        }
    }

    /// Disable the control until the returned guard is dropped.
    pub(crate) fn engage(&self) -> InFlight {
        self.disabled.store(true, Ordering::Release);
        InFlight {
            disabled: self.disabled.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ControlView {
    disabled: Arc<AtomicBool>,
}

impl ControlView {
    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Acquire)
    }
}

/// Re-enables the control on drop, whichever way the submission ends.
#[must_use]
pub(crate) struct InFlight {
    disabled: Arc<AtomicBool>,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.disabled.store(false, Ordering::Release);
    }
}
