//! Export-in-progress state, scoped to the trigger control it governs.
//!
//! The flag is exposed as a {begin, end} capability rather than a free
//! global: `begin` refuses a second concurrent export and hides the
//! trigger bar so the capture does not include it; `end` restores it.
//! The only transitions are Idle -> Capturing (`begin`) and
//! Capturing -> Idle (`end`).

use std::fmt;
use web_sys::{Element, HtmlButtonElement};

pub(crate) const IDLE_LABEL: &str = "\u{1F4C4} T\u{e9}l\u{e9}charger mon plan de course";
pub(crate) const BUSY_LABEL: &str = "G\u{e9}n\u{e9}ration en cours\u{2026}";

/// CSS class that removes the trigger bar from the captured layout.
const HIDDEN_CLASS: &str = "hidden";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportPhase {
    Idle,
    Capturing,
}

/// Returned by [`ExportState::begin`] when an export is already running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportInProgress;

impl fmt::Display for ExportInProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("An export is already in progress")
    }
}

pub struct ExportState {
    phase: ExportPhase,
    bar: Option<Element>,
    button: Option<HtmlButtonElement>,
}

impl ExportState {
    pub fn new(bar: Element, button: HtmlButtonElement) -> Self {
        Self {
            phase: ExportPhase::Idle,
            bar: Some(bar),
            button: Some(button),
        }
    }

    /// A state with no attached DOM, for host-side tests of the
    /// transition discipline.
    #[cfg(test)]
    pub(crate) fn detached() -> Self {
        Self {
            phase: ExportPhase::Idle,
            bar: None,
            button: None,
        }
    }

    pub fn phase(&self) -> ExportPhase {
        self.phase
    }

    pub fn is_exporting(&self) -> bool {
        self.phase == ExportPhase::Capturing
    }

    /// Enter the Capturing phase, hiding and disabling the trigger.
    pub fn begin(&mut self) -> Result<(), ExportInProgress> {
        if self.is_exporting() {
            return Err(ExportInProgress);
        }
        self.phase = ExportPhase::Capturing;
        self.apply(true);
        Ok(())
    }

    /// Return to Idle, restoring the trigger. Idempotent.
    pub fn end(&mut self) {
        self.phase = ExportPhase::Idle;
        self.apply(false);
    }

    fn apply(&self, busy: bool) {
        if let Some(bar) = &self.bar {
            let classes = bar.class_list();
            let result = if busy {
                classes.add_1(HIDDEN_CLASS)
            } else {
                classes.remove_1(HIDDEN_CLASS)
            };
            if let Err(e) = result {
                web_sys::console::error_1(&e);
            }
        }
        if let Some(button) = &self.button {
            button.set_disabled(busy);
            button.set_text_content(Some(if busy { BUSY_LABEL } else { IDLE_LABEL }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begins_idle_and_enabled() {
        let state = ExportState::detached();
        assert_eq!(state.phase(), ExportPhase::Idle);
        assert!(!state.is_exporting());
    }

    #[test]
    fn begin_then_end_returns_to_idle() {
        let mut state = ExportState::detached();
        state.begin().unwrap();
        assert!(state.is_exporting());
        state.end();
        assert!(!state.is_exporting());
    }

    #[test]
    fn second_begin_is_refused_while_capturing() {
        let mut state = ExportState::detached();
        state.begin().unwrap();
        assert_eq!(state.begin(), Err(ExportInProgress));
        // The refused begin must not have corrupted the phase
        assert!(state.is_exporting());
    }

    #[test]
    fn failure_path_cleanup_leaves_state_idle() {
        let mut state = ExportState::detached();
        state.begin().unwrap();
        // Simulated capture failure: the exporter always calls end()
        state.end();
        assert_eq!(state.phase(), ExportPhase::Idle);
        // And the trigger is usable again
        assert!(state.begin().is_ok());
    }

    #[test]
    fn end_is_idempotent() {
        let mut state = ExportState::detached();
        state.end();
        assert_eq!(state.phase(), ExportPhase::Idle);
    }
}
