//! Open/close session tracking for change notification.
//!
//! A control notifies its host when the menu closes, but only when the
//! selection materially changed while it was open. The [`Session`] tracker
//! snapshots the selection at menu-open and compares against a second
//! snapshot at menu-close; intermediate churn (toggling an option off and
//! back on) reports no change.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::Error;
use crate::selection::{SelectionModel, Sentinel};

/// An immutable capture of the selected values at one instant.
///
/// Snapshots exclude the "all" sentinel and exist only to be compared for
/// unordered equality; two are taken per open/close cycle and discarded
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(FxHashSet<SmolStr>);

impl Snapshot {
    /// Captures the currently selected values.
    #[must_use]
    pub fn capture(model: &SelectionModel) -> Self {
        Self(model.selected_values(Sentinel::Exclude))
    }
}

/// Tracks one menu open/close cycle of a control.
///
/// The tracker is a two-state machine: `Closed -> (open) -> Open ->
/// (close) -> Closed`. The material-change verdict is produced exactly once
/// per transition back to `Closed`, never while open.
#[derive(Debug, Default)]
pub struct Session {
    open: Option<Snapshot>,
}

impl Session {
    /// Snapshots the selection at menu-open.
    ///
    /// Opening while a session is already open replaces the snapshot; it
    /// means a close event was missed upstream, which is tolerated here and
    /// logged.
    pub fn begin(&mut self, model: &SelectionModel) {
        if self.open.is_some() {
            log::warn!("menu opened while a session was already open");
        }

        self.open = Some(Snapshot::capture(model));
    }

    /// Compares the selection against the menu-open snapshot and closes the
    /// session.
    ///
    /// Returns `true` iff the unordered set of selected values differs from
    /// the one captured by [`begin`](Self::begin).
    ///
    /// # Errors
    /// Returns [`Error::ProtocolViolation`] when no session is open. This
    /// indicates a missed open event upstream; callers must surface it, not
    /// swallow it.
    pub fn end(&mut self, model: &SelectionModel) -> Result<bool, Error> {
        let Some(opened) = self.open.take() else {
            log::error!("menu close without a matching open");
            return Err(Error::ProtocolViolation(
                "menu closed without a matching open",
            ));
        };

        Ok(opened != Snapshot::capture(model))
    }

    /// Whether a session is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{Key, SelectOption};

    fn model() -> SelectionModel {
        SelectionModel::new(
            vec![
                SelectOption::new(Key(0), "all", "All"),
                SelectOption::new(Key(1), "red", "Red"),
                SelectOption::new(Key(2), "green", "Green"),
            ],
            Some("all".into()),
        )
        .unwrap()
    }

    #[test]
    fn test_change_detected() {
        let mut model = model();
        let mut session = Session::default();

        session.begin(&model);
        model.set_selected(Key(1), true).unwrap();

        assert!(session.end(&model).unwrap());
    }

    #[test]
    fn test_toggle_on_then_off_is_no_change() {
        let mut model = model();
        let mut session = Session::default();

        session.begin(&model);
        model.set_selected(Key(1), true).unwrap();
        model.set_selected(Key(1), false).unwrap();

        assert!(!session.end(&model).unwrap());
    }

    #[test]
    fn test_end_without_begin_is_a_violation() {
        let model = model();
        let mut session = Session::default();

        assert!(matches!(
            session.end(&model),
            Err(Error::ProtocolViolation(_))
        ));
    }

    #[test]
    fn test_session_closes_on_end() {
        let mut model = model();
        let mut session = Session::default();

        session.begin(&model);
        assert!(session.is_open());

        model.set_selected(Key(1), true).unwrap();
        assert!(session.end(&model).unwrap());
        assert!(!session.is_open());

        // A fresh cycle compares against the new baseline.
        session.begin(&model);
        assert!(!session.end(&model).unwrap());
    }

    #[test]
    fn test_sentinel_is_outside_the_diff() {
        let mut model = model();
        let mut session = Session::default();

        session.begin(&model);
        model.set_selected(Key(0), true).unwrap();

        assert!(!session.end(&model).unwrap());
    }
}
