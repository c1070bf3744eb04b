use crate::selection::Key;

/// An error produced while driving a multi-select control.
///
/// Every failure in this crate is a logic or integration bug on the caller's
/// side, never an environmental one. There is nothing to retry; surface these
/// immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An operation referenced an option key that is not present in the
    /// model.
    #[error("no option with key {0} exists in the selection model")]
    InvalidReference(Key),

    /// An operation referenced a preset index that is out of range.
    #[error("preset index {0} is out of range")]
    UnknownPreset(usize),

    /// The caller broke the interaction protocol: a menu-close without a
    /// matching open, or a reentrant model mutation.
    ///
    /// The current event must be aborted; model state is left untouched.
    #[error("selection protocol violation: {0}")]
    ProtocolViolation(&'static str),
}
