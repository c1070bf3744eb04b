//! The owned selection model behind a multi-select control.
//!
//! The model is the single source of truth for selection state: every
//! projection (display text, preset matching, session snapshots) re-derives
//! from it on demand, nothing caches a copy. Rendering layers talk to it
//! through stable per-option [`Key`]s and are expected to mutate it only
//! through the operations in [`exclusivity`].
//!
//! [`exclusivity`]: crate::exclusivity

use std::fmt;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::Error;

/// A stable lookup key identifying one option of a [`SelectionModel`].
///
/// Keys are assigned by the host when the option list is built and never
/// change for the lifetime of the model. They identify options for event
/// dispatch; they are not sort keys. Document order is the order of
/// [`SelectionModel::options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key(pub u32);

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single selectable option.
///
/// Identity is the combination of `value` and `key`; values and labels may
/// repeat across groups.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectOption {
    /// The stable lookup key of the option.
    pub key: Key,
    /// The submitted value of the option.
    pub value: SmolStr,
    /// The human-readable label shown in the menu.
    pub label: SmolStr,
    /// Whether the option is inert to user toggles.
    pub disabled: bool,
    /// Whether the option is currently selected.
    pub selected: bool,
    /// The label of the group the option belongs to, if any.
    pub group: Option<SmolStr>,
}

impl SelectOption {
    /// Creates an enabled, unselected, ungrouped option.
    pub fn new(key: Key, value: impl Into<SmolStr>, label: impl Into<SmolStr>) -> Self {
        Self {
            key,
            value: value.into(),
            label: label.into(),
            disabled: false,
            selected: false,
            group: None,
        }
    }

    /// Marks the option as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Marks the option as initially selected.
    #[must_use]
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    /// Places the option under a group label.
    #[must_use]
    pub fn in_group(mut self, group: impl Into<SmolStr>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// Whether value reads include the "all" sentinel option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    /// The sentinel value participates in the read.
    Include,
    /// The sentinel value is filtered out of the read.
    Exclude,
}

/// The ordered, owned selection state of one control.
///
/// Options are kept in document order for the lifetime of the model. An
/// optional sentinel value designates the "all" option, whose selection is
/// mutually exclusive with every other selection (see [`exclusivity`]).
///
/// [`exclusivity`]: crate::exclusivity
#[derive(Debug, Clone)]
pub struct SelectionModel {
    options: Vec<SelectOption>,
    all_value: Option<SmolStr>,
    mutating: bool,
}

impl SelectionModel {
    /// Creates a model from the host's option list, in document order.
    ///
    /// # Errors
    /// Returns [`Error::InvalidReference`] with the offending key if two
    /// options share a key. Duplicate keys are a construction bug in the
    /// host; they would make event dispatch ambiguous.
    pub fn new(options: Vec<SelectOption>, all_value: Option<SmolStr>) -> Result<Self, Error> {
        let mut seen = FxHashSet::default();

        for option in &options {
            if !seen.insert(option.key) {
                return Err(Error::InvalidReference(option.key));
            }
        }

        Ok(Self {
            options,
            all_value,
            mutating: false,
        })
    }

    /// The options of the model, in document order.
    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// The value designated as the "all" sentinel, if any.
    #[must_use]
    pub fn all_value(&self) -> Option<&str> {
        self.all_value.as_deref()
    }

    /// Whether the given option carries the sentinel value.
    #[must_use]
    pub fn is_sentinel(&self, option: &SelectOption) -> bool {
        self.all_value
            .as_ref()
            .is_some_and(|all| *all == option.value)
    }

    /// Returns the option identified by `key`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidReference`] if no option has that key.
    pub fn get(&self, key: Key) -> Result<&SelectOption, Error> {
        self.options
            .iter()
            .find(|option| option.key == key)
            .ok_or(Error::InvalidReference(key))
    }

    /// Whether the option identified by `key` is selected.
    ///
    /// # Errors
    /// Returns [`Error::InvalidReference`] if no option has that key.
    pub fn is_selected(&self, key: Key) -> Result<bool, Error> {
        Ok(self.get(key)?.selected)
    }

    /// Sets the selected flag of one option, honoring its disabled state.
    ///
    /// Toggling a disabled option is a silent no-op, mirroring host form
    /// controls where a disabled checkbox cannot be flipped by the user.
    /// There are no side effects beyond the targeted option; exclusivity is
    /// the caller's concern.
    ///
    /// # Errors
    /// Returns [`Error::InvalidReference`] if no option has that key.
    pub fn set_selected(&mut self, key: Key, selected: bool) -> Result<(), Error> {
        let index = self.index_of(key)?;

        if self.options[index].disabled {
            log::debug!("ignoring toggle of disabled option {key}");
            return Ok(());
        }

        self.options[index].selected = selected;

        Ok(())
    }

    /// The set of currently selected values.
    #[must_use]
    pub fn selected_values(&self, sentinel: Sentinel) -> FxHashSet<SmolStr> {
        self.options
            .iter()
            .filter(|option| option.selected)
            .filter(|option| sentinel == Sentinel::Include || !self.is_sentinel(option))
            .map(|option| option.value.clone())
            .collect()
    }

    /// Whether the "all" sentinel option is currently selected.
    #[must_use]
    pub fn is_all_selected(&self) -> bool {
        self.options
            .iter()
            .any(|option| option.selected && self.is_sentinel(option))
    }

    fn index_of(&self, key: Key) -> Result<usize, Error> {
        self.options
            .iter()
            .position(|option| option.key == key)
            .ok_or(Error::InvalidReference(key))
    }

    /// Writes the selected flag regardless of the disabled state. Bulk
    /// operations (sentinel cascades, preset application) go through here.
    pub(crate) fn set_selected_raw(&mut self, key: Key, selected: bool) -> Result<(), Error> {
        let index = self.index_of(key)?;
        self.options[index].selected = selected;
        Ok(())
    }

    /// Deselects every option except the one identified by `except`.
    pub(crate) fn deselect_others(&mut self, except: Key) {
        for option in &mut self.options {
            if option.key != except {
                option.selected = false;
            }
        }
    }

    /// Selects exactly the options whose value appears in `values`,
    /// disabled options included.
    pub(crate) fn select_values_raw(&mut self, values: &FxHashSet<SmolStr>) {
        for option in &mut self.options {
            option.selected = values.contains(&option.value);
        }
    }

    /// Marks the model as mid-mutation. A second entry before
    /// [`end_mutation`](Self::end_mutation) means a toggle handler triggered
    /// another toggle synchronously.
    pub(crate) fn begin_mutation(&mut self) -> Result<(), Error> {
        if self.mutating {
            log::error!("reentrant mutation of the selection model");
            return Err(Error::ProtocolViolation(
                "selection model mutated from within a mutation",
            ));
        }

        self.mutating = true;

        Ok(())
    }

    pub(crate) fn end_mutation(&mut self) {
        self.mutating = false;
    }
}
