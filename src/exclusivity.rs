//! Mutation operations that keep the "all" sentinel exclusive.
//!
//! The sentinel option means "everything", so it can never be selected next
//! to a specific option. Every write to the [`SelectionModel`] goes through
//! this module, which restores that exclusivity before any read-side
//! projection can observe the model:
//!
//! - selecting the sentinel deselects every other option;
//! - selecting a specific option revokes the sentinel;
//! - when both arrive in one atomic write, the sentinel wins — "all"
//!   subsumes individual picks, never the reverse.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::Error;
use crate::selection::{Key, SelectionModel};

/// The effect an applied toggle had on the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedChange {
    /// The toggle was applied as-is; no sentinel interaction took place.
    Plain,
    /// The sentinel was selected; every other option was deselected.
    BecameAll,
    /// The sentinel was deselected; nothing else changed.
    AllCleared,
    /// A specific option was toggled.
    SpecificChanged {
        /// Whether the sentinel was deselected as a side effect.
        sentinel_revoked: bool,
    },
}

/// Applies one raw toggle event and restores sentinel exclusivity.
///
/// Synchronous and total: every input either applies cleanly or leaves the
/// model untouched. Toggling a disabled option is a no-op and never
/// cascades.
///
/// # Errors
/// Returns [`Error::InvalidReference`] for an unknown key, and
/// [`Error::ProtocolViolation`] if the call reenters a mutation already in
/// progress.
pub fn apply_toggle(
    model: &mut SelectionModel,
    key: Key,
    selected: bool,
) -> Result<AppliedChange, Error> {
    model.begin_mutation()?;
    let applied = toggle(model, key, selected);
    model.end_mutation();

    applied
}

/// Replaces the selection with exactly the options whose value appears in
/// `values`, then restores sentinel exclusivity.
///
/// This is bulk value assignment, not a sequence of toggles: disabled
/// options are selected like any other when their value is listed. Presets
/// are applied through here.
///
/// # Errors
/// Returns [`Error::ProtocolViolation`] if the call reenters a mutation
/// already in progress.
pub fn replace_selection(
    model: &mut SelectionModel,
    values: &FxHashSet<SmolStr>,
) -> Result<(), Error> {
    model.begin_mutation()?;
    model.select_values_raw(values);
    normalize(model);
    model.end_mutation();

    Ok(())
}

fn toggle(model: &mut SelectionModel, key: Key, selected: bool) -> Result<AppliedChange, Error> {
    let target = model.get(key)?;

    if target.disabled {
        return Ok(AppliedChange::Plain);
    }

    let is_sentinel = model.is_sentinel(target);

    if model.all_value().is_none() {
        model.set_selected(key, selected)?;
        return Ok(AppliedChange::Plain);
    }

    if is_sentinel && selected {
        model.deselect_others(key);
        model.set_selected_raw(key, true)?;
        return Ok(AppliedChange::BecameAll);
    }

    if is_sentinel {
        model.set_selected_raw(key, false)?;
        return Ok(AppliedChange::AllCleared);
    }

    let sentinel_revoked = model.is_all_selected();
    model.set_selected(key, selected)?;

    if sentinel_revoked {
        deselect_sentinel(model);
    }

    Ok(AppliedChange::SpecificChanged { sentinel_revoked })
}

/// Resolves a sentinel conflict left behind by a bulk selection write.
///
/// If the sentinel and at least one specific option are both selected, the
/// specific options are cleared and the sentinel stays.
fn normalize(model: &mut SelectionModel) {
    if !model.is_all_selected() {
        return;
    }

    let sentinel_key = model
        .options()
        .iter()
        .find(|option| option.selected && model.is_sentinel(option))
        .map(|option| option.key);

    if let Some(key) = sentinel_key {
        model.deselect_others(key);
    }
}

fn deselect_sentinel(model: &mut SelectionModel) {
    let keys: Vec<Key> = model
        .options()
        .iter()
        .filter(|option| model.is_sentinel(option))
        .map(|option| option.key)
        .collect();

    for key in keys {
        // Raw write: a disabled sentinel is still revoked.
        if let Err(error) = model.set_selected_raw(key, false) {
            log::error!("sentinel revocation failed: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{SelectOption, SelectionModel, Sentinel};

    fn model_with_sentinel() -> SelectionModel {
        SelectionModel::new(
            vec![
                SelectOption::new(Key(0), "all", "All"),
                SelectOption::new(Key(1), "red", "Red"),
                SelectOption::new(Key(2), "green", "Green"),
                SelectOption::new(Key(3), "blue", "Blue").disabled(),
            ],
            Some("all".into()),
        )
        .unwrap()
    }

    fn assert_exclusive(model: &SelectionModel) {
        if model.is_all_selected() {
            assert!(model.selected_values(Sentinel::Exclude).is_empty());
        }
    }

    #[test]
    fn test_no_sentinel_is_plain() {
        let mut model = SelectionModel::new(
            vec![
                SelectOption::new(Key(0), "red", "Red"),
                SelectOption::new(Key(1), "green", "Green"),
            ],
            None,
        )
        .unwrap();

        assert_eq!(
            apply_toggle(&mut model, Key(0), true).unwrap(),
            AppliedChange::Plain
        );
        assert!(model.is_selected(Key(0)).unwrap());
    }

    #[test]
    fn test_selecting_sentinel_clears_others() {
        let mut model = model_with_sentinel();

        let _ = apply_toggle(&mut model, Key(1), true).unwrap();
        let _ = apply_toggle(&mut model, Key(2), true).unwrap();

        assert_eq!(
            apply_toggle(&mut model, Key(0), true).unwrap(),
            AppliedChange::BecameAll
        );
        assert!(model.is_all_selected());
        assert!(model.selected_values(Sentinel::Exclude).is_empty());
    }

    #[test]
    fn test_deselecting_sentinel_does_not_cascade() {
        let mut model = model_with_sentinel();

        let _ = apply_toggle(&mut model, Key(0), true).unwrap();

        assert_eq!(
            apply_toggle(&mut model, Key(0), false).unwrap(),
            AppliedChange::AllCleared
        );
        assert!(model.selected_values(Sentinel::Include).is_empty());
    }

    #[test]
    fn test_specific_revokes_sentinel() {
        let mut model = model_with_sentinel();

        let _ = apply_toggle(&mut model, Key(0), true).unwrap();

        assert_eq!(
            apply_toggle(&mut model, Key(1), true).unwrap(),
            AppliedChange::SpecificChanged {
                sentinel_revoked: true
            }
        );
        assert!(!model.is_all_selected());
        assert!(model.is_selected(Key(1)).unwrap());
    }

    #[test]
    fn test_exclusivity_holds_over_toggle_sequences() {
        let mut model = model_with_sentinel();
        let script = [
            (Key(1), true),
            (Key(0), true),
            (Key(2), true),
            (Key(2), false),
            (Key(0), true),
            (Key(0), false),
            (Key(1), true),
            (Key(0), true),
        ];

        for (key, selected) in script {
            let _ = apply_toggle(&mut model, key, selected).unwrap();
            assert_exclusive(&model);
        }
    }

    #[test]
    fn test_disabled_target_never_cascades() {
        let mut model = model_with_sentinel();

        let _ = apply_toggle(&mut model, Key(0), true).unwrap();

        // Blue is disabled: the toggle is swallowed and "all" survives.
        assert_eq!(
            apply_toggle(&mut model, Key(3), true).unwrap(),
            AppliedChange::Plain
        );
        assert!(model.is_all_selected());
    }

    #[test]
    fn test_unknown_key_leaves_model_untouched() {
        let mut model = model_with_sentinel();

        let _ = apply_toggle(&mut model, Key(1), true).unwrap();

        assert_eq!(
            apply_toggle(&mut model, Key(9), true),
            Err(Error::InvalidReference(Key(9)))
        );
        assert!(model.is_selected(Key(1)).unwrap());
    }

    #[test]
    fn test_replace_selection_sentinel_wins() {
        let mut model = model_with_sentinel();
        let values: FxHashSet<SmolStr> = ["all", "red"].into_iter().map(SmolStr::new).collect();

        replace_selection(&mut model, &values).unwrap();

        assert!(model.is_all_selected());
        assert!(model.selected_values(Sentinel::Exclude).is_empty());
    }

    #[test]
    fn test_replace_selection_includes_disabled() {
        let mut model = model_with_sentinel();
        let values: FxHashSet<SmolStr> = ["red", "blue"].into_iter().map(SmolStr::new).collect();

        replace_selection(&mut model, &values).unwrap();

        assert!(model.is_selected(Key(1)).unwrap());
        assert!(model.is_selected(Key(3)).unwrap());
        assert!(!model.is_selected(Key(2)).unwrap());
    }
}
