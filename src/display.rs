//! Projection of the selection into trigger-button text.

use crate::Settings;
use crate::selection::SelectionModel;

/// Computes the summary text shown on the trigger button.
///
/// A pure function of the current model state and the configured strings:
///
/// 1. the sentinel is selected — the configured `all_text`, or the sentinel
///    option's own label when none is configured (never an empty string);
/// 2. nothing is selected — `none_text`;
/// 3. every non-sentinel option is individually selected and `all_text` is
///    configured — `all_text`;
/// 4. otherwise — the trimmed labels of the selected options joined with
///    `", "`, in document order. Selection order never shows through.
#[must_use]
pub fn resolve(model: &SelectionModel, settings: &Settings) -> String {
    let sentinel = model
        .options()
        .iter()
        .find(|option| option.selected && model.is_sentinel(option));

    if let Some(sentinel) = sentinel {
        return settings
            .all_text
            .clone()
            .unwrap_or_else(|| sentinel.label.trim().to_owned());
    }

    let selected: Vec<&str> = model
        .options()
        .iter()
        .filter(|option| option.selected && !model.is_sentinel(option))
        .map(|option| option.label.trim())
        .collect();

    if selected.is_empty() {
        return settings.none_text.clone();
    }

    let total = model
        .options()
        .iter()
        .filter(|option| !model.is_sentinel(option))
        .count();

    if selected.len() == total {
        if let Some(all_text) = &settings.all_text {
            return all_text.clone();
        }
    }

    selected.join(", ")
}
