//! Named one-click selection presets.

use smol_str::SmolStr;

use crate::selection::{SelectionModel, Sentinel};

/// A named, fixed set of option values offered as a one-click bulk
/// selection.
///
/// Presets are supplied by the host at construction and are immutable for
/// the control's lifetime. The order of `options` carries no meaning;
/// matching is by unordered set equality.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preset {
    /// The label shown next to the preset's radio button.
    pub name: String,
    /// The exact set of option values the preset selects.
    pub options: Vec<SmolStr>,
}

impl Preset {
    /// Creates a preset from a name and its value set.
    pub fn new<V>(name: impl Into<String>, options: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<SmolStr>,
    {
        Self {
            name: name.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

/// Returns the index of the first preset whose value set equals the current
/// selection, sentinel included.
///
/// The comparison sorts both sides and walks them element-wise, so neither
/// the order of `preset.options` nor the model's internal option order
/// affects the result. An empty preset list never matches. When two presets
/// carry identical sets, the lower index wins.
#[must_use]
pub fn matching_preset(model: &SelectionModel, presets: &[Preset]) -> Option<usize> {
    let mut current: Vec<SmolStr> = model
        .selected_values(Sentinel::Include)
        .into_iter()
        .collect();
    current.sort_unstable();

    presets.iter().position(|preset| {
        let mut options = preset.options.clone();
        options.sort_unstable();
        options.dedup();

        options == current
    })
}
