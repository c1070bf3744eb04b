use smol_str::SmolStr;

use crate::preset::Preset;

/// Configuration of a [`MultiSelect`] control.
///
/// Everything here is optional; only the option list handed to
/// [`MultiSelect::new`] is required.
///
/// [`MultiSelect`]: crate::MultiSelect
/// [`MultiSelect::new`]: crate::MultiSelect::new
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    /// The option value designated as the exclusive "all" sentinel.
    pub all_value: Option<SmolStr>,
    /// Trigger-button text when nothing is selected.
    pub none_text: String,
    /// Trigger-button text when every option is selected. When unset, the
    /// joined option labels are shown instead.
    pub all_text: Option<String>,
    /// Named bulk selections offered alongside the options.
    pub presets: Vec<Preset>,
    /// Gap kept between the open menu and the bottom of the viewport, in
    /// pixels.
    pub viewport_gutter: f32,
    /// Height below which the open menu is never clamped, in pixels.
    pub menu_min_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            all_value: None,
            none_text: String::from("-- Select --"),
            all_text: None,
            presets: Vec::new(),
            viewport_gutter: 20.0,
            menu_min_height: 200.0,
        }
    }
}
