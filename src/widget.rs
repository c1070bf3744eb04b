//! The multi-select control itself.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::exclusivity::{self, AppliedChange};
use crate::layout::{self, Constraints, LayoutDecision, Rectangle};
use crate::selection::{Key, SelectOption, SelectionModel};
use crate::session::Session;
use crate::{Error, Id, Settings, display, preset};

/// The state of one multi-valued selection control.
///
/// A `MultiSelect` owns its [`SelectionModel`] for its whole lifetime and is
/// the only party allowed to mutate it. The rendering layer feeds UI events
/// into the `*_toggled` / `menu_*` / `preset_chosen` methods and re-renders
/// from the read methods after every call; it must not cache selection state
/// of its own.
///
/// Events are processed one at a time: every method runs to completion
/// synchronously before the next event may be dispatched. A toggle handler
/// that synchronously triggers another toggle is reported as
/// [`Error::ProtocolViolation`].
pub struct MultiSelect {
    id: Id,
    model: SelectionModel,
    settings: Settings,
    session: Session,
    on_close: Option<Box<dyn FnMut()>>,
}

impl MultiSelect {
    /// Creates a control from the host's initial option list.
    ///
    /// An external data reload means building a brand-new control (with a
    /// fresh [`Id`]) rather than migrating state into this one.
    ///
    /// # Errors
    /// Returns [`Error::InvalidReference`] if two options share a key.
    pub fn new(
        options: impl IntoIterator<Item = SelectOption>,
        settings: Settings,
    ) -> Result<Self, Error> {
        let model = SelectionModel::new(options.into_iter().collect(), settings.all_value.clone())?;

        Ok(Self {
            id: Id::unique(),
            model,
            settings,
            session: Session::default(),
            on_close: None,
        })
    }

    /// Sets the callback invoked when the menu closes on a materially
    /// changed selection.
    #[must_use]
    pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    /// The identity of this control instance.
    #[must_use]
    pub fn id(&self) -> Id {
        self.id
    }

    /// The underlying selection model, for rendering.
    #[must_use]
    pub fn model(&self) -> &SelectionModel {
        &self.model
    }

    /// The configuration of this control.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Handles a menu checkbox being toggled.
    ///
    /// # Errors
    /// Returns [`Error::InvalidReference`] for an unknown key and
    /// [`Error::ProtocolViolation`] for a reentrant toggle.
    pub fn option_toggled(&mut self, key: Key, selected: bool) -> Result<AppliedChange, Error> {
        exclusivity::apply_toggle(&mut self.model, key, selected)
    }

    /// Handles the menu opening: snapshots the selection for change
    /// detection on close.
    pub fn menu_opened(&mut self) {
        self.session.begin(&self.model);
    }

    /// Handles the menu closing.
    ///
    /// Returns whether the selection materially changed while the menu was
    /// open, and invokes the [`on_close`](Self::on_close) callback when it
    /// did — exactly once per open/close cycle.
    ///
    /// # Errors
    /// Returns [`Error::ProtocolViolation`] when no open preceded this
    /// close.
    pub fn menu_closed(&mut self) -> Result<bool, Error> {
        let changed = self.session.end(&self.model)?;

        if changed {
            if let Some(on_close) = &mut self.on_close {
                on_close();
            }
        }

        Ok(changed)
    }

    /// Handles a preset radio button being chosen: replaces the selection
    /// with exactly the preset's value set.
    ///
    /// This is bulk value assignment, so disabled options listed by the
    /// preset are selected too; the per-option disabled rule only governs
    /// user toggles.
    ///
    /// # Errors
    /// Returns [`Error::UnknownPreset`] for an out-of-range index.
    pub fn preset_chosen(&mut self, index: usize) -> Result<(), Error> {
        let preset = self
            .settings
            .presets
            .get(index)
            .ok_or(Error::UnknownPreset(index))?;

        let values: FxHashSet<SmolStr> = preset.options.iter().cloned().collect();

        exclusivity::replace_selection(&mut self.model, &values)
    }

    /// Decides menu clamping for this open, from host-measured geometry.
    ///
    /// Runs once per menu-open and is independent of selection state.
    #[must_use]
    pub fn request_layout(
        &self,
        menu: Rectangle,
        viewport: Rectangle,
        container: Option<Rectangle>,
    ) -> LayoutDecision {
        layout::decide(
            menu,
            viewport,
            container,
            Constraints {
                gutter: self.settings.viewport_gutter,
                min_height: self.settings.menu_min_height,
            },
        )
    }

    /// The current trigger-button text.
    #[must_use]
    pub fn display_text(&self) -> String {
        display::resolve(&self.model, &self.settings)
    }

    /// The index of the first preset matching the current selection, for
    /// radio-style preset display.
    #[must_use]
    pub fn matching_preset(&self) -> Option<usize> {
        preset::matching_preset(&self.model, &self.settings.presets)
    }

    /// Whether the "all" sentinel option is currently selected.
    #[must_use]
    pub fn is_all_selected(&self) -> bool {
        self.model.is_all_selected()
    }
}
