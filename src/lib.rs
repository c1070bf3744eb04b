//! Selection-state core for multi-valued dropdown controls.
//!
//! A [`MultiSelect`] keeps the derived menu representation of a set of
//! selectable options consistent with an underlying ordered selection
//! model. It enforces mutual exclusion for a designated "all" sentinel
//! value, projects the selection into trigger-button text and preset radio
//! state, detects whether an open/close interaction materially changed the
//! selection, and decides how the open menu must be clamped to fit on
//! screen.
//!
//! Rendering is not part of this crate: the host adapter owns the actual
//! UI elements, feeds user events in, and re-renders from the read methods
//! after every event.
//!
//! # Example
//! ```
//! use multi_select::{Key, MultiSelect, SelectOption, Settings};
//!
//! let mut control = MultiSelect::new(
//!     [
//!         SelectOption::new(Key(0), "all", "All"),
//!         SelectOption::new(Key(1), "red", "Red"),
//!         SelectOption::new(Key(2), "blue", "Blue"),
//!     ],
//!     Settings {
//!         all_value: Some("all".into()),
//!         ..Settings::default()
//!     },
//! )?;
//!
//! control.menu_opened();
//! let _ = control.option_toggled(Key(1), true)?;
//! assert_eq!(control.display_text(), "Red");
//!
//! // The selection changed while the menu was open.
//! assert!(control.menu_closed()?);
//!
//! // Selecting "all" revokes the specific pick.
//! let _ = control.option_toggled(Key(0), true)?;
//! assert!(control.is_all_selected());
//! # Ok::<_, multi_select::Error>(())
//! ```
pub mod display;
pub mod exclusivity;
pub mod layout;
pub mod preset;
pub mod selection;
pub mod session;

mod error;
mod id;
mod settings;
mod widget;

pub use error::Error;
pub use exclusivity::AppliedChange;
pub use id::Id;
pub use layout::{Constraints, LayoutDecision, Rectangle};
pub use preset::Preset;
pub use selection::{Key, SelectOption, SelectionModel, Sentinel};
pub use session::{Session, Snapshot};
pub use settings::Settings;
pub use widget::MultiSelect;
