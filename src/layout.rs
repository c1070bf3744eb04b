//! Menu geometry policy.
//!
//! The open menu may spill past its positioning container or below the
//! viewport. [`decide`] turns the geometry measured by the host into a
//! [`LayoutDecision`] saying which clamps to apply; the host performs the
//! actual measurement and styling.

/// An axis-aligned rectangle in page coordinates, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    /// X coordinate of the left edge.
    pub x: f32,
    /// Y coordinate of the top edge.
    pub y: f32,
    /// The width of the rectangle.
    pub width: f32,
    /// The height of the rectangle.
    pub height: f32,
}

impl Rectangle {
    /// Creates a new [`Rectangle`] from its top-left corner and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The X coordinate of the right edge.
    #[must_use]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    /// The Y coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }
}

/// Spacing constraints applied when fitting the menu on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    /// Gap kept between the menu and the bottom of the viewport.
    pub gutter: f32,
    /// Height below which the menu is never clamped.
    pub min_height: f32,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            gutter: 20.0,
            min_height: 200.0,
        }
    }
}

/// The clamping outcome for one menu open.
///
/// Recomputed every time the menu opens and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutDecision {
    /// Whether the menu must be width-clamped to its container.
    pub clamp_width: bool,
    /// The clamped width, when `clamp_width` is set.
    pub width: Option<f32>,
    /// Whether the menu must be height-clamped and made scrollable.
    pub clamp_height: bool,
    /// The maximum menu height, when `clamp_height` is set.
    pub max_height: Option<f32>,
}

/// Decides which clamps the menu needs for this open.
///
/// The width clamp applies when the menu overshoots the right edge of the
/// positioning container; without a container it never applies. The height
/// clamp applies when the menu overshoots the bottom of the viewport minus
/// the gutter. Both comparisons are strict, both clamps are independent, and
/// the clamped width never goes negative.
#[must_use]
pub fn decide(
    menu: Rectangle,
    viewport: Rectangle,
    container: Option<Rectangle>,
    constraints: Constraints,
) -> LayoutDecision {
    let mut decision = LayoutDecision::default();

    if let Some(container) = container {
        if menu.right() > container.right() {
            decision.clamp_width = true;
            decision.width = Some((container.right() - menu.x).max(0.0));
        }
    }

    let limit = viewport.bottom() - constraints.gutter;

    if menu.bottom() > limit {
        decision.clamp_height = true;
        decision.max_height = Some((limit - menu.y).max(constraints.min_height));
    }

    decision
}
