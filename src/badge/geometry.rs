use crate::{
    badge::value::{BadgeValue, format_badge_value},
    foundation::color::Rgba8,
    foundation::error::{UserpicError, UserpicResult},
    foundation::num::{PixelDensity, clamp},
};

/// Smallest rendered badge height in layout units.
pub const MIN_BADGE_SIZE: f64 = 15.0;
/// Largest rendered badge height in layout units.
pub const MAX_BADGE_SIZE: f64 = 45.0;

/// Corner of the parent shape a badge anchors to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum BadgePosition {
    /// Anchor the top and left edges.
    TopLeft,
    /// Anchor the top and right edges.
    TopRight,
    /// Anchor the bottom and left edges.
    BottomLeft,
    /// Anchor the bottom and right edges.
    BottomRight,
}

/// Vertical anchor edge implied by a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum VerticalEdge {
    /// Inset from the parent's top edge.
    Top,
    /// Inset from the parent's bottom edge.
    Bottom,
}

/// Horizontal anchor edge implied by a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum HorizontalEdge {
    /// Inset from the parent's left edge.
    Left,
    /// Inset from the parent's right edge.
    Right,
}

impl BadgePosition {
    /// Literal corner tag in `"top-right"` form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }

    /// Parse a literal corner tag.
    pub fn parse(s: &str) -> UserpicResult<Self> {
        match s.trim() {
            "top-left" => Ok(Self::TopLeft),
            "top-right" => Ok(Self::TopRight),
            "bottom-left" => Ok(Self::BottomLeft),
            "bottom-right" => Ok(Self::BottomRight),
            other => Err(UserpicError::validation(format!(
                "unknown badge position '{other}'"
            ))),
        }
    }

    /// Edges the corner offset applies to, symmetrically.
    pub fn anchors(self) -> (VerticalEdge, HorizontalEdge) {
        match self {
            Self::TopLeft => (VerticalEdge::Top, HorizontalEdge::Left),
            Self::TopRight => (VerticalEdge::Top, HorizontalEdge::Right),
            Self::BottomLeft => (VerticalEdge::Bottom, HorizontalEdge::Left),
            Self::BottomRight => (VerticalEdge::Bottom, HorizontalEdge::Right),
        }
    }
}

impl std::str::FromStr for BadgePosition {
    type Err = UserpicError;

    fn from_str(s: &str) -> UserpicResult<Self> {
        Self::parse(s)
    }
}

/// Badge configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BadgeSpec {
    /// Requested size before clamping to `[MIN_BADGE_SIZE, MAX_BADGE_SIZE]`.
    #[serde(default = "default_size")]
    pub size: f64,
    /// Fill color (fully transparent by default).
    #[serde(default = "default_color")]
    pub color: Rgba8,
    /// Corner radius; half the computed height when absent.
    #[serde(default)]
    pub radius: Option<f64>,
    /// Spring the badge in on appearance.
    #[serde(default = "default_animate")]
    pub animate: bool,
    /// Badge value; absent and falsy values render nothing.
    #[serde(default)]
    pub value: Option<BadgeValue>,
    /// Count display limit; counts above it collapse to `"{limit}+"`.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Corner radius of the parent shape the badge overlaps.
    #[serde(default)]
    pub parent_radius: f64,
    /// Anchor corner; unset means the host positions the badge itself.
    #[serde(default)]
    pub position: Option<BadgePosition>,
}

fn default_size() -> f64 {
    20.0
}

fn default_color() -> Rgba8 {
    Rgba8::TRANSPARENT
}

fn default_animate() -> bool {
    true
}

fn default_limit() -> u32 {
    9
}

impl Default for BadgeSpec {
    fn default() -> Self {
        Self {
            size: default_size(),
            color: default_color(),
            radius: None,
            animate: default_animate(),
            value: None,
            limit: default_limit(),
            parent_radius: 0.0,
            position: None,
        }
    }
}

impl BadgeSpec {
    /// Check caller-provided numeric configuration.
    pub fn validate(&self) -> UserpicResult<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(UserpicError::badge("badge size must be finite and > 0"));
        }
        if self.limit == 0 {
            return Err(UserpicError::badge("badge limit must be >= 1"));
        }
        if !self.parent_radius.is_finite() || self.parent_radius < 0.0 {
            return Err(UserpicError::badge(
                "badge parent radius must be finite and >= 0",
            ));
        }
        if let Some(r) = self.radius
            && (!r.is_finite() || r < 0.0)
        {
            return Err(UserpicError::badge("badge radius must be finite and >= 0"));
        }
        Ok(())
    }
}

/// Geometry the host needs to draw one badge.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BadgeVisualState {
    /// Rendered height.
    pub height: f64,
    /// Minimum width; text content may widen the badge past it.
    pub min_width: f64,
    /// Corner radius of the badge shape.
    pub corner_radius: f64,
    /// Formatted text, absent for indicator dots.
    pub display_text: Option<String>,
    /// Pixel-snapped inset applied to both anchored edges, when positioned.
    pub offset: Option<f64>,
    /// Anchor corner copied from the spec.
    pub position: Option<BadgePosition>,
}

impl BadgeVisualState {
    /// Whether the badge renders text content.
    pub fn has_text(&self) -> bool {
        self.display_text.is_some()
    }

    /// Origin of the badge box inside a `parent_size` square, for hosts that
    /// place children absolutely.
    ///
    /// Assumes the minimum (square) width; wider text content moves the free
    /// edge, which the host resolves after measuring.
    pub fn anchor_origin(&self, parent_size: f64) -> Option<kurbo::Point> {
        let (position, offset) = match (self.position, self.offset) {
            (Some(p), Some(o)) => (p, o),
            _ => return None,
        };
        let (v, h) = position.anchors();
        let x = match h {
            HorizontalEdge::Left => offset,
            HorizontalEdge::Right => parent_size - offset - self.min_width,
        };
        let y = match v {
            VerticalEdge::Top => offset,
            VerticalEdge::Bottom => parent_size - offset - self.height,
        };
        Some(kurbo::Point::new(x, y))
    }
}

/// Corner offset pulling the badge onto the parent's circular edge.
///
/// `parent_radius * (1 - sin 45°)` reaches the point where the circle's edge
/// sits at 45°; the second term pulls the badge inward by up to half its own
/// height so it overlaps the boundary instead of sitting fully outside it.
/// The pull fraction shrinks as the badge grows relative to the parent.
pub fn corner_offset(parent_radius: f64, height: f64, density: PixelDensity) -> f64 {
    let edge_offset = parent_radius * (1.0 - 45f64.to_radians().sin());
    let self_offset = (1.0 + clamp(parent_radius / height, 0.0, 1.0)) * (height / 4.0);
    density.round_to_nearest_pixel(edge_offset - self_offset)
}

/// Resolve a badge spec into drawable geometry.
///
/// Returns `Ok(None)` when the presence gate removes the badge from layout
/// entirely: absent value, zero count, or empty text.
pub fn resolve_badge(
    spec: &BadgeSpec,
    density: PixelDensity,
) -> UserpicResult<Option<BadgeVisualState>> {
    spec.validate()?;
    let Some(value) = spec.value.as_ref().filter(|v| v.is_present()) else {
        return Ok(None);
    };

    // Non-text badges render at half height: a small indicator dot sized
    // independently of its content.
    let full = clamp(spec.size, MIN_BADGE_SIZE, MAX_BADGE_SIZE);
    let height = if value.has_text() { full } else { full / 2.0 };
    let state = BadgeVisualState {
        height,
        min_width: height,
        corner_radius: spec.radius.unwrap_or(height / 2.0),
        display_text: format_badge_value(value, spec.limit),
        offset: spec
            .position
            .map(|_| corner_offset(spec.parent_radius, height, density)),
        position: spec.position,
    };
    tracing::debug!(?value, height = state.height, "resolved badge");
    Ok(Some(state))
}

#[cfg(test)]
#[path = "../../tests/unit/badge/geometry.rs"]
mod tests;
