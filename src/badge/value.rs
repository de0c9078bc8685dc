/// A badge's displayable value.
///
/// Absence is a distinct state (`Option<BadgeValue>` at the call sites); the
/// falsy forms of each variant are still dropped by [`BadgeValue::is_present`],
/// so a zero count and "no badge" look the same on screen.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum BadgeValue {
    /// Numeric counter, formatted against a display limit.
    Count(i64),
    /// Short text rendered as-is; single-line truncation is host-owned.
    Text(String),
    /// Opaque host node rendered as a half-height indicator dot.
    Indicator,
}

impl BadgeValue {
    /// Presence gate: zero counts and empty text count as absent and render
    /// nothing at all — the badge is removed from layout, not hidden.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Count(v) => *v != 0,
            Self::Text(t) => !t.is_empty(),
            Self::Indicator => true,
        }
    }

    /// Whether the value carries renderable text.
    pub fn has_text(&self) -> bool {
        matches!(self, Self::Count(_) | Self::Text(_))
    }

    /// Bridge from untyped JSON, reproducing loose truthiness at the input
    /// boundary: `null` and `false` mean no value, `true` and containers mean
    /// an opaque indicator node. Zero and empty text survive as values and
    /// are dropped later by [`BadgeValue::is_present`].
    ///
    /// Counts are integer-only: any number with an integral value becomes a
    /// [`BadgeValue::Count`] and joins the limit comparison; a number with a
    /// fractional part cannot, and passes through as text.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null | serde_json::Value::Bool(false) => None,
            serde_json::Value::Bool(true) => Some(Self::Indicator),
            serde_json::Value::Number(n) => Some(match (n.as_i64(), n.as_f64()) {
                (Some(v), _) => Self::Count(v),
                (None, Some(f)) if f == f.trunc() && f.abs() <= i64::MAX as f64 => {
                    Self::Count(f as i64)
                }
                _ => Self::Text(n.to_string()),
            }),
            serde_json::Value::String(s) => Some(Self::Text(s.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => Some(Self::Indicator),
        }
    }
}

/// Format a badge value against `limit`.
///
/// Counts above the limit collapse to `"{limit}+"`; other counts print as
/// plain decimals (no grouping, no locale). Text passes through unchanged.
/// Indicator nodes carry no text.
pub fn format_badge_value(value: &BadgeValue, limit: u32) -> Option<String> {
    match value {
        BadgeValue::Count(v) if *v > i64::from(limit) => Some(format!("{limit}+")),
        BadgeValue::Count(v) => Some(v.to_string()),
        BadgeValue::Text(t) => Some(t.clone()),
        BadgeValue::Indicator => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/badge/value.rs"]
mod tests;
