use crate::{
    avatar::source::ImageSource,
    badge::geometry::{BadgePosition, BadgeSpec},
    badge::value::BadgeValue,
    foundation::color::{Rgba8, ThemeColor},
    foundation::error::{UserpicError, UserpicResult},
    foundation::num::{PixelDensity, clamp},
    identity::gravatar::resolve_remote_source,
    identity::initials::{Identity, derive_identity},
};

/// Default container color behind images and initials (light/dark pair).
const DEFAULT_COLOR: ThemeColor = ThemeColor::new(
    Rgba8::rgb(0xae, 0xae, 0xb2),
    Rgba8::rgb(0x63, 0x63, 0x66),
);

/// Inputs to avatar resolution.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AvatarRequest {
    /// Layout size of the avatar square, in layout units.
    #[serde(default = "default_size")]
    pub size: f64,
    /// Display name used for the initials fallback. Empty counts as absent.
    #[serde(default)]
    pub name: Option<String>,
    /// Email-like identifier for remote lookup. Empty counts as absent.
    #[serde(default)]
    pub email: Option<String>,
    /// Explicit image source; wins over every other source.
    #[serde(default)]
    pub source: Option<ImageSource>,
    /// Fallback image; the built-in asset when absent.
    #[serde(default)]
    pub default_source: Option<ImageSource>,
    /// Container color behind images and initials.
    #[serde(default = "default_color")]
    pub color: ThemeColor,
    /// Corner radius; half of `size` when absent, clamped to half of `size`.
    #[serde(default)]
    pub radius: Option<f64>,
    /// Derive a stable per-name color for the initials presentation.
    #[serde(default)]
    pub colorize: bool,
    /// Badge value owned by the avatar; `None` renders no badge at all.
    #[serde(default)]
    pub badge: Option<BadgeValue>,
    /// Badge fill color.
    #[serde(default)]
    pub badge_color: Option<Rgba8>,
    /// Badge option overrides (everything except value, color, and parent
    /// radius, which the avatar owns).
    #[serde(default)]
    pub badge_options: BadgeOptions,
}

fn default_size() -> f64 {
    50.0
}

fn default_color() -> ThemeColor {
    DEFAULT_COLOR
}

impl Default for AvatarRequest {
    fn default() -> Self {
        Self {
            size: default_size(),
            name: None,
            email: None,
            source: None,
            default_source: None,
            color: default_color(),
            radius: None,
            colorize: false,
            badge: None,
            badge_color: None,
            badge_options: BadgeOptions::default(),
        }
    }
}

impl AvatarRequest {
    /// Check caller-provided numeric configuration.
    pub fn validate(&self) -> UserpicResult<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(UserpicError::validation(
                "avatar size must be finite and > 0",
            ));
        }
        if let Some(r) = self.radius
            && (!r.is_finite() || r < 0.0)
        {
            return Err(UserpicError::validation(
                "avatar radius must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Corner radius, defaulting to and clamped at half the avatar size.
    pub fn border_radius(&self) -> f64 {
        clamp(self.radius.unwrap_or(self.size / 2.0), 0.0, self.size / 2.0)
    }

    /// Badge specification owned by this avatar, if a badge value is set.
    ///
    /// Position defaults to top-right and the parent radius is the avatar's
    /// resolved border radius. A zero count still yields a spec; its own
    /// presence gate then renders nothing.
    pub fn badge_spec(&self) -> Option<BadgeSpec> {
        let value = self.badge.clone()?;
        let opts = &self.badge_options;
        Some(BadgeSpec {
            size: opts.size,
            color: self.badge_color.unwrap_or(Rgba8::TRANSPARENT),
            radius: opts.radius,
            animate: opts.animate,
            value: Some(value),
            limit: opts.limit,
            parent_radius: self.border_radius(),
            position: Some(opts.position.unwrap_or(BadgePosition::TopRight)),
        })
    }

    fn has_email(&self) -> bool {
        self.email.as_deref().is_some_and(|e| !e.is_empty())
    }
}

/// Badge overrides an avatar accepts from its caller.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BadgeOptions {
    /// Requested badge size before clamping.
    #[serde(default = "default_badge_size")]
    pub size: f64,
    /// Badge corner radius override.
    #[serde(default)]
    pub radius: Option<f64>,
    /// Spring the badge in on appearance.
    #[serde(default = "default_animate")]
    pub animate: bool,
    /// Count display limit.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Anchor corner; top-right when unset.
    #[serde(default)]
    pub position: Option<BadgePosition>,
}

fn default_badge_size() -> f64 {
    20.0
}

fn default_animate() -> bool {
    true
}

fn default_limit() -> u32 {
    9
}

impl Default for BadgeOptions {
    fn default() -> Self {
        Self {
            size: default_badge_size(),
            radius: None,
            animate: default_animate(),
            limit: default_limit(),
            position: None,
        }
    }
}

/// Which source won priority resolution.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub enum SourceKind {
    /// Caller-supplied explicit source.
    Explicit,
    /// Remote source derived from the email identifier.
    Remote,
    /// Default image, the resolver's terminal fallback state.
    #[default]
    Default,
}

/// What the host surface should draw.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Presentation {
    /// Draw an image source.
    Image(ImageSource),
    /// Draw initials over a colored container. Reached only when the resolver
    /// state is [`SourceKind::Default`] and a name is present.
    Initials(Identity),
}

/// Output of one resolution pass.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResolvedAvatar {
    /// Resolver state that produced this presentation.
    pub kind: SourceKind,
    /// What to draw.
    pub presentation: Presentation,
    /// Resolved container corner radius.
    pub border_radius: f64,
    /// Logical input generation; the host must echo it back with a
    /// load-failure signal so stale fetches are ignored.
    pub generation: u64,
}

impl ResolvedAvatar {
    /// Effective image source; `None` for the initials presentation.
    pub fn source(&self) -> Option<&ImageSource> {
        match &self.presentation {
            Presentation::Image(source) => Some(source),
            Presentation::Initials(_) => None,
        }
    }

    /// Initials text when the initials presentation is active.
    pub fn initials(&self) -> Option<&str> {
        match &self.presentation {
            Presentation::Initials(identity) => Some(&identity.initials),
            Presentation::Image(_) => None,
        }
    }

    /// Derived per-name color when the initials presentation is colorized.
    pub fn derived_color(&self) -> Option<Rgba8> {
        match &self.presentation {
            Presentation::Initials(identity) => identity.color,
            Presentation::Image(_) => None,
        }
    }
}

/// Memoization key: exactly the inputs whose change re-triggers resolution.
#[derive(Clone, Debug, PartialEq)]
struct ResolutionKey {
    source: Option<ImageSource>,
    size: f64,
    email: Option<String>,
    default_source: Option<ImageSource>,
}

impl ResolutionKey {
    fn of(req: &AvatarRequest) -> Self {
        Self {
            source: req.source.clone(),
            size: req.size,
            email: req.email.clone(),
            default_source: req.default_source.clone(),
        }
    }
}

/// Source resolution state machine.
///
/// Priority is Explicit, then Remote, then Default, re-evaluated on every
/// [`AvatarResolver::resolve`] call. A load failure latches the current input
/// generation onto the Default fallback; any change to the identity-sensitive
/// inputs (`source`, `size`, `email`, `default_source`) escapes the latch.
/// Changing only `name` or `colorize` re-renders the initials presentation
/// without resetting resolution.
#[derive(Clone, Debug, Default)]
pub struct AvatarResolver {
    key: Option<ResolutionKey>,
    kind: SourceKind,
    failed: bool,
    generation: u64,
}

impl AvatarResolver {
    /// Resolver with no observed inputs yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical input generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[tracing::instrument(skip(self, req))]
    /// Evaluate the priority rules for `req`.
    ///
    /// Synchronous and side-effect-free apart from the resolver's own state;
    /// the remote fetch implied by a [`SourceKind::Remote`] result is owned
    /// by the host.
    pub fn resolve(
        &mut self,
        req: &AvatarRequest,
        density: PixelDensity,
    ) -> UserpicResult<ResolvedAvatar> {
        req.validate()?;

        let key = ResolutionKey::of(req);
        if self.key.as_ref() != Some(&key) {
            self.key = Some(key);
            self.failed = false;
            self.generation += 1;
        }

        let (kind, presentation) = if self.failed {
            (SourceKind::Default, default_presentation(req))
        } else if let Some(source) = &req.source {
            (SourceKind::Explicit, Presentation::Image(source.clone()))
        } else if req.has_email() {
            let email = req.email.as_deref().unwrap_or_default();
            let remote = resolve_remote_source(req.size, email, density);
            (
                SourceKind::Remote,
                Presentation::Image(ImageSource::Remote(remote)),
            )
        } else {
            (SourceKind::Default, default_presentation(req))
        };
        self.kind = kind;
        tracing::debug!(?kind, generation = self.generation, "resolved avatar");

        Ok(ResolvedAvatar {
            kind,
            presentation,
            border_radius: req.border_radius(),
            generation: self.generation,
        })
    }

    /// One-shot load-failure signal from the host image loader.
    ///
    /// `generation` must echo [`ResolvedAvatar::generation`]; signals from
    /// superseded fetches are ignored, as are signals while the Default
    /// fallback is already active. Returns whether the state changed (the
    /// next `resolve` call then yields the fallback presentation). No retry
    /// is performed; the fallback is one-shot per input generation.
    pub fn load_failed(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.failed {
            return false;
        }
        if !matches!(self.kind, SourceKind::Explicit | SourceKind::Remote) {
            return false;
        }
        self.failed = true;
        tracing::debug!(generation, "avatar source failed to load, falling back");
        true
    }
}

/// Terminal-state presentation: initials whenever a name is present,
/// otherwise the supplied or built-in default image.
fn default_presentation(req: &AvatarRequest) -> Presentation {
    match req.name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => Presentation::Initials(derive_identity(name, req.colorize)),
        None => Presentation::Image(
            req.default_source
                .clone()
                .unwrap_or_else(ImageSource::builtin_default),
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/resolve.rs"]
mod tests;
