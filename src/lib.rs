//! Userpic is a deterministic avatar identity resolution and badge overlay engine.
//!
//! Userpic decides *what* to show for a person and *where* a status badge sits;
//! drawing, layout measurement, and network image loading stay with the host
//! rendering surface.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `AvatarRequest -> ResolvedAvatar` (which source wins: explicit,
//!    remote-derived, default image, or initials fallback)
//! 2. **React**: a one-shot load-failure signal from the host flips the current
//!    input generation to its fallback presentation
//! 3. **Overlay**: `BadgeSpec -> BadgeVisualState` (presence gate, size clamp,
//!    corner offset against the parent radius)
//! 4. **Animate**: `BadgeScale` springs the badge in on appearance and snaps it
//!    out on disappearance, driven by the host scheduler via `tick`
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: identity hashing (remote lookup digest, the
//!   name-to-color palette pick) uses fixed, specified algorithms that are
//!   stable across runs and platforms.
//! - **No IO**: the only asynchronous boundary, the remote image fetch, is
//!   owned by the host; this crate hands out descriptors and consumes signals.
//! - **Graceful degradation**: malformed identity input never errors; the
//!   worst observable outcome is the default presentation.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod avatar;
mod badge;
mod foundation;
mod identity;

pub use avatar::resolve::{
    AvatarRequest, AvatarResolver, BadgeOptions, Presentation, ResolvedAvatar, SourceKind,
};
pub use avatar::source::ImageSource;
pub use badge::geometry::{
    BadgePosition, BadgeSpec, BadgeVisualState, HorizontalEdge, MAX_BADGE_SIZE, MIN_BADGE_SIZE,
    VerticalEdge, corner_offset, resolve_badge,
};
pub use badge::spring::{AnimationPhase, BadgeScale};
pub use badge::value::{BadgeValue, format_badge_value};
pub use foundation::color::{Appearance, Rgba8, ThemeColor};
pub use foundation::error::{UserpicError, UserpicResult};
pub use foundation::num::{PixelDensity, clamp};
pub use identity::gravatar::{
    RemoteImage, email_digest_hex, normalize_email, resolve_remote_source,
};
pub use identity::initials::{Identity, PALETTE, color_for_name, derive_identity, initials_for};
