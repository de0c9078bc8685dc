use crate::foundation::color::Rgba8;
use crate::foundation::math::fnv1a64;

/// Fixed palette the per-name color is picked from.
///
/// Entries are part of the observable contract: the same name must map to the
/// same color across runs and platforms.
pub const PALETTE: [Rgba8; 10] = [
    Rgba8::rgb(0xe5, 0x39, 0x35), // red
    Rgba8::rgb(0xd8, 0x1b, 0x60), // pink
    Rgba8::rgb(0x8e, 0x24, 0xaa), // purple
    Rgba8::rgb(0x5e, 0x35, 0xb1), // deep purple
    Rgba8::rgb(0x39, 0x49, 0xab), // indigo
    Rgba8::rgb(0x1e, 0x88, 0xe5), // blue
    Rgba8::rgb(0x00, 0x89, 0x7b), // teal
    Rgba8::rgb(0x43, 0xa0, 0x47), // green
    Rgba8::rgb(0xfb, 0x8c, 0x00), // orange
    Rgba8::rgb(0xf4, 0x51, 0x1e), // deep orange
];

/// Initials plus optional derived color for a display name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Identity {
    /// Uppercased initials, possibly empty for whitespace-only names.
    pub initials: String,
    /// Palette color, present only when colorization was requested.
    pub color: Option<Rgba8>,
}

/// First character of each of the first two whitespace-separated tokens,
/// uppercased. Fewer tokens yield fewer characters; a whitespace-only name
/// yields an empty string (best effort, never an error).
pub fn initials_for(name: &str) -> String {
    let mut out = String::new();
    for token in name.split_whitespace().take(2) {
        if let Some(c) = token.chars().next() {
            out.extend(c.to_uppercase());
        }
    }
    out
}

/// Stable palette pick for `name`: FNV-1a 64 reduced modulo the palette size.
pub fn color_for_name(name: &str) -> Rgba8 {
    let idx = (fnv1a64(name.as_bytes()) % PALETTE.len() as u64) as usize;
    PALETTE[idx]
}

/// Derive the initials presentation for `name`. Pure: no IO, no randomness.
pub fn derive_identity(name: &str, colorize: bool) -> Identity {
    Identity {
        initials: initials_for(name),
        color: colorize.then(|| color_for_name(name)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/identity/initials.rs"]
mod tests;
