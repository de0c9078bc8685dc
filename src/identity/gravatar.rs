use crate::foundation::num::PixelDensity;

const GRAVATAR_BASE: &str = "https://www.gravatar.com/avatar";

/// Descriptor for a remote avatar image, fetched by the host surface.
///
/// The URI is byte-stable for a given `(email, size, density)` triple so the
/// remote service's caching keeps working across reimplementations.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RemoteImage {
    /// Full request URI (digest, device pixel size, blank-on-miss flag).
    pub uri: String,
    /// Lowercase hex MD5 digest of the normalized email.
    pub digest: String,
    /// Requested image size in device pixels.
    pub pixel_size: u32,
}

/// Normalize an email-like identifier for hashing: trim, then lowercase.
///
/// Must stay in sync with what the remote service hashes on its side;
/// case and surrounding whitespace never change the digest.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 32-char lowercase hex MD5 digest of the normalized email.
///
/// Never fails: malformed input simply hashes to a digest the remote endpoint
/// resolves as "not found", which surfaces later as a load-failure signal.
pub fn email_digest_hex(email: &str) -> String {
    format!("{:x}", md5::compute(normalize_email(email).as_bytes()))
}

/// Build the remote source descriptor for `email` at the given layout size.
///
/// `d=blank` asks the endpoint for a transparent result when no image exists
/// for the identifier, so a miss is reported as a load failure instead of a
/// substituted placeholder image.
pub fn resolve_remote_source(size: f64, email: &str, density: PixelDensity) -> RemoteImage {
    let digest = email_digest_hex(email);
    let pixel_size = density.pixel_size(size);
    let uri = format!("{GRAVATAR_BASE}/{digest}?s={pixel_size}&d=blank");
    RemoteImage {
        uri,
        digest,
        pixel_size,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/identity/gravatar.rs"]
mod tests;
