use super::*;

#[test]
fn normalization_is_case_and_whitespace_insensitive() {
    assert_eq!(normalize_email("  A@B.com "), "a@b.com");
    let density = PixelDensity::default();
    let a = resolve_remote_source(50.0, "A@B.com ", density);
    let b = resolve_remote_source(50.0, "a@b.com", density);
    assert_eq!(a, b);
}

#[test]
fn digest_matches_reference_vector() {
    assert_eq!(
        email_digest_hex(" A@B.com "),
        "357a20e8c56e69d6f9734d23ef9517e8"
    );
}

#[test]
fn uri_embeds_digest_pixel_size_and_blank_flag() {
    let density = PixelDensity::new(2.0).unwrap();
    let remote = resolve_remote_source(50.0, "a@b.com", density);
    assert_eq!(remote.pixel_size, 100);
    assert_eq!(
        remote.uri,
        "https://www.gravatar.com/avatar/357a20e8c56e69d6f9734d23ef9517e8?s=100&d=blank"
    );
}

#[test]
fn size_changes_the_descriptor_but_not_the_digest() {
    let density = PixelDensity::default();
    let small = resolve_remote_source(32.0, "a@b.com", density);
    let large = resolve_remote_source(64.0, "a@b.com", density);
    assert_eq!(small.digest, large.digest);
    assert_ne!(small.uri, large.uri);
}

#[test]
fn malformed_email_still_yields_a_descriptor() {
    for input in ["", "   ", "not an email", "@@@"] {
        let remote = resolve_remote_source(50.0, input, PixelDensity::default());
        assert_eq!(remote.digest.len(), 32);
        assert!(remote.digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!remote.digest.chars().any(|c| c.is_ascii_uppercase()));
    }
}
