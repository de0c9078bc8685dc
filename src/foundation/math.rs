/// FNV-1a 64-bit over `bytes`.
///
/// Fixed offset basis and prime so the result is reproducible across runs,
/// platforms, and reimplementations (used for the name-to-color palette pick).
pub(crate) fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut h = 0xcbf2_9ce4_8422_2325u64;
    for &b in bytes {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x0000_0100_0000_01B3);
    }
    h
}
