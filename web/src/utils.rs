use js_sys::Math::random;

/// Seed for a fresh deal, drawn from two 32-bit halves of `Math.random`.
pub(crate) fn js_random_seed() -> u64 {
    let half = || (random() * f64::from(u32::MAX)) as u64;
    (half() << 32) | half()
}
