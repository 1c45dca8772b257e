/// Re-map `value` from the range `[from_start, from_end]` onto
/// `[to_start, to_end]`, keeping its relative position. Values outside the
/// source range extrapolate linearly; nothing is clamped.
///
/// Panics if the source range is empty, since every caller passes fixed
/// ranges and a zero-width one would otherwise poison the frame with NaN.
pub fn remap(value: f64, from_start: f64, from_end: f64, to_start: f64, to_end: f64) -> f64 {
    let span = from_end - from_start;
    assert!(
        span != 0.0,
        "remap: source range [{}, {}] is empty",
        from_start,
        from_end
    );
    let t = (value - from_start) / span;
    to_start + t * (to_end - to_start)
}
