#[inline]
pub fn lerp(from: f32, to: f32, amount: f32) -> f32 {
    from + (to - from) * amount
}

/// Linear re-mapping of `value` from `[in_lo, in_hi]` onto `[out_lo, out_hi]`
/// (unclamped).
#[inline]
pub fn map_range(value: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    if in_hi == in_lo {
        return out_lo;
    }
    out_lo + (value - in_lo) / (in_hi - in_lo) * (out_hi - out_lo)
}
