/// `x * y / 255`, rounded down. Used where blending must truncate.
pub(crate) fn mul_div255_floor(x: u8, y: u8) -> u8 {
    ((u32::from(x) * u32::from(y)) / 255) as u8
}

/// Linear interpolation between two channel values, rounded to nearest.
pub(crate) fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    let t = t.clamp(0.0, 1.0);
    let a = f32::from(a);
    let b = f32::from(b);
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Convert an accumulated float channel back to `u8`.
pub(crate) fn f32_to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// `w * h` as a buffer length, or `None` when it does not fit in memory terms.
pub(crate) fn cell_count(w: u32, h: u32) -> Option<usize> {
    (w as usize).checked_mul(h as usize)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
