use super::*;

#[test]
fn mul_div255_floor_truncates() {
    assert_eq!(mul_div255_floor(255, 128), 128);
    assert_eq!(mul_div255_floor(1, 254), 0);
    assert_eq!(mul_div255_floor(255, 255), 255);
}

#[test]
fn lerp_u8_clamps_and_rounds() {
    assert_eq!(lerp_u8(128, 10, 0.5), 69);
    assert_eq!(lerp_u8(0, 255, 2.0), 255);
    assert_eq!(lerp_u8(200, 0, -1.0), 200);
}

#[test]
fn cell_count_multiplies_dimensions() {
    assert_eq!(cell_count(3, 4), Some(12));
    assert_eq!(cell_count(0, u32::MAX), Some(0));
}

#[test]
fn lerp_f32_extrapolates() {
    assert_eq!(lerp_f32(1.0, 3.0, 0.5), 2.0);
    assert_eq!(lerp_f32(0.0, 1.0, 2.0), 2.0);
}

#[test]
fn f32_to_u8_rounds_and_saturates() {
    assert_eq!(f32_to_u8(127.5), 128);
    assert_eq!(f32_to_u8(-4.0), 0);
    assert_eq!(f32_to_u8(300.0), 255);
}
