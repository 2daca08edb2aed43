use std::ops::{Add, AddAssign};

/// Absolute 0-based frame counter handed in by the caller's animation loop.
///
/// The engine never interprets it as wall-clock time; effects derive progress from it.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Linear progress of this frame through `duration` frames, clamped to `[0, 1]`.
    ///
    /// A zero duration is treated as already finished.
    pub fn progress(self, duration: u64) -> f32 {
        if duration == 0 {
            return 1.0;
        }
        (self.0.min(duration) as f64 / duration as f64) as f32
    }
}

impl From<u64> for FrameIndex {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Straight 8-bit RGB color of one cell.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same value in all three channels.
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Channels as an array, in `r, g, b` order.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Inverse of [`Rgb8::to_array`].
    pub fn from_array(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    /// Largest absolute per-channel difference between two colors.
    pub fn max_channel_distance(self, other: Self) -> u8 {
        let d = |a: u8, b: u8| a.abs_diff(b);
        d(self.r, other.r)
            .max(d(self.g, other.g))
            .max(d(self.b, other.b))
    }
}

/// Extra border, in cells, an effect needs around its input to render without clipping.
///
/// The output of an expanding effect is `input + 2 * border` in each dimension.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SurfaceExpand {
    /// Extra columns on each of the left and right sides.
    pub border_x: u32,
    /// Extra rows on each of the top and bottom sides.
    pub border_y: u32,
}

impl SurfaceExpand {
    /// No expansion.
    pub const NONE: Self = Self {
        border_x: 0,
        border_y: 0,
    };

    /// Build an expansion.
    pub const fn new(border_x: u32, border_y: u32) -> Self {
        Self { border_x, border_y }
    }

    /// `true` when both borders are zero.
    pub fn is_none(self) -> bool {
        self.border_x == 0 && self.border_y == 0
    }

    /// Size of a surface of `(w, h)` grown by this border on every side.
    pub fn grow(self, (w, h): (u32, u32)) -> (u32, u32) {
        (
            w.saturating_add(self.border_x.saturating_mul(2)),
            h.saturating_add(self.border_y.saturating_mul(2)),
        )
    }
}

impl Add for SurfaceExpand {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            border_x: self.border_x.saturating_add(rhs.border_x),
            border_y: self.border_y.saturating_add(rhs.border_y),
        }
    }
}

impl AddAssign for SurfaceExpand {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
