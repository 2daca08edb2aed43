use crate::foundation::core::Rgb8;
use crate::foundation::error::{CellfxError, CellfxResult};
use crate::foundation::math::cell_count;

/// Opacity written by occupancy compositing. Any nonzero value counts as occupied; using
/// full coverage keeps occupancy output valid input for alpha blending.
pub const OPAQUE: u8 = 255;

/// Opacity of an empty cell.
pub const TRANSPARENT: u8 = 0;

/// A rectangular buffer of cells: color, opacity and glyph per cell, plus a screen
/// position used by whoever composites it.
///
/// The three maps are dense, row-major (`row * width + col`) and always `width * height`
/// long. Only [`PixelSurface::resize`] (and the transform helpers built on it) changes
/// the dimensions.
///
/// Opacity has two readings. Occupancy compositing ([`crate::composite::merge`]) asks
/// [`PixelSurface::is_occupied`]; alpha blending ([`crate::composite::blend`]) asks
/// [`PixelSurface::coverage`]. A coverage of 1 is "occupied" for the former and nearly
/// invisible for the latter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelSurface {
    w: u32,
    h: u32,
    /// Column of the top-left cell in the destination's coordinate space.
    pub x: i32,
    /// Row of the top-left cell in the destination's coordinate space.
    pub y: i32,
    /// Depth. Larger values are nearer to the viewer.
    pub z: i32,
    color_map: Vec<Rgb8>,
    opacity_map: Vec<u8>,
    glyph_map: Vec<Option<char>>,
}

impl PixelSurface {
    /// Allocate a fully transparent `w x h` surface whose cells carry `fill`.
    pub fn new(w: u32, h: u32, fill: Rgb8) -> CellfxResult<Self> {
        let len = checked_len(w, h)?;
        Ok(Self {
            w,
            h,
            x: 0,
            y: 0,
            z: 0,
            color_map: alloc_filled(len, fill)?,
            opacity_map: alloc_filled(len, TRANSPARENT)?,
            glyph_map: alloc_filled(len, None)?,
        })
    }

    /// Allocate a `w x h` surface where every cell is `color` and opaque.
    pub fn filled(w: u32, h: u32, color: Rgb8) -> CellfxResult<Self> {
        let mut s = Self::new(w, h, color)?;
        s.set_alpha(OPAQUE);
        Ok(s)
    }

    pub fn width(&self) -> u32 {
        self.w
    }

    pub fn height(&self) -> u32 {
        self.h
    }

    pub fn size(&self) -> (u32, u32) {
        (self.w, self.h)
    }

    pub fn len(&self) -> usize {
        self.color_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.color_map.is_empty()
    }

    pub fn position(&self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }

    pub fn set_position(&mut self, x: i32, y: i32, z: i32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Row-major index of `(col, row)`, or `None` outside the surface.
    pub fn index(&self, col: u32, row: u32) -> Option<usize> {
        if col < self.w && row < self.h {
            Some(row as usize * self.w as usize + col as usize)
        } else {
            None
        }
    }

    /// `true` when the signed coordinate lies inside the surface.
    pub fn contains(&self, col: i64, row: i64) -> bool {
        col >= 0 && row >= 0 && col < i64::from(self.w) && row < i64::from(self.h)
    }

    pub fn color(&self, col: u32, row: u32) -> Option<Rgb8> {
        self.index(col, row).map(|i| self.color_map[i])
    }

    pub fn opacity(&self, col: u32, row: u32) -> Option<u8> {
        self.index(col, row).map(|i| self.opacity_map[i])
    }

    pub fn glyph(&self, col: u32, row: u32) -> Option<char> {
        self.index(col, row).and_then(|i| self.glyph_map[i])
    }

    /// Boolean reading of opacity: any nonzero value claims the cell.
    pub fn is_occupied(&self, col: u32, row: u32) -> bool {
        self.opacity(col, row).is_some_and(|a| a != TRANSPARENT)
    }

    /// Continuous reading of opacity (0 = empty, 255 = full coverage).
    pub fn coverage(&self, col: u32, row: u32) -> u8 {
        self.opacity(col, row).unwrap_or(TRANSPARENT)
    }

    /// Write color and opacity of one cell. Out-of-range coordinates are ignored.
    pub fn set_cell(&mut self, col: u32, row: u32, color: Rgb8, opacity: u8) {
        if let Some(i) = self.index(col, row) {
            self.color_map[i] = color;
            self.opacity_map[i] = opacity;
        }
    }

    pub fn set_color(&mut self, col: u32, row: u32, color: Rgb8) {
        if let Some(i) = self.index(col, row) {
            self.color_map[i] = color;
        }
    }

    pub fn set_opacity(&mut self, col: u32, row: u32, opacity: u8) {
        if let Some(i) = self.index(col, row) {
            self.opacity_map[i] = opacity;
        }
    }

    pub fn set_glyph(&mut self, col: u32, row: u32, glyph: Option<char>) {
        if let Some(i) = self.index(col, row) {
            self.glyph_map[i] = glyph;
        }
    }

    /// Paint an opaque rectangle, clipped to the surface.
    pub fn fill_rect(&mut self, col: u32, row: u32, w: u32, h: u32, color: Rgb8) {
        let col_end = col.saturating_add(w).min(self.w);
        let row_end = row.saturating_add(h).min(self.h);
        for r in row.min(row_end)..row_end {
            let base = r as usize * self.w as usize;
            for c in col.min(col_end)..col_end {
                self.color_map[base + c as usize] = color;
                self.opacity_map[base + c as usize] = OPAQUE;
            }
        }
    }

    pub fn colors(&self) -> &[Rgb8] {
        &self.color_map
    }

    pub fn colors_mut(&mut self) -> &mut [Rgb8] {
        &mut self.color_map
    }

    pub fn opacities(&self) -> &[u8] {
        &self.opacity_map
    }

    pub fn opacities_mut(&mut self) -> &mut [u8] {
        &mut self.opacity_map
    }

    pub fn glyphs(&self) -> &[Option<char>] {
        &self.glyph_map
    }

    pub fn glyphs_mut(&mut self) -> &mut [Option<char>] {
        &mut self.glyph_map
    }

    /// All three maps at once, for loops that read one and write another.
    pub fn maps_mut(&mut self) -> (&mut [Rgb8], &mut [u8], &mut [Option<char>]) {
        (
            &mut self.color_map,
            &mut self.opacity_map,
            &mut self.glyph_map,
        )
    }

    /// Broadcast one opacity value to every cell.
    pub fn set_alpha(&mut self, value: u8) {
        self.opacity_map.fill(value);
    }

    /// Make every cell transparent, glyph-less and colored `fill`.
    pub fn clear(&mut self, fill: Rgb8) {
        self.color_map.fill(fill);
        self.opacity_map.fill(TRANSPARENT);
        self.glyph_map.fill(None);
    }

    /// Reallocate to `new_w x new_h`, keeping existing cells at their coordinates.
    ///
    /// Growth adds transparent black cells on the right and bottom; shrinking crops.
    /// On allocation failure the surface is left untouched.
    pub fn resize(&mut self, new_w: u32, new_h: u32) -> CellfxResult<()> {
        if (new_w, new_h) == (self.w, self.h) {
            return Ok(());
        }
        let len = checked_len(new_w, new_h)?;
        let mut colors = alloc_filled(len, Rgb8::BLACK)?;
        let mut opacities = alloc_filled(len, TRANSPARENT)?;
        let mut glyphs = alloc_filled(len, None)?;

        let copy_w = self.w.min(new_w) as usize;
        let copy_h = self.h.min(new_h) as usize;
        for row in 0..copy_h {
            let src = row * self.w as usize;
            let dst = row * new_w as usize;
            colors[dst..dst + copy_w].copy_from_slice(&self.color_map[src..src + copy_w]);
            opacities[dst..dst + copy_w].copy_from_slice(&self.opacity_map[src..src + copy_w]);
            glyphs[dst..dst + copy_w].copy_from_slice(&self.glyph_map[src..src + copy_w]);
        }

        tracing::debug!(
            from_w = self.w,
            from_h = self.h,
            to_w = new_w,
            to_h = new_h,
            "surface resized"
        );
        self.w = new_w;
        self.h = new_h;
        self.color_map = colors;
        self.opacity_map = opacities;
        self.glyph_map = glyphs;
        Ok(())
    }

    /// Deep copy of `other`: size, position, depth and all three maps.
    ///
    /// Reuses the existing allocation when the cell counts match.
    pub fn copy_from(&mut self, other: &PixelSurface) -> CellfxResult<()> {
        if self.len() == other.len() {
            self.color_map.copy_from_slice(&other.color_map);
            self.opacity_map.copy_from_slice(&other.opacity_map);
            self.glyph_map.copy_from_slice(&other.glyph_map);
        } else {
            self.color_map = clone_slice(&other.color_map)?;
            self.opacity_map = clone_slice(&other.opacity_map)?;
            self.glyph_map = clone_slice(&other.glyph_map)?;
        }
        self.w = other.w;
        self.h = other.h;
        self.set_position(other.x, other.y, other.z);
        Ok(())
    }

    /// Fallible counterpart of `clone`.
    pub fn try_clone(&self) -> CellfxResult<Self> {
        Ok(Self {
            w: self.w,
            h: self.h,
            x: self.x,
            y: self.y,
            z: self.z,
            color_map: clone_slice(&self.color_map)?,
            opacity_map: clone_slice(&self.opacity_map)?,
            glyph_map: clone_slice(&self.glyph_map)?,
        })
    }
}

fn checked_len(w: u32, h: u32) -> CellfxResult<usize> {
    cell_count(w, h).ok_or_else(|| CellfxError::alloc(format!("surface {w}x{h} overflows")))
}

pub(crate) fn alloc_filled<T: Clone>(len: usize, value: T) -> CellfxResult<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)?;
    v.resize(len, value);
    Ok(v)
}

fn clone_slice<T: Copy>(src: &[T]) -> CellfxResult<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(src.len())?;
    v.extend_from_slice(src);
    Ok(v)
}

#[cfg(test)]
#[path = "../../tests/unit/surface/pixel.rs"]
mod tests;
