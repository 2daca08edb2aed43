use crate::effects::effect::{RenderEffect, blit_centered};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{CellfxError, CellfxResult};
use crate::surface::pixel::PixelSurface;

/// Largest per-channel step the walker accepts unless configured otherwise.
pub const DEFAULT_OUTLINE_THRESHOLD: u8 = 3;

/// Heading of the outline walker.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    #[default]
    Right,
    Down,
    Left,
}

impl Direction {
    /// Quarter turn clockwise (as seen on screen, rows growing downward).
    pub fn next(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// Quarter turn counterclockwise.
    pub fn prev(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Right => Self::Up,
            Self::Down => Self::Right,
            Self::Left => Self::Down,
        }
    }

    fn delta(self) -> (i64, i64) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }
}

/// Why a walk stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutlineEnd {
    /// Came back to the start cell.
    Closed,
    /// No acceptable step ahead, clockwise or counterclockwise.
    DeadEnd,
    /// Hit the `4 * w * h` step guard, e.g. looping on a cycle that excludes the start.
    StepLimit,
}

/// Cells visited by one walk, starting with the start cell. A closed walk does not
/// repeat the start at the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineTrace {
    pub cells: Vec<(u32, u32)>,
    pub end: OutlineEnd,
}

/// Walks the boundary of a same-colored region and shifts every visited cell's color one
/// step along the path.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OutlineRotator {
    pub start_x: u32,
    pub start_y: u32,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default = "default_threshold")]
    pub threshold: u8,
}

fn default_threshold() -> u8 {
    DEFAULT_OUTLINE_THRESHOLD
}

impl OutlineRotator {
    pub fn new(start_x: u32, start_y: u32, direction: Direction) -> Self {
        Self {
            start_x,
            start_y,
            direction,
            threshold: DEFAULT_OUTLINE_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// The walk over `input`, without writing anything.
    pub fn trace(&self, input: &PixelSurface) -> CellfxResult<OutlineTrace> {
        self.validate(input)?;
        let start = (self.start_x, self.start_y);
        let limit = 4 * u64::from(input.width()) * u64::from(input.height());

        let mut cells = vec![start];
        let mut here = start;
        let mut dir = self.direction;
        let mut steps = 0u64;
        let end = loop {
            if steps >= limit {
                break OutlineEnd::StepLimit;
            }
            let Some((d, to)) = [dir, dir.next(), dir.prev()]
                .into_iter()
                .find_map(|d| self.step(input, here, d).map(|to| (d, to)))
            else {
                break OutlineEnd::DeadEnd;
            };
            steps += 1;
            dir = d;
            here = to;
            if here == start {
                break OutlineEnd::Closed;
            }
            cells.push(here);
        };

        tracing::trace!(?end, cells = cells.len(), steps, "outline walk finished");
        Ok(OutlineTrace { cells, end })
    }

    /// Target of one step from `from` toward `dir`, if the walker may take it.
    fn step(&self, input: &PixelSurface, from: (u32, u32), dir: Direction) -> Option<(u32, u32)> {
        let (dx, dy) = dir.delta();
        let (tx, ty) = (i64::from(from.0) + dx, i64::from(from.1) + dy);
        if !input.contains(tx, ty) {
            return None;
        }
        let to = (tx as u32, ty as u32);
        if !input.is_occupied(to.0, to.1) {
            return None;
        }
        let here = input.color(from.0, from.1)?;
        let there = input.color(to.0, to.1)?;
        (here.max_channel_distance(there) <= self.threshold).then_some(to)
    }
}

impl RenderEffect for OutlineRotator {
    fn name(&self) -> &'static str {
        "outline_rotator"
    }

    fn validate(&self, input: &PixelSurface) -> CellfxResult<()> {
        let (x, y) = (self.start_x, self.start_y);
        if input.index(x, y).is_none() {
            return Err(CellfxError::invalid_position(format!(
                "outline start ({x}, {y}) is outside the {}x{} input",
                input.width(),
                input.height()
            )));
        }
        if !input.is_occupied(x, y) {
            return Err(CellfxError::invalid_position(format!(
                "outline start ({x}, {y}) is on a transparent cell"
            )));
        }
        Ok(())
    }

    fn run(
        &self,
        input: &PixelSurface,
        output: &mut PixelSurface,
        _frame: FrameIndex,
    ) -> CellfxResult<()> {
        let trace = self.trace(input)?;
        let rect = blit_centered(input, output)?;

        let mut hops: Vec<((u32, u32), (u32, u32))> =
            trace.cells.windows(2).map(|w| (w[0], w[1])).collect();
        if trace.end == OutlineEnd::Closed && trace.cells.len() > 1 {
            hops.push((trace.cells[trace.cells.len() - 1], trace.cells[0]));
        }

        for (from, to) in hops {
            if let Some(carried) = input.color(from.0, from.1) {
                output.set_color(rect.x + to.0, rect.y + to.1, carried);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/outline.rs"]
mod tests;
