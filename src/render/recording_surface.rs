use crate::error::{CrosshairError, CrosshairResult};
use crate::render::{DrawSurface, LinePrimitive, MarkerPrimitive};

/// One call observed by `RecordingSurface`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceOp {
    Save,
    Restore,
    Line(LinePrimitive),
    Marker(MarkerPrimitive),
}

/// Headless surface that records every call.
///
/// It validates primitives and save/restore nesting so tests catch invalid
/// geometry or leaked state before a real backend is involved.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    depth: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = &MarkerPrimitive> {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::Marker(marker) => Some(marker),
            _ => None,
        })
    }

    /// Current save/restore nesting depth; zero when balanced.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn clear(&mut self) {
        self.ops.clear();
        self.depth = 0;
    }
}

impl DrawSurface for RecordingSurface {
    fn save(&mut self) -> CrosshairResult<()> {
        self.depth += 1;
        self.ops.push(SurfaceOp::Save);
        Ok(())
    }

    fn restore(&mut self) -> CrosshairResult<()> {
        if self.depth == 0 {
            return Err(CrosshairError::Surface(
                "restore without matching save".to_owned(),
            ));
        }
        self.depth -= 1;
        self.ops.push(SurfaceOp::Restore);
        Ok(())
    }

    fn stroke_line(&mut self, line: &LinePrimitive) -> CrosshairResult<()> {
        line.validate()?;
        self.ops.push(SurfaceOp::Line(*line));
        Ok(())
    }

    fn draw_marker(&mut self, marker: &MarkerPrimitive) -> CrosshairResult<()> {
        marker.validate()?;
        self.ops.push(SurfaceOp::Marker(*marker));
        Ok(())
    }
}
