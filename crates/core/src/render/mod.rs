use crate::{Color, Result, WaveFrame, WaveKind};

/// Output backend for composed bar rows.
pub trait Renderer {
    fn draw(&mut self, row: &[Color]) -> Result<()>;
}

/// Rendering backend that keeps every row it was handed. Useful for tests and
/// for headless runs.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    rows: Vec<Vec<Color>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Vec<Color>] {
        &self.rows
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, row: &[Color]) -> Result<()> {
        self.rows.push(row.to_vec());
        Ok(())
    }
}

/// Flattens the wave stack of one surface into a row of cells.
///
/// Lengths are in cells. `min_width` is the length of a wave head (the two
/// notch corner arcs); a color wave is two heads long at phase 0.
#[derive(Debug, Clone, Copy)]
pub struct StripeRasterizer {
    width: usize,
    min_width: f32,
}

impl StripeRasterizer {
    pub fn new(width: usize, min_width: f32) -> Self {
        Self {
            width,
            min_width: min_width.max(0.0),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Paints `frame` bottom to top over `background`.
    pub fn rasterize(&self, frame: &[WaveFrame], background: Color) -> Vec<Color> {
        let mut cells = vec![background; self.width];
        let span = self.width as f32;

        for wave in frame {
            let phase = wave.phase.clamp(0.0, 1.0);
            match *wave.node.kind() {
                WaveKind::Color { color } => {
                    let length = 2.0 * self.min_width + span * phase;
                    self.fill(&mut cells, length, color);
                }
                WaveKind::Fade {
                    front_color,
                    back_color,
                } => {
                    let solid = (span + self.min_width) * phase;
                    for (index, cell) in cells.iter_mut().enumerate() {
                        let x = index as f32 + 0.5;
                        if x < solid {
                            *cell = back_color.over(*cell);
                        } else if x < solid + self.min_width {
                            let t = (x - solid) / self.min_width;
                            *cell = back_color.lerp(front_color, t).over(*cell);
                        }
                    }
                }
            }
        }

        cells
    }

    fn fill(&self, cells: &mut [Color], length: f32, color: Color) {
        for (index, cell) in cells.iter_mut().enumerate() {
            if (index as f32 + 0.5) < length {
                *cell = color.over(*cell);
            }
        }
    }
}
