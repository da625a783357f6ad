use crate::{
    Color, NotchMetrics, RainbowBarConfig, Renderer, Result, StripeRasterizer, WaveQueueState,
    WaveSurface,
};

/// Screen points covered by one output cell.
pub const POINTS_PER_CELL: f32 = 8.0;

/// Full status-bar overlay: two wave surfaces running outwards from the notch.
///
/// The left half is mirrored so both halves start at the notch edge. Both
/// halves receive the same running toggle but keep independent queues.
#[derive(Debug)]
pub struct RainbowBar {
    left: WaveSurface,
    right: WaveSurface,
    rasterizer: StripeRasterizer,
    notch_cells: usize,
    background: Color,
}

impl RainbowBar {
    /// Builds a bar whose halves are each `half_width` cells wide.
    pub fn new(config: &RainbowBarConfig, half_width: usize) -> Result<Self> {
        config.validate()?;
        let metrics: NotchMetrics = config.notch.metrics();
        let rasterizer = StripeRasterizer::new(half_width, metrics.min_width() / POINTS_PER_CELL);
        let notch_cells = (metrics.width / POINTS_PER_CELL).round() as usize;

        tracing::debug!(
            half_width,
            notch_cells,
            notch = ?config.notch,
            duration = config.animation_duration(),
            "building rainbow bar"
        );

        Ok(Self {
            left: WaveSurface::from_validated(config),
            right: WaveSurface::from_validated(config),
            rasterizer,
            notch_cells,
            background: config.background_color,
        })
    }

    pub fn set_running(&mut self, running: bool) {
        tracing::info!(running, "toggling rainbow bar");
        self.left.set_running(running);
        self.right.set_running(running);
    }

    pub fn tick(&mut self, delta: f64) {
        self.left.tick(delta);
        self.right.tick(delta);
    }

    /// `Idle` only once both halves have drained.
    pub fn state(&self) -> WaveQueueState {
        match (self.left.state(), self.right.state()) {
            (WaveQueueState::Running, _) | (_, WaveQueueState::Running) => {
                WaveQueueState::Running
            }
            (WaveQueueState::Idle, WaveQueueState::Idle) => WaveQueueState::Idle,
            _ => WaveQueueState::Draining,
        }
    }

    pub fn width(&self) -> usize {
        self.rasterizer.width() * 2 + self.notch_cells
    }

    /// Composes the current frame: mirrored left half, notch gap, right half.
    pub fn compose(&self) -> Vec<Color> {
        let mut row = self.rasterizer.rasterize(&self.left.frame(), self.background);
        row.reverse();
        row.extend(std::iter::repeat(self.background).take(self.notch_cells));
        row.extend(self.rasterizer.rasterize(&self.right.frame(), self.background));
        row
    }

    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<()> {
        renderer.draw(&self.compose())
    }
}
