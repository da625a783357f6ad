use crate::{
    AnimationDriver, RainbowBarConfig, Result, WaveEvent, WaveNode, WaveQueueController,
    WaveQueueState,
};

/// Snapshot of one node as the renderer should draw it.
#[derive(Debug, Clone)]
pub struct WaveFrame {
    pub node: WaveNode,
    pub phase: f32,
}

/// One animated half of the bar: a wave queue plus the clock that animates it.
#[derive(Debug)]
pub struct WaveSurface {
    controller: WaveQueueController,
    driver: AnimationDriver,
}

impl WaveSurface {
    pub fn new(config: &RainbowBarConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Builds a surface from a config the caller already validated.
    pub(crate) fn from_validated(config: &RainbowBarConfig) -> Self {
        Self {
            controller: WaveQueueController::new(config),
            driver: AnimationDriver::new(config.animation_duration()),
        }
    }

    pub fn set_running(&mut self, running: bool) {
        self.controller.set_running(running);
        self.driver.sync(self.controller.current_nodes());
    }

    /// Advances the animation by `delta` seconds and feeds every observed
    /// transition back into the queue, in the order it happened.
    pub fn tick(&mut self, delta: f64) {
        for event in self.driver.advance(delta) {
            match event {
                WaveEvent::Started(id) => self.controller.on_node_started(id),
                WaveEvent::Completed(id) => self.controller.on_node_completed(id),
            }
        }
        self.driver.sync(self.controller.current_nodes());
    }

    pub fn frame(&self) -> Vec<WaveFrame> {
        self.controller
            .current_nodes()
            .iter()
            .map(|node| WaveFrame {
                node: node.clone(),
                phase: self.driver.phase(node.id()).unwrap_or(0.0),
            })
            .collect()
    }

    pub fn state(&self) -> WaveQueueState {
        self.controller.state()
    }

    pub fn controller(&self) -> &WaveQueueController {
        &self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, WaveKind};

    const STEP: f64 = 1.0 / 60.0;

    fn surface() -> WaveSurface {
        WaveSurface::new(&RainbowBarConfig {
            wave_emit_period: 0.3,
            visible_waves_count: 3,
            ..Default::default()
        })
        .unwrap()
    }

    fn run_for(surface: &mut WaveSurface, seconds: f64) {
        let steps = (seconds / STEP).round() as usize;
        for _ in 0..steps {
            surface.tick(STEP);
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let config = RainbowBarConfig {
            visible_waves_count: 0,
            ..Default::default()
        };
        assert!(WaveSurface::new(&config).is_err());
    }

    #[test]
    fn sustains_stream_while_running() {
        let mut surface = surface();
        surface.set_running(true);

        for _ in 0..20 {
            run_for(&mut surface, 0.5);
            let len = surface.controller().current_nodes().len();
            assert!((1..=4).contains(&len), "queue length {len}");
            assert_eq!(surface.state(), WaveQueueState::Running);
        }
    }

    #[test]
    fn phases_follow_stagger() {
        let mut surface = surface();
        surface.set_running(true);
        run_for(&mut surface, 0.2);

        let frame = surface.frame();
        assert_eq!(frame.len(), 3);
        assert!(frame[0].phase > 0.0);
        assert_eq!(frame[1].phase, 0.0);
        assert_eq!(frame[2].phase, 0.0);
        assert!(frame[0].node.is_started());
        assert!(!frame[1].node.is_started());
    }

    #[test]
    fn stop_drains_to_idle() {
        let mut surface = surface();
        surface.set_running(true);
        run_for(&mut surface, 2.0);

        surface.set_running(false);
        let frame = surface.frame();
        assert_eq!(surface.state(), WaveQueueState::Draining);
        let last = frame.last().unwrap();
        assert!(matches!(
            last.node.kind(),
            WaveKind::Fade {
                back_color: Color::BLACK,
                ..
            }
        ));

        run_for(&mut surface, 3.0);
        assert_eq!(surface.state(), WaveQueueState::Idle);
        assert!(surface.frame().is_empty());
    }
}
