//! Wave queue scheduling.
//!
//! [`WaveQueueController`] decides which wave nodes exist, in which order and
//! with which stagger delay. It never measures time: the renderer animates
//! each node's phase and reports back through [`WaveQueueController::on_node_started`]
//! and [`WaveQueueController::on_node_completed`].

use crate::{ColorCycler, RainbowBarConfig, WaveId, WaveNode};

/// Observable phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveQueueState {
    /// Nothing queued, not running.
    Idle,
    /// Producing an unbounded stream of color waves.
    Running,
    /// Stopped, letting in-flight waves and the fade finish.
    Draining,
}

/// Owns the ordered wave queue (oldest first, painted bottom to top).
#[derive(Debug)]
pub struct WaveQueueController {
    config: RainbowBarConfig,
    cycler: ColorCycler,
    nodes: Vec<WaveNode>,
    running: bool,
    next_id: u64,
}

impl WaveQueueController {
    pub fn new(config: &RainbowBarConfig) -> Self {
        Self {
            config: config.clone(),
            cycler: ColorCycler::new(),
            nodes: Vec::new(),
            running: false,
            next_id: 0,
        }
    }

    /// Read-only view of the queue, oldest node first.
    pub fn current_nodes(&self) -> &[WaveNode] {
        &self.nodes
    }

    /// Settings the controller was built with.
    pub fn config(&self) -> &RainbowBarConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> WaveQueueState {
        match (self.running, self.nodes.is_empty()) {
            (true, _) => WaveQueueState::Running,
            (false, true) => WaveQueueState::Idle,
            (false, false) => WaveQueueState::Draining,
        }
    }

    /// Host toggle.
    ///
    /// Starting replaces the whole queue with a fresh staggered burst, even
    /// when already running; waves still in flight from an earlier run are
    /// dropped and their completions become stale. Stopping is soft: unstarted
    /// nodes vanish, in-flight ones keep going and are capped with a single
    /// fade segment.
    pub fn set_running(&mut self, running: bool) {
        if running {
            self.start();
        } else if self.running {
            self.stop();
        }
    }

    fn start(&mut self) {
        self.nodes.clear();

        for index in 0..self.config.visible_waves_count {
            let delay = self.config.wave_emit_period * index as f64;
            // An empty palette skips the slot.
            self.push_color_wave(delay);
        }

        self.running = true;
        tracing::debug!(nodes = self.nodes.len(), "wave queue started");
    }

    fn stop(&mut self) {
        self.nodes.retain(WaveNode::is_started);

        if let Some(color) = self.nodes.last().and_then(WaveNode::stripe_color) {
            let id = self.allocate_id();
            tracing::trace!(%id, front = %color, "capping queue with fade");
            self.nodes
                .push(WaveNode::fade(id, color, self.config.background_color));
        }

        self.running = false;
        tracing::debug!(nodes = self.nodes.len(), "wave queue draining");
    }

    /// The renderer observed the node's phase leave 0.
    pub fn on_node_started(&mut self, id: WaveId) {
        match self.position(id) {
            Some(index) => self.nodes[index].mark_started(),
            None => tracing::trace!(%id, "start reported for unknown wave"),
        }
    }

    /// The renderer observed the node's phase reach 1.
    ///
    /// Unknown ids and repeated reports are ignored.
    pub fn on_node_completed(&mut self, id: WaveId) {
        let Some(index) = self.position(id) else {
            tracing::trace!(%id, "completion reported for unknown wave");
            return;
        };
        if self.nodes[index].is_finished() {
            tracing::trace!(%id, "duplicate completion ignored");
            return;
        }
        self.nodes[index].mark_finished();

        // Drop the oldest node only once the one above it has also finished,
        // so there is never a gap under the newest stripe.
        if self.nodes.len() >= 2 && self.nodes[1].is_finished() {
            let retired = self.nodes.remove(0);
            tracing::trace!(id = %retired.id(), "retired wave");
        }

        if self.running {
            self.push_color_wave(0.0);
        } else if self.nodes.iter().all(WaveNode::is_finished) {
            tracing::debug!(remaining = self.nodes.len(), "wave queue drained");
            self.nodes.clear();
        }
    }

    fn push_color_wave(&mut self, delay: f64) {
        let Some(color) = self.cycler.next(&self.config.palette) else {
            return;
        };
        let id = self.allocate_id();
        tracing::trace!(%id, %color, delay, "queued wave");
        self.nodes.push(WaveNode::color(id, color, delay));
    }

    fn allocate_id(&mut self) -> WaveId {
        let id = WaveId(self.next_id);
        self.next_id += 1;
        id
    }

    fn position(&self, id: WaveId) -> Option<usize> {
        self.nodes.iter().position(|node| node.id() == id)
    }
}
