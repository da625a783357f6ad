use std::fmt;

use crate::Color;

/// Stable identity of a wave node. Allocated by the controller, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaveId(pub u64);

impl fmt::Display for WaveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wave#{}", self.0)
    }
}

/// What a node paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveKind {
    /// A solid stripe sweeping across the surface.
    Color { color: Color },
    /// Terminal segment blending from the last stripe back to the background.
    Fade {
        front_color: Color,
        back_color: Color,
    },
}

/// One animated segment in the wave queue.
///
/// Only the controller flips `started`/`finished`; everyone else gets a
/// read-only view through the accessors.
#[derive(Debug, Clone)]
pub struct WaveNode {
    id: WaveId,
    delay: f64,
    kind: WaveKind,
    started: bool,
    finished: bool,
}

impl WaveNode {
    pub(crate) fn color(id: WaveId, color: Color, delay: f64) -> Self {
        Self::new(id, WaveKind::Color { color }, delay)
    }

    pub(crate) fn fade(id: WaveId, front_color: Color, back_color: Color) -> Self {
        Self::new(
            id,
            WaveKind::Fade {
                front_color,
                back_color,
            },
            0.0,
        )
    }

    fn new(id: WaveId, kind: WaveKind, delay: f64) -> Self {
        Self {
            id,
            delay,
            kind,
            started: false,
            finished: false,
        }
    }

    pub fn id(&self) -> WaveId {
        self.id
    }

    /// Seconds between the node entering the queue and its phase leaving 0.
    pub fn delay(&self) -> f64 {
        self.delay
    }

    pub fn kind(&self) -> &WaveKind {
        &self.kind
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_fade(&self) -> bool {
        matches!(self.kind, WaveKind::Fade { .. })
    }

    /// Color of a solid stripe, `None` for the fade segment.
    pub fn stripe_color(&self) -> Option<Color> {
        match self.kind {
            WaveKind::Color { color } => Some(color),
            WaveKind::Fade { .. } => None,
        }
    }

    pub(crate) fn mark_started(&mut self) {
        self.started = true;
    }

    /// Completion implies start, so `finished` never outruns `started`.
    pub(crate) fn mark_finished(&mut self) {
        self.started = true;
        self.finished = true;
    }
}

impl PartialEq for WaveNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for WaveNode {}
