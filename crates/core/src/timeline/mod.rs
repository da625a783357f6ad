use std::{cmp::Ordering, collections::HashMap};

use crate::{WaveId, WaveNode};

#[derive(Debug, Default, Clone)]
pub struct PlaybackClock {
    pub time_seconds: f64,
}

impl PlaybackClock {
    pub fn advance(&mut self, delta: f64) {
        self.time_seconds = (self.time_seconds + delta).max(0.0);
    }
}

/// Phase transition observed by the driver, to be fed into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveEvent {
    /// Phase left 0.
    Started(WaveId),
    /// Phase reached 1.
    Completed(WaveId),
}

#[derive(Debug, Clone)]
struct Track {
    order: u64,
    start_at: f64,
    started: bool,
    completed: bool,
}

/// Frame clock standing in for the renderer's implicit animation system.
///
/// Each node gets a phase that stays at 0 for its delay, then eases in to 1
/// over `duration` seconds. The driver only reports transitions; it never
/// touches the queue.
#[derive(Debug)]
pub struct AnimationDriver {
    clock: PlaybackClock,
    duration: f64,
    tracks: HashMap<WaveId, Track>,
    next_order: u64,
}

impl AnimationDriver {
    pub fn new(duration: f64) -> Self {
        Self {
            clock: PlaybackClock::default(),
            duration,
            tracks: HashMap::new(),
            next_order: 0,
        }
    }

    /// Starts tracking nodes seen for the first time and forgets nodes that
    /// left the queue. New nodes start their delay at the current time.
    pub fn sync(&mut self, nodes: &[WaveNode]) {
        self.tracks
            .retain(|id, _| nodes.iter().any(|node| node.id() == *id));

        for node in nodes {
            if self.tracks.contains_key(&node.id()) {
                continue;
            }
            let track = Track {
                order: self.next_order,
                start_at: self.clock.time_seconds + node.delay().max(0.0),
                started: false,
                completed: false,
            };
            self.next_order += 1;
            self.tracks.insert(node.id(), track);
        }
    }

    /// Moves the clock forward and returns the transitions that happened,
    /// ordered by when they happened.
    pub fn advance(&mut self, delta: f64) -> Vec<WaveEvent> {
        self.clock.advance(delta);
        let now = self.clock.time_seconds;

        let mut due: Vec<(f64, u64, u8, WaveEvent)> = Vec::new();
        for (id, track) in &mut self.tracks {
            if !track.started && now > track.start_at {
                track.started = true;
                due.push((track.start_at, track.order, 0, WaveEvent::Started(*id)));
            }
            let end_at = track.start_at + self.duration;
            if !track.completed && now >= end_at {
                track.completed = true;
                track.started = true;
                due.push((end_at, track.order, 1, WaveEvent::Completed(*id)));
            }
        }

        due.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(Ordering::Equal)
                .then(a.1.cmp(&b.1))
                .then(a.2.cmp(&b.2))
        });
        due.into_iter().map(|(_, _, _, event)| event).collect()
    }

    /// Eased phase of a tracked node; `None` when the node is unknown.
    pub fn phase(&self, id: WaveId) -> Option<f32> {
        let track = self.tracks.get(&id)?;
        if track.completed {
            return Some(1.0);
        }
        let progress = if self.duration > 0.0 {
            (self.clock.time_seconds - track.start_at) / self.duration
        } else if self.clock.time_seconds >= track.start_at {
            1.0
        } else {
            0.0
        };
        Some(ease_in(progress.clamp(0.0, 1.0) as f32))
    }
}

fn ease_in(t: f32) -> f32 {
    t * t
}
