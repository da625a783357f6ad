//! Core library for the Rainbow Bar status-bar animation.
//!
//! The heart of the crate is [`WaveQueueController`], which decides which
//! colored wave segments exist and when they are added or retired. Everything
//! around it is plumbing: a round-robin [`ColorCycler`], an
//! [`AnimationDriver`] that plays the role of the renderer's clock, and a
//! [`StripeRasterizer`] that flattens the queue into a row of colors.

pub mod bar;
pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod notch;
pub mod palette;
pub mod render;
pub mod surface;
pub mod timeline;
pub mod wave;

pub use bar::RainbowBar;
pub use color::Color;
pub use config::RainbowBarConfig;
pub use controller::{WaveQueueController, WaveQueueState};
pub use error::{RainbowBarError, Result};
pub use notch::{NotchMetrics, NotchSize};
pub use palette::ColorCycler;
pub use render::{RecordingRenderer, Renderer, StripeRasterizer};
pub use surface::{WaveFrame, WaveSurface};
pub use timeline::{AnimationDriver, PlaybackClock, WaveEvent};
pub use wave::{WaveId, WaveKind, WaveNode};
