use serde::{Deserialize, Serialize};

/// Height of a status bar on devices without a notch, in points.
pub const NON_NOTCHED_STATUS_BAR_HEIGHT: f32 = 20.0;

/// Notch family of the target display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotchSize {
    #[default]
    None,
    /// 5.8" and 6.5" class displays.
    Small,
    /// 6.1" class displays.
    Big,
}

impl NotchSize {
    pub fn metrics(self) -> NotchMetrics {
        NotchMetrics::for_size(self)
    }
}

/// Device-dependent geometry of the notch the waves wrap around, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotchMetrics {
    pub top_corner_radius: f32,
    pub bottom_corner_radius: f32,
    pub height: f32,
    pub width: f32,
}

impl NotchMetrics {
    pub fn for_size(size: NotchSize) -> Self {
        let half_bar = NON_NOTCHED_STATUS_BAR_HEIGHT / 2.0;
        match size {
            NotchSize::None => Self {
                top_corner_radius: half_bar,
                bottom_corner_radius: half_bar,
                height: NON_NOTCHED_STATUS_BAR_HEIGHT,
                width: 0.0,
            },
            NotchSize::Small => Self {
                top_corner_radius: 6.0,
                bottom_corner_radius: 20.0,
                height: 30.0,
                width: 117.0,
            },
            NotchSize::Big => Self {
                top_corner_radius: 7.0,
                bottom_corner_radius: 21.0,
                height: 33.0,
                width: 128.0,
            },
        }
    }

    /// Shortest visible length of a wave head: both corner arcs side by side.
    pub fn min_width(&self) -> f32 {
        self.top_corner_radius + self.bottom_corner_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_device_geometry() {
        let small = NotchSize::Small.metrics();
        assert_eq!(small.min_width(), 26.0);
        assert_eq!(small.width, 117.0);

        let plain = NotchSize::None.metrics();
        assert_eq!(plain.min_width(), NON_NOTCHED_STATUS_BAR_HEIGHT);
        assert_eq!(plain.width, 0.0);
    }
}
