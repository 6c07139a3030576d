//! Stamina Bar
//!
//! Fill, color, and fade state for the on-screen stamina indicator. The bar
//! shows the meter fraction with a three-step color code and fades out
//! entirely once stamina is full and the player is not sprinting, so the HUD
//! stays clean while nothing is happening.

use static_assertions::const_assert;

use crate::config::FeedbackConfig;

/// Below this fraction of capacity the bar turns red.
pub const LOW_FRACTION: f32 = 0.3;

/// Below this fraction of capacity (and at or above [`LOW_FRACTION`]) the
/// bar turns yellow; at or above it, green.
pub const MID_FRACTION: f32 = 0.6;

const_assert!(LOW_FRACTION < MID_FRACTION);
const_assert!(MID_FRACTION < 1.0);

/// Color step of the stamina bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    /// Nearly empty
    Red,
    /// Getting low
    Yellow,
    /// Comfortable
    Green,
}

impl BarColor {
    /// Pick the color step for a fill fraction.
    pub fn for_fraction(fraction: f32) -> Self {
        if fraction < LOW_FRACTION {
            BarColor::Red
        } else if fraction < MID_FRACTION {
            BarColor::Yellow
        } else {
            BarColor::Green
        }
    }

    /// Linear RGB for this step.
    pub fn rgb(&self) -> [f32; 3] {
        match self {
            BarColor::Red => [0.85, 0.2, 0.2],
            BarColor::Yellow => [0.9, 0.8, 0.2],
            BarColor::Green => [0.3, 0.8, 0.3],
        }
    }
}

/// One frame of stamina bar draw data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarVisual {
    /// Filled fraction, 0.0 to 1.0
    pub fill: f32,
    /// Color step for the fill
    pub color: BarColor,
    /// Bar opacity, 0.0 (hidden) to 1.0 (opaque)
    pub alpha: f32,
}

impl BarVisual {
    /// Fill color and opacity combined as RGBA.
    pub fn rgba(&self) -> [f32; 4] {
        let [r, g, b] = self.color.rgb();
        [r, g, b, self.alpha]
    }
}

/// Fade state for the stamina bar.
///
/// Each frame the opacity steps toward a target at constant `fade_speed`:
/// fully transparent while stamina sits at max with sprint released, fully
/// opaque otherwise. Recomputing the target every frame means the most
/// recent condition always supersedes a fade already in progress.
#[derive(Debug, Clone)]
pub struct StaminaBar {
    alpha: f32,
    fade_speed: f32,
}

impl StaminaBar {
    /// Create a bar that starts opaque and fades out once idle at full.
    pub fn new(config: &FeedbackConfig) -> Self {
        Self {
            alpha: 1.0,
            fade_speed: config.fade_speed,
        }
    }

    /// Current opacity.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Step the fade one frame and return this frame's draw data.
    pub fn update(&mut self, dt: f32, fill_fraction: f32, sprinting: bool) -> BarVisual {
        let target = if fill_fraction >= 1.0 && !sprinting {
            0.0
        } else {
            1.0
        };
        self.alpha = move_towards(self.alpha, target, self.fade_speed * dt);

        let fill = fill_fraction.clamp(0.0, 1.0);
        BarVisual {
            fill,
            color: BarColor::for_fraction(fill),
            alpha: self.alpha,
        }
    }
}

/// Step `current` toward `target` by at most `max_delta`.
fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}
