//! Stamina Meter
//!
//! Depletion/regeneration state for sprint gating. Stamina drains while the
//! player sprint-moves and regenerates after a delay; running dry locks
//! sprinting out until the meter climbs back over a recovery threshold.
//!
//! The regen timer resets only on frames that actually drain. Releasing
//! sprint without having drained leaves the timer running, so regeneration
//! can begin immediately after the release; the delay restarts the instant
//! draining resumes.

use log::debug;

use crate::config::StaminaConfig;

/// Fraction of max stamina at which sprinting unlocks again after running dry.
pub const RECOVERY_FRACTION: f32 = 0.2;

/// Sprint stamina resource.
#[derive(Debug, Clone)]
pub struct StaminaMeter {
    stamina: f32,
    max_stamina: f32,
    depletion_rate: f32,
    regen_rate: f32,
    regen_delay: f32,
    regen_timer: f32,
    can_sprint: bool,
}

impl StaminaMeter {
    /// Create a full meter from stamina tunables.
    pub fn new(config: &StaminaConfig) -> Self {
        Self {
            stamina: config.max_stamina,
            max_stamina: config.max_stamina,
            depletion_rate: config.depletion_rate,
            regen_rate: config.regen_rate,
            regen_delay: config.regen_delay,
            regen_timer: 0.0,
            can_sprint: true,
        }
    }

    /// Current stamina in points.
    #[inline]
    pub fn stamina(&self) -> f32 {
        self.stamina
    }

    /// Stamina capacity in points.
    #[inline]
    pub fn max_stamina(&self) -> f32 {
        self.max_stamina
    }

    /// Current stamina as a fraction of capacity, 0.0 to 1.0.
    #[inline]
    pub fn fraction(&self) -> f32 {
        self.stamina / self.max_stamina
    }

    /// Whether sprinting is currently allowed.
    #[inline]
    pub fn can_sprint(&self) -> bool {
        self.can_sprint
    }

    /// Whether the meter is at capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stamina >= self.max_stamina
    }

    /// Whether any stamina is left to start a sprint with.
    #[inline]
    pub fn has_stamina(&self) -> bool {
        self.stamina > 0.0
    }

    /// Advance the meter by one frame.
    ///
    /// `draining` is true on frames where the player is sprinting and
    /// actually moving. Returns `true` on the frame stamina runs dry, which
    /// is the caller's cue to force sprint off.
    pub fn update(&mut self, dt: f32, draining: bool) -> bool {
        if draining {
            let had_stamina = self.stamina > 0.0;
            self.stamina -= self.depletion_rate * dt;
            self.regen_timer = 0.0;
            if self.stamina <= 0.0 {
                self.stamina = 0.0;
                self.can_sprint = false;
                return had_stamina;
            }
        } else {
            self.regen_timer += dt;
            if self.regen_timer >= self.regen_delay {
                self.stamina = (self.stamina + self.regen_rate * dt).min(self.max_stamina);
            }
            if !self.can_sprint && self.stamina >= self.max_stamina * RECOVERY_FRACTION {
                self.can_sprint = true;
                debug!(
                    "stamina recovered to {:.0}/{:.0}, sprint unlocked",
                    self.stamina, self.max_stamina
                );
            }
        }
        false
    }

    /// Refill to capacity and unlock sprinting (respawn or pickup).
    pub fn refill(&mut self) {
        self.stamina = self.max_stamina;
        self.regen_timer = 0.0;
        self.can_sprint = true;
    }
}
