//! Sprint Player Controller
//!
//! The full controller variant. On top of capsule movement, mouselook, and
//! jump it manages a stamina resource that gates sprinting, blends the
//! camera field of view while sprinting, and drives the fading stamina bar.
//!
//! # Frame sequence
//!
//! 1. Sprint requests: a sprint press is honored only while stamina is left;
//!    a release always clears the flag.
//! 2. Look rotations are applied to the body and camera holder.
//! 3. The stamina meter drains (sprint-moving) or regenerates; running dry
//!    forces sprint off.
//! 4. Speed blends toward its target and the capsule sweeps are issued.
//! 5. Field of view and bar feedback are produced for the host.
//!
//! # Usage
//!
//! ```rust,ignore
//! use strider_engine::config::ControllerConfig;
//! use strider_engine::player::SprintPlayerController;
//!
//! let mut player = SprintPlayerController::new(&ControllerConfig::default());
//!
//! // Each frame:
//! let input = collector.sample();
//! let feedback = player.update(delta_time, &input, &mut body, &mut camera);
//! feedback.apply(Some(&mut hud_bar), Some(&mut sprint_audio));
//! ```

use log::debug;

use crate::camera::{FovBlender, LookController};
use crate::config::ControllerConfig;
use crate::input::FrameInput;
use crate::player::locomotion::{Locomotion, SpeedBlend, MAX_FRAME_DT};
use crate::player::stamina::StaminaMeter;
use crate::rig::{CameraRig, CapsuleBody, SprintAudio, StaminaIndicator};
use crate::ui::{BarVisual, StaminaBar};

/// Sprint only drains stamina while the move input is actually deflected
/// past this magnitude.
pub const SPRINT_MOVE_THRESHOLD: f32 = 0.1;

/// Sprint loop sound cue for the host's audio sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Sprint was honored; start the loop.
    SprintStart,
    /// Sprint ended (released or exhausted); stop the loop.
    SprintStop,
}

/// Per-frame feedback for the host's optional collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SprintFeedback {
    /// Stamina bar draw data for this frame.
    pub bar: BarVisual,
    /// Sound cue, when the sprint loop should start or stop this frame.
    pub audio: Option<AudioCue>,
}

impl SprintFeedback {
    /// Forward this frame's feedback to the optional HUD bar and audio sink.
    ///
    /// Hosts missing either collaborator pass `None` and the dependent
    /// behavior is skipped.
    pub fn apply(
        &self,
        indicator: Option<&mut dyn StaminaIndicator>,
        audio: Option<&mut dyn SprintAudio>,
    ) {
        if let Some(indicator) = indicator {
            indicator.set_fill(self.bar.fill);
            indicator.set_color(self.bar.color.rgb());
            indicator.set_alpha(self.bar.alpha);
        }
        if let Some(audio) = audio {
            match self.audio {
                Some(AudioCue::SprintStart) => audio.play_sprint_loop(),
                Some(AudioCue::SprintStop) => audio.stop_sprint_loop(),
                None => {}
            }
        }
    }
}

/// Full first-person controller with stamina-gated sprint and feedback.
#[derive(Debug, Clone)]
pub struct SprintPlayerController {
    look: LookController,
    locomotion: Locomotion,
    speed: SpeedBlend,
    stamina: StaminaMeter,
    fov: FovBlender,
    bar: StaminaBar,
    sprinting: bool,
}

impl SprintPlayerController {
    /// Create a controller from a configuration.
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            look: LookController::new(&config.look),
            locomotion: Locomotion::new(&config.movement),
            speed: SpeedBlend::new(&config.movement),
            stamina: StaminaMeter::new(&config.stamina),
            fov: FovBlender::new(&config.feedback),
            bar: StaminaBar::new(&config.feedback),
            sprinting: false,
        }
    }

    /// Current body yaw in radians.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.look.yaw()
    }

    /// Current camera pitch in radians.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.look.pitch()
    }

    /// The stamina meter.
    #[inline]
    pub fn stamina(&self) -> &StaminaMeter {
        &self.stamina
    }

    /// Whether the sprint flag is currently set.
    #[inline]
    pub fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    /// Current blended movement speed in m/s.
    #[inline]
    pub fn current_speed(&self) -> f32 {
        self.speed.current()
    }

    /// Current vertical velocity in m/s.
    #[inline]
    pub fn vertical_velocity(&self) -> f32 {
        self.locomotion.vertical_velocity()
    }

    /// Advance the controller by one frame and return the feedback for the
    /// host's optional collaborators.
    pub fn update<B, C>(
        &mut self,
        dt: f32,
        input: &FrameInput,
        body: &mut B,
        camera: &mut C,
    ) -> SprintFeedback
    where
        B: CapsuleBody,
        C: CameraRig,
    {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        let mut audio = None;

        // Sprint requests. A press is honored only while stamina remains;
        // a release always wins.
        if input.sprint_pressed && !self.sprinting && self.stamina.has_stamina() {
            self.sprinting = true;
            audio = Some(AudioCue::SprintStart);
            debug!("sprint started at {:.0} stamina", self.stamina.stamina());
        }
        if input.sprint_released && self.sprinting {
            self.sprinting = false;
            audio = Some(AudioCue::SprintStop);
            debug!("sprint released at {:.0} stamina", self.stamina.stamina());
        }

        if self.look.apply(input.look) {
            body.set_yaw(self.look.yaw());
            camera.set_pitch(self.look.pitch());
        }

        let draining = self.sprinting && input.movement.length() > SPRINT_MOVE_THRESHOLD;
        if self.stamina.update(dt, draining) {
            self.sprinting = false;
            audio = Some(AudioCue::SprintStop);
            debug!("stamina exhausted, sprint forced off");
        }

        let grounded = body.is_grounded();
        if input.jump_pressed {
            self.locomotion.try_jump(grounded);
        }

        let sprint_active = self.sprinting && self.stamina.can_sprint();
        let speed = self.speed.update(dt, sprint_active);
        body.translate(Locomotion::horizontal_displacement(
            self.look.yaw(),
            input.movement,
            speed,
            dt,
        ));
        body.translate(self.locomotion.vertical_step(dt, grounded));

        camera.set_fov(self.fov.update(dt, sprint_active, camera.fov()));
        let bar = self.bar.update(dt, self.stamina.fraction(), self.sprinting);

        SprintFeedback { bar, audio }
    }

    /// Reset orientation, motion, and stamina (teleport or respawn).
    pub fn reset(&mut self) {
        self.look.reset();
        self.locomotion.reset();
        self.speed.reset();
        self.stamina.refill();
        self.sprinting = false;
    }
}
