//! Movement domain: per-tick platformer motion controller.
//!
//! The controller is engine-free: it only sees a [`MoveInput`] snapshot and
//! answers with a [`MoveResult`]. Applying the result (and the jump impulse)
//! to a physics body is the caller's job.

use bevy::math::Vec2;

/// Tuning for a single controller instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    pub max_horizontal_speed: f32,
    /// Horizontal speed gained per second while the axis is non-zero.
    pub acceleration: f32,
    /// Horizontal speed lost per second while idle or above the speed cap.
    pub deceleration: f32,
    pub max_air_jump_count: u32,
    /// Impulse the caller applies when a jump fires. Not used internally.
    pub jump_force: Vec2,
    pub normal_gravity_scale: f32,
    pub jump_early_end_gravity_scale: f32,
    pub max_fall_speed_abs: f32,
    pub apex_bonus_time_ms: f32,
    pub hold_button_auto_jump: bool,
    pub coyote_time_ms: f32,
    pub cool_down_after_jump_ms: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            max_horizontal_speed: 13.0,
            acceleration: 90.0,
            deceleration: 60.0,
            max_air_jump_count: 1,
            jump_force: Vec2::new(0.0, 20.0),
            normal_gravity_scale: 5.0,
            jump_early_end_gravity_scale: 20.0,
            max_fall_speed_abs: 40.0,
            apex_bonus_time_ms: 20.0,
            hold_button_auto_jump: false,
            coyote_time_ms: 200.0,
            cool_down_after_jump_ms: 50.0,
        }
    }
}

impl ControllerConfig {
    /// Check every numeric field is finite and non-negative.
    /// Returns one error per offending field, empty if the tuning is usable.
    pub fn validate(&self) -> Vec<ConfigError> {
        let fields = [
            ("max_horizontal_speed", self.max_horizontal_speed),
            ("acceleration", self.acceleration),
            ("deceleration", self.deceleration),
            ("normal_gravity_scale", self.normal_gravity_scale),
            ("jump_early_end_gravity_scale", self.jump_early_end_gravity_scale),
            ("max_fall_speed_abs", self.max_fall_speed_abs),
            ("apex_bonus_time_ms", self.apex_bonus_time_ms),
            ("coyote_time_ms", self.coyote_time_ms),
            ("cool_down_after_jump_ms", self.cool_down_after_jump_ms),
        ];

        let mut errors: Vec<ConfigError> = fields
            .into_iter()
            .filter(|(_, value)| !value.is_finite() || *value < 0.0)
            .map(|(field, value)| ConfigError { field, value })
            .collect();

        // jump_force is a direction, negative components are fine
        if !self.jump_force.is_finite() {
            let value = if self.jump_force.x.is_finite() {
                self.jump_force.y
            } else {
                self.jump_force.x
            };
            errors.push(ConfigError {
                field: "jump_force",
                value,
            });
        }

        errors
    }
}

/// A tuning value outside the range the controller accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: f32,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "controller tuning '{}' must be finite and non-negative, got {}",
            self.field, self.value
        )
    }
}

impl std::error::Error for ConfigError {}

/// Snapshot of everything the controller needs for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveInput {
    /// Signed horizontal axis, nominally -1..1.
    pub horizontal: f32,
    /// True only on the tick the jump button went down.
    pub jump_pressed: bool,
    /// True only on the tick the jump button went up.
    pub jump_released: bool,
    pub jump_held: bool,
    pub grounded: bool,
    pub velocity: Vec2,
    pub gravity_scale: f32,
    /// Seconds since the previous tick.
    pub delta_time: f32,
}

/// Which vertical rule decided this tick. At most one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalOutcome {
    #[default]
    None,
    Jump,
    EarlyEnd,
    ApexBonus,
    FallClamp,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    pub jumped: bool,
    pub air_jumped: bool,
    pub gravity_scale: f32,
    pub velocity: Vec2,
    pub outcome: VerticalOutcome,
}

/// Timers and counters carried between ticks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerState {
    pub last_vertical_velocity: f32,
    pub air_jumps_remaining: u32,
    pub ground_check_cooldown_ms: f32,
    /// Set while grounded; consumed by the first airborne tick to open the coyote window.
    pub coyote_eligible: bool,
    pub coyote_cooldown_ms: f32,
    pub apex_bonus_cooldown_ms: f32,
    /// A hang is in progress and gravity must be restored once it runs out.
    pub apex_bonus_armed: bool,
}

#[derive(Debug, Clone)]
pub struct MotionController {
    config: ControllerConfig,
    state: ControllerState,
}

impl Default for MotionController {
    fn default() -> Self {
        let config = ControllerConfig::default();
        let state = ControllerState {
            air_jumps_remaining: config.max_air_jump_count,
            ..Default::default()
        };
        Self { config, state }
    }
}

impl MotionController {
    /// Build a controller, rejecting tuning with negative or non-finite values.
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        if let Some(err) = config.validate().into_iter().next() {
            return Err(err);
        }

        let state = ControllerState {
            air_jumps_remaining: config.max_air_jump_count,
            ..Default::default()
        };

        Ok(Self { config, state })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Reset all state, e.g. on spawn or respawn.
    pub fn init(&mut self, input: &MoveInput) -> MoveResult {
        self.state = ControllerState {
            last_vertical_velocity: input.velocity.y,
            air_jumps_remaining: self.config.max_air_jump_count,
            ..Default::default()
        };

        MoveResult {
            jumped: false,
            air_jumped: false,
            gravity_scale: self.config.normal_gravity_scale,
            velocity: input.velocity,
            outcome: VerticalOutcome::None,
        }
    }

    /// Advance one simulation tick.
    ///
    /// # Panics
    ///
    /// Panics if `input.delta_time` is not a finite positive number.
    pub fn step(&mut self, input: &MoveInput) -> MoveResult {
        assert!(
            input.delta_time.is_finite() && input.delta_time > 0.0,
            "MotionController::step requires a positive delta_time, got {}",
            input.delta_time
        );

        let cfg = &self.config;
        let state = &mut self.state;
        let dt = input.delta_time;
        let elapsed_ms = dt * 1000.0;

        let mut result = MoveResult {
            jumped: false,
            air_jumped: false,
            gravity_scale: input.gravity_scale,
            velocity: input.velocity,
            outcome: VerticalOutcome::None,
        };

        // 1. Timers
        state.ground_check_cooldown_ms = (state.ground_check_cooldown_ms - elapsed_ms).max(0.0);
        state.coyote_cooldown_ms = (state.coyote_cooldown_ms - elapsed_ms).max(0.0);
        state.apex_bonus_cooldown_ms = (state.apex_bonus_cooldown_ms - elapsed_ms).max(0.0);
        if state.apex_bonus_armed && state.apex_bonus_cooldown_ms <= 0.0 {
            state.apex_bonus_armed = false;
            result.gravity_scale = cfg.normal_gravity_scale;
        }

        // 2. Horizontal
        result.velocity.x = horizontal_velocity(cfg, result.velocity.x, input.horizontal, dt);

        // 3. Ground and coyote bookkeeping
        if input.grounded {
            if state.ground_check_cooldown_ms <= 0.0 {
                state.air_jumps_remaining = cfg.max_air_jump_count;
            }
            state.coyote_eligible = true;
        } else if state.coyote_eligible {
            state.coyote_cooldown_ms = cfg.coyote_time_ms;
            state.coyote_eligible = false;
        }

        // 4. Vertical
        let in_coyote = state.coyote_cooldown_ms > 0.0;
        let can_ground_jump = input.grounded || in_coyote;
        let wants_jump = (input.jump_pressed
            && (can_ground_jump || state.air_jumps_remaining > 0))
            || (cfg.hold_button_auto_jump && input.jump_held && can_ground_jump);

        let vy = result.velocity.y;
        if wants_jump {
            result.jumped = true;
            result.outcome = VerticalOutcome::Jump;
            state.apex_bonus_cooldown_ms = 0.0;
            state.apex_bonus_armed = false;
            result.velocity.y = 0.0;
            result.gravity_scale = cfg.normal_gravity_scale;

            if !can_ground_jump {
                state.air_jumps_remaining = state.air_jumps_remaining.saturating_sub(1);
                result.air_jumped = true;
            }

            // one departure buys one coyote jump
            state.coyote_eligible = false;
            state.coyote_cooldown_ms = 0.0;
            state.ground_check_cooldown_ms = cfg.cool_down_after_jump_ms;
        } else if vy > 0.0 && input.jump_released {
            result.outcome = VerticalOutcome::EarlyEnd;
            result.gravity_scale = cfg.jump_early_end_gravity_scale;
        } else if state.last_vertical_velocity > 0.0 && vy <= 0.0 {
            result.outcome = VerticalOutcome::ApexBonus;
            result.gravity_scale = 0.0;
            result.velocity.y = 0.0;
            state.apex_bonus_cooldown_ms = cfg.apex_bonus_time_ms;
            state.apex_bonus_armed = true;
        } else if vy < 0.0 {
            result.outcome = VerticalOutcome::FallClamp;
            result.velocity.y = vy.max(-cfg.max_fall_speed_abs);
        }

        // 5.
        state.last_vertical_velocity = result.velocity.y;
        result
    }
}

fn horizontal_velocity(cfg: &ControllerConfig, vx: f32, axis: f32, dt: f32) -> f32 {
    if axis == 0.0 {
        return move_towards(vx, 0.0, cfg.deceleration * dt);
    }

    let vx = vx + axis * cfg.acceleration * dt;
    if vx.abs() > cfg.max_horizontal_speed {
        // bleed overspeed back down to the cap, never below it
        move_towards(
            vx,
            cfg.max_horizontal_speed.copysign(vx),
            cfg.deceleration * dt,
        )
    } else {
        vx
    }
}

/// Move `current` toward `target` by at most `max_delta`, without overshooting.
pub(crate) fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_delta {
        target
    } else {
        current + max_delta.copysign(diff)
    }
}
