use bevy::prelude::{Component, Vec2};
use wc_common::{
    components::{contacts::Contacts, movement_state::{Facing, MovementState, WallSide}},
    config::LocomotionConfig,
    error::SetupError,
};

/// Picks the movement state for this tick. Wall-sliding wins over everything,
/// with the left wall checked first when both walls are touched.
pub fn derive_state(contacts: Contacts, input: f32) -> MovementState {
    if !contacts.grounded {
        if contacts.wall_left && input < 0.0 {
            return MovementState::WallSliding(WallSide::Left);
        }

        if contacts.wall_right && input > 0.0 {
            return MovementState::WallSliding(WallSide::Right);
        }

        return MovementState::Airborne;
    }

    MovementState::Grounded
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    pub previous: MovementState,
    pub state: MovementState,
    pub flipped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    Ground,
    WallJump(WallSide),
    /// Sliding on a wall, but the previous wall-jump is still cooling down.
    LockedOut,
    Ignored,
}

#[derive(Component, Debug, Clone)]
pub struct LocomotionController {
    config: LocomotionConfig,
    state: MovementState,
    facing: Facing,
    wall_jump_lock: f32,
}

impl LocomotionController {
    pub fn new(config: LocomotionConfig) -> Result<Self, SetupError> {
        config.validate()?;

        Ok(Self {
            config,
            state: MovementState::Grounded,
            facing: Facing::Right,
            wall_jump_lock: 0.0,
        })
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn state(&self) -> MovementState {
        self.state
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Seconds left before another wall-jump is allowed.
    pub fn wall_jump_lock(&self) -> f32 {
        self.wall_jump_lock
    }

    /// One fixed tick: count down the lockout, derive the state from the
    /// contacts and write the resulting velocity and facing.
    pub fn step(&mut self, contacts: Contacts, input: f32, velocity: &mut Vec2, dt: f32) -> StepReport {
        if self.wall_jump_lock > 0.0 {
            self.wall_jump_lock = (self.wall_jump_lock - dt).max(0.0);
        }

        let previous = self.state;
        self.state = derive_state(contacts, input);

        match self.state {
            MovementState::WallSliding(_) => {
                // Only the descent is capped, jumps keep their upward speed.
                velocity.y = velocity.y.max(-self.config.wall_slide_speed);
            }
            MovementState::Grounded | MovementState::Airborne => {
                velocity.x = input * self.config.speed;
            }
        }

        let may_flip = self.config.flip_while_wall_sliding || !self.state.is_wall_sliding();
        let flipped = may_flip && self.facing.disagrees_with(input);
        if flipped {
            self.facing = self.facing.flipped();
        }

        StepReport { previous, state: self.state, flipped }
    }

    /// Handles a single jump press against the state of the last step.
    pub fn jump(&mut self, contacts: Contacts, velocity: &mut Vec2) -> JumpOutcome {
        if self.state.is_wall_sliding() && contacts.touching_wall() {
            if self.wall_jump_lock > 0.0 {
                return JumpOutcome::LockedOut;
            }

            let side = if contacts.wall_left { WallSide::Left } else { WallSide::Right };

            *velocity = Vec2::new(side.away() * self.config.wall_jump_force, self.config.jump_force);
            self.state = MovementState::Airborne;
            self.wall_jump_lock = self.config.wall_jump_lock_time;

            return JumpOutcome::WallJump(side);
        }

        if contacts.grounded {
            velocity.y = self.config.jump_force;
            return JumpOutcome::Ground;
        }

        JumpOutcome::Ignored
    }
}
