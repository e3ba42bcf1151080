use bevy::reflect::Reflect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum WallSide {
    Left,
    Right,
}

impl WallSide {
    /// Horizontal direction pointing away from the wall.
    pub fn away(&self) -> f32 {
        match self {
            WallSide::Left => 1.0,
            WallSide::Right => -1.0,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum MovementState {
    #[default]
    Grounded,
    Airborne,
    WallSliding(WallSide),
}

impl MovementState {
    pub fn is_wall_sliding(&self) -> bool {
        matches!(self, MovementState::WallSliding(_))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// True when the input points the other way. Zero input never disagrees.
    pub fn disagrees_with(&self, input: f32) -> bool {
        match self {
            Facing::Right => input < 0.0,
            Facing::Left => input > 0.0,
        }
    }

    pub fn flipped(&self) -> Facing {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_only_disagrees_with_opposite_input() {
        assert!(Facing::Right.disagrees_with(-0.5));
        assert!(!Facing::Right.disagrees_with(0.0));
        assert!(!Facing::Right.disagrees_with(1.0));
        assert!(Facing::Left.disagrees_with(0.1));
        assert!(!Facing::Left.disagrees_with(-1.0));
    }

    #[test]
    fn wall_jump_direction_points_away_from_wall() {
        assert_eq!(WallSide::Left.away(), 1.0);
        assert_eq!(WallSide::Right.away(), -1.0);
    }
}
