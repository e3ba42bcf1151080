use std::fmt;

use bevy::prelude::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    Ground,
    WallLeft,
    WallRight,
}

impl ProbeKind {
    pub const ALL: [ProbeKind; 3] = [ProbeKind::Ground, ProbeKind::WallLeft, ProbeKind::WallRight];
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProbeKind::Ground => "ground",
            ProbeKind::WallLeft => "left wall",
            ProbeKind::WallRight => "right wall",
        };

        f.write_str(name)
    }
}

/// Marks a child of a locomotion body as one of its overlap probe points.
/// The probe's world position is the center of the overlap circle.
#[derive(Component, Debug, Clone, Copy)]
pub struct ContactProbe {
    pub kind: ProbeKind,
}

impl ContactProbe {
    pub fn new(kind: ProbeKind) -> Self {
        Self { kind }
    }
}
