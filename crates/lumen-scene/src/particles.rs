//! Particle emitter descriptions.
//!
//! The engine's particle system owns simulation. These are the parameters
//! it is seeded with.

use serde::{Deserialize, Serialize};

/// Shape-specific emitter settings.
///
/// `timer` is the interval between spawns in seconds, `None` for an emitter
/// that never spawns. Angles are radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EmitterKind {
    Box {
        timer: Option<f32>,
        half_extents: [f32; 3],
        size_range: [f32; 2],
        life_range: [f32; 2],
    },
    Stream {
        timer: Option<f32>,
        angle: f32,
        size_range: [f32; 2],
        life_range: [f32; 2],
    },
    Cone {
        timer: Option<f32>,
        angle: f32,
        size_range: [f32; 2],
        life_range: [f32; 2],
    },
}

impl EmitterKind {
    pub fn timer(&self) -> Option<f32> {
        match self {
            EmitterKind::Box { timer, .. }
            | EmitterKind::Stream { timer, .. }
            | EmitterKind::Cone { timer, .. } => *timer,
        }
    }

    pub fn life_range(&self) -> [f32; 2] {
        match self {
            EmitterKind::Box { life_range, .. }
            | EmitterKind::Stream { life_range, .. }
            | EmitterKind::Cone { life_range, .. } => *life_range,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleEmitter {
    /// Offset from the owning object.
    pub position: [f32; 3],
    pub color: [f32; 4],
    pub lifetime: f32,
    pub velocity: [f32; 3],
    #[serde(flatten)]
    pub kind: EmitterKind,
}

/// Seconds between spawns for a rate given in particles per second.
///
/// A rate that is not a positive finite number never spawns.
pub fn spawn_interval(per_second: f32) -> Option<f32> {
    (per_second.is_finite() && per_second > 0.0).then(|| 1.0 / per_second)
}
