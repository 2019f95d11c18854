//! Chase state and core simulation types
//!
//! Everything needed to reproduce a run lives here. Per-state bookkeeping
//! sits inside the enum variant that uses it, so no field is reused with a
//! different meaning across states.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::bearing_to_vec;
use crate::tuning::{HunterTuning, Tuning};

/// Hunter behavior state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HunterState {
    /// Instant steering, speed ramping toward the fast threshold
    SlowMove,
    /// Rate-limited steering; holding the line earns speed, over-rotating
    /// bleeds it
    FastMove,
    /// Committed burst along a straight line; steering is ignored
    Diving {
        start: Vec2,
        end: Vec2,
        started_at: u64,
    },
    /// Post-dive freeze, no movement until the timer runs out
    Recovering { started_at: u64 },
}

impl HunterState {
    /// Stable ordinal used to index the display palette
    pub fn index(&self) -> usize {
        match self {
            HunterState::SlowMove => 0,
            HunterState::FastMove => 1,
            HunterState::Diving { .. } => 2,
            HunterState::Recovering { .. } => 3,
        }
    }

    #[inline]
    pub fn is_diving(&self) -> bool {
        matches!(self, HunterState::Diving { .. })
    }
}

/// Where a caught quarry rides, relative to the hunter's frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Id of the hunter the quarry is attached to
    pub entity: u32,
    /// Offset in the hunter's local frame (world units)
    pub local_offset: Vec2,
}

impl Attachment {
    /// World position of the attached quarry for the given hunter frame
    pub fn resolve(&self, hunter: &HunterSnapshot) -> Vec2 {
        let (sin, cos) = hunter.orientation.to_radians().sin_cos();
        let rotated = Vec2::new(
            self.local_offset.x * cos - self.local_offset.y * sin,
            self.local_offset.x * sin + self.local_offset.y * cos,
        );
        hunter.position + rotated
    }
}

/// Quarry behavior state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum QuarryState {
    /// Watching for the hunter to come too close
    Idle,
    /// Committed to one hop direction until the timer runs out
    Hop { direction: Vec2, started_at: u64 },
    /// Terminal: riding the hunter, no further transitions
    Caught { attachment: Attachment },
}

impl QuarryState {
    /// Stable ordinal used to index the display palette
    pub fn index(&self) -> usize {
        match self {
            QuarryState::Idle => 0,
            QuarryState::Hop { .. } => 1,
            QuarryState::Caught { .. } => 2,
        }
    }

    #[inline]
    pub fn is_caught(&self) -> bool {
        matches!(self, QuarryState::Caught { .. })
    }
}

/// The steered entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hunter {
    pub id: u32,
    pub state: HunterState,
    pub position: Vec2,
    /// Current facing: bearing from pointer to hunter (degrees)
    pub orientation: f32,
    /// Pointer-requested facing, refreshed every tick in every state
    pub target_angle: f32,
    /// Pointer-requested speed band, refreshed every tick; recorded but not
    /// fed into the speed ramp
    pub target_speed: f32,
    /// Forward progress (world units per second)
    pub speed: f32,
}

impl Hunter {
    pub fn new(id: u32, spawn: Vec2) -> Self {
        Self {
            id,
            state: HunterState::SlowMove,
            position: spawn,
            orientation: 0.0,
            target_angle: 0.0,
            target_speed: 0.0,
            speed: 0.0,
        }
    }

    /// Forward unit vector. The facing measures the pointer-to-hunter
    /// bearing, so forward runs opposite it, toward the pointer.
    #[inline]
    pub fn forward(&self) -> Vec2 {
        -bearing_to_vec(self.orientation)
    }

    /// Read-only view for quarry logic and the capture check
    pub fn snapshot(&self) -> HunterSnapshot {
        HunterSnapshot::from(self)
    }

    /// Enter the dive: lock in the travel line and the burst speed
    pub fn start_dive(&mut self, tuning: &HunterTuning, now: u64) {
        let start = self.position;
        let end = start + self.forward() * tuning.dive_distance;
        self.speed = tuning.dive_distance / tuning.dive_time;
        self.state = HunterState::Diving {
            start,
            end,
            started_at: now,
        };
    }

    /// Enter recovery: freeze in place with speed zeroed
    pub fn start_recovering(&mut self, now: u64) {
        self.speed = 0.0;
        self.state = HunterState::Recovering { started_at: now };
    }
}

/// Read-only view of the hunter, taken after its advance for the tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HunterSnapshot {
    pub id: u32,
    pub position: Vec2,
    pub orientation: f32,
    pub diving: bool,
}

impl From<&Hunter> for HunterSnapshot {
    fn from(hunter: &Hunter) -> Self {
        Self {
            id: hunter.id,
            position: hunter.position,
            orientation: hunter.orientation,
            diving: hunter.state.is_diving(),
        }
    }
}

/// The evasive entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quarry {
    pub id: u32,
    pub state: QuarryState,
    /// Own position while loose; ignored once caught (the attachment wins)
    pub position: Vec2,
}

impl Quarry {
    pub fn new(id: u32, spawn: Vec2) -> Self {
        Self {
            id,
            state: QuarryState::Idle,
            position: spawn,
        }
    }

    /// Commit to a hop. A zero direction is a legal stay-put hop.
    pub fn start_hop(&mut self, direction: Vec2, now: u64) {
        self.state = QuarryState::Hop {
            direction,
            started_at: now,
        };
    }

    /// Enter the terminal caught state, riding the given hunter
    pub fn attach_to(&mut self, hunter_id: u32, local_offset: Vec2) {
        self.state = QuarryState::Caught {
            attachment: Attachment {
                entity: hunter_id,
                local_offset,
            },
        };
    }

    /// Position for presentation: the attachment resolves against the
    /// hunter's frame once caught, own position otherwise
    pub fn world_position(&self, hunter: &HunterSnapshot) -> Vec2 {
        match &self.state {
            QuarryState::Caught { attachment } => attachment.resolve(hunter),
            _ => self.position,
        }
    }
}

/// Complete chase state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChaseState {
    /// Behavior tuning, immutable for the life of the state
    pub tuning: Tuning,
    /// The steered entity
    pub hunter: Hunter,
    /// The evasive entity
    pub quarry: Quarry,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl ChaseState {
    /// Create a chase with both entities at their spawn points
    pub fn new(tuning: Tuning, hunter_spawn: Vec2, quarry_spawn: Vec2) -> Self {
        Self {
            tuning,
            hunter: Hunter::new(1, hunter_spawn),
            quarry: Quarry::new(2, quarry_spawn),
            time_ticks: 0,
        }
    }

    /// Quarry position for presentation, attachment resolved
    pub fn quarry_world_position(&self) -> Vec2 {
        self.quarry.world_position(&self.hunter.snapshot())
    }
}
