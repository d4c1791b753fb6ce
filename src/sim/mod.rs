//! Simulation module
//!
//! All gameplay logic lives here. This module has no rendering or platform
//! dependencies:
//! - Seeded RNG only
//! - Time enters only as `dt` or an explicit clock sample
//! - One `GameState` value owns everything

pub mod autopilot;
pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod rect;
pub mod score;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Collision, check_collision, detect_collision, pipe_rects};
pub use obstacles::{ObstacleCourse, slot_left, slots_on_screen};
pub use physics::integrate;
pub use rect::Rect;
pub use score::advance_score;
pub use snapshot::{PipeView, RenderSnapshot, snapshot};
pub use state::{GameEvent, GamePhase, GameState, Player, ScreenSize};
pub use tick::{TickInput, flap, restart, step, tick, toggle_pause};
