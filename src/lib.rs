//! Gap Runner - a tap-to-flap side-scrolling avoidance game
//!
//! Core modules:
//! - `sim`: Simulation (physics, obstacle generation, collisions, game state)
//! - `renderer`: Render snapshot to vertex conversion
//! - `audio`: Sound effect sink used by the host
//! - `session`: Host-side glue that owns a game and routes its events
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod error;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use error::SimError;
pub use session::Session;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Downward acceleration applied to the player (pixels/s²)
    pub const GRAVITY: f32 = 2000.0;
    /// Vertical velocity set by a flap (negative is up)
    pub const FLAP_IMPULSE: f32 = -800.0;
    /// Horizontal world scroll rate (pixels/s)
    pub const SCROLL_SPEED: f32 = 200.0;

    /// Pipe dimensions
    pub const PIPE_WIDTH: f32 = 100.0;
    pub const PIPE_SPACING: f32 = 500.0;
    /// Vertical size of the opening between a top and bottom pipe
    pub const PIPE_OPENING_HEIGHT: f32 = 350.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 70.0;
    /// Fixed screen-space x of the player's left edge
    pub const PLAYER_OFFSET: f32 = 20.0;

    /// World offset after a reset; pipes start at world x = 0
    pub const PLAYER_START_POSITION: f32 = -1000.0;

    /// Visible window behind / ahead of the scroll offset, in screen widths
    pub const WINDOW_BEHIND: f32 = 1.0;
    pub const WINDOW_AHEAD: f32 = 1.5;
}
