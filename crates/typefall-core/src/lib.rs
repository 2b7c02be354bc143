pub mod audio;
pub mod config;
pub mod constants;
pub mod game;
pub mod glyphs;
pub mod input;
pub mod physics;
pub mod render;
pub mod score;
pub mod session;

pub use audio::*;
pub use config::*;
pub use constants::*;
pub use game::*;
pub use glyphs::*;
pub use input::*;
pub use physics::*;
pub use render::*;
pub use score::*;
pub use session::*;
