//! The components module contains all shared components for the app.

mod app;
mod icons;
mod player;
mod slides;
mod voiceover;

pub use app::*;
pub use icons::*;
pub use player::*;
pub use slides::*;
pub use voiceover::*;
