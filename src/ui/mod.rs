//! Terminal user interface: components and the screen renderer.

pub mod components;
pub mod renderer;

pub use renderer::{Renderer, UiState};
