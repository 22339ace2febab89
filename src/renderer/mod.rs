pub mod renderer;
pub mod traits;
pub mod components;
pub mod renders;
pub mod fragments;
pub mod templates;
pub mod buffer;

pub use renderer::*;
pub use traits::*;
pub use components::*;
pub use templates::*;
pub use buffer::*;
