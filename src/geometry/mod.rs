pub mod bounds;
pub mod position;
#[cfg(feature = "gui")]
pub mod rect_extensions;
pub mod spawn;

pub use bounds::Bounds;
pub use position::{Anchor, Corner, Position};
