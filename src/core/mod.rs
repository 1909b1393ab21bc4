pub mod beam;
pub mod clock;
pub mod ease;
pub mod geometry;
pub mod glow;
pub mod orbit;
pub mod scroll;
pub mod tilt;

pub use beam::*;
pub use clock::*;
pub use geometry::Rect;
pub use glow::*;
pub use orbit::*;
pub use scroll::*;
pub use tilt::*;
