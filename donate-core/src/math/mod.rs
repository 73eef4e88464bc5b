mod affine;
mod offset;
mod point;
mod rect;
mod size;
mod space;

pub use affine::{Affine, Matrix};
pub use offset::Offset;
pub use point::Point;
pub use rect::Rect;
pub use size::Size;
pub use space::Space;
