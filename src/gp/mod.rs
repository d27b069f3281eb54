//! Geometric primitives package.
//!
//! 2D points, directions and lines, plus the two axis-aligned conics this
//! crate derives and their implicit form.

mod pnt2d;
mod dir2d;
mod lin2d;
mod orientation;
mod elips2d;
mod hypr2d;
mod implicit;

pub use pnt2d::Pnt2d;
pub use dir2d::Dir2d;
pub use lin2d::Lin2d;
pub use orientation::Orientation;
pub use elips2d::Elips2d;
pub use hypr2d::{Branch, Hypr2d};
pub use implicit::ImplicitConic;
