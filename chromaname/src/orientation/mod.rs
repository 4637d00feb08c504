//! Display-to-sensor coordinate mapping.
//!
//! Touch coordinates arrive in display space, while decoded frames are laid
//! out in sensor space. The two are rotated against each other by an amount
//! that depends on how the device is held. Each [`Orientation`] selects one
//! of four fixed remapping formulas:
//!
//! | orientation | flat index                                   |
//! |-------------|----------------------------------------------|
//! | Rotation0   | `width * (height - 1 - x) + y`               |
//! | Rotation90  | `width * y + x`                              |
//! | Rotation180 | `width * x + (width - 1 - y)`                |
//! | Rotation270 | `width * (height - 1 - y) + (width - 1 - x)` |
//!
//! These follow the host platform's rotation-angle convention and are kept
//! as a lookup table rather than derived from rotation matrices.

mod types;

pub use types::{Orientation, OrientationError};

/// Map a display-space point to a flat index into a `width × height` buffer.
///
/// An unset orientation (`None`) uses the [`Orientation::Rotation90`]
/// formula. Returns `None` when the point lies outside the display-space
/// bounds for the orientation (see [`Orientation::display_bounds`]), so the
/// result is always a valid index.
#[inline]
pub fn map_index(
    x: u32,
    y: u32,
    orientation: Option<Orientation>,
    width: u32,
    height: u32,
) -> Option<usize> {
    let orientation = orientation.unwrap_or(Orientation::Rotation90);
    let (max_x, max_y) = orientation.display_bounds(width, height);
    if x >= max_x || y >= max_y {
        return None;
    }

    let (x, y) = (x as usize, y as usize);
    let (width, height) = (width as usize, height as usize);
    let index = match orientation {
        Orientation::Rotation0 => width * (height - 1 - x) + y,
        Orientation::Rotation90 => width * y + x,
        Orientation::Rotation180 => width * x + (width - 1 - y),
        Orientation::Rotation270 => width * (height - 1 - y) + (width - 1 - x),
    };
    Some(index)
}
