//! orbit-ui: selection-driven carousel widget.
//!
//! A horizontal row of items where the selected item shows its expanded
//! "front" face and every other item its collapsed "back" face. Rendering
//! belongs to the window framework; this crate only decides attachment and
//! placement through the [`Window`] trait.

pub mod body;
pub mod carousel;
pub mod frame;
pub mod item;
pub mod layout;
pub mod navigation;

#[cfg(test)]
pub(crate) mod test_utils;

pub use body::{Body, ItemPlacement, LayoutSnapshot};
pub use carousel::{Carousel, EventResult};
pub use frame::Frame;
pub use item::{ActiveFace, Item};
pub use navigation::{Navigation, RotaryNavigation};
pub use orbit_types::window::{Window, WindowId};
