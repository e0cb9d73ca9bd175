//! Frame: a plain window with fixed size and stored position.

use orbit_types::window::{Window, WindowId};

/// A fixed-size window that stores its position and parent.
///
/// Stands in for any framework window that only needs to be placed; the
/// framework draws whatever content it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    left: i32,
    top: i32,
    parent: Option<WindowId>,
}

impl Frame {
    /// Create a detached frame at the origin.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            left: 0,
            top: 0,
            parent: None,
        }
    }
}

impl Window for Frame {
    fn attach(&mut self, parent: WindowId) {
        self.parent = Some(parent);
    }

    fn detach(&mut self) {
        self.parent = None;
    }

    fn parent(&self) -> Option<WindowId> {
        self.parent
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_left(&mut self, x: i32) {
        self.left = x;
    }

    fn set_top(&mut self, y: i32) {
        self.top = y;
    }

    fn left(&self) -> i32 {
        self.left
    }

    fn top(&self) -> i32 {
        self.top
    }
}
