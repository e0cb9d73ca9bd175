//! Window capability trait.
//!
//! The widget framework owns rendering and size/position storage. Widgets
//! only need the handful of operations below to arrange their children.

/// Opaque handle identifying a window that children can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u32);

/// Minimum interface of a framework window, as seen by a layout container.
pub trait Window {
    /// Attach this window as a child of `parent`. Re-attaching to the same
    /// parent is a no-op.
    fn attach(&mut self, parent: WindowId);

    /// Detach this window from its parent. Detaching a detached window is a
    /// no-op.
    fn detach(&mut self);

    /// Parent this window is attached to, if any.
    fn parent(&self) -> Option<WindowId>;

    /// Whether the window is attached to some parent.
    fn is_attached(&self) -> bool {
        self.parent().is_some()
    }

    /// Current width in pixels.
    fn width(&self) -> u32;

    /// Current height in pixels.
    fn height(&self) -> u32;

    /// Set the horizontal position relative to the parent.
    fn set_left(&mut self, x: i32);

    /// Set the vertical position relative to the parent.
    fn set_top(&mut self, y: i32);

    /// Horizontal position relative to the parent.
    fn left(&self) -> i32;

    /// Vertical position relative to the parent.
    fn top(&self) -> i32;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub {
        parent: Option<WindowId>,
    }

    impl Window for Stub {
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
            0
        }
        fn height(&self) -> u32 {
            0
        }
        fn set_left(&mut self, _x: i32) {}
        fn set_top(&mut self, _y: i32) {}
        fn left(&self) -> i32 {
            0
        }
        fn top(&self) -> i32 {
            0
        }
    }

    #[test]
    fn is_attached_follows_parent() {
        let mut w = Stub { parent: None };
        assert!(!w.is_attached());
        w.attach(WindowId(7));
        assert!(w.is_attached());
        assert_eq!(w.parent(), Some(WindowId(7)));
        w.detach();
        assert!(!w.is_attached());
    }

    #[test]
    fn window_id_ordering() {
        assert!(WindowId(1) < WindowId(2));
        assert_eq!(WindowId(3), WindowId(3));
    }
}
