//! Shared test utilities for orbit-ui widget tests.
//!
//! Provides a [`MockWindow`] that records every call made through the
//! [`Window`] trait for assertion.

use orbit_types::window::{Window, WindowId};

/// A recorded window call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowCall {
    Attach(WindowId),
    Detach,
    SetLeft(i32),
    SetTop(i32),
}

/// A mock window that records all calls for test assertions.
#[derive(Debug, Clone)]
pub struct MockWindow {
    pub width: u32,
    pub height: u32,
    pub left: i32,
    pub top: i32,
    pub parent: Option<WindowId>,
    pub calls: Vec<WindowCall>,
}

impl MockWindow {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            left: 0,
            top: 0,
            parent: None,
            calls: Vec::new(),
        }
    }

    /// Count of `Attach` calls.
    pub fn attach_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, WindowCall::Attach(_)))
            .count()
    }

    /// Whether any position was assigned.
    pub fn was_positioned(&self) -> bool {
        self.calls
            .iter()
            .any(|c| matches!(c, WindowCall::SetLeft(_) | WindowCall::SetTop(_)))
    }

    /// Forget recorded calls, keeping current state.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Window for MockWindow {
    fn attach(&mut self, parent: WindowId) {
        self.calls.push(WindowCall::Attach(parent));
        self.parent = Some(parent);
    }

    fn detach(&mut self) {
        self.calls.push(WindowCall::Detach);
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
        self.calls.push(WindowCall::SetLeft(x));
        self.left = x;
    }

    fn set_top(&mut self, y: i32) {
        self.calls.push(WindowCall::SetTop(y));
        self.top = y;
    }

    fn left(&self) -> i32 {
        self.left
    }

    fn top(&self) -> i32 {
        self.top
    }
}

/// Build `n` items with uniform face sizes: front `fw`x`fh`, back `bw`x`bh`.
pub fn mock_items(n: usize, fw: u32, fh: u32, bw: u32, bh: u32) -> Vec<(MockWindow, MockWindow)> {
    (0..n)
        .map(|_| (MockWindow::new(fw, fh), MockWindow::new(bw, bh)))
        .collect()
}
