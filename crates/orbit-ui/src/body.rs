//! Carousel body: owns the items and lays them out in a row.

use std::ops::Range;

use orbit_types::config::{CarouselConfig, ScrollMode};
use orbit_types::window::{Window, WindowId};
use serde::Serialize;

use crate::item::{ActiveFace, Item};
use crate::layout;

/// Gap used when it cannot be derived from the slot count.
pub const DEFAULT_SPACING: i32 = 10;

/// The row of items behind a [`Carousel`](crate::Carousel).
///
/// The selected item shows its front face, every other item its back face.
/// Items are placed left to right from x = 0 and centered vertically.
#[derive(Debug)]
pub struct Body<W> {
    id: WindowId,
    items: Vec<Item<W>>,
    selection: usize,
    count: u32,
    width: u32,
    height: u32,
    default_spacing: i32,
    scroll_mode: ScrollMode,
}

impl<W: Window> Body<W> {
    /// Create an empty body of zero size that accommodates `count` slots.
    pub fn new(id: WindowId, count: u32) -> Self {
        Self {
            id,
            items: Vec::new(),
            selection: 0,
            count,
            width: 0,
            height: 0,
            default_spacing: DEFAULT_SPACING,
            scroll_mode: ScrollMode::Full,
        }
    }

    /// Create an empty body sized and tuned from `config`.
    pub fn from_config(id: WindowId, config: &CarouselConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            default_spacing: config.default_spacing,
            scroll_mode: config.scroll_mode,
            ..Self::new(id, config.visible_count)
        }
    }

    /// Append `(front, back)` pairs. Layout is not recomputed.
    pub fn with_items(mut self, items: impl IntoIterator<Item = (W, W)>) -> Self {
        for (front, back) in items {
            self.push(front, back);
        }
        self
    }

    /// Append an item. Layout is not recomputed.
    pub fn push(&mut self, front: W, back: W) {
        self.items.push(Item::new(front, back));
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item<W>] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Item<W>> {
        self.items.get(index)
    }

    #[cfg(test)]
    pub(crate) fn items_mut(&mut self) -> &mut [Item<W>] {
        &mut self.items
    }

    /// Raw selection index; 0 when the body is empty.
    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Selected index, or `None` when there is nothing to select.
    pub fn selected(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.selection)
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scroll_mode(&self) -> ScrollMode {
        self.scroll_mode
    }

    /// Commit a new selection, clamped to the item range, and re-layout.
    pub fn select(&mut self, index: usize) {
        let clamped = index.min(self.items.len().saturating_sub(1));
        if clamped != index {
            log::debug!("Selection {index} clamped to {clamped}");
        }
        if clamped != self.selection {
            log::debug!("Carousel selection {} -> {clamped}", self.selection);
        }
        self.selection = clamped;
        self.update();
    }

    /// Apply new container geometry and re-layout.
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) != (self.width, self.height) {
            log::debug!("Carousel resized to {width}x{height}");
        }
        self.width = width;
        self.height = height;
        self.update();
    }

    /// Change the number of slots and re-layout.
    pub fn set_count(&mut self, count: u32) {
        self.count = count;
        self.update();
    }

    /// Change the scroll mode and re-layout.
    pub fn set_scroll_mode(&mut self, mode: ScrollMode) {
        self.scroll_mode = mode;
        self.update();
    }

    /// First index of the scroll window around the selection.
    ///
    /// In [`ScrollMode::Full`] this is informational only.
    pub fn scroll_anchor(&self) -> usize {
        layout::scroll_anchor(self.selection, self.items.len(), self.count)
    }

    /// Gap the next layout pass places between items.
    ///
    /// Derived from the first item's face widths so that one front and
    /// `count - 1` backs fill the width; falls back to the default spacing
    /// when the body is empty or has fewer than two slots.
    pub fn spacing(&self) -> i32 {
        match self.items.first() {
            Some(first) => layout::row_spacing(
                self.width,
                self.count,
                first.back().width(),
                first.front().width(),
                self.default_spacing,
            ),
            None => self.default_spacing,
        }
    }

    /// Indices that take part in layout.
    ///
    /// Every item in [`ScrollMode::Full`]. In [`ScrollMode::Windowed`],
    /// `count` items starting at the scroll anchor, shifted right when
    /// needed so the selection stays inside the window.
    pub fn visible_range(&self) -> Range<usize> {
        let len = self.items.len();
        match self.scroll_mode {
            ScrollMode::Windowed if self.count > 0 => {
                let slots = self.count as usize;
                let first = self
                    .scroll_anchor()
                    .max((self.selection + 1).saturating_sub(slots));
                first..(first + slots).min(len)
            },
            _ => 0..len,
        }
    }

    /// Recompute the active face and position of every item.
    pub fn update(&mut self) {
        let visible = self.visible_range();
        let spacing = self.spacing();
        let mut offset: i64 = 0;

        for (index, item) in self.items.iter_mut().enumerate() {
            if !visible.contains(&index) {
                item.hide();
                continue;
            }
            let face = ActiveFace::for_index(index, self.selection);
            let window = item.show(face, self.id);
            window.set_left(layout::saturate(offset));
            window.set_top(layout::center(self.height, window.height()));
            offset += i64::from(window.width()) + i64::from(spacing);
        }

        log::trace!(
            "Carousel layout: {} items, selection {}, visible {:?}, spacing {spacing}, anchor {}",
            self.items.len(),
            self.selection,
            visible,
            self.scroll_anchor(),
        );
    }

    /// Top-left corner of each item's attached face, `None` for hidden items.
    pub fn positions(&self) -> Vec<Option<(i32, i32)>> {
        self.items
            .iter()
            .map(|item| {
                item.active_face()
                    .map(|f| (item.face(f).left(), item.face(f).top()))
            })
            .collect()
    }

    /// Capture the current attachment and placement of every item.
    pub fn snapshot(&self) -> LayoutSnapshot {
        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let face = item.active_face();
                let (left, top, width, height) = match face {
                    Some(f) => {
                        let w = item.face(f);
                        (w.left(), w.top(), w.width(), w.height())
                    },
                    None => (0, 0, 0, 0),
                };
                ItemPlacement {
                    index,
                    face,
                    left,
                    top,
                    width,
                    height,
                }
            })
            .collect();
        LayoutSnapshot {
            selection: self.selected(),
            spacing: self.spacing(),
            scroll_anchor: self.scroll_anchor(),
            width: self.width,
            height: self.height,
            items,
        }
    }
}

/// Where one item ended up after layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemPlacement {
    pub index: usize,
    /// Attached face, `None` when the item is hidden.
    pub face: Option<ActiveFace>,
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

/// Serializable view of a laid-out body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutSnapshot {
    pub selection: Option<usize>,
    pub spacing: i32,
    pub scroll_anchor: usize,
    pub width: u32,
    pub height: u32,
    pub items: Vec<ItemPlacement>,
}
