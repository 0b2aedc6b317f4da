use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame
///   allocation once warmed
///
/// Callers clear and re-record the list each frame; `clear` keeps the
/// allocations. Iteration never consumes the items.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // SortKey includes insertion order, so an unstable sort is deterministic.
        let items = &self.items;
        self.sorted_indices
            .sort_unstable_by(|&a, &b| items[a].key.cmp(&items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;

    fn rect_x(item: &DrawItem) -> f32 {
        match &item.cmd {
            DrawCmd::Rect(r) => r.rect.origin.x,
            DrawCmd::Line(l) => l.start.x,
        }
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex(1), Rect::new(1.0, 0.0, 1.0, 1.0), Color::white());
        list.push_solid_rect(ZIndex(0), Rect::new(2.0, 0.0, 1.0, 1.0), Color::white());
        list.push_solid_rect(ZIndex(1), Rect::new(3.0, 0.0, 1.0, 1.0), Color::white());
        list.push_line(ZIndex(-1), Vec2::new(4.0, 0.0), Vec2::new(4.0, 1.0), Color::white());

        let xs: Vec<f32> = list.iter_in_paint_order().map(rect_x).collect();
        assert_eq!(xs, vec![4.0, 2.0, 1.0, 3.0]);
    }

    #[test]
    fn iteration_is_repeatable() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex(0), Rect::new(1.0, 0.0, 1.0, 1.0), Color::white());
        assert_eq!(list.iter_in_paint_order().count(), 1);
        assert_eq!(list.iter_in_paint_order().count(), 1);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn clear_resets_items_and_order() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex(0), Rect::new(1.0, 0.0, 1.0, 1.0), Color::white());
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.iter_in_paint_order().count(), 0);

        list.push_solid_rect(ZIndex(0), Rect::new(1.0, 0.0, 1.0, 1.0), Color::white());
        assert_eq!(list.items()[0].key.order, 0);
    }
}
