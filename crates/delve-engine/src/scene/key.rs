use super::ZIndex;

/// Paint-order key for a draw item.
///
/// Derived ordering compares `z` first (back-to-front), then `order`, the
/// insertion index that keeps equal-z items stable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}
