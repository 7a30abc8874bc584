/// A truncated, order-preserving view of a list plus the number of items left out.
#[derive(Debug, PartialEq, Eq)]
pub struct Preview<'a, T> {
    pub shown: &'a [T],
    pub overflow: usize,
}

// Manual impls: the derives would demand `T: Copy` for a borrowed slice.
impl<T> Clone for Preview<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Preview<'_, T> {}

impl<T> Preview<'_, T> {
    /// The "+N" badge text, if anything was left out.
    pub fn overflow_badge(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{}", self.overflow))
    }

    pub fn total(&self) -> usize {
        self.shown.len() + self.overflow
    }
}

/// Members shown in the sidebar and on project cards.
pub const MEMBER_PREVIEW_LIMIT: usize = 3;
/// Labels shown on a task card.
pub const LABEL_PREVIEW_LIMIT: usize = 3;

pub fn preview_with_overflow<T>(items: &[T], limit: usize) -> Preview<'_, T> {
    let shown = &items[..items.len().min(limit)];
    Preview {
        shown,
        overflow: items.len().saturating_sub(limit),
    }
}
