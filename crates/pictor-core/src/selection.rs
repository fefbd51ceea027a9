//! Selection view-model contract.

/// What the engine needs to know about the user's current selection.
///
/// Implemented by the host's grid/list view-model. `T` is the element
/// the view selects over: media items in item grids, album descriptors
/// in the album set view.
pub trait SelectionSource<T>: Send + Sync {
    /// Items currently selected, in view order.
    fn selected_items(&self) -> Vec<T>;

    /// Number of selected items.
    fn selected_count(&self) -> usize;

    /// Whether the view is in select-all mode.
    fn is_select_all(&self) -> bool;

    /// Total number of items in the backing view, selected or not.
    fn total_count(&self) -> usize;

    /// Item at a position in the backing view.
    fn item_at(&self, index: usize) -> Option<T>;

    /// Every item in the backing view, selected or not.
    fn all_items(&self) -> Vec<T> {
        (0..self.total_count())
            .filter_map(|index| self.item_at(index))
            .collect()
    }
}
