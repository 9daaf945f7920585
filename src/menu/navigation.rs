/// Generic wraparound navigation for list-like widgets
pub trait Navigable {
    /// Returns the total number of items in the list
    fn item_count(&self) -> usize;

    /// Returns the currently selected index
    fn selected_position(&self) -> usize;

    /// Sets the selected index
    fn set_selected_position(&mut self, index: usize);

    /// Moves to the next item (wraps around to start)
    fn next_item(&mut self) {
        let count = self.item_count();
        if count > 0 {
            let next = (self.selected_position() + 1) % count;
            self.set_selected_position(next);
        }
    }

    /// Moves to the previous item (wraps around to end)
    fn previous_item(&mut self) {
        let count = self.item_count();
        if count > 0 {
            let prev = match self.selected_position() {
                0 => count - 1,
                index => (index - 1).min(count - 1),
            };
            self.set_selected_position(prev);
        }
    }
}
