//! Bounded preview mirror over an observable master list.
//!
//! # Responsibility
//! - Keep a capped preview list equal to the leading elements of a master
//!   list, driven only by the master's change events.
//! - Expose the preview read-only; it still notifies its own observers.
//!
//! # Invariants
//! - After every master change the preview equals
//!   `master[..min(capacity, master.len())]`.
//! - The preview is never mutated except by `apply_change`.
//! - Mirroring is total: events carry indices that were valid for the
//!   master list, so no error path exists here.

use crate::collection::observable::{
    CollectionChange, ListResult, ObservableList, SubscriptionId,
};

/// Number of leading items mirrored into a group preview.
///
/// Twelve fills whole grid columns for 1, 2, 3, 4 or 6 rows.
pub const PREVIEW_CAPACITY: usize = 12;

/// Updates `preview` after `change` was applied to `master`.
///
/// `master` must already reflect `change`.
pub fn apply_change<T: Clone>(
    preview: &mut ObservableList<T>,
    master: &[T],
    change: &CollectionChange<T>,
    capacity: usize,
) {
    // Preview indices below are bounded by the window invariant, so the
    // list results can be discarded.
    match change {
        CollectionChange::Added { index, item } => {
            if *index < capacity {
                let _ = preview.insert(*index, item.clone());
                if preview.len() > capacity {
                    let _ = preview.remove(capacity);
                }
            }
        }
        CollectionChange::Moved {
            old_index,
            new_index,
            item,
        } => {
            if *old_index < capacity && *new_index < capacity {
                let _ = preview.move_item(*old_index, *new_index);
            } else if *old_index < capacity {
                let _ = preview.remove(*old_index);
                refill_tail(preview, master, capacity);
            } else if *new_index < capacity {
                let _ = preview.insert(*new_index, item.clone());
                if preview.len() > capacity {
                    let _ = preview.remove(capacity);
                }
            }
        }
        CollectionChange::Removed { index, .. } => {
            if *index < capacity {
                let _ = preview.remove(*index);
                refill_tail(preview, master, capacity);
            }
        }
        CollectionChange::Replaced {
            index, new_item, ..
        } => {
            if *index < capacity {
                let _ = preview.replace(*index, new_item.clone());
            }
        }
        CollectionChange::Reset => {
            preview.clear();
            for item in master.iter().take(capacity) {
                preview.push(item.clone());
            }
        }
    }
}

fn refill_tail<T: Clone>(preview: &mut ObservableList<T>, master: &[T], capacity: usize) {
    if master.len() >= capacity {
        if let Some(item) = master.get(capacity - 1) {
            preview.push(item.clone());
        }
    }
}

/// Master list paired with its bounded preview.
///
/// Every master mutation goes through this type so the preview can be
/// updated synchronously from the resulting change event.
pub struct MirroredList<T> {
    items: ObservableList<T>,
    preview: ObservableList<T>,
    capacity: usize,
}

impl<T> Default for MirroredList<T> {
    fn default() -> Self {
        Self::with_capacity(PREVIEW_CAPACITY)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for MirroredList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MirroredList")
            .field("items", &self.items)
            .field("preview", &self.preview)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> MirroredList<T> {
    /// Creates an empty mirror with `PREVIEW_CAPACITY`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mirror with a custom preview capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: ObservableList::new(),
            preview: ObservableList::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Full master list.
    pub fn items(&self) -> &ObservableList<T> {
        &self.items
    }

    /// Derived preview window.
    pub fn preview(&self) -> &ObservableList<T> {
        &self.preview
    }

    pub fn subscribe_items(
        &mut self,
        handler: impl FnMut(&CollectionChange<T>) + 'static,
    ) -> SubscriptionId {
        self.items.subscribe(handler)
    }

    pub fn unsubscribe_items(&mut self, id: SubscriptionId) -> bool {
        self.items.unsubscribe(id)
    }

    pub fn subscribe_preview(
        &mut self,
        handler: impl FnMut(&CollectionChange<T>) + 'static,
    ) -> SubscriptionId {
        self.preview.subscribe(handler)
    }

    pub fn unsubscribe_preview(&mut self, id: SubscriptionId) -> bool {
        self.preview.unsubscribe(id)
    }
}

impl<T: Clone> MirroredList<T> {
    pub fn push(&mut self, item: T) {
        let change = self.items.push(item);
        self.mirror(&change);
    }

    pub fn insert(&mut self, index: usize, item: T) -> ListResult<()> {
        let change = self.items.insert(index, item)?;
        self.mirror(&change);
        Ok(())
    }

    /// Removes and returns the master element at `index`.
    pub fn remove(&mut self, index: usize) -> ListResult<T> {
        let change = self.items.remove(index)?;
        self.mirror(&change);
        match change {
            CollectionChange::Removed { item, .. } => Ok(item),
            _ => unreachable!("remove always yields a Removed change"),
        }
    }

    pub fn move_item(&mut self, old_index: usize, new_index: usize) -> ListResult<()> {
        let change = self.items.move_item(old_index, new_index)?;
        self.mirror(&change);
        Ok(())
    }

    /// Overwrites the master element at `index` and returns the old one.
    pub fn replace(&mut self, index: usize, item: T) -> ListResult<T> {
        let change = self.items.replace(index, item)?;
        self.mirror(&change);
        match change {
            CollectionChange::Replaced { old_item, .. } => Ok(old_item),
            _ => unreachable!("replace always yields a Replaced change"),
        }
    }

    pub fn clear(&mut self) {
        let change = self.items.clear();
        self.mirror(&change);
    }

    pub fn reset(&mut self, items: Vec<T>) {
        let change = self.items.reset(items);
        self.mirror(&change);
    }

    fn mirror(&mut self, change: &CollectionChange<T>) {
        apply_change(
            &mut self.preview,
            self.items.as_slice(),
            change,
            self.capacity,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_change, MirroredList, PREVIEW_CAPACITY};
    use crate::collection::observable::{CollectionChange, ObservableList};

    fn letters(range: std::ops::RangeInclusive<char>) -> Vec<char> {
        range.collect()
    }

    fn filled(values: Vec<char>) -> MirroredList<char> {
        let mut list = MirroredList::new();
        list.reset(values);
        list
    }

    #[test]
    fn reset_copies_leading_window() {
        let list = filled(letters('A'..='M'));
        assert_eq!(list.items().len(), 13);
        assert_eq!(list.preview().to_vec(), letters('A'..='L'));
    }

    #[test]
    fn remove_in_window_refills_from_master() {
        let mut list = filled(letters('A'..='M'));
        assert_eq!(list.remove(0).unwrap(), 'A');
        assert_eq!(list.preview().to_vec(), letters('B'..='M'));
    }

    #[test]
    fn remove_without_spare_items_shrinks_preview() {
        let mut list = filled(letters('A'..='E'));
        list.remove(2).unwrap();
        assert_eq!(list.preview().to_vec(), vec!['A', 'B', 'D', 'E']);
    }

    #[test]
    fn insert_at_full_capacity_drops_tail() {
        let mut list = filled(letters('A'..='L'));
        list.insert(3, 'x').unwrap();
        assert_eq!(list.preview().len(), PREVIEW_CAPACITY);
        assert_eq!(
            list.preview().to_vec(),
            vec!['A', 'B', 'C', 'x', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K']
        );
    }

    #[test]
    fn insert_beyond_window_leaves_preview_alone() {
        let mut list = filled(letters('A'..='M'));
        list.insert(12, 'x').unwrap();
        assert_eq!(list.preview().to_vec(), letters('A'..='L'));
    }

    #[test]
    fn move_out_of_window_pulls_in_next_item() {
        let mut list = filled(letters('A'..='O'));
        list.move_item(1, 14).unwrap();
        let mut expected = vec!['A'];
        expected.extend('C'..='M');
        assert_eq!(list.preview().to_vec(), expected);
    }

    #[test]
    fn move_into_window_evicts_tail() {
        let mut list = filled(letters('A'..='O'));
        list.move_item(13, 0).unwrap();
        let mut expected = vec!['N'];
        expected.extend('A'..='K');
        assert_eq!(list.preview().to_vec(), expected);
    }

    #[test]
    fn replace_outside_window_is_ignored_by_preview() {
        let mut list = filled(letters('A'..='N'));
        assert_eq!(list.replace(13, 'z').unwrap(), 'N');
        list.replace(0, 'a').unwrap();
        let mut expected = vec!['a'];
        expected.extend('B'..='L');
        assert_eq!(list.preview().to_vec(), expected);
    }

    #[test]
    fn custom_capacity_is_respected() {
        let mut list = MirroredList::with_capacity(2);
        for value in ['a', 'b', 'c'] {
            list.push(value);
        }
        assert_eq!(list.capacity(), 2);
        assert_eq!(list.preview().to_vec(), vec!['a', 'b']);
        list.remove(0).unwrap();
        assert_eq!(list.preview().to_vec(), vec!['b', 'c']);
    }

    #[test]
    fn apply_change_works_on_external_lists() {
        let master = vec![1, 2, 3];
        let mut preview = ObservableList::from(vec![1, 2]);
        apply_change(&mut preview, &master, &CollectionChange::Reset, 2);
        assert_eq!(preview.to_vec(), vec![1, 2]);

        let master = vec![0, 1, 2, 3];
        apply_change(
            &mut preview,
            &master,
            &CollectionChange::Added { index: 0, item: 0 },
            2,
        );
        assert_eq!(preview.to_vec(), vec![0, 1]);
    }

    #[test]
    fn preview_observers_see_mirrored_changes() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut list = filled(letters('A'..='M'));
        let kinds = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&kinds);
        list.subscribe_preview(move |change| sink.borrow_mut().push(change.kind()));

        list.remove(0).unwrap();
        list.insert(20, 'z').unwrap_err();
        list.push('z');

        assert_eq!(*kinds.borrow(), vec!["removed", "added"]);
    }
}
