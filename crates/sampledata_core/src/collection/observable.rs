//! Change-notifying ordered list.
//!
//! # Responsibility
//! - Hold an ordered sequence and broadcast one `CollectionChange` per
//!   successful mutation.
//! - Reject out-of-range indices with `ListError` instead of panicking.
//!
//! # Invariants
//! - Subscribers run synchronously, in subscription order, after the
//!   mutation has been applied.
//! - A failed mutation leaves the list untouched and raises no event.
//! - Indices carried by a change are valid for the list at the time the
//!   change is raised.

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque handle returned by `subscribe`, used to unsubscribe later.
pub type SubscriptionId = Uuid;

/// Result type used by list mutations.
pub type ListResult<T> = Result<T, ListError>;

type ChangeHandler<T> = Box<dyn FnMut(&CollectionChange<T>)>;

/// One mutation applied to an `ObservableList`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionChange<T> {
    /// `item` was inserted at `index`.
    Added { index: usize, item: T },
    /// `item` moved from `old_index` to `new_index`.
    Moved {
        old_index: usize,
        new_index: usize,
        item: T,
    },
    /// `item` was removed from `index`.
    Removed { index: usize, item: T },
    /// `old_item` at `index` was overwritten by `new_item`.
    Replaced {
        index: usize,
        old_item: T,
        new_item: T,
    },
    /// Contents changed wholesale; observers must re-read the list.
    Reset,
}

impl<T> CollectionChange<T> {
    /// Stable label used in log lines and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Added { .. } => "added",
            Self::Moved { .. } => "moved",
            Self::Removed { .. } => "removed",
            Self::Replaced { .. } => "replaced",
            Self::Reset => "reset",
        }
    }
}

/// Errors from list mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Index is not valid for the current list length.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for list of length {len}")
            }
        }
    }
}

impl Error for ListError {}

/// Ordered list that notifies subscribers on every change.
pub struct ObservableList<T> {
    items: Vec<T>,
    subscribers: Vec<(SubscriptionId, ChangeHandler<T>)>,
}

impl<T> Default for ObservableList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            subscribers: Vec::new(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ObservableList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableList")
            .field("items", &self.items)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T> From<Vec<T>> for ObservableList<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            subscribers: Vec::new(),
        }
    }
}

impl<T> ObservableList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns the index of the first element matching `predicate`.
    pub fn position(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(predicate)
    }

    /// Registers a change handler and returns its subscription handle.
    pub fn subscribe(
        &mut self,
        handler: impl FnMut(&CollectionChange<T>) + 'static,
    ) -> SubscriptionId {
        let id = Uuid::new_v4();
        self.subscribers.push((id, Box::new(handler)));
        id
    }

    /// Removes one handler. Returns `false` when the handle is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self, change: &CollectionChange<T>) {
        for (_, handler) in self.subscribers.iter_mut() {
            handler(change);
        }
    }

    fn check_index(&self, index: usize) -> ListResult<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(ListError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

impl<T: Clone> ObservableList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Appends one element.
    ///
    /// Returns the change that was broadcast to subscribers.
    pub fn push(&mut self, item: T) -> CollectionChange<T> {
        let index = self.items.len();
        self.items.push(item.clone());
        let change = CollectionChange::Added { index, item };
        self.notify(&change);
        change
    }

    /// Inserts one element at `index` (`index == len` appends).
    pub fn insert(&mut self, index: usize, item: T) -> ListResult<CollectionChange<T>> {
        if index > self.items.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.items.insert(index, item.clone());
        let change = CollectionChange::Added { index, item };
        self.notify(&change);
        Ok(change)
    }

    /// Removes the element at `index`.
    pub fn remove(&mut self, index: usize) -> ListResult<CollectionChange<T>> {
        self.check_index(index)?;
        let item = self.items.remove(index);
        let change = CollectionChange::Removed { index, item };
        self.notify(&change);
        Ok(change)
    }

    /// Moves the element at `old_index` so that it ends up at `new_index`.
    ///
    /// Same semantics as remove-then-insert; both indices must address an
    /// existing element.
    pub fn move_item(
        &mut self,
        old_index: usize,
        new_index: usize,
    ) -> ListResult<CollectionChange<T>> {
        self.check_index(old_index)?;
        self.check_index(new_index)?;
        let item = self.items.remove(old_index);
        self.items.insert(new_index, item.clone());
        let change = CollectionChange::Moved {
            old_index,
            new_index,
            item,
        };
        self.notify(&change);
        Ok(change)
    }

    /// Overwrites the element at `index`.
    pub fn replace(&mut self, index: usize, item: T) -> ListResult<CollectionChange<T>> {
        self.check_index(index)?;
        let old_item = std::mem::replace(&mut self.items[index], item.clone());
        let change = CollectionChange::Replaced {
            index,
            old_item,
            new_item: item,
        };
        self.notify(&change);
        Ok(change)
    }

    /// Removes every element.
    pub fn clear(&mut self) -> CollectionChange<T> {
        self.items.clear();
        let change = CollectionChange::Reset;
        self.notify(&change);
        change
    }

    /// Replaces the whole content in one step.
    pub fn reset(&mut self, items: Vec<T>) -> CollectionChange<T> {
        self.items = items;
        let change = CollectionChange::Reset;
        self.notify(&change);
        change
    }
}

impl<T> std::ops::Index<usize> for ObservableList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a ObservableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{CollectionChange, ListError, ObservableList};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(list: &mut ObservableList<char>) -> Rc<RefCell<Vec<CollectionChange<char>>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        list.subscribe(move |change| sink.borrow_mut().push(change.clone()));
        seen
    }

    #[test]
    fn mutations_broadcast_matching_changes() {
        let mut list = ObservableList::from(vec!['a', 'b', 'c']);
        let seen = recording(&mut list);

        list.push('d');
        list.insert(0, 'z').unwrap();
        list.move_item(0, 3).unwrap();
        list.replace(1, 'B').unwrap();
        list.remove(0).unwrap();

        assert_eq!(list.to_vec(), vec!['B', 'c', 'z', 'd']);
        assert_eq!(
            *seen.borrow(),
            vec![
                CollectionChange::Added { index: 3, item: 'd' },
                CollectionChange::Added { index: 0, item: 'z' },
                CollectionChange::Moved {
                    old_index: 0,
                    new_index: 3,
                    item: 'z'
                },
                CollectionChange::Replaced {
                    index: 1,
                    old_item: 'b',
                    new_item: 'B'
                },
                CollectionChange::Removed { index: 0, item: 'a' },
            ]
        );
    }

    #[test]
    fn out_of_range_mutation_is_rejected_without_event() {
        let mut list = ObservableList::from(vec!['a']);
        let seen = recording(&mut list);

        assert_eq!(
            list.insert(2, 'x').unwrap_err(),
            ListError::IndexOutOfRange { index: 2, len: 1 }
        );
        assert!(list.remove(1).is_err());
        assert!(list.replace(5, 'x').is_err());
        assert!(list.move_item(0, 1).is_err());

        assert_eq!(list.to_vec(), vec!['a']);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn clear_and_reset_raise_reset() {
        let mut list = ObservableList::from(vec![1, 2, 3]);
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        list.subscribe(move |change| {
            assert_eq!(*change, CollectionChange::Reset);
            *sink.borrow_mut() += 1;
        });

        list.reset(vec![7, 8]);
        assert_eq!(list.as_slice(), &[7, 8]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut list = ObservableList::new();
        let seen = recording(&mut list);
        let extra = list.subscribe(|_| panic!("unsubscribed handler must not run"));
        assert_eq!(list.subscriber_count(), 2);

        assert!(list.unsubscribe(extra));
        assert!(!list.unsubscribe(extra));
        list.push('x');

        assert_eq!(seen.borrow().len(), 1);
    }
}
