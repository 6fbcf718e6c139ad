use std::{fmt, ops::Deref};

use crossbeam::channel::{unbounded, Receiver, Sender};
use fieldmap_core::OutputShape;
use parking_lot::Mutex;

pub type CollectionEventSender = Sender<CollectionEvent>;
pub type CollectionEventReceiver = Receiver<CollectionEvent>;

/// Describes a change made to an [ObservableVec].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionEvent {
    /// An item was inserted at the given index.
    Inserted { index: usize },
    /// The item at the given index was removed.
    Removed { index: usize },
    /// The item at the given index was replaced.
    Replaced { index: usize },
    /// Every item was removed.
    Cleared,
}

/// An ordered collection that notifies its subscribers of every change.
///
/// Subscribers receive events over a channel. A subscriber whose receiver was dropped
/// is forgotten on the next change.
pub struct ObservableVec<T> {
    items: Vec<T>,
    subscribers: Mutex<Vec<CollectionEventSender>>,
}

impl<T> ObservableVec<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            subscribers: Default::default(),
        }
    }

    /// Returns a receiver for every change made from now on.
    pub fn subscribe(&self) -> CollectionEventReceiver {
        let (sender, receiver) = unbounded();
        self.subscribers.lock().push(sender);

        receiver
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    pub fn push(&mut self, item: T) {
        self.insert(self.items.len(), item);
    }

    /// Inserts an item at the given index, shifting everything after it.
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
        self.emit(CollectionEvent::Inserted { index });
    }

    /// Removes and returns the item at the given index.
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        let item = self.items.remove(index);
        self.emit(CollectionEvent::Removed { index });

        item
    }

    /// Replaces the item at the given index, returning the previous one.
    ///
    /// Panics if `index` is out of bounds.
    pub fn replace(&mut self, index: usize, item: T) -> T {
        let previous = std::mem::replace(&mut self.items[index], item);
        self.emit(CollectionEvent::Replaced { index });

        previous
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.emit(CollectionEvent::Cleared);
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn emit(&self, event: CollectionEvent) {
        self.subscribers
            .lock()
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }
}

impl<T> Deref for ObservableVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for ObservableVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ObservableVec<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableVec")
            .field("items", &self.items)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl<T> Extend<T> for ObservableVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for ObservableVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            subscribers: Default::default(),
        }
    }
}

impl<T> From<Vec<T>> for ObservableVec<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            subscribers: Default::default(),
        }
    }
}

impl<T> OutputShape for ObservableVec<T> {
    type Item = T;

    fn with_expected(expected: usize) -> Self {
        Self::with_capacity(expected)
    }

    fn place(&mut self, index: usize, item: T) {
        self.insert(index, item);
    }
}

impl<'a, T> IntoIterator for &'a ObservableVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
