use std::collections::{LinkedList, VecDeque};

/// Represents a container a fan-out can produce.
///
/// Mappers only ever call [OutputShape::place] once per source element, in increasing index order.
/// A shape must keep every placed item at its index: the item at position `i` of the output is
/// the one mapped from source element `i`, and equal items are never merged. Sets and heaps do
/// not qualify.
pub trait OutputShape: Sized {
    type Item;

    /// Creates an empty container, able to hold `expected` items if the shape supports reserving.
    fn with_expected(expected: usize) -> Self;

    /// Places the destination mapped from the source element at `index`.
    fn place(&mut self, index: usize, item: Self::Item);
}

impl<D> OutputShape for Vec<D> {
    type Item = D;

    fn with_expected(expected: usize) -> Self {
        Vec::with_capacity(expected)
    }

    fn place(&mut self, index: usize, item: D) {
        debug_assert_eq!(index, self.len(), "items are placed in index order");
        self.push(item);
    }
}

impl<D> OutputShape for VecDeque<D> {
    type Item = D;

    fn with_expected(expected: usize) -> Self {
        VecDeque::with_capacity(expected)
    }

    fn place(&mut self, index: usize, item: D) {
        debug_assert_eq!(index, self.len(), "items are placed in index order");
        self.push_back(item);
    }
}

impl<D> OutputShape for LinkedList<D> {
    type Item = D;

    fn with_expected(_: usize) -> Self {
        LinkedList::new()
    }

    fn place(&mut self, index: usize, item: D) {
        debug_assert_eq!(index, self.len(), "items are placed in index order");
        self.push_back(item);
    }
}

/// Fills an [OutputShape] from destinations that are already in source order.
pub(crate) fn assemble<C>(destinations: Vec<C::Item>) -> C
where
    C: OutputShape,
{
    let mut output = C::with_expected(destinations.len());

    for (index, item) in destinations.into_iter().enumerate() {
        output.place(index, item);
    }

    output
}
