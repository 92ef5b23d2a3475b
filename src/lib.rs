//! A circular buffer queue that grows on demand.
//!
//! `CircularQueue` keeps its elements in a heap-allocated ring: removing from
//! the front and inserting at the back are both `O(1)` and never shift
//! elements around. When an insert finds the ring full, the backing block is
//! doubled and the live elements are copied back into natural order, so
//! inserts always succeed.
//!
//! The contained elements are not required to be copyable.
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! circularqueue = "0.1"
//! ```
//!
//! # Capacity
//!
//! `capacity()` is the length of the current backing block, at least 1. It
//! only ever changes by doubling when an insert finds the queue full; the
//! queue never shrinks.
//! [Read more]
//!
//! [Read more]: https://en.wikipedia.org/wiki/Circular_buffer
//!
//! # Examples
//! ```
//! use circularqueue::CircularQueue;
//!
//! let mut queue = CircularQueue::new();
//! assert_eq!(queue.capacity(), 10);
//! assert_eq!(queue.len(), 0);
//!
//! queue.push_back(1);
//! queue.push_back(2);
//! assert_eq!(queue.len(), 2);
//!
//! assert_eq!(queue.pop_front(), Some(1));
//! assert_eq!(queue.pop_front(), Some(2));
//! assert_eq!(queue.pop_front(), None);
//! ```
//!
//! # Growth
//! ```
//! use circularqueue::CircularQueue;
//!
//! let mut queue = CircularQueue::with_capacity(2);
//!
//! queue.push_back(1);
//! queue.push_back(2);
//! queue.push_back(3);
//!
//! assert_eq!(queue.capacity(), 4);
//! let items: Vec<_> = queue.into_iter().collect();
//! assert_eq!(items, vec![1, 2, 3]);
//! ```
//!
//! # Iterator
//! ```
//! use circularqueue::CircularQueue;
//!
//! let mut queue = CircularQueue::new();
//!
//! queue.extend(0..5);
//!
//! let items: Vec<_> = queue.into_iter().collect();
//! assert_eq!(items, vec![0, 1, 2, 3, 4]);
//! ```
//!
//! # From Iterator
//! ```
//! use circularqueue::CircularQueue;
//!
//! let queue: CircularQueue<_> = vec![0, 1, 2, 3, 4].into_iter().collect();
//! let queue2: CircularQueue<_> = (0..5).collect();
//!
//! assert_eq!(queue, queue2);
//! ```

#![deny(missing_docs)]

use std::cmp;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::MaybeUninit;
use std::ops::{Index, IndexMut};
use std::ptr;
use std::slice;

pub mod error;
mod utils;

pub use error::QueueError;
use utils::wrap_add;

const DEFAULT_CAPACITY: usize = 10;

/// A growable ring buffer with FIFO semantics.
///
/// The "default" usage of this type is to use [`push_back`] to add to the
/// queue and [`pop_front`] to remove from it. `extend` pushes onto the back
/// in this manner, and iterating over `CircularQueue` goes front to back.
///
/// # Capacity
///
/// `capacity()` is the length of the current backing block. An insert into a
/// full queue doubles it and preserves the logical order of the live
/// elements; the queue never shrinks and inserts never fail.
///
/// [`push_back`]: CircularQueue::push_back
/// [`pop_front`]: CircularQueue::pop_front
pub struct CircularQueue<T> {
    buf: Box<[MaybeUninit<T>]>,
    front: usize,
    len: usize,
}

impl<T> CircularQueue<T> {
    #[inline]
    fn cap(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.len == self.cap()
    }

    /// Physical slot of the element at logical position `index`.
    #[inline]
    fn physical(&self, index: usize) -> usize {
        wrap_add(self.front, index, self.cap())
    }

    #[inline]
    unsafe fn buffer_read(&mut self, offset: usize) -> T {
        debug_assert!(offset < self.cap());
        self.buf.get_unchecked(offset).assume_init_read()
    }

    #[inline]
    unsafe fn buffer_write(&mut self, offset: usize, element: T) {
        debug_assert!(offset < self.cap());
        self.buf.get_unchecked_mut(offset).write(element);
    }

    /// Doubles the backing block and moves the live elements into natural
    /// order starting at slot 0.
    fn grow(&mut self) {
        debug_assert!(self.is_full());

        let new_cap = match self.cap().checked_mul(2) {
            Some(cap) => cap,
            None => panic!("capacity overflow"),
        };
        let mut new_buf: Box<[MaybeUninit<T>]> = Box::new_uninit_slice(new_cap);

        unsafe {
            let (first, second) = self.as_slices();
            let dst = new_buf.as_mut_ptr() as *mut T;
            ptr::copy_nonoverlapping(first.as_ptr(), dst, first.len());
            ptr::copy_nonoverlapping(second.as_ptr(), dst.add(first.len()), second.len());
        }

        // Ownership of the elements has moved into the new block; the old
        // one is freed without running any destructors.
        self.buf = new_buf;
        self.front = 0;
    }
}

impl<T> CircularQueue<T> {
    /// Creates an empty `CircularQueue` with the default capacity of 10.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::CircularQueue;
    ///
    /// let queue: CircularQueue<usize> = CircularQueue::new();
    /// assert_eq!(queue.capacity(), 10);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `CircularQueue` with the given initial capacity.
    ///
    /// A capacity of zero is coerced to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::CircularQueue;
    ///
    /// let queue: CircularQueue<usize> = CircularQueue::with_capacity(4);
    /// assert_eq!(queue.capacity(), 4);
    /// assert!(queue.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = cmp::max(capacity, 1);
        CircularQueue {
            buf: Box::new_uninit_slice(capacity),
            front: 0,
            len: 0,
        }
    }

    /// Inserts an element at the back of the queue.
    ///
    /// Never fails: a full queue doubles its backing block before the
    /// element is written.
    ///
    /// # Panics
    ///
    /// Panics if doubling the capacity overflows `usize`; aborts if the
    /// allocator cannot provide the new block.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::CircularQueue;
    ///
    /// let mut queue = CircularQueue::with_capacity(2);
    /// queue.push_back(1);
    /// queue.push_back(2);
    /// queue.push_back(3);
    ///
    /// assert_eq!(queue.capacity(), 4);
    /// assert_eq!(queue.len(), 3);
    /// ```
    pub fn push_back(&mut self, element: T) {
        if self.is_full() {
            self.grow();
        }
        let rear = self.physical(self.len);
        unsafe { self.buffer_write(rear, element) };
        self.len += 1;
    }

    /// Provides a reference to the front element, or `None` if the queue is
    /// empty.
    ///
    /// This is a query, not a failing operation: emptiness is reported
    /// through the return value.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::CircularQueue;
    ///
    /// let mut queue = CircularQueue::new();
    /// assert_eq!(queue.front(), None);
    ///
    /// queue.push_back(1);
    /// queue.push_back(2);
    /// assert_eq!(queue.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::CircularQueue;
    ///
    /// let mut queue = CircularQueue::new();
    /// queue.push_back(1);
    /// queue.push_back(2);
    ///
    /// if let Some(front) = queue.front_mut() {
    ///     *front = 9;
    /// }
    /// assert_eq!(queue.front(), Some(&9));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Provides a reference to the most recently inserted element, or `None`
    /// if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::CircularQueue;
    ///
    /// let mut queue = CircularQueue::new();
    /// assert_eq!(queue.back(), None);
    ///
    /// queue.push_back(1);
    /// queue.push_back(2);
    /// assert_eq!(queue.back(), Some(&2));
    /// ```
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.get(self.len - 1)
        }
    }

    /// Retrieves an element by logical position.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::CircularQueue;
    ///
    /// let mut queue = CircularQueue::new();
    /// queue.push_back(3);
    /// queue.push_back(4);
    /// queue.push_back(5);
    /// assert_eq!(queue.get(1), Some(&4));
    /// assert_eq!(queue.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            let idx = self.physical(index);
            unsafe { Some(self.buf.get_unchecked(idx).assume_init_ref()) }
        } else {
            None
        }
    }

    /// Retrieves an element mutably by logical position.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::CircularQueue;
    ///
    /// let mut queue = CircularQueue::new();
    /// queue.push_back(3);
    /// queue.push_back(4);
    /// if let Some(elem) = queue.get_mut(1) {
    ///     *elem = 7;
    /// }
    ///
    /// assert_eq!(queue.get(1), Some(&7));
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let idx = self.physical(index);
            unsafe { Some(self.buf.get_unchecked_mut(idx).assume_init_mut()) }
        } else {
            None
        }
    }

    /// Removes and returns the element at the front of the queue.
    ///
    /// Returns the element, or `None` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::CircularQueue;
    ///
    /// let mut queue = CircularQueue::new();
    /// queue.push_back(1);
    /// queue.push_back(2);
    ///
    /// assert_eq!(queue.pop_front(), Some(1));
    /// assert_eq!(queue.pop_front(), Some(2));
    /// assert_eq!(queue.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let front = self.front;
        self.front = wrap_add(front, 1, self.cap());
        self.len -= 1;
        unsafe { Some(self.buffer_read(front)) }
    }

    /// Removes and returns the element at the front of the queue, failing
    /// with [`QueueError::Empty`] if there is none.
    ///
    /// This variant is for call sites that have already established
    /// non-emptiness and treat its violation as a contract error; use
    /// [`pop_front`] for silent-empty handling.
    ///
    /// [`pop_front`]: CircularQueue::pop_front
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::{CircularQueue, QueueError};
    ///
    /// let mut queue = CircularQueue::new();
    /// queue.push_back(7);
    ///
    /// assert_eq!(queue.remove_front(), Ok(7));
    /// assert_eq!(queue.remove_front(), Err(QueueError::Empty));
    /// ```
    #[inline]
    pub fn remove_front(&mut self) -> Result<T, QueueError> {
        self.pop_front().ok_or(QueueError::Empty)
    }

    /// Returns the number of elements in the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::CircularQueue;
    ///
    /// let mut queue = CircularQueue::new();
    /// assert_eq!(queue.len(), 0);
    /// queue.push_back(1);
    /// assert_eq!(queue.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the queue contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::CircularQueue;
    ///
    /// let mut queue = CircularQueue::new();
    /// assert!(queue.is_empty());
    /// queue.push_back(1);
    /// assert!(!queue.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::CircularQueue;
    ///
    /// let queue: CircularQueue<usize> = CircularQueue::with_capacity(4);
    /// assert_eq!(queue.capacity(), 4);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap()
    }

    /// Returns a front-to-back iterator.
    ///
    /// The cursor captures the starting position and live count when it is
    /// created and observes exactly `len()` elements, independent of where
    /// the front physically sits in the backing block.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::CircularQueue;
    ///
    /// let mut queue = CircularQueue::new();
    /// queue.push_back(5);
    /// queue.push_back(3);
    /// queue.push_back(4);
    /// let items: Vec<&i32> = queue.iter().collect();
    /// assert_eq!(items, vec![&5, &3, &4]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: &self.buf,
            index: self.front,
            remaining: self.len,
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::CircularQueue;
    ///
    /// let mut queue = CircularQueue::new();
    /// queue.push_back(5);
    /// queue.push_back(3);
    /// for num in queue.iter_mut() {
    ///     *num -= 2;
    /// }
    /// assert_eq!(queue.pop_front(), Some(3));
    /// assert_eq!(queue.pop_front(), Some(1));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            index: self.front,
            remaining: self.len,
            ring: &mut self.buf,
        }
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::CircularQueue;
    ///
    /// let mut queue = CircularQueue::with_capacity(4);
    /// queue.extend(0..4);
    /// queue.pop_front();
    /// queue.pop_front();
    /// queue.push_back(4);
    /// queue.push_back(5);
    ///
    /// assert_eq!(queue.as_slices(), (&[2, 3][..], &[4, 5][..]));
    /// ```
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let first_len = cmp::min(self.len, self.cap() - self.front);
        let second_len = self.len - first_len;
        unsafe {
            let ptr = self.buf.as_ptr() as *const T;
            (
                slice::from_raw_parts(ptr.add(self.front), first_len),
                slice::from_raw_parts(ptr, second_len),
            )
        }
    }

    /// Returns a pair of mutable slices which contain, in order, the
    /// contents of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::CircularQueue;
    ///
    /// let mut queue: CircularQueue<_> = (0..4).collect();
    /// queue.as_mut_slices().0[0] = 42;
    /// assert_eq!(queue.front(), Some(&42));
    /// ```
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let first_len = cmp::min(self.len, self.cap() - self.front);
        let second_len = self.len - first_len;
        unsafe {
            let ptr = self.buf.as_mut_ptr() as *mut T;
            (
                slice::from_raw_parts_mut(ptr.add(self.front), first_len),
                slice::from_raw_parts_mut(ptr, second_len),
            )
        }
    }

    /// Returns `true` if the queue contains an element equal to the given
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::CircularQueue;
    ///
    /// let mut queue = CircularQueue::new();
    /// queue.push_back(0);
    /// queue.push_back(1);
    ///
    /// assert_eq!(queue.contains(&1), true);
    /// assert_eq!(queue.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Clears the queue, removing all values.
    ///
    /// The capacity is retained.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::CircularQueue;
    ///
    /// let mut queue = CircularQueue::new();
    /// queue.push_back(1);
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// ```
    pub fn clear(&mut self) {
        let (first, second) = self.as_mut_slices();
        let first: *mut [T] = first;
        let second: *mut [T] = second;
        // Reset before the destructors run so a panicking `drop` cannot
        // leave the queue pointing at dead slots.
        self.front = 0;
        self.len = 0;
        unsafe {
            ptr::drop_in_place(first);
            ptr::drop_in_place(second);
        }
    }
}

impl<T> Drop for CircularQueue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for CircularQueue<T> {
    #[inline]
    fn default() -> Self {
        CircularQueue::new()
    }
}

impl<T: Clone> Clone for CircularQueue<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for CircularQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

#[cfg(test)]
impl<'a, T: PartialEq> PartialEq<&'a [T]> for CircularQueue<T> {
    fn eq(&self, other: &&'a [T]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

#[cfg(test)]
impl<T: PartialEq> PartialEq<Vec<T>> for CircularQueue<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == &other[..]
    }
}

impl<T: Eq> Eq for CircularQueue<T> {}

impl<T: Hash> Hash for CircularQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        let (a, b) = self.as_slices();
        Hash::hash_slice(a, state);
        Hash::hash_slice(b, state);
    }
}

impl<T> Index<usize> for CircularQueue<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len;
        self.get(index).unwrap_or_else(|| {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            )
        })
    }
}

impl<T> IndexMut<usize> for CircularQueue<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        self.get_mut(index).unwrap_or_else(|| {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            )
        })
    }
}

impl<T> FromIterator<T> for CircularQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = CircularQueue::new();
        queue.extend(iter);
        queue
    }
}

/// Extend the queue with an iterator, growing as needed.
impl<T> Extend<T> for CircularQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<T> IntoIterator for CircularQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a CircularQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CircularQueue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// `CircularQueue` iterator
///
/// The cursor captures the ring, starting position, and live count by value
/// at creation time. Structural mutation of the queue while an iterator is
/// live is rejected by the borrow checker.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<'a, T> {
    ring: &'a [MaybeUninit<T>],
    index: usize,
    remaining: usize,
}

impl<T> Iter<'_, T> {
    /// Element removal through an iterator is not supported; this always
    /// fails with [`QueueError::UnsupportedRemove`] and leaves the cursor
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularqueue::{CircularQueue, QueueError};
    ///
    /// let queue: CircularQueue<_> = (0..3).collect();
    /// let mut iter = queue.iter();
    /// iter.next();
    /// assert_eq!(iter.remove_current(), Err(QueueError::UnsupportedRemove));
    /// ```
    pub fn remove_current(&mut self) -> Result<T, QueueError> {
        Err(QueueError::UnsupportedRemove)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.index;
        self.index = wrap_add(index, 1, self.ring.len());
        self.remaining -= 1;
        unsafe { Some(self.ring.get_unchecked(index).assume_init_ref()) }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// `CircularQueue` mutable iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T> {
    ring: &'a mut [MaybeUninit<T>],
    index: usize,
    remaining: usize,
}

impl<T> IterMut<'_, T> {
    /// Element removal through an iterator is not supported; this always
    /// fails with [`QueueError::UnsupportedRemove`] and leaves the cursor
    /// untouched.
    pub fn remove_current(&mut self) -> Result<T, QueueError> {
        Err(QueueError::UnsupportedRemove)
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.index;
        self.index = wrap_add(index, 1, self.ring.len());
        self.remaining -= 1;

        unsafe {
            let elem = self.ring.get_unchecked_mut(index);
            Some(&mut *elem.as_mut_ptr())
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// By-value `CircularQueue` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    inner: CircularQueue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple() {
        let mut queue = CircularQueue::with_capacity(8);
        assert_eq!(queue.capacity(), 8);
        assert_eq!(queue.len(), 0);

        queue.push_back(1);
        queue.push_back(2);
        queue.push_back(3);
        queue.push_back(4);
        assert_eq!(queue.len(), 4);

        assert_eq!(queue.pop_front(), Some(1));
        assert_eq!(queue.pop_front(), Some(2));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop_front(), Some(3));
        assert_eq!(queue.pop_front(), Some(4));
        assert_eq!(queue.pop_front(), None);
    }

    #[test]
    fn default_capacity() {
        let queue: CircularQueue<i32> = CircularQueue::new();
        assert_eq!(queue.capacity(), 10);
        assert!(queue.is_empty());
    }

    #[test]
    fn zero_capacity_is_coerced() {
        let mut queue = CircularQueue::with_capacity(0);
        assert_eq!(queue.capacity(), 1);
        queue.push_back(1);
        queue.push_back(2);
        assert_eq!(queue.pop_front(), Some(1));
        assert_eq!(queue.pop_front(), Some(2));
    }

    #[test]
    fn empty_queue_contract() {
        let mut queue: CircularQueue<i32> = CircularQueue::new();
        assert_eq!(queue.front(), None);
        assert_eq!(queue.pop_front(), None);
        assert_eq!(queue.remove_front(), Err(QueueError::Empty));

        queue.push_back(1);
        assert_eq!(queue.remove_front(), Ok(1));

        // fully drained behaves like freshly constructed
        assert_eq!(queue.front(), None);
        assert_eq!(queue.pop_front(), None);
        assert_eq!(queue.remove_front(), Err(QueueError::Empty));
    }

    #[test]
    fn len_tracks_inserts_and_removes() {
        let mut queue = CircularQueue::with_capacity(3);
        let mut expected = 0;
        for round in 0..5 {
            for i in 0..4 {
                queue.push_back(round * 10 + i);
                expected += 1;
                assert_eq!(queue.len(), expected);
                assert!(queue.len() <= queue.capacity());
            }
            for _ in 0..2 {
                assert!(queue.pop_front().is_some());
                expected -= 1;
                assert_eq!(queue.len(), expected);
            }
        }
    }

    #[test]
    fn growth_preserves_order() {
        let mut queue = CircularQueue::with_capacity(4);
        queue.extend(0..5);
        assert_eq!(queue.capacity(), 8);
        assert_eq!(queue.len(), 5);

        let drained: Vec<_> = queue.into_iter().collect();
        assert_eq!(drained, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn growth_from_wrapped_layout() {
        let mut queue = CircularQueue::with_capacity(4);
        queue.extend(0..4);
        queue.pop_front();
        queue.pop_front();
        // wraps around the end of the block, then grows on the last insert
        queue.extend(4..7);
        assert_eq!(queue.capacity(), 8);
        assert_eq!(queue, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn wraparound_without_growth() {
        let mut queue = CircularQueue::with_capacity(4);
        queue.extend(0..4);
        assert_eq!(queue.pop_front(), Some(0));
        assert_eq!(queue.pop_front(), Some(1));
        queue.push_back(4);
        queue.push_back(5);

        assert_eq!(queue.len(), 4);
        assert_eq!(queue.capacity(), 4);

        let drained: Vec<_> = queue.into_iter().collect();
        assert_eq!(drained, vec![2, 3, 4, 5]);
    }

    #[test]
    fn unbounded_inserts_never_fail() {
        let mut queue = CircularQueue::with_capacity(1);
        for i in 0..10_000 {
            queue.push_back(i);
        }
        assert_eq!(queue.len(), 10_000);
        for i in 0..10_000 {
            assert_eq!(queue.pop_front(), Some(i));
        }
        assert_eq!(queue.pop_front(), None);
    }

    #[test]
    fn iter_follows_logical_order() {
        let mut queue = CircularQueue::with_capacity(3);
        queue.extend([1, 2, 3]);
        assert_eq!(queue.pop_front(), Some(1));
        // physically lands in slot 0
        queue.push_back(4);

        let mut iter = queue.iter();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), Some(&4));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn iter_mut_allows_mutation() {
        let mut queue = CircularQueue::with_capacity(3);
        queue.extend([1, 2]);
        for num in queue.iter_mut() {
            *num += 10;
        }
        assert_eq!(queue, vec![11, 12]);
    }

    #[test]
    fn iterator_removal_is_unsupported() {
        let queue: CircularQueue<_> = (0..3).collect();
        let mut iter = queue.iter();
        iter.next();
        assert_eq!(iter.remove_current(), Err(QueueError::UnsupportedRemove));
        // the cursor itself is unaffected
        assert_eq!(iter.next(), Some(&1));

        let mut queue = queue;
        let mut iter_mut = queue.iter_mut();
        assert_eq!(
            iter_mut.remove_current(),
            Err(QueueError::UnsupportedRemove)
        );
    }

    #[test]
    fn into_iter_moves_elements() {
        #[derive(Eq, PartialEq, Debug)]
        struct NoCopy<T>(T);

        let mut queue = CircularQueue::with_capacity(3);
        queue.push_back(NoCopy(1));
        queue.push_back(NoCopy(2));
        queue.pop_front();
        queue.push_back(NoCopy(3));

        let mut iter = queue.into_iter();
        assert_eq!(iter.size_hint(), (2, Some(2)));
        assert_eq!(iter.next(), Some(NoCopy(2)));
        assert_eq!(iter.next(), Some(NoCopy(3)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn front_back_get() {
        let mut queue = CircularQueue::with_capacity(4);
        queue.extend([1, 2, 3]);
        assert_eq!(queue.front(), Some(&1));
        assert_eq!(queue.back(), Some(&3));
        assert_eq!(queue.get(1), Some(&2));
        assert_eq!(queue.get(3), None);

        if let Some(front) = queue.front_mut() {
            *front = 9;
        }
        assert_eq!(queue.pop_front(), Some(9));
        assert_eq!(queue.front(), Some(&2));
    }

    #[test]
    fn index_access() {
        let mut queue = CircularQueue::with_capacity(4);
        queue.extend([1, 2, 3]);
        assert_eq!(queue[0], 1);
        assert_eq!(queue.pop_front(), Some(1));
        assert_eq!(queue[0], 2);
        queue[1] = 9;
        assert_eq!(queue.pop_front(), Some(2));
        assert_eq!(queue.pop_front(), Some(9));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let mut queue = CircularQueue::with_capacity(4);
        queue.push_back(1);
        queue[1];
    }

    #[test]
    fn eq_ignores_physical_layout() {
        let mut a = CircularQueue::with_capacity(4);
        a.extend([1, 2, 3]);

        let mut b = CircularQueue::with_capacity(8);
        b.extend([0, 0, 1, 2]);
        b.pop_front();
        b.pop_front();
        b.push_back(3);

        assert_eq!(a, b);
    }

    #[test]
    fn clone_preserves_contents() {
        let queue: CircularQueue<_> = (0..6).collect();
        let clone = queue.clone();
        assert_eq!(clone, queue);
        assert_eq!(clone.len(), 6);
    }

    #[test]
    fn contains_searches_live_elements() {
        let mut queue = CircularQueue::with_capacity(3);
        queue.extend([1, 2]);
        assert!(queue.contains(&1));
        assert!(!queue.contains(&3));
        queue.pop_front();
        assert!(!queue.contains(&1));
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut queue = CircularQueue::with_capacity(2);
        queue.extend(0..5);
        let capacity = queue.capacity();
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), capacity);
        queue.push_back(7);
        assert_eq!(queue.pop_front(), Some(7));
    }

    #[test]
    fn debug_formats_as_list() {
        let queue: CircularQueue<_> = (0..3).collect();
        assert_eq!(format!("{:?}", queue), "[0, 1, 2]");
    }

    #[test]
    fn drop_runs_destructors_once() {
        use std::cell::Cell;

        struct Bump<'a>(&'a Cell<i32>);

        impl<'a> Drop for Bump<'a> {
            fn drop(&mut self) {
                let n = self.0.get();
                self.0.set(n + 1);
            }
        }

        let flag = &Cell::new(0);

        {
            let mut queue = CircularQueue::with_capacity(4);
            queue.push_back(Bump(flag));
            queue.push_back(Bump(flag));
        }
        assert_eq!(flag.get(), 2);

        // growth moves elements rather than dropping them
        flag.set(0);
        {
            let mut queue = CircularQueue::with_capacity(2);
            queue.push_back(Bump(flag));
            queue.push_back(Bump(flag));
            queue.push_back(Bump(flag));
            queue.pop_front();
            assert_eq!(flag.get(), 1);
        }
        assert_eq!(flag.get(), 3);

        flag.set(0);
        {
            let mut queue = CircularQueue::with_capacity(4);
            queue.push_back(Bump(flag));
            queue.push_back(Bump(flag));
            queue.clear();
            assert_eq!(flag.get(), 2);
        }
        assert_eq!(flag.get(), 2);
    }
}
