use super::{
  async_deque::AsyncDeque,
  deque_error::DequeError,
  get_future::GetFuture,
  join_future::JoinFuture,
  put_future::PutFuture,
  tracking_keys::{TrackedKey, TrackingKey},
};


/// Last-in-first-out view over [`AsyncDeque`].
///
/// `put` and `get` operate on the same end, yielding stack order; everything
/// else is forwarded unchanged, so the futures carry the same suspension and
/// cancellation contract as the underlying deque operations.
pub struct LifoDeque<T, K = TrackedKey>
where
  K: TrackingKey, {
  inner: AsyncDeque<T, K>,
}

impl<T, K> LifoDeque<T, K>
where
  K: TrackingKey,
{
  /// Creates an unbounded LIFO queue.
  #[must_use]
  pub fn new() -> Self {
    Self::with_capacity(0)
  }

  /// Creates a LIFO queue limited to `capacity` items; `0` means unbounded.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { inner: AsyncDeque::with_capacity(capacity) }
  }

  /// Inserts an item, suspending while the queue is full.
  pub fn put(&self, item: T) -> PutFuture<T> {
    self.inner.put_right(item)
  }

  /// Removes and returns the most recent item, suspending while the queue is
  /// empty.
  pub fn get(&self) -> GetFuture<T> {
    self.inner.get_right()
  }

  /// Inserts an item without suspending.
  ///
  /// # Errors
  ///
  /// Returns [`DequeError::Full`] carrying the item back when the queue is at
  /// capacity.
  pub fn put_nowait(&self, item: T) -> Result<(), DequeError<T>> {
    self.inner.put_right_nowait(item)
  }

  /// Removes and returns the most recent item without suspending.
  ///
  /// # Errors
  ///
  /// Returns [`DequeError::Empty`] when there is nothing to remove.
  pub fn get_nowait(&self) -> Result<T, DequeError<T>> {
    self.inner.get_right_nowait()
  }

  /// Returns the number of stored items.
  #[must_use]
  pub fn len(&self) -> usize {
    self.inner.len()
  }

  /// Returns the capacity limit; `0` means unbounded.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.inner.capacity()
  }

  /// Indicates whether the queue holds no items.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  /// Indicates whether the queue is at capacity.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.inner.is_full()
  }

  /// Provides access to the underlying deque.
  #[must_use]
  pub const fn as_deque(&self) -> &AsyncDeque<T, K> {
    &self.inner
  }
}

impl<T> LifoDeque<T, TrackedKey> {
  /// Reports that one previously removed item has been fully processed.
  ///
  /// # Errors
  ///
  /// Returns [`DequeError::TaskDoneOveruse`] when called more times than items
  /// were ever inserted.
  pub fn task_done(&self) -> Result<(), DequeError<T>> {
    self.inner.task_done()
  }

  /// Waits until every inserted item has been reported complete.
  pub fn join(&self) -> JoinFuture<T> {
    self.inner.join()
  }
}

impl<T, K> Default for LifoDeque<T, K>
where
  K: TrackingKey,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, K> Clone for LifoDeque<T, K>
where
  K: TrackingKey,
{
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<T, K> core::fmt::Debug for LifoDeque<T, K>
where
  K: TrackingKey,
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("LifoDeque").field("deque", &self.inner).finish()
  }
}
