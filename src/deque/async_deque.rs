use core::marker::PhantomData;

use super::{
  deque_edge::DequeEdge,
  deque_error::DequeError,
  deque_state::DequeState,
  get_future::GetFuture,
  join_future::JoinFuture,
  put_future::PutFuture,
  tracking_keys::{TrackedKey, TrackingKey, UntrackedKey},
};
use crate::sync::ArcShared;


/// Bounded double-ended asynchronous blocking queue.
///
/// The handle is cheap to clone; all clones share one queue. Suspending
/// operations return futures that park in FIFO waiter lines while the queue is
/// full (insertions) or empty (removals) and resume in strict arrival order.
/// The non-suspending `*_nowait` twins fail fast instead of parking.
///
/// `K` selects the completion-tracking capability: the default [`TrackedKey`]
/// exposes [`task_done`](AsyncDeque::task_done) and
/// [`join`](AsyncDeque::join); [`UntrackedKey`] hides them.
pub struct AsyncDeque<T, K = TrackedKey>
where
  K: TrackingKey, {
  state: ArcShared<DequeState<T>>,
  _key:  PhantomData<K>,
}

impl<T, K> AsyncDeque<T, K>
where
  K: TrackingKey,
{
  /// Creates an unbounded deque.
  #[must_use]
  pub fn new() -> Self {
    Self::with_capacity(0)
  }

  /// Creates a deque limited to `capacity` items; `0` means unbounded. The
  /// capacity is fixed for the deque's lifetime.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { state: ArcShared::new(DequeState::with_capacity(capacity)), _key: PhantomData }
  }

  /// Inserts an item at the front, suspending while the deque is full.
  pub fn put_left(&self, item: T) -> PutFuture<T> {
    PutFuture::new(self.state.clone(), item, DequeEdge::Front)
  }

  /// Inserts an item at the back, suspending while the deque is full.
  pub fn put_right(&self, item: T) -> PutFuture<T> {
    PutFuture::new(self.state.clone(), item, DequeEdge::Back)
  }

  /// Removes and returns the front item, suspending while the deque is empty.
  pub fn get_left(&self) -> GetFuture<T> {
    GetFuture::new(self.state.clone(), DequeEdge::Front)
  }

  /// Removes and returns the back item, suspending while the deque is empty.
  pub fn get_right(&self) -> GetFuture<T> {
    GetFuture::new(self.state.clone(), DequeEdge::Back)
  }

  /// Inserts an item at the front without suspending.
  ///
  /// # Errors
  ///
  /// Returns [`DequeError::Full`] carrying the item back when the deque is at
  /// capacity.
  pub fn put_left_nowait(&self, item: T) -> Result<(), DequeError<T>> {
    self.state.try_offer(item, DequeEdge::Front)
  }

  /// Inserts an item at the back without suspending.
  ///
  /// # Errors
  ///
  /// Returns [`DequeError::Full`] carrying the item back when the deque is at
  /// capacity.
  pub fn put_right_nowait(&self, item: T) -> Result<(), DequeError<T>> {
    self.state.try_offer(item, DequeEdge::Back)
  }

  /// Removes and returns the front item without suspending.
  ///
  /// # Errors
  ///
  /// Returns [`DequeError::Empty`] when there is nothing to remove.
  pub fn get_left_nowait(&self) -> Result<T, DequeError<T>> {
    self.state.try_take(DequeEdge::Front)
  }

  /// Removes and returns the back item without suspending.
  ///
  /// # Errors
  ///
  /// Returns [`DequeError::Empty`] when there is nothing to remove.
  pub fn get_right_nowait(&self) -> Result<T, DequeError<T>> {
    self.state.try_take(DequeEdge::Back)
  }

  /// Returns the number of stored items.
  #[must_use]
  pub fn len(&self) -> usize {
    self.state.len()
  }

  /// Returns the capacity limit; `0` means unbounded.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.state.capacity()
  }

  /// Indicates whether the deque holds no items.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.state.is_empty()
  }

  /// Indicates whether the deque is at capacity. Never `true` for an
  /// unbounded deque.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.state.is_full()
  }
}

impl<T> AsyncDeque<T, TrackedKey> {
  /// Reports that one previously removed item has been fully processed.
  ///
  /// Counterpart of the insertions: once every inserted item has been reported
  /// complete, pending [`join`](AsyncDeque::join) calls resolve.
  ///
  /// # Errors
  ///
  /// Returns [`DequeError::TaskDoneOveruse`] when called more times than items
  /// were ever inserted.
  pub fn task_done(&self) -> Result<(), DequeError<T>> {
    if self.state.complete_task() {
      Ok(())
    } else {
      Err(DequeError::TaskDoneOveruse)
    }
  }

  /// Waits until every inserted item has been reported complete through
  /// [`task_done`](AsyncDeque::task_done); resolves immediately when nothing
  /// is outstanding.
  pub fn join(&self) -> JoinFuture<T> {
    JoinFuture::new(self.state.clone())
  }
}

impl<T, K> Default for AsyncDeque<T, K>
where
  K: TrackingKey,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, K> Clone for AsyncDeque<T, K>
where
  K: TrackingKey,
{
  fn clone(&self) -> Self {
    Self { state: self.state.clone(), _key: PhantomData }
  }
}

impl<T, K> core::fmt::Debug for AsyncDeque<T, K>
where
  K: TrackingKey,
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("AsyncDeque")
      .field("capacity", &self.state.capacity())
      .field("len", &self.state.len())
      .field("putters", &self.state.waiting_putters())
      .field("getters", &self.state.waiting_getters())
      .field("unfinished", &self.state.unfinished_tasks())
      .finish()
  }
}

/// Deque with the completion barrier exposed (the default).
pub type TrackedAsyncDeque<T> = AsyncDeque<T, TrackedKey>;
/// Deque without the completion barrier.
pub type UntrackedAsyncDeque<T> = AsyncDeque<T, UntrackedKey>;
