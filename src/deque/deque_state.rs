use spin::Mutex;

use super::{deque_buffer::DequeBuffer, deque_edge::DequeEdge, deque_error::DequeError, task_tracker::TaskTracker};
use crate::{
  sync::ArcShared,
  wait::{WaitList, WaitNode},
};


/// Result of a single check-or-register insertion attempt.
pub(crate) enum OfferAttempt<T> {
  /// The item was committed to the buffer.
  Inserted,
  /// The buffer was full; the item is handed back together with a freshly
  /// registered waiter.
  MustWait {
    item:   T,
    waiter: ArcShared<WaitNode>,
  },
}

/// Result of a single check-or-register removal attempt.
pub(crate) enum TakeAttempt<T> {
  /// An item was removed from the buffer.
  Taken(T),
  /// The buffer was empty; a freshly registered waiter is handed back.
  MustWait(ArcShared<WaitNode>),
}

/// The queue aggregate: buffer, both waiter lists, and the completion tracker,
/// serialized behind a single lock.
///
/// Checking a precondition and registering a waiter happen inside one critical
/// section, so a state change on another task can never slip between a failed
/// check and the registration and leave the waiter stranded.
pub(crate) struct DequeState<T> {
  inner: Mutex<DequeInner<T>>,
}

struct DequeInner<T> {
  buffer:  DequeBuffer<T>,
  putters: WaitList,
  getters: WaitList,
  tracker: TaskTracker,
}

impl<T> DequeState<T> {
  pub(crate) fn with_capacity(capacity: usize) -> Self {
    Self {
      inner: Mutex::new(DequeInner {
        buffer:  DequeBuffer::with_capacity(capacity),
        putters: WaitList::new(),
        getters: WaitList::new(),
        tracker: TaskTracker::new(),
      }),
    }
  }

  /// Non-suspending insertion: fail fast when at capacity.
  pub(crate) fn try_offer(&self, item: T, edge: DequeEdge) -> Result<(), DequeError<T>> {
    let mut inner = self.inner.lock();
    if inner.buffer.is_full() {
      return Err(DequeError::Full(item));
    }
    inner.commit_insert(item, edge);
    Ok(())
  }

  /// Non-suspending removal: fail fast when empty, mutating nothing.
  pub(crate) fn try_take(&self, edge: DequeEdge) -> Result<T, DequeError<T>> {
    let mut inner = self.inner.lock();
    match inner.commit_remove(edge) {
      | Some(item) => Ok(item),
      | None => Err(DequeError::Empty),
    }
  }

  /// Commits the insertion, or enrolls the caller in the putter line.
  pub(crate) fn offer_or_wait(&self, item: T, edge: DequeEdge) -> OfferAttempt<T> {
    let mut inner = self.inner.lock();
    if inner.buffer.is_full() {
      let waiter = inner.putters.register();
      return OfferAttempt::MustWait { item, waiter };
    }
    inner.commit_insert(item, edge);
    OfferAttempt::Inserted
  }

  /// Commits the removal, or enrolls the caller in the getter line.
  pub(crate) fn take_or_wait(&self, edge: DequeEdge) -> TakeAttempt<T> {
    let mut inner = self.inner.lock();
    match inner.commit_remove(edge) {
      | Some(item) => TakeAttempt::Taken(item),
      | None => TakeAttempt::MustWait(inner.getters.register()),
    }
  }

  /// Abandons a putter waiter.
  ///
  /// If the waiter had already been granted a wakeup it could not consume, the
  /// wakeup is relayed to the next putter in line while capacity is still
  /// available, so the freed slot is not stranded.
  pub(crate) fn cancel_putter(&self, waiter: &ArcShared<WaitNode>) {
    let mut inner = self.inner.lock();
    let forfeited = waiter.cancel();
    inner.putters.remove(waiter);
    if forfeited && !inner.buffer.is_full() {
      inner.putters.wake_next();
    }
  }

  /// Abandons a getter waiter, relaying a forfeited wakeup while an item is
  /// still available.
  pub(crate) fn cancel_getter(&self, waiter: &ArcShared<WaitNode>) {
    let mut inner = self.inner.lock();
    let forfeited = waiter.cancel();
    inner.getters.remove(waiter);
    if forfeited && !inner.buffer.is_empty() {
      inner.getters.wake_next();
    }
  }

  /// Records one completed item; `false` means nothing was outstanding.
  pub(crate) fn complete_task(&self) -> bool {
    self.inner.lock().tracker.complete_one()
  }

  /// Returns `None` when every inserted item has been reported complete,
  /// otherwise enrolls the caller in the join line.
  pub(crate) fn join_or_wait(&self) -> Option<ArcShared<WaitNode>> {
    let mut inner = self.inner.lock();
    if inner.tracker.is_idle() {
      None
    } else {
      Some(inner.tracker.register())
    }
  }

  /// Abandons a join waiter. The completion signal is broadcast, so no relay
  /// is needed here.
  pub(crate) fn cancel_join_waiter(&self, waiter: &ArcShared<WaitNode>) {
    let mut inner = self.inner.lock();
    let _ = waiter.cancel();
    inner.tracker.remove(waiter);
  }

  pub(crate) fn len(&self) -> usize {
    self.inner.lock().buffer.len()
  }

  pub(crate) fn capacity(&self) -> usize {
    self.inner.lock().buffer.capacity()
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.inner.lock().buffer.is_empty()
  }

  pub(crate) fn is_full(&self) -> bool {
    self.inner.lock().buffer.is_full()
  }

  pub(crate) fn waiting_putters(&self) -> usize {
    self.inner.lock().putters.len()
  }

  pub(crate) fn waiting_getters(&self) -> usize {
    self.inner.lock().getters.len()
  }

  pub(crate) fn unfinished_tasks(&self) -> usize {
    self.inner.lock().tracker.unfinished()
  }
}

impl<T> DequeInner<T> {
  /// Every committed insertion counts towards the tracker and hands exactly
  /// one wakeup to the getter line.
  fn commit_insert(&mut self, item: T, edge: DequeEdge) {
    match edge {
      | DequeEdge::Front => self.buffer.push_front(item),
      | DequeEdge::Back => self.buffer.push_back(item),
    }
    self.tracker.item_added();
    self.getters.wake_next();
  }

  /// Every committed removal hands exactly one wakeup to the putter line.
  fn commit_remove(&mut self, edge: DequeEdge) -> Option<T> {
    let item = match edge {
      | DequeEdge::Front => self.buffer.pop_front(),
      | DequeEdge::Back => self.buffer.pop_back(),
    }?;
    self.putters.wake_next();
    Some(item)
  }
}
