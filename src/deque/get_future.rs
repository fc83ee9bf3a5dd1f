use core::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};

use super::{
  deque_edge::DequeEdge,
  deque_state::{DequeState, TakeAttempt},
};
use crate::{sync::ArcShared, wait::WaitNode};

/// Future returned by the suspending removals.
///
/// Resolves to the removed item. While the deque is empty the future parks in
/// the getter line; a wakeup sends it back to re-validate the condition, and an
/// item stolen by a non-suspending racer re-enrolls it at the back of the line.
/// Dropping the future before it resolves cancels the operation and relays any
/// wakeup it had already been granted.
#[must_use = "futures do nothing unless polled"]
pub struct GetFuture<T> {
  state:  ArcShared<DequeState<T>>,
  waiter: Option<ArcShared<WaitNode>>,
  edge:   DequeEdge,
}

impl<T> GetFuture<T> {
  pub(crate) fn new(state: ArcShared<DequeState<T>>, edge: DequeEdge) -> Self {
    Self { state, waiter: None, edge }
  }
}

impl<T> Future for GetFuture<T> {
  type Output = T;

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    let this = self.get_mut();
    loop {
      if let Some(waiter) = &this.waiter {
        match waiter.poll_woken(cx) {
          | Poll::Pending => return Poll::Pending,
          | Poll::Ready(()) => this.waiter = None,
        }
      }

      match this.state.take_or_wait(this.edge) {
        | TakeAttempt::Taken(item) => return Poll::Ready(item),
        | TakeAttempt::MustWait(waiter) => this.waiter = Some(waiter),
      }
    }
  }
}

impl<T> Drop for GetFuture<T> {
  fn drop(&mut self) {
    if let Some(waiter) = self.waiter.take() {
      self.state.cancel_getter(&waiter);
    }
  }
}

impl<T> Unpin for GetFuture<T> {}
