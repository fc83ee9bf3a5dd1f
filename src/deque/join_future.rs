use core::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};

use super::deque_state::DequeState;
use crate::{sync::ArcShared, wait::WaitNode};

/// Future returned by `join`.
///
/// Resolves once every inserted item has been reported complete through
/// `task_done`; resolves immediately when nothing is outstanding. Dropping the
/// future removes its waiter from the join line; the completion signal is
/// broadcast to all join waiters at once, so no relay is needed.
#[must_use = "futures do nothing unless polled"]
pub struct JoinFuture<T> {
  state:  ArcShared<DequeState<T>>,
  waiter: Option<ArcShared<WaitNode>>,
}

impl<T> JoinFuture<T> {
  pub(crate) fn new(state: ArcShared<DequeState<T>>) -> Self {
    Self { state, waiter: None }
  }
}

impl<T> Future for JoinFuture<T> {
  type Output = ();

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    let this = self.get_mut();
    loop {
      if let Some(waiter) = &this.waiter {
        match waiter.poll_woken(cx) {
          | Poll::Pending => return Poll::Pending,
          | Poll::Ready(()) => {
            this.waiter = None;
            return Poll::Ready(());
          },
        }
      }

      match this.state.join_or_wait() {
        | None => return Poll::Ready(()),
        | Some(waiter) => this.waiter = Some(waiter),
      }
    }
  }
}

impl<T> Drop for JoinFuture<T> {
  fn drop(&mut self) {
    if let Some(waiter) = self.waiter.take() {
      self.state.cancel_join_waiter(&waiter);
    }
  }
}

impl<T> Unpin for JoinFuture<T> {}
