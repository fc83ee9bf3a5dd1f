use core::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};

use super::{
  deque_edge::DequeEdge,
  deque_state::{DequeState, OfferAttempt},
};
use crate::{sync::ArcShared, wait::WaitNode};

/// Future returned by the suspending insertions.
///
/// Resolves once the item has been committed to the buffer. While the deque is
/// full the future parks in the putter line; a wakeup sends it back to
/// re-validate the condition, and a raced-away slot simply re-enrolls it at the
/// back of the line. Dropping the future before it resolves cancels the
/// operation and relays any wakeup it had already been granted.
#[must_use = "futures do nothing unless polled"]
pub struct PutFuture<T> {
  state:  ArcShared<DequeState<T>>,
  item:   Option<T>,
  waiter: Option<ArcShared<WaitNode>>,
  edge:   DequeEdge,
}

impl<T> PutFuture<T> {
  pub(crate) fn new(state: ArcShared<DequeState<T>>, item: T, edge: DequeEdge) -> Self {
    Self { state, item: Some(item), waiter: None, edge }
  }
}

impl<T> Future for PutFuture<T> {
  type Output = ();

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    let this = self.get_mut();
    loop {
      if let Some(waiter) = &this.waiter {
        match waiter.poll_woken(cx) {
          | Poll::Pending => return Poll::Pending,
          | Poll::Ready(()) => this.waiter = None,
        }
      }

      let Some(item) = this.item.take() else {
        // Already resolved on an earlier poll.
        return Poll::Ready(());
      };

      match this.state.offer_or_wait(item, this.edge) {
        | OfferAttempt::Inserted => return Poll::Ready(()),
        | OfferAttempt::MustWait { item, waiter } => {
          this.item = Some(item);
          this.waiter = Some(waiter);
        },
      }
    }
  }
}

impl<T> Drop for PutFuture<T> {
  fn drop(&mut self) {
    if let Some(waiter) = self.waiter.take() {
      self.state.cancel_putter(&waiter);
    }
  }
}

impl<T> Unpin for PutFuture<T> {}
