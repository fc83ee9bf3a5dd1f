use core::task::{Context, Poll, Waker};

use portable_atomic::{AtomicU8, Ordering};
use spin::Mutex;

#[cfg(test)]
mod tests;

const OUTCOME_PENDING: u8 = 0;
const OUTCOME_WOKEN: u8 = 1;
const OUTCOME_CANCELLED: u8 = 2;

/// Suspension record for a single blocked operation.
///
/// The outcome moves out of the pending state exactly once: either a wakeup
/// cascade marks the node woken, or the owning call abandons it and marks it
/// cancelled. A node is never reused after leaving the pending state.
#[derive(Debug)]
pub struct WaitNode {
  outcome: AtomicU8,
  waker:   Mutex<Option<Waker>>,
}

impl WaitNode {
  /// Creates a new pending node.
  #[must_use]
  pub const fn new() -> Self {
    Self { outcome: AtomicU8::new(OUTCOME_PENDING), waker: Mutex::new(None) }
  }

  /// Delivers a wakeup to the node.
  ///
  /// Returns `true` when the node accepted the wakeup, `false` when the node
  /// had already been woken or cancelled. Only the pending-to-woken transition
  /// rouses the parked task, so a wakeup is never delivered twice.
  pub fn wake(&self) -> bool {
    if self
      .outcome
      .compare_exchange(OUTCOME_PENDING, OUTCOME_WOKEN, Ordering::AcqRel, Ordering::Acquire)
      .is_err()
    {
      return false;
    }

    if let Some(waker) = self.waker.lock().take() {
      waker.wake();
    }

    true
  }

  /// Marks the node cancelled.
  ///
  /// Returns `true` when a wakeup had already been delivered and is therefore
  /// forfeited; the caller is then responsible for relaying it to the next
  /// waiter in line.
  pub fn cancel(&self) -> bool {
    let prior = self.outcome.swap(OUTCOME_CANCELLED, Ordering::AcqRel);
    if prior == OUTCOME_PENDING {
      self.waker.lock().take();
    }
    prior == OUTCOME_WOKEN
  }

  /// Indicates whether the node is still awaiting resolution.
  #[must_use]
  pub fn is_pending(&self) -> bool {
    self.outcome.load(Ordering::Acquire) == OUTCOME_PENDING
  }

  /// Polls the node for a delivered wakeup, parking the supplied waker while
  /// the node is still pending.
  pub fn poll_woken(&self, cx: &mut Context<'_>) -> Poll<()> {
    match self.outcome.load(Ordering::Acquire) {
      | OUTCOME_WOKEN => Poll::Ready(()),
      | OUTCOME_CANCELLED => Poll::Pending,
      | _ => {
        *self.waker.lock() = Some(cx.waker().clone());

        // A wakeup may land between the first load and parking the waker.
        if self.outcome.load(Ordering::Acquire) == OUTCOME_WOKEN {
          Poll::Ready(())
        } else {
          Poll::Pending
        }
      },
    }
  }
}

impl Default for WaitNode {
  fn default() -> Self {
    Self::new()
  }
}
