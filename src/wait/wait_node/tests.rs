use core::{
  ptr,
  task::{Context, Poll, RawWaker, RawWakerVTable, Waker},
};

use super::WaitNode;

fn raw_waker() -> RawWaker {
  fn clone(_: *const ()) -> RawWaker {
    raw_waker()
  }
  fn wake(_: *const ()) {}
  fn wake_by_ref(_: *const ()) {}
  fn drop(_: *const ()) {}
  static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, wake, wake_by_ref, drop);
  RawWaker::new(ptr::null(), &VTABLE)
}

fn noop_waker() -> Waker {
  unsafe { Waker::from_raw(raw_waker()) }
}

#[test]
fn wake_succeeds_only_once() {
  let node = WaitNode::new();
  assert!(node.is_pending());

  assert!(node.wake());
  assert!(!node.wake());
  assert!(!node.is_pending());
}

#[test]
fn cancelled_node_rejects_wakeups() {
  let node = WaitNode::new();

  assert!(!node.cancel());
  assert!(!node.wake());
}

#[test]
fn cancel_reports_forfeited_wakeup() {
  let node = WaitNode::new();

  assert!(node.wake());
  assert!(node.cancel());
}

#[test]
fn cancel_before_wakeup_forfeits_nothing() {
  let node = WaitNode::new();

  assert!(!node.cancel());
}

#[test]
fn poll_resolves_after_wakeup() {
  let node = WaitNode::new();
  let waker = noop_waker();
  let mut context = Context::from_waker(&waker);

  assert!(matches!(node.poll_woken(&mut context), Poll::Pending));

  assert!(node.wake());
  assert!(matches!(node.poll_woken(&mut context), Poll::Ready(())));
}

#[test]
fn poll_stays_pending_after_cancellation() {
  let node = WaitNode::new();
  let waker = noop_waker();
  let mut context = Context::from_waker(&waker);

  node.cancel();
  assert!(matches!(node.poll_woken(&mut context), Poll::Pending));
}
