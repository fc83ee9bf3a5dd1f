use super::WaitList;

#[test]
fn wake_next_resolves_in_arrival_order() {
  let mut list = WaitList::new();
  let first = list.register();
  let second = list.register();

  assert!(list.wake_next());
  assert!(!first.is_pending());
  assert!(second.is_pending());

  assert!(list.wake_next());
  assert!(!second.is_pending());
}

#[test]
fn wake_next_skips_cancelled_nodes() {
  let mut list = WaitList::new();
  let first = list.register();
  let second = list.register();

  first.cancel();

  assert!(list.wake_next());
  assert!(!second.is_pending());
  assert!(list.is_empty());
}

#[test]
fn wake_next_reports_exhaustion() {
  let mut list = WaitList::new();
  assert!(!list.wake_next());

  let only = list.register();
  only.cancel();
  assert!(!list.wake_next());
}

#[test]
fn remove_is_idempotent() {
  let mut list = WaitList::new();
  let node = list.register();

  list.remove(&node);
  assert!(list.is_empty());

  // Removing again, or removing a node the cascade already popped, is a no-op.
  list.remove(&node);
  assert!(list.is_empty());
}

#[test]
fn remove_targets_only_the_given_node() {
  let mut list = WaitList::new();
  let first = list.register();
  let second = list.register();

  list.remove(&first);

  assert_eq!(list.len(), 1);
  assert!(list.wake_next());
  assert!(!second.is_pending());
}

#[test]
fn wake_all_drains_the_list() {
  let mut list = WaitList::new();
  let first = list.register();
  let second = list.register();
  let third = list.register();

  second.cancel();
  list.wake_all();

  assert!(list.is_empty());
  assert!(!first.is_pending());
  assert!(!third.is_pending());
}
