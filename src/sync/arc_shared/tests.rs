use super::ArcShared;

#[test]
fn equality_is_handle_identity() {
  let first = ArcShared::new(7);
  let alias = first.clone();
  let other = ArcShared::new(7);

  assert_eq!(first, alias);
  assert_ne!(first, other);
}

#[test]
fn deref_reaches_the_value() {
  let shared = ArcShared::new(41);
  assert_eq!(*shared + 1, 42);
}
