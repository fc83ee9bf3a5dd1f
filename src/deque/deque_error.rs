/// Errors reported by the non-suspending operations and the completion tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DequeError<T> {
  /// The deque is at capacity and cannot accept more items. Carries the item
  /// that was rejected so the caller keeps ownership of it.
  Full(T),
  /// The deque has no items to remove.
  Empty,
  /// `task_done` was called more times than items were ever inserted.
  TaskDoneOveruse,
}

impl<T> DequeError<T> {
  /// Extracts the payload carried by variants that preserve the rejected item.
  #[must_use]
  pub fn into_item(self) -> Option<T> {
    match self {
      | Self::Full(item) => Some(item),
      | Self::Empty | Self::TaskDoneOveruse => None,
    }
  }
}

impl<T> core::fmt::Display for DequeError<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      | Self::Full(_) => write!(f, "deque is full"),
      | Self::Empty => write!(f, "deque is empty"),
      | Self::TaskDoneOveruse => write!(f, "task_done called more times than items were inserted"),
    }
  }
}
