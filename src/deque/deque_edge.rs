/// Selects which end of the buffer a directional operation touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DequeEdge {
  /// The front (left) end.
  Front,
  /// The back (right) end.
  Back,
}
