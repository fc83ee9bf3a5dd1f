/// Marker trait for the completion-tracking capability of a deque handle.
///
/// The canonical core always maintains its unfinished-item count; the key only
/// decides whether the `task_done`/`join` surface is exposed, so tracked and
/// untracked deques share one implementation instead of forking it.
pub trait TrackingKey {}

/// Key unlocking the `task_done`/`join` completion barrier. This is the
/// default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrackedKey;

/// Key for deques that do not expose the completion barrier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UntrackedKey;

impl TrackingKey for TrackedKey {}

impl TrackingKey for UntrackedKey {}
