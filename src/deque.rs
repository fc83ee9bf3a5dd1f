//! Double-ended blocking queue: buffer, suspension protocol, and views.

mod async_deque;
mod deque_buffer;
mod deque_edge;
mod deque_error;
mod deque_state;
mod fifo_deque;
mod get_future;
mod join_future;
mod lifo_deque;
mod put_future;
mod task_tracker;
mod tracking_keys;

pub use async_deque::{AsyncDeque, TrackedAsyncDeque, UntrackedAsyncDeque};
pub use deque_error::DequeError;
pub use fifo_deque::FifoDeque;
pub use get_future::GetFuture;
pub use join_future::JoinFuture;
pub use lifo_deque::LifoDeque;
pub use put_future::PutFuture;
pub use tracking_keys::{TrackedKey, TrackingKey, UntrackedKey};
