#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![no_std]

//! Bounded double-ended asynchronous blocking queue.
//!
//! The central type is [`AsyncDeque`]: a capacity-limited sequence supporting
//! insertion and removal at either end. Callers that cannot proceed because the
//! queue is full or empty suspend on a future and are resumed in strict arrival
//! order once the condition they wait for holds. Dropping a pending future is
//! cancellation; the queue cleans up the abandoned waiter and, when a wakeup had
//! already been granted, relays it to the next waiter in line so no capacity or
//! item is stranded.
//!
//! An optional completion barrier tracks how many inserted items are still
//! unprocessed: consumers report progress through `task_done` and producers can
//! await `join` until every item has been accounted for. [`FifoDeque`] and
//! [`LifoDeque`] expose single-ended queue and stack views over the same core.
//!
//! The crate is `no_std` (requires `alloc`) and executor-agnostic: suspension is
//! expressed through plain [`core::future::Future`] values driven by whichever
//! scheduler polls them.

extern crate alloc;

pub mod deque;
pub mod sync;
pub mod wait;

pub use deque::{
  AsyncDeque, DequeError, FifoDeque, GetFuture, JoinFuture, LifoDeque, PutFuture, TrackedAsyncDeque, TrackedKey,
  TrackingKey, UntrackedAsyncDeque, UntrackedKey,
};
