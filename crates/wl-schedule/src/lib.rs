//! `wl-schedule`: ordered containers, events, and the global event queue.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`sequence`]  | `OrderedSeq<T>`: doubly-linked sequence, ordered insert  |
//! | [`fifo`]      | `FifoQueue<T>`: singly-linked arrival-order queue        |
//! | [`event`]     | `Event`, `EventKind`                                      |
//! | [`scheduler`] | `EventScheduler`, `EventHandler` trait                    |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Execution model (summary)
//!
//! ```text
//! while let Some(event) = queue.pop_front():
//!     clock      = event.time
//!     handler.execute(event, &mut scheduler, &mut stats)   // may schedule / cancel
//! ```
//!
//! Events run in non-decreasing time order.  Equal-time ties follow the
//! ordered-insert rule of [`OrderedSeq::insert_sorted_by`], which places a
//! newcomer *in front of* equal elements except when it ties with the tail.
//! Callers must not assume FIFO among same-time events.

pub mod error;
pub mod event;
pub mod fifo;
pub mod scheduler;
pub mod sequence;


pub use error::{ScheduleError, ScheduleResult};
pub use event::{Event, EventKind};
pub use fifo::FifoQueue;
pub use scheduler::{EventHandler, EventScheduler};
pub use sequence::OrderedSeq;
