//! ```
//! use linked_fifo::{filter, transform, Queue};
//!
//! let mut queue: Queue<i32> = (1..=5).collect();
//! let even = filter(&queue, |x| x % 2 == 0)?;
//! assert_eq!(even.iter().copied().collect::<Vec<_>>(), [2, 4]);
//!
//! transform(&mut queue, |x| *x *= 10)?;
//! assert_eq!(queue.pop_front()?, 10);
//! assert_eq!(queue.len(), 4);
//! # Ok::<(), linked_fifo::QueueError>(())
//! ```

pub mod error;
pub mod queue;

mod raw;

pub use error::{QueueError, Result};
pub use queue::{
    distance, filter, transform, try_transform, Cursor, CursorMut, IntoIter, Iter, IterMut,
    Queue, RawCursor,
};
