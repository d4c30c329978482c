mod algorithm;
mod cursor;
mod linked_queue;

pub use algorithm::{distance, filter, transform, try_transform};
pub use cursor::{Access, Cursor, CursorMut, RawCursor};
pub use linked_queue::{IntoIter, Iter, IterMut, Queue};
