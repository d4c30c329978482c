use super::linked_queue::Queue;
use crate::error::{QueueError, Result};
use crate::raw::NodeId;

use std::fmt;

mod sealed {
    pub trait Sealed {}
}

pub trait Access: sealed::Sealed {
    type Elem;

    fn queue(&self) -> &Queue<Self::Elem>;
}

impl<T> sealed::Sealed for &Queue<T> {}
impl<T> sealed::Sealed for &mut Queue<T> {}

impl<'a, T> Access for &'a Queue<T> {
    type Elem = T;

    fn queue(&self) -> &Queue<T> {
        self
    }
}

impl<'a, T> Access for &'a mut Queue<T> {
    type Elem = T;

    fn queue(&self) -> &Queue<T> {
        self
    }
}

pub struct RawCursor<A> {
    queue: A,
    current: Option<NodeId>,
}

pub type Cursor<'a, T> = RawCursor<&'a Queue<T>>;
pub type CursorMut<'a, T> = RawCursor<&'a mut Queue<T>>;

impl<A: Access> RawCursor<A> {
    pub(super) fn new(queue: A, current: Option<NodeId>) -> Self {
        Self { queue, current }
    }

    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    pub fn get(&self) -> Result<&A::Elem> {
        let id = self.current.ok_or(QueueError::InvalidOperation)?;
        Ok(self.queue.queue().elem(id))
    }

    pub fn advance(&mut self) -> Result<&mut Self> {
        let id = self.current.ok_or(QueueError::InvalidOperation)?;
        self.current = self.queue.queue().next_of(id);
        Ok(self)
    }
}

impl<'a, T> Cursor<'a, T> {
    pub fn into_ref(self) -> Result<&'a T> {
        let id = self.current.ok_or(QueueError::InvalidOperation)?;
        Ok(self.queue.elem(id))
    }

    pub fn post_advance(&mut self) -> Result<Self> {
        let before = *self;
        self.advance()?;
        Ok(before)
    }
}

impl<'a, T> CursorMut<'a, T> {
    pub fn get_mut(&mut self) -> Result<&mut T> {
        let id = self.current.ok_or(QueueError::InvalidOperation)?;
        Ok(self.queue.elem_mut(id))
    }

    pub fn into_ref(self) -> Result<&'a mut T> {
        let id = self.current.ok_or(QueueError::InvalidOperation)?;
        let queue = self.queue;
        Ok(queue.elem_mut(id))
    }

    // a second CursorMut on the old node would alias, so hand back a Cursor
    pub fn post_advance(&mut self) -> Result<Cursor<'_, T>> {
        let before = self.current;
        self.advance()?;
        Ok(RawCursor::new(&*self.queue, before))
    }

    pub fn as_cursor(&self) -> Cursor<'_, T> {
        RawCursor::new(&*self.queue, self.current)
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        let queue: &'a Queue<T> = cursor.queue;
        RawCursor::new(queue, cursor.current)
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Cursor<'a, T> {}

// node ids are per-queue, so a node position also needs the same queue;
// past-the-end matches past-the-end of any queue
impl<A, B> PartialEq<RawCursor<B>> for RawCursor<A>
where
    A: Access,
    B: Access<Elem = A::Elem>,
{
    fn eq(&self, other: &RawCursor<B>) -> bool {
        match (self.current, other.current) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => {
                lhs == rhs && std::ptr::eq(self.queue.queue(), other.queue.queue())
            }
            _ => false,
        }
    }
}

impl<A: Access> Eq for RawCursor<A> {}

impl<A: Access> fmt::Debug for RawCursor<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawCursor")
            .field("current", &self.current)
            .finish()
    }
}
