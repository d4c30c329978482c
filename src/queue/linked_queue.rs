use super::cursor::{Cursor, CursorMut, RawCursor};
use crate::error::{QueueError, Result};
use crate::raw::{node_at, NodeArena, NodeId, Slot};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;

pub struct Queue<T> {
    nodes: NodeArena<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    // invariant: nodes.len() == 0 <=> head.is_none() <=> tail.is_none()
    // invariant: tail, when present, has no next node
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            head: None,
            tail: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    // on allocation failure the queue is unchanged and elem is dropped
    pub fn push_back(&mut self, elem: T) -> Result<()> {
        let id = self.nodes.alloc(elem)?;
        match self.tail {
            Some(tail) => self.nodes.get_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        Ok(())
    }

    pub fn front(&self) -> Result<&T> {
        match self.head {
            Some(id) => Ok(&self.nodes.get(id).elem),
            None => Err(QueueError::EmptyQueue),
        }
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        match self.head {
            Some(id) => Ok(&mut self.nodes.get_mut(id).elem),
            None => Err(QueueError::EmptyQueue),
        }
    }

    pub fn pop_front(&mut self) -> Result<T> {
        let id = self.head.ok_or(QueueError::EmptyQueue)?;
        let node = self.nodes.release(id);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Ok(node.elem)
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
        self.nodes.reset();
    }

    pub fn begin(&self) -> Cursor<'_, T> {
        RawCursor::new(self, self.head)
    }

    pub fn end(&self) -> Cursor<'_, T> {
        RawCursor::new(self, None)
    }

    // no end_mut: the queue stays borrowed, test with is_end instead
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let head = self.head;
        RawCursor::new(self, head)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            len: self.len(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            base: self.nodes.slots_ptr(),
            next: self.head,
            len: self.len(),
            _marker: PhantomData,
        }
    }

    pub(super) fn elem(&self, id: NodeId) -> &T {
        &self.nodes.get(id).elem
    }

    pub(super) fn elem_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.nodes.get_mut(id).elem
    }

    pub(super) fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).next
    }

    fn push_or_panic(&mut self, elem: T) {
        if let Err(err) = self.push_back(elem) {
            panic!("{}", err)
        }
    }
}

impl<T: Clone> Queue<T> {
    pub fn try_clone(&self) -> Result<Self> {
        let mut copy = Self::new();
        for elem in self.iter() {
            copy.push_back(elem.clone())?;
        }
        Ok(copy)
    }

    // copy first, then swap: on failure self is untouched
    pub fn assign_from(&mut self, other: &Self) -> Result<()> {
        let mut replacement = other.try_clone()?;
        std::mem::swap(self, &mut replacement);
        tracing::trace!(
            old_len = replacement.len(),
            new_len = self.len(),
            "swapped in queue copy"
        );
        Ok(())
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(err) => panic!("{}", err),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.assign_from(source) {
            panic!("{}", err)
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: Hash> Hash for Queue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elem in self.iter() {
            elem.hash(state);
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push_or_panic(elem);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

// --------------------------------
// begin: IntoIter

pub struct IntoIter<T>(Queue<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.0.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

// end: IntoIter
// ------------------------------------------

// ------------------------------------------
// begin: IterMut

pub struct IterMut<'a, T> {
    base: *mut Slot<T>,
    next: Option<NodeId>,
    len: usize,
    _marker: PhantomData<&'a mut Queue<T>>,
}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        let id = self.next?;
        // every id on the chain is occupied and visited once
        let node = unsafe { node_at(self.base, id) };
        self.next = node.next;
        self.len -= 1;
        Some(&mut node.elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> IntoIterator for &'a mut Queue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

// end: IterMut
// ------------------------------------------

// ------------------------------------------
// begin: Iter

pub struct Iter<'a, T> {
    nodes: &'a NodeArena<T>,
    next: Option<NodeId>,
    len: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            next: self.next,
            len: self.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let node = self.nodes.get(self.next?);
        self.next = node.next;
        self.len -= 1;
        Some(&node.elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

// end: Iter
// ------------------------------------------
