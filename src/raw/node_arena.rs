use std::collections::TryReserveError;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub struct Node<T> {
    pub elem: T,
    pub next: Option<NodeId>,
}

pub enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeId> },
}

// vacated slots form a LIFO free list that is drained before the vec grows
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeId>,
    len: usize,
    // invariant: len == number of Occupied slots
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // on failure the arena is unchanged and elem is dropped
    pub fn alloc(&mut self, elem: T) -> Result<NodeId, TryReserveError> {
        let node = Node { elem, next: None };

        if let Some(id) = self.free {
            let slot = &mut self.slots[id.0];
            self.free = match *slot {
                Slot::Vacant { next_free } => next_free,
                Slot::Occupied(_) => unreachable!(),
            };
            *slot = Slot::Occupied(node);
            self.len += 1;
            tracing::trace!(slot = id.0, "reused vacant node slot");
            return Ok(id);
        }

        let old_cap = self.slots.capacity();
        if let Err(err) = self.slots.try_reserve(1) {
            tracing::debug!(error = %err, len = self.len, "node allocation failed");
            return Err(err);
        }
        if self.slots.capacity() != old_cap {
            tracing::trace!(
                from = old_cap,
                to = self.slots.capacity(),
                "node arena grew"
            );
        }

        let id = NodeId(self.slots.len());
        self.slots.push(Slot::Occupied(node));
        self.len += 1;
        Ok(id)
    }

    // cond: id is occupied
    pub fn release(&mut self, id: NodeId) -> Node<T> {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match std::mem::replace(&mut self.slots[id.0], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(id);
                self.len -= 1;
                node
            }
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    // cond: id is occupied
    pub fn get(&self, id: NodeId) -> &Node<T> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    // cond: id is occupied
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    pub fn slots_ptr(&mut self) -> *mut Slot<T> {
        self.slots.as_mut_ptr()
    }

    // drops slots in index order; release nodes first to control drop order
    pub fn reset(&mut self) {
        self.slots = Vec::new();
        self.free = None;
        self.len = 0;
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

// cond: base comes from `slots_ptr` of an arena that is neither moved nor
// resized for 'a, id is occupied, and no other reference to that slot is live
pub unsafe fn node_at<'a, T>(base: *mut Slot<T>, id: NodeId) -> &'a mut Node<T> {
    match &mut *base.add(id.index()) {
        Slot::Occupied(node) => node,
        Slot::Vacant { .. } => unreachable!(),
    }
}
