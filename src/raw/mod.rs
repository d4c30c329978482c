mod node_arena;

pub use node_arena::{node_at, NodeArena, NodeId, Slot};
