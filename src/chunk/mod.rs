pub mod index;
pub mod node;

pub use index::ChunkIndex;
pub use node::{Chunk, ChunkId};
