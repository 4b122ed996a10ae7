//! Storage layer - container implementations

pub mod file;
pub mod memory;

pub use file::FileContainer;
pub use memory::MemoryContainer;
