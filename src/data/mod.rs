pub mod memory;
pub mod seed;
pub mod sqlite;
pub mod storage;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;
pub use storage::{keys, Storage};
