pub mod kv;
pub mod records;

pub use kv::{FileStore, KvStore};
#[cfg(test)]
pub use kv::MemoryStore;
pub use records::RecordStore;
