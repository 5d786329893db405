mod memory_repository;
mod preference_repository;

pub use memory_repository::MemoryPreferenceStore;
pub use preference_repository::SqlitePreferenceStore;
