//! In-memory persistence: the catalog store and its optional seed file.

pub mod seed_file;
pub mod store;

pub use seed_file::load_seed_file;
pub use store::InMemoryStore;
