mod manager;
mod persistence;
mod store;

pub use manager::{DietDocument, DietGeneration, DietManager};
pub use persistence::JsonFileStore;
pub use store::{Collection, DocumentStore, MemoryStore, merge_documents};
