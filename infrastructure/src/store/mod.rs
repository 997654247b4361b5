//! File system adapters for parameter documents.

mod file_store;

pub use file_store::FileParameterStore;
