// Infrastructure adapters: file-based collaborators with narrow contracts

pub mod json_store;

pub use json_store::JsonStore;
