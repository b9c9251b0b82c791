pub mod file;
pub mod gallery;
pub mod kv;
pub mod memory;
