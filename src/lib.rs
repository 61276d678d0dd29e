//! ai-playbook library
//!
//! A fixed catalog of AI use cases for students and faculty, filtered by
//! role, tool and search text, with favorites kept in a local key-value
//! store.

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod engine;
pub mod store;
