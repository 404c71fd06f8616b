//! In-memory adapters.
//!
//! ## Available Adapters
//!
//! - **InMemoryPortRepository** - The port catalog held in a process-local map
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use port_catalog::adapters::memory::InMemoryPortRepository;
//! use port_catalog::ports::PortRepository;
//!
//! let repository: Arc<dyn PortRepository> = Arc::new(InMemoryPortRepository::new());
//! ```

mod in_memory_port_repository;

pub use in_memory_port_repository::InMemoryPortRepository;
