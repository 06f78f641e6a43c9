//! Store Infrastructure
//!
//! In-memory implementations of the PA domain's ports: the request
//! repository and the audit sink, plus the seed data sets the service
//! starts with. Real persistence is out of scope for this deployment; a
//! database-backed adapter would implement the same `PaRepository` trait.

pub mod error;
pub mod memory;
pub mod seed;

pub use error::StoreError;
pub use memory::MemoryPaStore;
