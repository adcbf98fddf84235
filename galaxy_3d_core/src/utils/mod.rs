//! Small-handle allocation utilities
//!
//! Fixed-capacity index pool and the slot table built on top of it.

mod index_pool;
mod slot_table;

pub use index_pool::{IndexPool, PoolState};
pub use slot_table::SlotTable;
