//! Database layer: the facade the results view searches through.
//!
//! The view only depends on the [`Database`] trait. Everything else here is the
//! production binding chosen when the plugin is composed: an in-memory tree
//! built from an unlocked snapshot, searched according to [`SearchParameters`].
//!
//! # Modules
//!
//! - `backend`: The facade trait
//! - `parameters`: Which entry fields a search inspects
//! - `memory`: In-memory tree and search walk
//! - `snapshot`: Read-only JSON snapshot records and loading

pub mod backend;
pub mod memory;
pub mod parameters;
pub mod snapshot;

pub use backend::Database;
pub use memory::{MemoryDatabase, BACKUP_GROUP_TITLE, SEARCH_RESULTS_TITLE};
pub use parameters::SearchParameters;
pub use snapshot::{DatabaseSnapshot, EntryRecord, GroupRecord, SNAPSHOT_VERSION};
