//! MongoDB access for stocksync
//!
//! Connection management plus the three collection operations a sync run
//! performs: clear, ordered bulk insert, and regex-not-match pruning.

pub mod connection;
pub mod store;

pub use connection::{Connection, PoolConfig};
pub use store::ProductStore;
pub use stocksync_common::{Result, SyncError};
