//! Directory tree walking logic
//!
//! `TreeWalker` walks a tree depth-first, keeps entries that pass a
//! `TimeFilter`, and prunes directories that fail it together with
//! everything below them.

mod config;
mod entry;
mod filter;
mod utils;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use entry::{Entry, ScanResult};
pub use filter::TimeFilter;
pub use utils::{depth_encoded_name, depth_marker};
pub use walker::{TreeWalker, traverse};
