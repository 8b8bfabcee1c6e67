//! Entry trees
//!
//! An entry tree is built from two node kinds behind one enum:
//!
//! - `File`: a leaf with a fixed size
//! - `Directory`: a composite owning its children in insertion order
//!
//! Trees are append-only. Every operation that descends the tree uses an
//! explicit stack, so arbitrarily deep trees never exhaust the call stack.

mod directory;
mod file;
mod node;
mod parallel;
mod ser;
pub(crate) mod utils;

pub use directory::Directory;
pub use file::File;
pub use node::Entry;
pub use parallel::par_size;
pub(crate) use parallel::install;
pub use utils::format_size;
