//! Visitor-based traversal
//!
//! A [`Visitor`] receives one call per entry, picked by the entry's variant:
//! `visit_file` for files, `visit_directory` for directories. Directories
//! then hand the visitor to each child in order, giving a depth-first,
//! pre-order walk that matches
//! [`Entry::print_list`](crate::entry::Entry::print_list).
//!
//! The current path prefix travels with every call as a [`Scope`] instead of
//! living inside the visitor, so visitors stay free of traversal state and
//! can be reused across walks.
//!
//! # Module Structure
//!
//! - `walk` - The traversal engine and the `accept` entry points
//! - `list` - Listing visitor producing `print_list` lines
//! - `find` - Glob-based search

mod find;
mod list;
mod walk;

use std::io;

use crate::entry::{Directory, File};

pub use find::FindVisitor;
pub use list::ListVisitor;
pub use walk::Scope;

/// An operation over an entry tree.
///
/// Adding a new operation means adding a new implementation of this trait;
/// `File` and `Directory` never change for it.
pub trait Visitor {
    fn visit_file(&mut self, file: &File, scope: &Scope<'_>) -> io::Result<()>;

    /// Called before any of the directory's children are visited.
    fn visit_directory(&mut self, dir: &Directory, scope: &Scope<'_>) -> io::Result<()>;

    /// Called after every child of `dir` has been visited, with the same
    /// scope `visit_directory` received.
    fn leave_directory(&mut self, _dir: &Directory, _scope: &Scope<'_>) -> io::Result<()> {
        Ok(())
    }
}

impl<V: Visitor + ?Sized> Visitor for &mut V {
    fn visit_file(&mut self, file: &File, scope: &Scope<'_>) -> io::Result<()> {
        (**self).visit_file(file, scope)
    }

    fn visit_directory(&mut self, dir: &Directory, scope: &Scope<'_>) -> io::Result<()> {
        (**self).visit_directory(dir, scope)
    }

    fn leave_directory(&mut self, dir: &Directory, scope: &Scope<'_>) -> io::Result<()> {
        (**self).leave_directory(dir, scope)
    }
}
