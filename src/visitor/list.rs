//! Listing visitor

use std::io;

use crate::entry::{Directory, File};
use crate::output::LineSink;

use super::{Scope, Visitor};

/// Emits `"{prefix}/{name}({size})"` for every entry, the same lines as
/// [`Entry::print_list`](crate::entry::Entry::print_list).
pub struct ListVisitor<S: LineSink> {
    sink: S,
}

impl<S: LineSink> ListVisitor<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<S: LineSink> Visitor for ListVisitor<S> {
    fn visit_file(&mut self, file: &File, scope: &Scope<'_>) -> io::Result<()> {
        self.sink.emit(&format!("{}/{}", scope.prefix(), file))
    }

    fn visit_directory(&mut self, dir: &Directory, scope: &Scope<'_>) -> io::Result<()> {
        self.sink.emit(&format!("{}/{}", scope.prefix(), dir))
    }
}
