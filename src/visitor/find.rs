//! Glob search over entry names

use std::io;

use glob::Pattern;

use crate::entry::{Directory, File};
use crate::error::Result;

use super::{Scope, Visitor};

/// Collects the full path of every entry whose name matches a glob pattern.
#[derive(Debug)]
pub struct FindVisitor {
    pattern: Pattern,
    dirs: bool,
    files: bool,
    matches: Vec<String>,
}

impl FindVisitor {
    /// Match files and directories against `pattern`.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Pattern::new(pattern)?,
            dirs: true,
            files: true,
            matches: Vec::new(),
        })
    }

    /// Only report files.
    pub fn files_only(mut self) -> Self {
        self.dirs = false;
        self.files = true;
        self
    }

    /// Only report directories.
    pub fn dirs_only(mut self) -> Self {
        self.dirs = true;
        self.files = false;
        self
    }

    /// Matching paths in traversal order.
    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    pub fn into_matches(self) -> Vec<String> {
        self.matches
    }

    fn record(&mut self, name: &str, scope: &Scope<'_>) {
        if self.pattern.matches(name) {
            self.matches.push(scope.path_of(name));
        }
    }
}

impl Visitor for FindVisitor {
    fn visit_file(&mut self, file: &File, scope: &Scope<'_>) -> io::Result<()> {
        if self.files {
            self.record(file.name(), scope);
        }
        Ok(())
    }

    fn visit_directory(&mut self, dir: &Directory, scope: &Scope<'_>) -> io::Result<()> {
        if self.dirs {
            self.record(dir.name(), scope);
        }
        Ok(())
    }
}
