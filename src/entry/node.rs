//! The uniform entry type shared by files and directories

use std::fmt;
use std::io;

use crate::error::{Error, Result};
use crate::output::LineSink;

use super::directory::Directory;
use super::file::File;
use super::utils::join_path;

/// A node in an entry tree: either a file (leaf) or a directory (composite).
///
/// Serializes with a `type` tag of `"file"` or `"dir"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    File(File),
    Dir(Directory),
}

impl Entry {
    /// Shorthand for `Entry::File(File::new(name, size)?)`.
    pub fn file(name: impl Into<String>, size: u64) -> Result<Self> {
        File::new(name, size).map(Entry::File)
    }

    /// Shorthand for `Entry::Dir(Directory::new(name)?)`.
    pub fn dir(name: impl Into<String>) -> Result<Self> {
        Directory::new(name).map(Entry::Dir)
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::File(file) => file.name(),
            Entry::Dir(dir) => dir.name(),
        }
    }

    /// Size of a file, or the sum of all file sizes below a directory.
    pub fn size(&self) -> u64 {
        match self {
            Entry::File(file) => file.size(),
            Entry::Dir(dir) => dir.size(),
        }
    }

    /// Length of the longest path from this entry down to a descendant: 0 for
    /// a file or an empty directory.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0)];
        while let Some((entry, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(entry.children().iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Entry::Dir(_))
    }

    /// Children in insertion order; always empty for a file.
    pub fn children(&self) -> &[Entry] {
        match self {
            Entry::File(_) => &[],
            Entry::Dir(dir) => dir.children(),
        }
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Entry::Dir(dir) => Some(dir),
            Entry::File(_) => None,
        }
    }

    pub fn as_directory_mut(&mut self) -> Option<&mut Directory> {
        match self {
            Entry::Dir(dir) => Some(dir),
            Entry::File(_) => None,
        }
    }

    /// Append `entry` to a directory and return `self` for chaining.
    ///
    /// Files have no children: calling this on a file fails with
    /// [`Error::UnsupportedOperation`] and leaves the file untouched.
    pub fn add(&mut self, entry: impl Into<Entry>) -> Result<&mut Self> {
        match self {
            Entry::Dir(dir) => {
                dir.add(entry);
                Ok(self)
            }
            Entry::File(file) => {
                tracing::debug!(file = %file.name(), "rejected add on file");
                Err(Error::UnsupportedOperation {
                    operation: "add",
                    name: file.name().to_string(),
                })
            }
        }
    }

    /// Emit `"{prefix}/{name}({size})"` for this entry and, for a directory,
    /// for every descendant in depth-first pre-order. Children are listed
    /// under `"{prefix}/{name}"`.
    pub fn print_list<S: LineSink + ?Sized>(&self, prefix: &str, sink: &mut S) -> io::Result<()> {
        let mut pending: Vec<(&Entry, String)> = vec![(self, prefix.to_string())];
        while let Some((entry, prefix)) = pending.pop() {
            sink.emit(&format!("{}/{}", prefix, entry))?;
            if let Entry::Dir(dir) = entry {
                let child_prefix = join_path(&prefix, dir.name());
                pending.extend(
                    dir.children()
                        .iter()
                        .rev()
                        .map(|child| (child, child_prefix.clone())),
                );
            }
        }
        Ok(())
    }

    /// [`print_list`](Self::print_list) with an empty prefix.
    pub fn print_list_root<S: LineSink + ?Sized>(&self, sink: &mut S) -> io::Result<()> {
        self.print_list("", sink)
    }

    /// Resolve a `/`-separated path relative to this entry. The empty path
    /// resolves to `self`.
    pub fn lookup(&self, path: &str) -> Option<&Entry> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |entry, segment| match entry {
                Entry::Dir(dir) => dir.child(segment),
                Entry::File(_) => None,
            })
    }

    pub fn lookup_mut(&mut self, path: &str) -> Option<&mut Entry> {
        let mut current = self;
        for segment in path.split('/').filter(|segment| !segment.is_empty()) {
            current = match current {
                Entry::Dir(dir) => dir.child_mut(segment)?,
                Entry::File(_) => return None,
            };
        }
        Some(current)
    }

    /// Resolve `path` to a directory, failing with [`Error::NotFound`] if it
    /// is missing or names a file.
    pub fn directory_mut(&mut self, path: &str) -> Result<&mut Directory> {
        self.lookup_mut(path)
            .and_then(Entry::as_directory_mut)
            .ok_or_else(|| Error::NotFound(path.to_string()))
    }
}

impl From<File> for Entry {
    fn from(file: File) -> Self {
        Entry::File(file)
    }
}

impl From<Directory> for Entry {
    fn from(dir: Directory) -> Self {
        Entry::Dir(dir)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::File(file) => file.fmt(f),
            Entry::Dir(dir) => dir.fmt(f),
        }
    }
}
