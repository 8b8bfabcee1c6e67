//! Composite entries

use std::fmt;

use crate::error::{Error, Result};

use super::node::Entry;

/// A composite entry owning an ordered list of children.
///
/// Children are moved in by value, so an entry can only ever live in one
/// directory and a directory can never contain itself.
///
/// `Clone`, `PartialEq`, `Drop` and `Debug` never recurse, so they are safe
/// on arbitrarily deep trees.
pub struct Directory {
    name: String,
    children: Vec<Entry>,
}

impl Directory {
    /// Create an empty directory. Fails with [`Error::EmptyName`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(Self {
            name,
            children: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[Entry] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append `entry` as the last child and return `self` for chaining.
    pub fn add(&mut self, entry: impl Into<Entry>) -> &mut Self {
        let entry = entry.into();
        tracing::debug!(parent = %self.name, child = %entry.name(), "appending entry");
        self.children.push(entry);
        self
    }

    /// Total size of every file below this directory, saturating at
    /// `u64::MAX`.
    ///
    /// Recomputed on each call with an explicit stack, so the cost is linear
    /// in the number of descendants and independent of call-stack depth.
    pub fn size(&self) -> u64 {
        let mut total: u64 = 0;
        let mut pending: Vec<&Entry> = self.children.iter().collect();
        while let Some(entry) = pending.pop() {
            match entry {
                Entry::File(file) => total = total.saturating_add(file.size()),
                Entry::Dir(dir) => pending.extend(dir.children.iter()),
            }
        }
        total
    }

    /// Direct child with the given name. The first match wins if names repeat.
    pub fn child(&self, name: &str) -> Option<&Entry> {
        self.children.iter().find(|c| c.name() == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.children.iter_mut().find(|c| c.name() == name)
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.size())
    }
}

// Unlink descendants one level at a time so deep chains don't recurse in drop glue.
impl Drop for Directory {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(entry) = pending.pop() {
            if let Entry::Dir(mut dir) = entry {
                pending.append(&mut dir.children);
            }
        }
    }
}

impl Clone for Directory {
    fn clone(&self) -> Self {
        // Each frame holds a source directory, its copy under construction
        // and the index of the next child to copy.
        let mut frames: Vec<(&Directory, Directory, usize)> = vec![(self, self.empty_copy(), 0)];
        let mut root = None;

        while let Some((source, copy, next)) = frames.last_mut() {
            let source: &Directory = *source;
            if let Some(child) = source.children.get(*next) {
                *next += 1;
                match child {
                    Entry::File(file) => copy.children.push(Entry::File(file.clone())),
                    Entry::Dir(dir) => frames.push((dir, dir.empty_copy(), 0)),
                }
            } else if let Some((_, done, _)) = frames.pop() {
                match frames.last_mut() {
                    Some((_, parent, _)) => parent.children.push(Entry::Dir(done)),
                    None => root = Some(done),
                }
            }
        }

        root.unwrap_or_else(|| self.empty_copy())
    }
}

impl Directory {
    fn empty_copy(&self) -> Self {
        Self {
            name: self.name.clone(),
            children: Vec::with_capacity(self.children.len()),
        }
    }
}

impl PartialEq for Directory {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.name != b.name || a.children.len() != b.children.len() {
                return false;
            }
            for pair in a.children.iter().zip(&b.children) {
                match pair {
                    (Entry::File(x), Entry::File(y)) if x == y => {}
                    (Entry::Dir(x), Entry::Dir(y)) => pending.push((x, y)),
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for Directory {}

// Shallow: children are listed by name only.
impl fmt::Debug for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.children.iter().map(Entry::name).collect();
        f.debug_struct("Directory")
            .field("name", &self.name)
            .field("size", &self.size())
            .field("children", &names)
            .finish()
    }
}
