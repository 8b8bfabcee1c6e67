//! Serialization of entry trees
//!
//! Directory sizes are computed once per serialized tree, in a single
//! post-order pass, and consumed in pre-order as directories are written.

use std::cell::Cell;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::directory::Directory;
use super::node::Entry;

/// Aggregate size of every directory in a tree, in pre-order.
#[derive(Default)]
struct DirSizes {
    sizes: Vec<u64>,
    next: Cell<usize>,
}

impl DirSizes {
    fn of(root: &Directory) -> Self {
        let mut sizes = vec![0u64];
        // (directory, its slot in `sizes`, next child to visit)
        let mut frames: Vec<(&Directory, usize, usize)> = vec![(root, 0, 0)];

        while let Some((dir, slot, next)) = frames.last_mut() {
            let dir: &Directory = *dir;
            let slot = *slot;
            match dir.children().get(*next) {
                Some(Entry::File(file)) => {
                    *next += 1;
                    sizes[slot] = sizes[slot].saturating_add(file.size());
                }
                Some(Entry::Dir(sub)) => {
                    *next += 1;
                    sizes.push(0);
                    frames.push((sub, sizes.len() - 1, 0));
                }
                None => {
                    frames.pop();
                    if let Some(&(_, parent, _)) = frames.last() {
                        sizes[parent] = sizes[parent].saturating_add(sizes[slot]);
                    }
                }
            }
        }

        Self {
            sizes,
            next: Cell::new(0),
        }
    }

    fn take(&self) -> u64 {
        let index = self.next.get();
        self.next.set(index + 1);
        self.sizes.get(index).copied().unwrap_or_default()
    }
}

/// A directory without a type tag: `name`, `size`, `children`.
struct DirBody<'a> {
    dir: &'a Directory,
    sizes: &'a DirSizes,
}

impl Serialize for DirBody<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Directory", 3)?;
        state.serialize_field("name", self.dir.name())?;
        state.serialize_field("size", &self.sizes.take())?;
        state.serialize_field("children", &Children(self.dir, self.sizes))?;
        state.end()
    }
}

struct Children<'a>(&'a Directory, &'a DirSizes);

impl Serialize for Children<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let Children(dir, sizes) = *self;
        serializer.collect_seq(dir.children().iter().map(|entry| Tagged { entry, sizes }))
    }
}

/// An entry with its `type` tag, `"file"` or `"dir"`.
struct Tagged<'a> {
    entry: &'a Entry,
    sizes: &'a DirSizes,
}

impl Serialize for Tagged<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.entry {
            Entry::File(file) => {
                let mut state = serializer.serialize_struct("Entry", 3)?;
                state.serialize_field("type", "file")?;
                state.serialize_field("name", file.name())?;
                state.serialize_field("size", &file.size())?;
                state.end()
            }
            Entry::Dir(dir) => {
                let mut state = serializer.serialize_struct("Entry", 4)?;
                state.serialize_field("type", "dir")?;
                state.serialize_field("name", dir.name())?;
                state.serialize_field("size", &self.sizes.take())?;
                state.serialize_field("children", &Children(dir, self.sizes))?;
                state.end()
            }
        }
    }
}

impl Serialize for Directory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DirBody {
            dir: self,
            sizes: &DirSizes::of(self),
        }
        .serialize(serializer)
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let sizes = match self {
            Entry::Dir(dir) => DirSizes::of(dir),
            Entry::File(_) => DirSizes::default(),
        };
        Tagged {
            entry: self,
            sizes: &sizes,
        }
        .serialize(serializer)
    }
}
