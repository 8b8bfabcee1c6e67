//! Test harness for sprout integration tests

#![allow(dead_code)]

use std::process::Command;

use sprout::{Directory, Entry, File};

/// Run the sprout binary with `args`, returning (stdout, stderr, success).
pub fn run_sprout(args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_sprout");
    let output = Command::new(binary)
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run sprout");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Build a directory entry from a name and its children.
pub fn dir(name: &str, children: Vec<Entry>) -> Entry {
    let mut dir = Directory::new(name).expect("valid directory name");
    for child in children {
        dir.add(child);
    }
    Entry::Dir(dir)
}

pub fn file(name: &str, size: u64) -> Entry {
    Entry::File(File::new(name, size).expect("valid file name"))
}

/// A chain of `depth` directories, each holding the next, with one file of
/// `size` bytes at the bottom. Built bottom-up without recursion.
pub fn deep_chain(depth: usize, size: u64) -> Entry {
    let mut node = file("leaf", size);
    for level in (0..depth).rev() {
        let mut dir = Directory::new(format!("d{}", level)).expect("valid directory name");
        dir.add(node);
        node = Entry::Dir(dir);
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_dir_keeps_child_order() {
        let tree = dir("root", vec![file("a", 1), file("b", 2)]);
        let names: Vec<&str> = tree.children().iter().map(Entry::name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_harness_deep_chain_shape() {
        let chain = deep_chain(3, 9);
        assert_eq!(chain.name(), "d0");
        assert_eq!(chain.lookup("d1/d2/leaf").map(Entry::size), Some(9));
    }
}
