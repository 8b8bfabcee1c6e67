//! Traversal engine shared by every `accept` entry point.

use std::io;

use crate::entry::{Directory, Entry, File};
use crate::entry::utils::join_path;

use super::Visitor;

/// An ancestor directory on the path from the traversal root.
#[derive(Debug, Clone, Copy)]
struct Ancestor<'a> {
    name: &'a str,
    is_last: bool,
}

/// Where the visited entry sits in the tree.
///
/// A scope is built fresh for every call, so a directory's subtree can never
/// leak prefix changes into its siblings.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    base: &'a str,
    ancestors: &'a [Ancestor<'a>],
    is_last: bool,
}

impl<'a> Scope<'a> {
    fn new(base: &'a str, ancestors: &'a [Ancestor<'a>], is_last: bool) -> Self {
        Self {
            base,
            ancestors,
            is_last,
        }
    }

    /// The listing prefix of the visited entry: the base prefix followed by
    /// `/name` for every ancestor.
    pub fn prefix(&self) -> String {
        let len = self.ancestors.iter().map(|a| a.name.len() + 1).sum::<usize>();
        let mut prefix = String::with_capacity(self.base.len() + len);
        prefix.push_str(self.base);
        for ancestor in self.ancestors {
            prefix.push('/');
            prefix.push_str(ancestor.name);
        }
        prefix
    }

    /// Full path of a node called `name` in this scope.
    pub fn path_of(&self, name: &str) -> String {
        join_path(&self.prefix(), name)
    }

    /// Number of ancestors between the traversal root and the visited entry.
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    pub fn is_root(&self) -> bool {
        self.ancestors.is_empty()
    }

    /// Whether the visited entry is the last child of its parent. The
    /// traversal root counts as last.
    pub fn is_last(&self) -> bool {
        self.is_last
    }

    /// Ancestor names from the traversal root downwards.
    pub fn ancestors(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.ancestors.iter().map(|a| a.name)
    }

    /// For every ancestor below the traversal root, whether it was the last
    /// child of its own parent. Used to draw tree guides.
    pub fn guides(&self) -> impl Iterator<Item = bool> + '_ {
        self.ancestors.iter().skip(1).map(|a| a.is_last)
    }
}

enum Step<'t> {
    File(&'t File, bool),
    Dir(&'t Directory, bool),
    Leave(&'t Directory, bool),
}

impl<'t> Step<'t> {
    fn enter(entry: &'t Entry, is_last: bool) -> Self {
        match entry {
            Entry::File(file) => Step::File(file, is_last),
            Entry::Dir(dir) => Step::Dir(dir, is_last),
        }
    }
}

/// Depth-first, pre-order walk driven by an explicit stack.
fn walk<V: Visitor + ?Sized>(base: &str, first: Step<'_>, visitor: &mut V) -> io::Result<()> {
    tracing::trace!(base, "traversal started");

    let mut ancestors: Vec<Ancestor<'_>> = Vec::new();
    let mut pending = vec![first];
    let mut visited = 0usize;

    while let Some(step) = pending.pop() {
        match step {
            Step::File(file, is_last) => {
                visited += 1;
                visitor.visit_file(file, &Scope::new(base, &ancestors, is_last))?;
            }
            Step::Dir(dir, is_last) => {
                visited += 1;
                visitor.visit_directory(dir, &Scope::new(base, &ancestors, is_last))?;

                ancestors.push(Ancestor {
                    name: dir.name(),
                    is_last,
                });
                pending.push(Step::Leave(dir, is_last));

                let count = dir.len();
                pending.extend(
                    dir.children()
                        .iter()
                        .enumerate()
                        .rev()
                        .map(|(i, child)| Step::enter(child, i + 1 == count)),
                );
            }
            Step::Leave(dir, is_last) => {
                ancestors.pop();
                visitor.leave_directory(dir, &Scope::new(base, &ancestors, is_last))?;
            }
        }
    }

    tracing::trace!(visited, "traversal finished");
    Ok(())
}

impl Entry {
    /// Walk this entry and everything below it with `visitor`.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> io::Result<()> {
        self.accept_with_prefix("", visitor)
    }

    /// Like [`accept`](Self::accept), with `prefix` as the base of every
    /// scope prefix.
    pub fn accept_with_prefix<V: Visitor + ?Sized>(
        &self,
        prefix: &str,
        visitor: &mut V,
    ) -> io::Result<()> {
        walk(prefix, Step::enter(self, true), visitor)
    }
}

impl File {
    /// Hand this file to `visitor.visit_file`.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> io::Result<()> {
        walk("", Step::File(self, true), visitor)
    }
}

impl Directory {
    /// Hand this directory to `visitor.visit_directory`, then every child in
    /// order, then `visitor.leave_directory`.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> io::Result<()> {
        self.accept_with_prefix("", visitor)
    }

    pub fn accept_with_prefix<V: Visitor + ?Sized>(
        &self,
        prefix: &str,
        visitor: &mut V,
    ) -> io::Result<()> {
        walk(prefix, Step::Dir(self, true), visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Event {
        File(String, String),
        Enter(String, String),
        Leave(String, String),
    }

    /// Records every call together with the prefix it saw.
    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl Visitor for Recorder {
        fn visit_file(&mut self, file: &File, scope: &Scope<'_>) -> io::Result<()> {
            self.events
                .push(Event::File(file.name().to_string(), scope.prefix()));
            Ok(())
        }

        fn visit_directory(&mut self, dir: &Directory, scope: &Scope<'_>) -> io::Result<()> {
            self.events
                .push(Event::Enter(dir.name().to_string(), scope.prefix()));
            Ok(())
        }

        fn leave_directory(&mut self, dir: &Directory, scope: &Scope<'_>) -> io::Result<()> {
            self.events
                .push(Event::Leave(dir.name().to_string(), scope.prefix()));
            Ok(())
        }
    }

    fn sample() -> Entry {
        let mut a = Entry::dir("a").unwrap();
        a.add(Entry::file("x", 1).unwrap()).unwrap();
        let mut b = Entry::dir("b").unwrap();
        b.add(Entry::file("y", 2).unwrap()).unwrap();
        let mut root = Entry::dir("root").unwrap();
        root.add(a).unwrap().add(b).unwrap();
        root
    }

    fn file(name: &str, prefix: &str) -> Event {
        Event::File(name.to_string(), prefix.to_string())
    }

    fn enter(name: &str, prefix: &str) -> Event {
        Event::Enter(name.to_string(), prefix.to_string())
    }

    fn leave(name: &str, prefix: &str) -> Event {
        Event::Leave(name.to_string(), prefix.to_string())
    }

    #[test]
    fn test_pre_order_with_symmetric_prefixes() {
        let mut recorder = Recorder::default();
        sample().accept(&mut recorder).unwrap();

        assert_eq!(
            recorder.events,
            vec![
                enter("root", ""),
                enter("a", "/root"),
                file("x", "/root/a"),
                leave("a", "/root"),
                enter("b", "/root"),
                file("y", "/root/b"),
                leave("b", "/root"),
                leave("root", ""),
            ]
        );
    }

    #[test]
    fn test_siblings_see_same_prefix() {
        let mut recorder = Recorder::default();
        sample().accept(&mut recorder).unwrap();

        let entered: Vec<&str> = recorder
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Enter(name, prefix) if name != "root" => Some(prefix.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(entered, vec!["/root", "/root"]);
    }

    #[test]
    fn test_visitor_is_reusable() {
        let tree = sample();
        let mut recorder = Recorder::default();
        tree.accept(&mut recorder).unwrap();
        let first: Vec<_> = recorder.events.drain(..).collect();
        tree.accept(&mut recorder).unwrap();
        assert_eq!(first, recorder.events);
    }

    #[test]
    fn test_accept_with_prefix() {
        let mut recorder = Recorder::default();
        sample().accept_with_prefix("/mnt", &mut recorder).unwrap();
        assert_eq!(recorder.events[0], enter("root", "/mnt"));
        assert_eq!(recorder.events[2], file("x", "/mnt/root/a"));
    }

    #[test]
    fn test_file_accept_dispatches_to_visit_file() {
        let mut recorder = Recorder::default();
        File::new("vi", 1).unwrap().accept(&mut recorder).unwrap();
        assert_eq!(recorder.events, vec![file("vi", "")]);
    }

    #[test]
    fn test_empty_directory_accept() {
        let mut recorder = Recorder::default();
        Directory::new("tmp").unwrap().accept(&mut recorder).unwrap();
        assert_eq!(recorder.events, vec![enter("tmp", ""), leave("tmp", "")]);
    }

    struct ScopeProbe {
        seen: Vec<(String, usize, bool, Vec<bool>)>,
    }

    impl Visitor for ScopeProbe {
        fn visit_file(&mut self, file: &File, scope: &Scope<'_>) -> io::Result<()> {
            self.seen.push((
                file.name().to_string(),
                scope.depth(),
                scope.is_last(),
                scope.guides().collect(),
            ));
            Ok(())
        }

        fn visit_directory(&mut self, dir: &Directory, scope: &Scope<'_>) -> io::Result<()> {
            self.seen.push((
                dir.name().to_string(),
                scope.depth(),
                scope.is_last(),
                scope.guides().collect(),
            ));
            Ok(())
        }
    }

    #[test]
    fn test_scope_depth_and_last_flags() {
        let mut probe = ScopeProbe { seen: Vec::new() };
        sample().accept(&mut probe).unwrap();

        assert_eq!(
            probe.seen,
            vec![
                ("root".to_string(), 0, true, vec![]),
                ("a".to_string(), 1, false, vec![]),
                ("x".to_string(), 2, true, vec![false]),
                ("b".to_string(), 1, true, vec![]),
                ("y".to_string(), 2, true, vec![true]),
            ]
        );
    }

    struct FailOn(&'static str);

    impl Visitor for FailOn {
        fn visit_file(&mut self, file: &File, _scope: &Scope<'_>) -> io::Result<()> {
            if file.name() == self.0 {
                return Err(io::Error::other("sink closed"));
            }
            Ok(())
        }

        fn visit_directory(&mut self, _dir: &Directory, _scope: &Scope<'_>) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_visitor_error_stops_traversal() {
        let err = sample().accept(&mut FailOn("x")).unwrap_err();
        assert_eq!(err.to_string(), "sink closed");
    }

    #[test]
    fn test_scope_helpers() {
        let ancestors = [
            Ancestor {
                name: "root",
                is_last: true,
            },
            Ancestor {
                name: "bin",
                is_last: false,
            },
        ];
        let scope = Scope::new("", &ancestors, true);
        assert_eq!(scope.prefix(), "/root/bin");
        assert_eq!(scope.path_of("vi"), "/root/bin/vi");
        assert_eq!(scope.ancestors().collect::<Vec<_>>(), vec!["root", "bin"]);
        assert!(!scope.is_root());
    }
}
