//! The sample tree used by the command-line front end.

use crate::entry::{Directory, Entry, File};
use crate::error::Result;

/// `root` holding `bin` (with `vi` and `latex`), plus empty `tmp` and `usr`.
pub fn root_entries() -> Result<Entry> {
    let mut bin = Directory::new("bin")?;
    bin.add(File::new("vi", 10000)?)
        .add(File::new("latex", 20000)?);

    let mut root = Entry::dir("root")?;
    root.add(bin)?
        .add(Directory::new("tmp")?)?
        .add(Directory::new("usr")?)?;
    Ok(root)
}

/// Add the home directories of three users under `usr`.
///
/// `usr` is already attached to `root`, so it is reached by path and
/// extended in place.
pub fn add_user_entries(root: &mut Entry) -> Result<()> {
    let mut yuki = Directory::new("yuki")?;
    yuki.add(File::new("diary.html", 100)?)
        .add(File::new("Composite.java", 200)?);

    let mut hanako = Directory::new("hanako")?;
    hanako.add(File::new("memo.tex", 300)?);

    let mut tomura = Directory::new("tomura")?;
    tomura
        .add(File::new("game.doc", 400)?)
        .add(File::new("junk.mail", 500)?);

    root.directory_mut("usr")?
        .add(yuki)
        .add(hanako)
        .add(tomura);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_entries() {
        let root = root_entries().unwrap();
        assert_eq!(root.size(), 30000);
        let names: Vec<&str> = root.children().iter().map(Entry::name).collect();
        assert_eq!(names, vec!["bin", "tmp", "usr"]);
    }

    #[test]
    fn test_add_user_entries() {
        let mut root = root_entries().unwrap();
        add_user_entries(&mut root).unwrap();
        assert_eq!(root.size(), 31500);
        assert_eq!(root.lookup("usr").map(Entry::size), Some(1500));
        assert_eq!(root.lookup("usr/tomura/junk.mail").map(Entry::size), Some(500));
    }
}
