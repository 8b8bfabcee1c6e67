//! Tree formatter for console output
//!
//! `TreeFormatter` renders an entry tree with box-drawing guides, the way
//! `tree(1)` does, followed by a directory and file count.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::entry::{Directory, Entry, File, format_size};
use crate::visitor::{Scope, Visitor};

use super::config::OutputConfig;

/// Formatter for box-drawing tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the tree to a plain string, without colors.
    pub fn format(&self, root: &Entry) -> io::Result<String> {
        let mut out = NoColor::new(Vec::new());
        self.write(root, &mut out)?;
        Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
    }

    pub fn print(&self, root: &Entry) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write(root, &mut stdout)
    }

    /// Render the tree into any colour-capable writer.
    pub fn write<W: WriteColor>(&self, root: &Entry, out: &mut W) -> io::Result<()> {
        let mut renderer = TreeRenderer {
            config: &self.config,
            out: &mut *out,
            dir_count: 0,
            file_count: 0,
        };
        root.accept(&mut renderer)?;
        let (dir_count, file_count) = (renderer.dir_count, renderer.file_count);

        writeln!(out)?;
        writeln!(out, "{} directories, {} files", dir_count, file_count)?;
        Ok(())
    }
}

/// Visitor writing one line per entry.
struct TreeRenderer<'a, W: WriteColor> {
    config: &'a OutputConfig,
    out: &'a mut W,
    dir_count: usize,
    file_count: usize,
}

impl<W: WriteColor> TreeRenderer<'_, W> {
    fn write_guides(&mut self, scope: &Scope<'_>) -> io::Result<()> {
        if scope.is_root() {
            return Ok(());
        }
        for last in scope.guides() {
            write!(self.out, "{}", if last { "    " } else { "│   " })?;
        }
        let connector = if scope.is_last() { "└── " } else { "├── " };
        write!(self.out, "{}", connector)
    }

    fn write_size(&mut self, bytes: u64) -> io::Result<()> {
        if !self.config.show_size {
            return Ok(());
        }
        write!(self.out, "  ")?;
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(self.out, "[{}]", format_size(bytes))?;
        self.out.reset()
    }
}

impl<W: WriteColor> Visitor for TreeRenderer<'_, W> {
    fn visit_file(&mut self, file: &File, scope: &Scope<'_>) -> io::Result<()> {
        self.file_count += 1;
        self.write_guides(scope)?;
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
        write!(self.out, "{}", file.name())?;
        self.out.reset()?;
        self.write_size(file.size())?;
        writeln!(self.out)
    }

    fn visit_directory(&mut self, dir: &Directory, scope: &Scope<'_>) -> io::Result<()> {
        if !scope.is_root() {
            self.dir_count += 1;
        }
        self.write_guides(scope)?;
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.out, "{}", dir.name())?;
        self.out.reset()?;
        self.write_size(dir.size())?;
        writeln!(self.out)
    }
}
