//! Tree statistics collection and display
//!
//! Statistics are gathered by a visitor: file and directory counts, total
//! size, the largest file and a breakdown by language (from file extensions).

use std::collections::HashMap;
use std::io::{self, Write};

use rayon::prelude::*;
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::entry::utils::join_path;
use crate::entry::{Directory, Entry, File, format_size, install};
use crate::visitor::{Scope, Visitor};

/// Collected statistics about an entry tree.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TreeStats {
    pub files: usize,
    /// Directories below the root
    pub directories: usize,
    pub total_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub largest: Option<LargestFile>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub by_language: Vec<LanguageStats>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LargestFile {
    pub path: String,
    pub size: u64,
}

/// Statistics for a single language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageStats {
    pub language: String,
    pub files: usize,
    pub bytes: u64,
    /// File extensions for this language
    pub extensions: Vec<String>,
}

/// Configuration for statistics collection.
#[derive(Debug, Clone, Default)]
pub struct StatsConfig {
    /// Workers for parallel collection (0 = rayon's global pool)
    pub workers: usize,
}

/// Visitor that accumulates statistics during traversal.
#[derive(Debug, Default)]
pub struct StatsVisitor {
    files: usize,
    directories: usize,
    total_bytes: u64,
    largest: Option<LargestFile>,
    /// Maps extension -> (file_count, bytes)
    by_extension: HashMap<String, (usize, u64)>,
}

impl StatsVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalize and return the collected statistics.
    pub fn finalize(self) -> TreeStats {
        let mut by_language: HashMap<&str, (Vec<String>, usize, u64)> = HashMap::new();

        for (ext, (file_count, bytes)) in &self.by_extension {
            let lang = extension_to_language(ext);
            let entry = by_language.entry(lang).or_insert((Vec::new(), 0, 0));
            if !ext.is_empty() {
                entry.0.push(format!(".{}", ext));
            }
            entry.1 += file_count;
            entry.2 = entry.2.saturating_add(*bytes);
        }

        let mut languages: Vec<LanguageStats> = by_language
            .into_iter()
            .map(|(lang, (mut exts, files, bytes))| {
                exts.sort();
                LanguageStats {
                    language: lang.to_string(),
                    files,
                    bytes,
                    extensions: exts,
                }
            })
            .collect();

        // Largest first, ties broken by name for stable output
        languages.sort_by(|a, b| b.bytes.cmp(&a.bytes).then_with(|| a.language.cmp(&b.language)));

        TreeStats {
            files: self.files,
            directories: self.directories,
            total_bytes: self.total_bytes,
            largest: self.largest,
            by_language: languages,
        }
    }

    /// Fold in the statistics of a subtree visited after this one.
    fn merge(&mut self, other: StatsVisitor) {
        self.files += other.files;
        self.directories += other.directories;
        self.total_bytes = self.total_bytes.saturating_add(other.total_bytes);
        if let Some(largest) = other.largest {
            self.record_largest(largest);
        }
        for (ext, (count, bytes)) in other.by_extension {
            let entry = self.by_extension.entry(ext).or_insert((0, 0));
            entry.0 += count;
            entry.1 = entry.1.saturating_add(bytes);
        }
    }

    // Ties keep the file seen first.
    fn record_largest(&mut self, candidate: LargestFile) {
        if self.largest.as_ref().is_none_or(|l| candidate.size > l.size) {
            self.largest = Some(candidate);
        }
    }
}

impl Visitor for StatsVisitor {
    fn visit_file(&mut self, file: &File, scope: &Scope<'_>) -> io::Result<()> {
        self.files += 1;
        self.total_bytes = self.total_bytes.saturating_add(file.size());

        let entry = self
            .by_extension
            .entry(extension_of(file.name()).to_lowercase())
            .or_insert((0, 0));
        entry.0 += 1;
        entry.1 = entry.1.saturating_add(file.size());

        if self.largest.as_ref().is_none_or(|l| file.size() > l.size) {
            self.record_largest(LargestFile {
                path: scope.path_of(file.name()),
                size: file.size(),
            });
        }
        Ok(())
    }

    fn visit_directory(&mut self, _dir: &Directory, scope: &Scope<'_>) -> io::Result<()> {
        // The root itself isn't counted
        if !scope.is_root() {
            self.directories += 1;
        }
        Ok(())
    }
}

/// Walk `root` and collect its statistics.
///
/// The top-level children of a directory are visited in parallel on a pool
/// with `config.workers` threads and merged in order, so the result matches
/// a single sequential [`StatsVisitor`] pass.
pub fn collect_stats(root: &Entry, config: &StatsConfig) -> io::Result<TreeStats> {
    let Entry::Dir(dir) = root else {
        let mut visitor = StatsVisitor::new();
        root.accept(&mut visitor)?;
        return Ok(visitor.finalize());
    };

    let prefix = join_path("", dir.name());
    let parts = install(config.workers, || {
        dir.children()
            .par_iter()
            .map(|child| -> io::Result<StatsVisitor> {
                let mut visitor = StatsVisitor::new();
                child.accept_with_prefix(&prefix, &mut visitor)?;
                // Each child is the root of its own walk, which never counts itself
                if child.is_dir() {
                    visitor.directories += 1;
                }
                Ok(visitor)
            })
            .collect::<io::Result<Vec<_>>>()
    })?;

    let mut stats = StatsVisitor::new();
    for part in parts {
        stats.merge(part);
    }
    Ok(stats.finalize())
}

/// Extension of a file name, without the dot. Dotfiles have none.
fn extension_of(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext,
        _ => "",
    }
}

/// Map file extension to language name.
fn extension_to_language(ext: &str) -> &'static str {
    match ext {
        "rs" => "Rust",
        "js" | "mjs" | "cjs" => "JavaScript",
        "ts" => "TypeScript",
        "py" => "Python",
        "go" => "Go",
        "java" => "Java",
        "c" | "h" => "C",
        "cpp" | "cc" | "hpp" => "C++",
        "swift" => "Swift",
        "sh" | "bash" | "zsh" => "Shell",
        "html" | "htm" => "HTML",
        "css" => "CSS",
        "json" => "JSON",
        "yaml" | "yml" => "YAML",
        "toml" => "TOML",
        "md" | "markdown" => "Markdown",
        "tex" => "TeX",
        "txt" => "Text",
        "" => "No Extension",
        _ => "Other",
    }
}

/// Print statistics to stdout with optional color.
pub fn print_stats(stats: &TreeStats, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);
    write_stats(&mut stdout, stats)
}

/// Write the statistics report to any colour-capable writer.
pub fn write_stats<W: WriteColor>(out: &mut W, stats: &TreeStats) -> io::Result<()> {
    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    out.set_color(&bold)?;
    writeln!(out, "Tree Statistics")?;
    out.reset()?;
    writeln!(out, "───────────────")?;

    writeln!(out, "Files:        {} total", stats.files)?;
    writeln!(out, "Directories:  {}", stats.directories)?;
    writeln!(
        out,
        "Size:         {} ({} bytes)",
        format_size(stats.total_bytes),
        format_number(stats.total_bytes)
    )?;
    if let Some(largest) = &stats.largest {
        writeln!(
            out,
            "Largest:      {} ({})",
            largest.path,
            format_size(largest.size)
        )?;
    }
    writeln!(out)?;

    if !stats.by_language.is_empty() {
        out.set_color(&bold)?;
        writeln!(out, "By Language:")?;
        out.reset()?;

        let mut lang_color = ColorSpec::new();
        lang_color.set_fg(Some(Color::Cyan));

        for lang in &stats.by_language {
            write!(out, "  ")?;
            out.set_color(&lang_color)?;
            write!(out, "{:<14}", lang.language)?;
            out.reset()?;
            writeln!(
                out,
                "{:>4} files  {:>10} bytes",
                lang.files,
                format_number(lang.bytes)
            )?;
        }
    }

    Ok(())
}

/// Format a number with thousand separators.
fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Print statistics as JSON.
pub fn print_stats_json(stats: &TreeStats) -> io::Result<()> {
    let json = serde_json::to_string_pretty(stats).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
