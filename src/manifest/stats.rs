//! Build statistics and the human-readable report

use crate::catalog::FileEntry;
use crate::tags::Level;
use std::fmt;

/// Extensions counted in [`FileTypeCounts`], in report order
pub const TRACKED_EXTENSIONS: [&str; 4] = ["txt", "md", "png", "mp3"];

/// Per-extension file counts for the tracked extensions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileTypeCounts {
    pub txt: usize,
    pub md: usize,
    pub png: usize,
    pub mp3: usize,
}

impl FileTypeCounts {
    /// Count one file with the given lower-cased extension
    ///
    /// Untracked extensions are ignored.
    pub fn record(&mut self, ext: &str) {
        match ext {
            "txt" => self.txt += 1,
            "md" => self.md += 1,
            "png" => self.png += 1,
            "mp3" => self.mp3 += 1,
            _ => {}
        }
    }

    /// `(extension, count)` pairs in report order
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, usize); 4] {
        [
            (TRACKED_EXTENSIONS[0], self.txt),
            (TRACKED_EXTENSIONS[1], self.md),
            (TRACKED_EXTENSIONS[2], self.png),
            (TRACKED_EXTENSIONS[3], self.mp3),
        ]
    }

    fn merge(&mut self, other: &Self) {
        self.txt += other.txt;
        self.md += other.md;
        self.png += other.png;
        self.mp3 += other.mp3;
    }
}

/// Total and per-level breakdown for one hidden/locked category
///
/// `levels` is indexed by level; index 0 is never incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelHistogram {
    pub total: usize,
    pub levels: [usize; 7],
}

impl LevelHistogram {
    /// Count one item at `level`; level 0 is not counted
    pub fn record(&mut self, level: Level) {
        if level.is_set() {
            self.total += 1;
            self.levels[usize::from(level.get())] += 1;
        }
    }

    fn merge(&mut self, other: &Self) {
        self.total += other.total;
        for (mine, theirs) in self.levels.iter_mut().zip(other.levels) {
            *mine += theirs;
        }
    }
}

/// Running totals of one build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub total_folders: usize,
    pub total_files: usize,
    pub file_types: FileTypeCounts,
    pub hidden_folders: LevelHistogram,
    pub hidden_files: LevelHistogram,
    pub locked_files: LevelHistogram,
}

impl BuildStats {
    /// Count one cataloged file
    pub fn record_file(&mut self, file: &FileEntry) {
        self.total_files += 1;
        if let Some(ext) = file.extension() {
            self.file_types.record(&ext);
        }
        self.hidden_files.record(file.hidden_level);
        self.locked_files.record(file.locked_level);
    }

    /// Add another sub-tree's totals into these
    pub fn merge(&mut self, other: &Self) {
        self.total_folders += other.total_folders;
        self.total_files += other.total_files;
        self.file_types.merge(&other.file_types);
        self.hidden_folders.merge(&other.hidden_folders);
        self.hidden_files.merge(&other.hidden_files);
        self.locked_files.merge(&other.locked_files);
    }
}

fn write_levels(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    histogram: &LevelHistogram,
    keyword: &str,
) -> fmt::Result {
    if histogram.total == 0 {
        return Ok(());
    }

    writeln!(f)?;
    writeln!(f, "{title} total: {}", histogram.total)?;
    for level in Level::graded() {
        let count = histogram.levels[usize::from(level.get())];
        if count > 0 {
            writeln!(
                f,
                "  - Level {} ({keyword}{level}): {count}",
                level.access_level()
            )?;
        }
    }
    Ok(())
}

impl fmt::Display for BuildStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Build Statistics ===")?;
        writeln!(f, "Total folders: {}", self.total_folders)?;
        writeln!(f, "Total files: {}", self.total_files)?;
        writeln!(f, "Files by type:")?;

        let mut any_type = false;
        for (ext, count) in self.file_types.entries() {
            if count > 0 {
                writeln!(f, "  - {}: {count}", ext.to_uppercase())?;
                any_type = true;
            }
        }
        if !any_type {
            writeln!(f, "  (none found)")?;
        }

        write_levels(f, "Hidden folders", &self.hidden_folders, "hidden")?;
        write_levels(f, "Hidden files", &self.hidden_files, "hidden")?;
        write_levels(f, "Locked files", &self.locked_files, "locked")?;

        writeln!(f, "========================")
    }
}
