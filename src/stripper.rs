use crate::discovery::{self, EXTENSIONS};
use crate::errors::Result;
use regex::Regex;
use std::borrow::Cow;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// Number of leading lines inspected in each file. Lines past this index are
/// never touched.
pub const INSPECTED_LINES: usize = 10;

/// Matches a version pin such as `@1.2.3` or `@0.487.0` inside an import
/// line. Greedy over word characters, digits, dots, and dashes; the dash is
/// known to over-match path segments near an `@`, and that behavior is kept.
const VERSION_PIN_PATTERN: &str = r"@[\d\w.-]+";

/// Core engine for removing version pins from the leading lines of a file.
pub struct Stripper {
    pattern: Regex,
}

/// A single line rewritten by the stripper, recorded for reporting.
#[derive(Debug, Clone)]
pub struct LineEdit {
    /// The 1-based line number of the edited line.
    pub line_number: usize,
    /// The line content before the edit, trimmed of surrounding whitespace.
    pub before: String,
    /// The line content after the edit, trimmed of surrounding whitespace.
    pub after: String,
}

/// The result of processing a single file.
#[derive(Debug)]
pub struct StripReport {
    /// `true` if the file was rewritten.
    pub modified: bool,
    /// One record per mutated line, in line order.
    pub edits: Vec<LineEdit>,
}

/// Counters accumulated across one run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of candidate files processed, including failed ones.
    pub total_files: usize,
    /// Number of files actually rewritten.
    pub modified_files: usize,
}

impl RunSummary {
    /// Files processed without any change (or failed).
    pub fn unchanged_files(&self) -> usize {
        self.total_files - self.modified_files
    }
}

impl Stripper {
    /// Creates a new `Stripper` with the version-pin pattern compiled.
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(VERSION_PIN_PATTERN)?,
        })
    }

    /// Processes a single file, removing version pins from its leading lines.
    ///
    /// The file is read fully and decoded as UTF-8. Each line within the
    /// first `min(10, line_count)` lines has every `@<version>` substring
    /// removed, globally within the line. If anything changed, the complete
    /// line sequence is written back to the same path; otherwise the file is
    /// left untouched. Untouched lines round-trip byte-identical because each
    /// line keeps its own terminator.
    ///
    /// Line boundaries are `\n` only; a file using lone-`\r` terminators is
    /// treated as a single line, so its whole content falls inside the
    /// inspected prefix.
    ///
    /// A failed read never triggers a write.
    pub fn process_file(&self, path: &Path) -> Result<StripReport> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes)?;

        let mut lines: Vec<String> = content
            .split_inclusive('\n')
            .map(str::to_string)
            .collect();

        let mut edits = Vec::new();
        let limit = lines.len().min(INSPECTED_LINES);
        for idx in 0..limit {
            // `replace_all` returns an owned string only when a match fired,
            // and removing a non-empty match always changes the line.
            if let Cow::Owned(stripped) = self.pattern.replace_all(&lines[idx], "") {
                edits.push(LineEdit {
                    line_number: idx + 1,
                    before: lines[idx].trim().to_string(),
                    after: stripped.trim().to_string(),
                });
                lines[idx] = stripped;
            }
        }

        let modified = !edits.is_empty();
        if modified {
            fs::write(path, lines.concat())?;
        }

        Ok(StripReport { modified, edits })
    }
}

/// The main entry point for a run.
///
/// Discovers candidate files in `dir`, processes each in order, and prints
/// the progress log and final summary to standard output. Per-file errors are
/// logged inline and never abort the run; a failed file counts toward
/// `total_files` but not `modified_files`. Returns the accumulated summary.
pub fn run_strip(dir: &Path) -> Result<RunSummary> {
    println!("Processing files in: {}", dir.display());

    let stripper = Stripper::new()?;
    let own_name = executable_name();
    let files = discovery::discover(dir, EXTENSIONS, own_name.as_deref())?;

    let mut summary = RunSummary::default();
    for path in files {
        summary.total_files += 1;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        println!("\nProcessing: {name}");

        match stripper.process_file(&path) {
            Ok(report) => {
                for edit in &report.edits {
                    println!("  Line {}: removed version pin", edit.line_number);
                    println!("    Before: {}", edit.before);
                    println!("    After:  {}", edit.after);
                }
                if report.modified {
                    summary.modified_files += 1;
                    println!("  ✓ Modified {name}");
                } else {
                    println!("  - No changes needed for {name}");
                }
            }
            Err(e) => {
                println!("Error processing {}: {}", path.display(), e);
            }
        }
    }

    println!("\n{}", "=".repeat(50));
    println!("Summary:");
    println!("  Total files processed: {}", summary.total_files);
    println!("  Files modified: {}", summary.modified_files);
    println!("  Files unchanged: {}", summary.unchanged_files());

    if summary.modified_files > 0 {
        println!(
            "\n✓ Successfully removed version pins from {} files!",
            summary.modified_files
        );
    } else {
        println!(
            "\n- No version pins found in the first {INSPECTED_LINES} lines of any files."
        );
    }

    Ok(summary)
}

/// The running executable's file name, used as the self-modification guard
/// during discovery.
fn executable_name() -> Option<OsString> {
    env::current_exe()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_os_string()))
}
