//! Command-line interface for colorizing single images or directories

use crate::io::configuration::{DEFAULT_NEIGHBOR_RADIUS, MARKED_SUFFIX, OUTPUT_SUFFIX};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{load_image, save_image};
use crate::io::progress::ProgressManager;
use crate::solver::colorize::{ColorizeOptions, colorize};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "chromafill")]
#[command(
    author,
    version,
    about = "Colorize greyscale images from scribbled color hints"
)]
/// Command-line arguments for the colorization tool
pub struct Cli {
    /// Greyscale PNG file or directory of PNG files to colorize
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Hint image path (defaults to <stem>_marked.png beside the input)
    #[arg(short, long)]
    pub marked: Option<PathBuf>,

    /// Output path (defaults to <stem>_result.png beside the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Neighborhood radius for the smoothness constraints
    #[arg(short, long, default_value_t = DEFAULT_NEIGHBOR_RADIUS)]
    pub radius: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates colorization over one file or a directory of files
pub struct FileProcessor {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress: None,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, image loading, the solve
    /// itself, or output export fails.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if self.cli.should_show_progress() {
            self.progress = Some(ProgressManager::new(files.len()));
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref progress) = self.progress {
            progress.finish();
        }

        Ok(())
    }

    // Allow print for user feedback on skipped files
    #[allow(clippy::print_stderr)]
    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) != Some("png") {
                return Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a PNG image",
                ));
            }
            let marked_path = self.marked_path(&self.cli.target);
            if !marked_path.is_file() {
                return Err(invalid_parameter(
                    "marked",
                    &marked_path.display(),
                    &"no hint image found; pass one with --marked",
                ));
            }
            if self.should_process_file(&self.cli.target) {
                Ok(vec![self.cli.target.clone()])
            } else {
                Ok(vec![])
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) != Some("png") {
                    continue;
                }
                let stem = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                // Hint and result images live beside their inputs; never
                // treat them as inputs themselves
                if stem.ends_with(MARKED_SUFFIX) || stem.ends_with(OUTPUT_SUFFIX) {
                    continue;
                }
                if !Self::marked_path_for(&path).is_file() {
                    if !self.cli.quiet {
                        eprintln!(
                            "Skipping: {} (no {}{MARKED_SUFFIX}.png hint image)",
                            path.display(),
                            stem
                        );
                    }
                    continue;
                }
                if self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a PNG file or directory",
            ))
        }
    }

    // Allow print for user feedback on skipped files
    #[allow(clippy::print_stderr)]
    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path(input_path);
        if output_path.exists() {
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path) -> Result<()> {
        if let Some(ref progress) = self.progress {
            progress.start_file(input_path);
        }

        let grey = load_image(input_path)?;
        let marked = load_image(self.marked_path(input_path))?;

        let options = ColorizeOptions {
            radius: self.cli.radius,
            ..ColorizeOptions::default()
        };
        let colored = colorize(&grey, &marked, options)?;

        save_image(&colored, self.output_path(input_path))?;

        if let Some(ref progress) = self.progress {
            progress.complete_file();
        }

        Ok(())
    }

    // Explicit overrides only apply in single-file mode; directory batches
    // always use the filename conventions
    fn marked_path(&self, input_path: &Path) -> PathBuf {
        if self.cli.target.is_file() {
            if let Some(ref marked) = self.cli.marked {
                return marked.clone();
            }
        }
        Self::marked_path_for(input_path)
    }

    fn output_path(&self, input_path: &Path) -> PathBuf {
        if self.cli.target.is_file() {
            if let Some(ref output) = self.cli.output {
                return output.clone();
            }
        }
        Self::output_path_for(input_path)
    }

    /// Conventional hint image path for an input: `<stem>_marked.png`
    pub fn marked_path_for(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let marked_name = format!("{}{MARKED_SUFFIX}.png", stem.to_string_lossy());

        input_path.parent().map_or_else(
            || PathBuf::from(&marked_name),
            |parent| parent.join(&marked_name),
        )
    }

    /// Conventional output path for an input: `<stem>_result.<ext>`
    pub fn output_path_for(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{OUTPUT_SUFFIX}.{}",
            stem.to_string_lossy(),
            extension.to_string_lossy()
        );

        input_path.parent().map_or_else(
            || PathBuf::from(&output_name),
            |parent| parent.join(&output_name),
        )
    }
}
