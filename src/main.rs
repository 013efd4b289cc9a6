use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use scour::{process_directory, DEFAULT_EXTENSIONS};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Mirror a source tree into a dist tree, stripping comments from markup, style, and script files",
    long_about = None
)]
struct Args {
    /// Source directory to read from
    #[arg(default_value = "./src")]
    source: PathBuf,

    /// Destination directory to mirror into (created if absent, overwritten silently)
    #[arg(default_value = "./dist")]
    dest: PathBuf,

    /// Extension to strip comments from, repeatable (all other files are copied verbatim)
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,
}

/// Accept "--ext js" and "--ext .js" alike.
fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let extensions: Vec<String> = if args.extensions.is_empty() {
        DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
    } else {
        args.extensions.iter().map(|e| normalize_extension(e)).collect()
    };

    let results = process_directory(&args.source, &args.dest, &extensions)?;

    println!("\nProcessing completed:");
    println!("{} Processed: {} files", "✓".green(), results.processed);
    println!("{} Failed: {} files", "×".red(), results.failed);
    println!("- Copied without processing: {} files", results.skipped);

    Ok(())
}
