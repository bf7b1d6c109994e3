use clap::Parser;
use gallery_manifest::{build, config, output};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gallery-manifest")]
#[command(about = "Write gallery.json from the images folder next to this binary")]
#[command(long_about = "\
Write gallery.json from the images folder next to this binary

Layout (relative to the binary's directory, not the working directory):

  images/          # scanned, non-recursive
  ├── a.jpg
  ├── b.png
  └── notes.txt    # ignored: not an image extension
  gallery.json     # written, overwritten on every run

Recognized extensions (case-insensitive): .jpg .jpeg .png .webp .gif
Captions are positional: \"Photo 1\", \"Photo 2\", ... in filename order.

If images/ does not exist nothing is written.")]
#[command(version)]
struct Cli {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Cli::parse();
    init_tracing();

    let gallery = config::GalleryConfig::default();
    let base = config::executable_dir()?;
    let report = build::build(&base, &gallery, |event| {
        output::print_event(event, &gallery.images_dir)
    })?;
    output::print_report(&report);

    Ok(())
}

/// Log to stderr so stdout carries only the build diagnostics.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}
