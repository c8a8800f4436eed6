mod date;
mod gps;
mod media;
mod namer;
mod scan;
mod stats;
#[cfg(test)]
mod testutil;
mod writer;

use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use crate::media::ImageRecord;
use crate::stats::Statistics;

#[derive(Parser)]
#[command(
    name = "picsort-rs",
    version,
    about = "Sort images by capture date and copy them under date-encoded names"
)]
struct Cli {
    /// Source directory, scanned recursively for .jpg/.jpeg/.png files
    #[arg(long)]
    source: PathBuf,

    /// Destination directory, created if absent
    #[arg(long)]
    dest: PathBuf,

    /// Extract GPS coordinates, embed them in filenames and write a CSV
    #[arg(long)]
    gps: bool,

    /// Embed the first-level subfolder name in filenames
    #[arg(long)]
    dir: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let t_total = std::time::Instant::now();

    ctrlc::set_handler(|| {
        eprintln!("\nAborted by user.");
        std::process::exit(1);
    })?;

    // Stage 1: Scan source tree
    eprintln!("=== Stage 1: Scanning source directory ===");
    let t = std::time::Instant::now();
    let files = scan::find_image_files(&cli.source)?;
    eprintln!("Found {} image files", files.len());
    eprintln!("  Scan took {:.2}s", t.elapsed().as_secs_f64());

    if files.is_empty() {
        println!("No image files found.");
        return Ok(());
    }

    let mut stats = Statistics::default();
    stats.total_files = files.len();

    // Stage 2: Resolve dates, GPS and subfolder tags, then order the batch
    eprintln!("=== Stage 2: Analyzing metadata ===");
    let t = std::time::Instant::now();
    let mut records = analyze(&files, &cli, &mut stats);
    // stable sort: records with equal timestamps keep discovery order
    records.sort_by_key(|r| r.date);
    eprintln!("  Analysis took {:.2}s", t.elapsed().as_secs_f64());

    // Stage 3: Copy chronologically
    eprintln!("=== Stage 3: Copying images ===");
    let t = std::time::Instant::now();
    let gps_log = writer::copy_images(&records, &cli.dest, &mut stats)?;
    eprintln!("  Copy took {:.2}s", t.elapsed().as_secs_f64());

    println!(
        "\nDone! {} images sorted and copied to {}",
        stats.copied_files,
        cli.dest.display()
    );

    if cli.gps {
        writer::write_gps_csv(&cli.dest, &gps_log)?;
    }

    stats.print_summary(cli.gps);
    eprintln!("Total: {:.2}s", t_total.elapsed().as_secs_f64());
    Ok(())
}

/// Analysis pass: one `ImageRecord` per file. Date resolution never fails;
/// GPS extraction runs only with --gps and yields at most a coordinate pair.
fn analyze(files: &[PathBuf], cli: &Cli, stats: &mut Statistics) -> Vec<ImageRecord> {
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40}] {pos}/{len} analyzing images")
            .unwrap(),
    );

    let mut records = Vec::with_capacity(files.len());
    for path in files {
        let resolved = date::resolve_date(path);
        let coords = if cli.gps { gps::extract_gps(path) } else { None };
        let subfolder = if cli.dir {
            namer::subfolder_tag(&cli.source, path)
        } else {
            None
        };

        let record = ImageRecord {
            path: path.clone(),
            date: resolved.date,
            provenance: resolved.provenance,
            date_info: resolved.info,
            coords,
            subfolder,
        };
        stats.record_provenance(record.provenance);
        if record.coords.is_some() {
            stats.gps_files += 1;
        }
        records.push(record);
        pb.inc(1);
    }
    pb.finish_and_clear();

    records
}
