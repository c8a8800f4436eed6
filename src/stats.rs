use crate::media::Provenance;

/// Process-wide counters, filled during the analysis and copy phases and
/// printed once as the final summary.
#[derive(Debug, Default)]
pub struct Statistics {
    pub total_files: usize,
    pub exif_files: usize,
    pub filesystem_date_files: usize,
    pub current_date_files: usize,
    pub gps_files: usize,
    pub copied_files: usize,
    pub error_files: usize,
}

impl Statistics {
    pub fn record_provenance(&mut self, provenance: Provenance) {
        match provenance {
            Provenance::Exif => self.exif_files += 1,
            Provenance::FilesystemDate => self.filesystem_date_files += 1,
            Provenance::CurrentDateFallback => self.current_date_files += 1,
        }
    }

    fn percent(&self, count: usize) -> f64 {
        count as f64 / self.total_files.max(1) as f64 * 100.0
    }

    pub fn print_summary(&self, gps_enabled: bool) {
        let line = "=".repeat(60);
        println!();
        println!("{line}");
        println!("STATISTICS");
        println!("{line}");
        println!("Total image files found: {}", self.total_files);
        println!("Successfully copied: {}", self.copied_files);
        println!("Copy errors: {}", self.error_files);
        println!();
        println!("Date sources:");
        println!(
            "  - EXIF data used: {} ({:.1}%)",
            self.exif_files,
            self.percent(self.exif_files)
        );
        println!(
            "  - Filesystem date used: {} ({:.1}%)",
            self.filesystem_date_files,
            self.percent(self.filesystem_date_files)
        );
        println!(
            "  - Current date used: {} ({:.1}%)",
            self.current_date_files,
            self.percent(self.current_date_files)
        );
        if gps_enabled {
            println!(
                "  - GPS data found: {} ({:.1}%)",
                self.gps_files,
                self.percent(self.gps_files)
            );
        }
        println!("{line}");
    }
}
