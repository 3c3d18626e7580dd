//! Export helpers for almanac CSV tables and JSON summaries.

pub mod almanac {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    pub const HEADER: &str = "date,zenith,sunrise_utc,sunset_utc,day_length_hours,condition";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard almanac CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// One almanac row. Missing events are written as empty fields.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub date: &'a str,
        pub zenith: &'a str,
        pub sunrise_utc: Option<&'a str>,
        pub sunset_utc: Option<&'a str>,
        pub day_length_hours: f64,
        pub condition: &'a str,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{},{},{},{:.4},{}",
                self.date,
                self.zenith,
                self.sunrise_utc.unwrap_or(""),
                self.sunset_utc.unwrap_or(""),
                self.day_length_hours,
                self.condition,
            )
        }
    }
}

pub mod summary {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::{Path, PathBuf};

    /// Aggregate daylight statistics over an almanac run.
    #[derive(Debug, Clone, Serialize, PartialEq)]
    pub struct AlmanacSummary {
        pub site: String,
        pub latitude: f64,
        pub longitude: f64,
        pub zenith: String,
        pub first_date: String,
        pub days: usize,
        pub regular_days: usize,
        pub polar_days: usize,
        pub polar_nights: usize,
        pub unresolved_days: usize,
        pub total_daylight_hours: f64,
        pub longest_day_hours: f64,
        pub shortest_day_hours: f64,
    }

    /// Sidecar path for a CSV output: `dir/name.csv` becomes `dir/name_summary.json`.
    pub fn sidecar_path(csv_output: &Path) -> PathBuf {
        let parent = csv_output.parent().unwrap_or_else(|| Path::new("."));
        let stem = csv_output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("almanac");
        parent.join(format!("{}_summary.json", stem))
    }

    /// Write the summary as pretty-printed JSON.
    pub fn write_summary(path: &Path, summary: &AlmanacSummary) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(path)?, summary)?;
        Ok(())
    }
}
