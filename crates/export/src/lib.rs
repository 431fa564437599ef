//! Export helpers for CSV and JSON artifacts.

pub mod passes {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str = "offset_hours,platform,target,lat_deg,lon_deg,ground_distance_km,heading_offset_deg,aligned,overhead,wait_hours";

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

    /// Write the standard pass-sweep CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the pass-sweep exporter.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub offset_hours: f64,
        pub platform: &'a str,
        pub target: &'a str,
        pub lat_deg: f64,
        pub lon_deg: f64,
        pub ground_distance_km: f64,
        pub heading_offset_deg: f64,
        pub aligned: bool,
        pub overhead: bool,
        pub wait_hours: f64,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{:.4},{},{},{:.6},{:.6},{:.3},{:.4},{},{},{:.6}",
                self.offset_hours,
                self.platform,
                self.target,
                self.lat_deg,
                self.lon_deg,
                self.ground_distance_km,
                self.heading_offset_deg,
                if self.aligned { "true" } else { "false" },
                if self.overhead { "true" } else { "false" },
                self.wait_hours,
            )
        }
    }
}

pub mod summary {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// One sweep sample carried into the JSON summary.
    #[derive(Debug, Clone, Serialize)]
    pub struct Sample {
        pub offset_hours: f64,
        pub ground_distance_km: f64,
        pub wait_hours: f64,
        pub aligned: bool,
    }

    /// Aggregates over a full sweep.
    #[derive(Debug, Serialize)]
    pub struct SweepSummary {
        pub sample_count: usize,
        pub aligned_count: usize,
        pub min_distance_km: f64,
        pub min_distance_offset_hours: f64,
        pub min_wait_hours: f64,
        pub samples: Vec<Sample>,
    }

    /// Metadata describing the sweep run.
    #[derive(Debug)]
    pub struct Metadata<'a> {
        pub platform: &'a str,
        pub target: &'a str,
        pub epoch_utc: &'a str,
        pub step_hours: f64,
        pub window_hours: f64,
    }

    #[derive(Serialize)]
    struct SweepSidecar<'a> {
        platform: &'a str,
        target: &'a str,
        epoch_utc: &'a str,
        step_hours: f64,
        window_hours: f64,
        sample_count: usize,
        aligned_count: usize,
        min_distance_km: f64,
        min_distance_offset_hours: f64,
        min_wait_hours: f64,
        samples: &'a [Sample],
    }

    /// Fold sweep samples into their summary aggregates.
    pub fn summarize(samples: Vec<Sample>) -> SweepSummary {
        let mut aligned_count = 0;
        let mut min_distance_km = f64::MAX;
        let mut min_distance_offset_hours = 0.0;
        let mut min_wait_hours = f64::MAX;
        for sample in &samples {
            if sample.aligned {
                aligned_count += 1;
            }
            if sample.ground_distance_km < min_distance_km {
                min_distance_km = sample.ground_distance_km;
                min_distance_offset_hours = sample.offset_hours;
            }
            if sample.wait_hours < min_wait_hours {
                min_wait_hours = sample.wait_hours;
            }
        }
        if samples.is_empty() {
            min_distance_km = 0.0;
            min_wait_hours = 0.0;
        }

        SweepSummary {
            sample_count: samples.len(),
            aligned_count,
            min_distance_km,
            min_distance_offset_hours,
            min_wait_hours,
            samples,
        }
    }

    /// Write the JSON summary sidecar next to the sweep CSV.
    pub fn write_sidecar(
        output: &Path,
        meta: &Metadata<'_>,
        summary: &SweepSummary,
    ) -> io::Result<()> {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }

        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("passes");
        let sidecar_path = parent.join(format!("{}_summary.json", stem));

        let sidecar = SweepSidecar {
            platform: meta.platform,
            target: meta.target,
            epoch_utc: meta.epoch_utc,
            step_hours: meta.step_hours,
            window_hours: meta.window_hours,
            sample_count: summary.sample_count,
            aligned_count: summary.aligned_count,
            min_distance_km: summary.min_distance_km,
            min_distance_offset_hours: summary.min_distance_offset_hours,
            min_wait_hours: summary.min_wait_hours,
            samples: &summary.samples,
        };

        to_writer_pretty(File::create(&sidecar_path)?, &sidecar)?;
        Ok(())
    }
}
