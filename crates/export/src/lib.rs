//! Report writers for step results: plain text, JSON, and CSV.

pub mod step {
    use serde::Serialize;
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

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

    /// One computed step, in the units the report prints.
    #[derive(Debug, Clone, Serialize)]
    pub struct Record<'a> {
        pub scenario: &'a str,
        pub elapsed_s: f64,
        pub velocity_km_h: f64,
        pub distance_km: f64,
        pub remaining_fuel_kg: f64,
        pub distance_integration: &'a str,
    }

    impl Record<'_> {
        /// Human-readable lines, two decimals per quantity.
        pub fn write_text(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(writer, "New Velocity: {:.2} km/h", self.velocity_km_h)?;
            writeln!(writer, "New Distance: {:.2} km", self.distance_km)?;
            writeln!(writer, "Remaining Fuel: {:.2} kg", self.remaining_fuel_kg)
        }
    }

    /// Write every record as text, with a scenario heading when there is more than one.
    pub fn write_text(writer: &mut dyn Write, records: &[Record<'_>]) -> io::Result<()> {
        let headed = records.len() > 1;
        for (idx, record) in records.iter().enumerate() {
            if headed {
                if idx > 0 {
                    writeln!(writer)?;
                }
                writeln!(
                    writer,
                    "=== {} ({:.0} s) ===",
                    record.scenario, record.elapsed_s
                )?;
            }
            record.write_text(writer)?;
        }
        writer.flush()
    }

    /// Write the records as a pretty-printed JSON array.
    pub fn write_json(writer: &mut dyn Write, records: &[Record<'_>]) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, records)?;
        writeln!(writer)?;
        writer.flush()
    }

    /// Write the records as CSV with a header row.
    pub fn write_csv(writer: &mut dyn Write, records: &[Record<'_>]) -> io::Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        for record in records {
            csv.serialize(record).map_err(io::Error::other)?;
        }
        csv.flush()
    }
}
