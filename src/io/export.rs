//! CSV export for per-plant production estimates.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::report::PlantEstimate;

/// Schema v1 column header for CSV estimate export.
const HEADER: &str = "plant_id,name,type,capacity_mw,efficiency,production_mw,\
                      unit_price_per_kwh,daily_revenue,monthly_revenue,reservoir_temp_c";

/// Exports estimate rows to a CSV file at the given path.
///
/// Writes a header row followed by one data row per plant using the
/// schema v1 column layout. Produces deterministic output for identical
/// inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(rows: &[PlantEstimate], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(rows, buf)
}

/// Writes estimate rows as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(rows: &[PlantEstimate], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(',').map(str::trim))?;

    // Data rows
    for r in rows {
        wtr.write_record(&[
            r.plant_id.to_string(),
            r.name.clone(),
            r.plant_type.to_string(),
            format!("{:.2}", r.capacity_mw),
            format!("{:.4}", r.estimate.efficiency),
            format!("{:.4}", r.estimate.production_mw),
            format!("{:.2}", r.estimate.unit_price_per_kwh),
            format!("{:.2}", r.estimate.daily_revenue),
            format!("{:.2}", r.estimate.monthly_revenue),
            r.reservoir_temp_c
                .map(|t| format!("{t:.1}"))
                .unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::{Plant, PlantType};
    use crate::report::fleet_estimates;
    use crate::weather::WeatherObservation;

    fn make_rows() -> Vec<PlantEstimate> {
        let plants = vec![
            Plant {
                id: 1,
                name: "Row GES".to_string(),
                plant_type: PlantType::Solar,
                capacity_mw: 100.0,
                latitude: 38.0,
                longitude: 32.0,
                status: "active".to_string(),
                reservoir_temp_c: None,
                last_updated_unix: 0,
            },
            Plant {
                id: 2,
                name: "Row JES".to_string(),
                plant_type: PlantType::Geothermal,
                capacity_mw: 80.0,
                latitude: 37.9,
                longitude: 28.8,
                status: "active".to_string(),
                reservoir_temp_c: Some(165.0),
                last_updated_unix: 0,
            },
        ];
        fleet_estimates(&plants, &WeatherObservation::clear_sky_default())
    }

    #[test]
    fn header_matches_schema_v1() {
        let mut buf = Vec::new();
        write_csv(&make_rows(), &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let first_line = output.as_deref().unwrap_or("").lines().next().unwrap_or("");
        assert_eq!(
            first_line,
            "plant_id,name,type,capacity_mw,efficiency,production_mw,\
             unit_price_per_kwh,daily_revenue,monthly_revenue,reservoir_temp_c"
        );
    }

    #[test]
    fn row_count_matches_plant_count() {
        let mut buf = Vec::new();
        write_csv(&make_rows(), &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let lines: Vec<&str> = output.as_deref().unwrap_or("").lines().collect();
        // 1 header + 2 data rows
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn deterministic_output() {
        let rows = make_rows();
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_csv(&rows, &mut buf1).ok();
        write_csv(&rows, &mut buf2).ok();
        assert_eq!(buf1, buf2);
    }

    #[test]
    fn round_trip_parseable() {
        let mut buf = Vec::new();
        write_csv(&make_rows(), &mut buf).ok();

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let headers = rdr.headers().cloned().ok();
        assert_eq!(headers.as_ref().map(csv::StringRecord::len), Some(10));

        let mut row_count = 0;
        for record in rdr.records() {
            let rec = record.ok();
            assert!(rec.is_some(), "every row should parse");
            let rec = rec.as_ref();
            // Numeric estimate columns parse as f64
            for i in 3..9 {
                let val: Result<f64, _> = rec.unwrap()[i].parse();
                assert!(val.is_ok(), "column {i} should parse as f64");
            }
            row_count += 1;
        }
        assert_eq!(row_count, 2);
    }

    #[test]
    fn reservoir_column_empty_for_non_geothermal() {
        let mut buf = Vec::new();
        write_csv(&make_rows(), &mut buf).ok();
        let output = String::from_utf8(buf).unwrap_or_default();
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[1].ends_with(','), "solar row has empty reservoir cell");
        assert!(lines[2].ends_with("165.0"));
    }
}
