// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of the hours report.

use florian_domain::HoursReport;
use thiserror::Error;

/// Errors raised while serializing the report to CSV.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer rejected a record.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
    /// The finished buffer could not be recovered from the writer.
    #[error("CSV buffer error: {0}")]
    Buffer(String),
}

const CSV_HEADER: [&str; 7] = [
    "Kamerad",
    "Dienstgrad",
    "Dienste",
    "Dienststunden",
    "Einsätze",
    "Einsatzstunden",
    "Gesamtstunden",
];

/// Renders the hours report as CSV.
///
/// One row per member in report order, preceded by a header row and
/// followed by a totals row. Hours carry one decimal place.
///
/// # Errors
///
/// Returns an error if a record cannot be written or the output buffer
/// cannot be finalized.
pub fn hours_report_csv(report: &HoursReport) -> Result<String, ExportError> {
    let mut writer: csv::Writer<Vec<u8>> = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for row in &report.rows {
        writer.write_record([
            row.member_name.clone(),
            row.rank.clone(),
            row.service_count.to_string(),
            format!("{:.1}", row.service_hours),
            row.operation_count.to_string(),
            format!("{:.1}", row.operation_hours),
            format!("{:.1}", row.total_hours),
        ])?;
    }

    writer.write_record([
        format!("Gesamt ({} Kameraden)", report.rows.len()),
        String::new(),
        report.totals.service_count.to_string(),
        format!("{:.1}", report.totals.service_hours),
        report.totals.operation_count.to_string(),
        format!("{:.1}", report.totals.operation_hours),
        format!("{:.1}", report.totals.total_hours),
    ])?;

    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|err| ExportError::Buffer(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| ExportError::Buffer(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use florian_domain::{HoursTotals, MemberHoursRow};

    fn make_row(name: &str, rank: &str, service: f64, operation: f64) -> MemberHoursRow {
        MemberHoursRow {
            member_id: "m1".to_string(),
            member_name: name.to_string(),
            rank: rank.to_string(),
            service_hours: service,
            operation_hours: operation,
            total_hours: service + operation,
            service_count: 3,
            operation_count: 2,
        }
    }

    #[test]
    fn test_csv_layout() {
        let report: HoursReport = HoursReport {
            rows: vec![
                make_row("Anna Berger", "Oberfeuerwehrfrau", 12.5, 4.0),
                make_row("Max Huber", "Feuerwehrmann", 8.0, 1.5),
            ],
            totals: HoursTotals {
                service_count: 9,
                service_hours: 20.5,
                operation_count: 4,
                operation_hours: 5.5,
                total_hours: 26.0,
            },
            skipped: Vec::new(),
        };

        let csv: String = hours_report_csv(&report).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Kamerad,Dienstgrad,Dienste,Dienststunden,Einsätze,Einsatzstunden,Gesamtstunden"
        );
        assert_eq!(
            lines[1],
            "Anna Berger,Oberfeuerwehrfrau,3,12.5,2,4.0,16.5"
        );
        assert_eq!(lines[2], "Max Huber,Feuerwehrmann,3,8.0,2,1.5,9.5");
        assert_eq!(lines[3], "Gesamt (2 Kameraden),,9,20.5,4,5.5,26.0");
    }

    #[test]
    fn test_empty_report_still_has_header_and_totals() {
        let report: HoursReport = HoursReport {
            rows: Vec::new(),
            totals: HoursTotals::default(),
            skipped: Vec::new(),
        };

        let csv: String = hours_report_csv(&report).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Gesamt (0 Kameraden),,0,0.0,0,0.0,0.0");
    }
}
