use std::io::Write;

use serde::Serialize;

use super::domain::AuditDecision;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write audit csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush audit csv: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct AuditCsvRow<'a> {
    case_id: &'a str,
    priority_review: bool,
    reasons: String,
    sample_value: Option<f64>,
}

/// Write one row per evaluated case for QM audit files.
pub fn write_audit_csv<'a, W, I>(writer: W, rows: I) -> Result<usize, ExportError>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a AuditDecision)>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut written = 0;

    for (case_id, decision) in rows {
        csv_writer.serialize(AuditCsvRow {
            case_id,
            priority_review: decision.is_priority_review,
            reasons: decision.reason_codes().join("|"),
            sample_value: decision.sample_value,
        })?;
        written += 1;
    }

    csv_writer.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::audit::AuditReason;

    #[test]
    fn writes_header_and_rows() {
        let flagged = AuditDecision {
            is_priority_review: true,
            reasons: vec![AuditReason::HighOrCriticalFlag, AuditReason::OverdueWork],
            sample_value: None,
        };
        let clean = AuditDecision {
            is_priority_review: false,
            reasons: Vec::new(),
            sample_value: Some(0.52),
        };

        let mut buffer = Vec::new();
        let written = write_audit_csv(&mut buffer, [("case-1", &flagged), ("case-2", &clean)])
            .expect("csv written");

        assert_eq!(written, 2);
        let output = String::from_utf8(buffer).expect("utf8 output");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "case_id,priority_review,reasons,sample_value");
        assert_eq!(lines[1], "case-1,true,high_or_critical_flag|overdue_work,");
        assert_eq!(lines[2], "case-2,false,,0.52");
    }
}
