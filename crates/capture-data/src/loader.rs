//! CSV session loading
//!
//! Capture exports are CSV files with a `time` column (seconds) plus one
//! string-encoded column per signal: the raw keypoint list (four values per
//! landmark) and any number of 3-axis angle or scalar columns.

use crate::{parse_angle_triple, parse_keypoint_frame, CaptureError, CaptureSession, Column};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Name of the required sample-time column
pub const TIME_COLUMN: &str = "time";

/// Load a capture session from a CSV file.
///
/// `keypoint_column` names the raw keypoint-list column; it is expanded into
/// the `point_0..point_16` triple columns. Every other column is parsed as a
/// 3-axis triple, then as a scalar; columns that parse as neither are skipped
/// with a warning.
pub fn load_csv<P: AsRef<Path>>(
    path: P,
    keypoint_column: &str,
) -> Result<CaptureSession, CaptureError> {
    let reader = csv::Reader::from_path(path.as_ref())?;
    let session = load_session(reader, keypoint_column)?;
    info!(
        rows = session.len(),
        path = %path.as_ref().display(),
        "loaded capture session"
    );
    Ok(session)
}

/// Load a capture session from any CSV reader (used for in-memory data)
pub fn load_csv_reader<R: Read>(
    reader: R,
    keypoint_column: &str,
) -> Result<CaptureSession, CaptureError> {
    load_session(csv::Reader::from_reader(reader), keypoint_column)
}

fn load_session<R: Read>(
    mut reader: csv::Reader<R>,
    keypoint_column: &str,
) -> Result<CaptureSession, CaptureError> {
    let headers = reader.headers()?.clone();

    let time_idx = headers
        .iter()
        .position(|h| h == TIME_COLUMN)
        .ok_or_else(|| CaptureError::MissingColumn(TIME_COLUMN.to_string()))?;
    let keypoint_idx = headers
        .iter()
        .position(|h| h == keypoint_column)
        .ok_or_else(|| CaptureError::MissingColumn(keypoint_column.to_string()))?;

    let mut times = Vec::new();
    let mut frames = Vec::new();
    let mut raw_columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

    for record in reader.records() {
        let record = record?;
        let time_field = record.get(time_idx).unwrap_or("");
        times.push(
            time_field
                .trim()
                .parse::<f64>()
                .map_err(|_| CaptureError::InvalidFloat(time_field.to_string()))?,
        );
        frames.push(parse_keypoint_frame(record.get(keypoint_idx).unwrap_or(""))?);
        for (idx, field) in record.iter().enumerate() {
            raw_columns[idx].push(field.to_string());
        }
    }

    let mut session = CaptureSession::from_keypoint_frames(times, &frames)?;

    for (idx, header) in headers.iter().enumerate() {
        if idx == time_idx || idx == keypoint_idx {
            continue;
        }
        match parse_signal_column(&raw_columns[idx]) {
            Some(column) => session.insert_column(header.to_string(), column)?,
            None => warn!(column = header, "skipping unparseable CSV column"),
        }
    }

    Ok(session)
}

/// Parse a raw column as 3-axis triples, falling back to scalars
fn parse_signal_column(raw: &[String]) -> Option<Column> {
    let triples: Result<Vec<_>, _> = raw.iter().map(|s| parse_angle_triple(s)).collect();
    if let Ok(rows) = triples {
        return Some(Column::Triple(rows));
    }
    let scalars: Result<Vec<f64>, _> = raw.iter().map(|s| s.trim().parse::<f64>()).collect();
    scalars.ok().map(Column::Scalar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn keypoint_field() -> String {
        let values: Vec<String> = (0..17)
            .flat_map(|i| vec![format!("{i}.0"), "0.0".into(), "0.0".into(), "0.9".into()])
            .collect();
        format!("\"[{}]\"", values.join(", "))
    }

    fn sample_csv() -> String {
        let kp = keypoint_field();
        format!(
            "time,kp3ds,leftelbow_angles,score\n\
             0.0,{kp},\"[10.0, 0.0, 90.0]\",0.5\n\
             0.1,{kp},\"[12.0, 1.0, 92.0]\",0.6\n"
        )
    }

    #[test]
    fn test_load_session_from_csv() {
        let session = load_csv_reader(Cursor::new(sample_csv()), "kp3ds").unwrap();
        assert_eq!(session.len(), 2);
        assert_eq!(session.times(), &[0.0, 0.1]);

        // Keypoint column expanded into point_i triples
        let p3 = session.triple_column("point_3").unwrap();
        assert_eq!(p3[0].x, 3.0);

        // Angle triples and plain scalars both survive
        let angles = session.triple_column("leftelbow_angles").unwrap();
        assert_eq!(angles[1].z, 92.0);
        let score = session.scalar_column("score").unwrap();
        assert_eq!(score, &[0.5, 0.6]);
    }

    #[test]
    fn test_missing_time_column() {
        let csv = "stamp,kp3ds\n0.0,\"[1.0]\"\n";
        let err = load_csv_reader(Cursor::new(csv), "kp3ds").unwrap_err();
        assert!(matches!(err, CaptureError::MissingColumn(name) if name == "time"));
    }

    #[test]
    fn test_missing_keypoint_column() {
        let csv = "time,other\n0.0,1.0\n";
        let err = load_csv_reader(Cursor::new(csv), "kp3ds").unwrap_err();
        assert!(matches!(err, CaptureError::MissingColumn(name) if name == "kp3ds"));
    }

    #[test]
    fn test_unparseable_column_is_skipped() {
        let kp = keypoint_field();
        let csv = format!("time,kp3ds,notes\n0.0,{kp},warmup\n");
        let session = load_csv_reader(Cursor::new(csv), "kp3ds").unwrap();
        assert!(session.column("notes").is_err());
    }
}
