use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{PipelineError, Result};
use crate::models::StationRecord;
use crate::utils::constants::REQUIRED_COLUMNS;

pub struct StationReader;

impl StationReader {
    pub fn new() -> Self {
        Self
    }

    /// Read every daily record from a GHCN-Daily CSV export.
    ///
    /// The header must carry all of the required columns; extra columns are
    /// ignored. Empty measurement cells become `None`. Any I/O failure,
    /// missing column, or malformed row fails the whole load with the path
    /// attached.
    pub fn read_records(&self, path: &Path) -> Result<Vec<StationRecord>> {
        let file = File::open(path).map_err(|source| PipelineError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = csv::Reader::from_reader(BufReader::new(file));
        self.check_required_columns(path, &mut reader)?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: StationRecord = row.map_err(|source| PipelineError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            records.push(record);
        }

        info!(records = records.len(), path = %path.display(), "loaded station export");
        Ok(records)
    }

    fn check_required_columns(
        &self,
        path: &Path,
        reader: &mut csv::Reader<BufReader<File>>,
    ) -> Result<()> {
        let headers = reader.headers().map_err(|source| PipelineError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(PipelineError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                });
            }
        }

        debug!(columns = headers.len(), "header validated");
        Ok(())
    }
}

impl Default for StationReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "STATION,DATE,TMAX,TMIN,PRCP,SNOW,DAPR,MDPR";

    fn write_csv(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    #[test]
    fn test_read_records() {
        let file = write_csv(&[
            "USC00489025,2023-01-10,40,10,0.1,2,,",
            "USC00489025,2023-01-20,50,20,0.0,0,,",
        ]);

        let records = StationReader::new().read_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].station, "USC00489025");
        assert_eq!(records[0].tmax, Some(40.0));
        assert_eq!(records[1].date, "2023-01-20");
    }

    #[test]
    fn test_empty_cells_are_missing_not_zero() {
        let file = write_csv(&["USC00489025,2023-07-05,90,60,,0,,"]);

        let records = StationReader::new().read_records(file.path()).unwrap();
        assert_eq!(records[0].prcp, None);
        assert_eq!(records[0].snow, Some(0.0));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER},NAME,TOBS").unwrap();
        writeln!(file, "USC00489025,2023-01-10,40,10,0.1,2,,,\"MAMMOTH WY US\",30").unwrap();

        let records = StationReader::new().read_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tmin, Some(10.0));
    }

    #[test]
    fn test_missing_column_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "STATION,DATE,TMAX,TMIN,PRCP,SNOW").unwrap();
        writeln!(file, "USC00489025,2023-01-10,40,10,0.1,2").unwrap();

        let err = StationReader::new().read_records(file.path()).unwrap_err();
        match err {
            PipelineError::MissingColumn { column, .. } => assert_eq!(column, "DAPR"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = StationReader::new()
            .read_records(Path::new("/no/such/export.csv"))
            .unwrap_err();
        match err {
            PipelineError::Load { path, .. } => {
                assert_eq!(path, Path::new("/no/such/export.csv"))
            }
            other => panic!("expected Load, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_row_rejected() {
        let file = write_csv(&["USC00489025,2023-01-10,not-a-number,10,0.1,2,,"]);

        let err = StationReader::new().read_records(file.path()).unwrap_err();
        assert!(matches!(err, PipelineError::Csv { .. }));
    }
}
