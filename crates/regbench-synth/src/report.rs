use std::{
    fmt,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

use chrono::{Local, NaiveDateTime, SubsecRound};

use crate::{error::SynthError, transform::RigidTransform2D};

/// File name of the report inside the output directory.
pub const REPORT_FILE_NAME: &str = "deformation_report.log";

/// ISO 8601 local time with microseconds and no offset.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One line of the deformation report, describing one generated dataset pair.
///
/// The textual form is
///
/// ```text
/// [2026-10-19T09:41:07.123456] IM1.png: tx=-3.17, ty=8.02, angle=1.94 deg, written=256
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DeformationLogRecord {
    /// Local time at which the record was created.
    pub timestamp: NaiveDateTime,
    /// The source image, as given to the generator.
    pub source_image: String,
    /// Translation along x, in pixels.
    pub tx: f64,
    /// Translation along y, in pixels.
    pub ty: f64,
    /// Rotation angle, in degrees.
    pub angle_deg: f64,
    /// Number of images written to each set.
    pub count: usize,
}

impl DeformationLogRecord {
    /// Create a record stamped with the current local time.
    pub fn new(
        source_image: impl Into<String>,
        transform: &RigidTransform2D,
        count: usize,
    ) -> Self {
        Self {
            timestamp: Local::now().naive_local().trunc_subsecs(6),
            source_image: source_image.into(),
            tx: transform.tx,
            ty: transform.ty,
            angle_deg: transform.angle_deg,
            count,
        }
    }

    /// The recorded transform.
    ///
    /// A record parsed from text carries the parameters rounded to two decimals.
    pub fn transform(&self) -> RigidTransform2D {
        RigidTransform2D::new(self.tx, self.ty, self.angle_deg)
    }
}

impl fmt::Display for DeformationLogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: tx={:.2}, ty={:.2}, angle={:.2} deg, written={}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.source_image,
            self.tx,
            self.ty,
            self.angle_deg,
            self.count
        )
    }
}

impl FromStr for DeformationLogRecord {
    type Err = SynthError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let malformed = || SynthError::MalformedReport(line.to_string());

        let (timestamp, rest) = line
            .strip_prefix('[')
            .and_then(|s| s.split_once("] "))
            .ok_or_else(malformed)?;
        // the source path may itself contain ": ", split on the last field name
        let (source_image, params) = rest.rsplit_once(": tx=").ok_or_else(malformed)?;
        let (tx, params) = params.split_once(", ty=").ok_or_else(malformed)?;
        let (ty, params) = params.split_once(", angle=").ok_or_else(malformed)?;
        let (angle_deg, count) = params
            .split_once(" deg, written=")
            .ok_or_else(malformed)?;

        Ok(Self {
            timestamp: NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
                .map_err(|_| malformed())?,
            source_image: source_image.to_string(),
            tx: tx.parse().map_err(|_| malformed())?,
            ty: ty.parse().map_err(|_| malformed())?,
            angle_deg: angle_deg.parse().map_err(|_| malformed())?,
            count: count.trim_end().parse().map_err(|_| malformed())?,
        })
    }
}

/// Appends `record` as one line to the report at `path`, creating the file if needed.
pub fn append_record(
    path: impl AsRef<Path>,
    record: &DeformationLogRecord,
) -> Result<(), SynthError> {
    let path = path.as_ref();
    let report_err = |source| SynthError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(report_err)?;

    // one write call per line keeps the append a single operation
    file.write_all(format!("{record}\n").as_bytes())
        .map_err(report_err)?;

    Ok(())
}

/// Parses every non-empty line of the report at `path`, oldest first.
pub fn read_report(path: impl AsRef<Path>) -> Result<Vec<DeformationLogRecord>, SynthError> {
    let path: PathBuf = path.as_ref().to_path_buf();
    let contents = std::fs::read_to_string(&path)
        .map_err(|source| SynthError::ReportRead { path, source })?;

    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::parse)
        .collect()
}
