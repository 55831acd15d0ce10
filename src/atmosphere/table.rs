use super::atmosphere_errors::AtmosphereError;
use crate::constants::{SEA_LEVEL_TEMPERATURE, TEMPERATURE_LAPSE_RATE};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereSample {
    pub altitude: f64,    // m
    pub density: f64,     // kg/m³
    pub pressure: f64,    // Pa
    pub temperature: f64, // K
}

impl AtmosphereSample {
    pub fn new(altitude: f64, density: f64, pressure: f64, temperature: f64) -> Self {
        Self {
            altitude,
            density,
            pressure,
            temperature,
        }
    }

    /// Builds a sample whose temperature follows the linear lapse-rate approximation.
    pub fn with_standard_temperature(altitude: f64, density: f64, pressure: f64) -> Self {
        Self::new(altitude, density, pressure, standard_temperature(altitude))
    }
}

/// Placeholder temperature used when a table row omits it.
pub fn standard_temperature(altitude: f64) -> f64 {
    SEA_LEVEL_TEMPERATURE - TEMPERATURE_LAPSE_RATE * altitude
}

#[derive(Debug, Clone, Copy)]
enum Column {
    Density,
    Pressure,
    Temperature,
}

impl Column {
    fn of(self, sample: &AtmosphereSample) -> f64 {
        match self {
            Column::Density => sample.density,
            Column::Pressure => sample.pressure,
            Column::Temperature => sample.temperature,
        }
    }
}

/// Altitude-indexed atmosphere table with piecewise-linear interpolation.
///
/// The table starts out unloaded; queries fail with [`AtmosphereError::NotLoaded`]
/// until a bulk load succeeds. Once loaded, samples are sorted ascending by altitude
/// with no two samples sharing an altitude.
#[derive(Debug, Clone, Default)]
pub struct AtmosphereTable {
    samples: Vec<AtmosphereSample>,
}

impl AtmosphereTable {
    /// Creates an empty, unloaded table.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AtmosphereError> {
        let mut table = Self::new();
        table.load_from_path(path)?;
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AtmosphereError> {
        let mut table = Self::new();
        table.load_from_reader(reader)?;
        Ok(table)
    }

    /// Builds a table from already parsed samples, applying the same ordering and
    /// deduplication rules as the file loaders.
    pub fn from_samples(samples: Vec<AtmosphereSample>) -> Result<Self, AtmosphereError> {
        let samples: Vec<_> = samples
            .into_iter()
            .filter(is_finite_sample)
            .collect();
        let samples = normalize(samples);
        if samples.is_empty() {
            return Err(AtmosphereError::NoValidRows);
        }
        Ok(Self { samples })
    }

    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), AtmosphereError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        self.load_from_reader(file)?;
        info!(
            "Atmosphere table loaded: {} samples from {}",
            self.samples.len(),
            path.display()
        );
        Ok(())
    }

    /// Parses `altitude,density,pressure[,temperature]` rows.
    ///
    /// Rows that are too short or carry non-numeric fields are skipped with a warning.
    /// On failure the table is left unloaded.
    pub fn load_from_reader<R: Read>(&mut self, reader: R) -> Result<(), AtmosphereError> {
        self.samples.clear();

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut parsed = Vec::new();
        for result in rdr.byte_records() {
            let raw = result?;
            let line = raw.position().map_or(0, |p| p.line());
            // Fields that are not UTF-8 fail numeric parsing and skip the row
            let record = StringRecord::from_byte_record_lossy(raw);

            if line == 1 && record.iter().any(|field| field.contains("altitude")) {
                debug!("Skipping atmosphere header row");
                continue;
            }

            match parse_row(&record, line) {
                Ok(sample) => parsed.push(sample),
                Err(e) => warn!("{}, row skipped", e),
            }
        }

        let samples = normalize(parsed);
        if samples.is_empty() {
            return Err(AtmosphereError::NoValidRows);
        }

        self.samples = samples;
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        !self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[AtmosphereSample] {
        &self.samples
    }

    /// Lowest and highest tabulated altitude.
    pub fn altitude_range(&self) -> Result<(f64, f64), AtmosphereError> {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => Ok((first.altitude, last.altitude)),
            _ => Err(AtmosphereError::NotLoaded),
        }
    }

    pub fn density_at(&self, altitude: f64) -> Result<f64, AtmosphereError> {
        self.interpolate(altitude, Column::Density)
    }

    pub fn pressure_at(&self, altitude: f64) -> Result<f64, AtmosphereError> {
        self.interpolate(altitude, Column::Pressure)
    }

    pub fn temperature_at(&self, altitude: f64) -> Result<f64, AtmosphereError> {
        self.interpolate(altitude, Column::Temperature)
    }

    pub fn sample_at(&self, altitude: f64) -> Result<AtmosphereSample, AtmosphereError> {
        Ok(AtmosphereSample {
            altitude,
            density: self.density_at(altitude)?,
            pressure: self.pressure_at(altitude)?,
            temperature: self.temperature_at(altitude)?,
        })
    }

    fn interpolate(&self, altitude: f64, column: Column) -> Result<f64, AtmosphereError> {
        let (first, last) = match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(AtmosphereError::NotLoaded),
        };

        if altitude.is_nan() {
            return Ok(f64::NAN);
        }

        // Clamp outside the tabulated range
        if altitude <= first.altitude {
            return Ok(column.of(first));
        }
        if altitude >= last.altitude {
            return Ok(column.of(last));
        }

        // first.altitude < altitude < last.altitude, so 1 <= upper <= len - 1
        let upper = self.samples.partition_point(|s| s.altitude <= altitude);
        let lo = &self.samples[upper - 1];
        let hi = &self.samples[upper];

        let (v1, v2) = (column.of(lo), column.of(hi));
        Ok(v1 + (v2 - v1) * (altitude - lo.altitude) / (hi.altitude - lo.altitude))
    }
}

fn parse_row(record: &StringRecord, line: u64) -> Result<AtmosphereSample, AtmosphereError> {
    let malformed = |reason: String| AtmosphereError::MalformedRow { line, reason };

    if record.len() < 3 {
        return Err(malformed(format!(
            "expected at least 3 fields, found {}",
            record.len()
        )));
    }

    let field = |idx: usize, name: &str| -> Result<f64, AtmosphereError> {
        let raw = &record[idx];
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(malformed(format!("invalid {} value '{}'", name, raw))),
        }
    };

    let altitude = field(0, "altitude")?;
    let density = field(1, "density")?;
    let pressure = field(2, "pressure")?;
    let temperature = match record.get(3) {
        Some(raw) if !raw.is_empty() => field(3, "temperature")?,
        _ => standard_temperature(altitude),
    };

    Ok(AtmosphereSample::new(altitude, density, pressure, temperature))
}

fn is_finite_sample(s: &AtmosphereSample) -> bool {
    s.altitude.is_finite()
        && s.density.is_finite()
        && s.pressure.is_finite()
        && s.temperature.is_finite()
}

// Stable sort keeps the first-read sample of each altitude in front for dedup.
fn normalize(mut samples: Vec<AtmosphereSample>) -> Vec<AtmosphereSample> {
    samples.sort_by(|a, b| a.altitude.total_cmp(&b.altitude));
    let before = samples.len();
    samples.dedup_by(|later, kept| later.altitude == kept.altitude);
    if samples.len() < before {
        warn!(
            "Dropped {} atmosphere samples with duplicate altitudes",
            before - samples.len()
        );
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    const REFERENCE_TABLE: &str = "altitude,density,pressure
0,1.225,101325
500,1.167,95461
1000,1.112,89880
1500,1.058,84556
2000,1.007,79500
";

    fn two_point_table() -> AtmosphereTable {
        AtmosphereTable::from_samples(vec![
            AtmosphereSample::with_standard_temperature(0.0, 1.225, 101325.0),
            AtmosphereSample::with_standard_temperature(1000.0, 1.112, 89880.0),
        ])
        .unwrap()
    }

    #[test]
    fn midpoint_density_is_mean_of_neighbours() {
        let table = two_point_table();
        assert_abs_diff_eq!(table.density_at(500.0).unwrap(), 1.1685, epsilon = 1e-12);
        assert_abs_diff_eq!(
            table.pressure_at(500.0).unwrap(),
            (101325.0 + 89880.0) / 2.0,
            epsilon = 1e-9
        );
    }

    #[test_case(-1e-9; "just below range")]
    #[test_case(-250.0; "far below range")]
    #[test_case(f64::NEG_INFINITY; "negative infinity")]
    fn clamps_below_range(altitude: f64) {
        let table = two_point_table();
        assert_eq!(table.density_at(altitude).unwrap(), 1.225);
        assert_eq!(table.pressure_at(altitude).unwrap(), 101325.0);
    }

    #[test_case(1000.0 + 1e-9; "just above range")]
    #[test_case(25_000.0; "far above range")]
    fn clamps_above_range(altitude: f64) {
        let table = two_point_table();
        assert_eq!(table.density_at(altitude).unwrap(), 1.112);
        assert_eq!(table.pressure_at(altitude).unwrap(), 89880.0);
    }

    #[test]
    fn knot_queries_return_stored_values_exactly() {
        let table = AtmosphereTable::from_reader(REFERENCE_TABLE.as_bytes()).unwrap();
        for s in table.samples() {
            assert_eq!(table.density_at(s.altitude).unwrap(), s.density);
            assert_eq!(table.pressure_at(s.altitude).unwrap(), s.pressure);
            assert_eq!(table.temperature_at(s.altitude).unwrap(), s.temperature);
        }
    }

    #[test]
    fn interpolated_density_stays_between_brackets() {
        let table = AtmosphereTable::from_reader(REFERENCE_TABLE.as_bytes()).unwrap();
        let samples = table.samples();
        for pair in samples.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            for k in 1..10 {
                let h = lo.altitude + (hi.altitude - lo.altitude) * k as f64 / 10.0;
                let rho = table.density_at(h).unwrap();
                assert!(rho <= lo.density.max(hi.density));
                assert!(rho >= lo.density.min(hi.density));
            }
        }
    }

    #[test]
    fn missing_temperature_uses_lapse_rate() {
        let table = AtmosphereTable::from_reader(REFERENCE_TABLE.as_bytes()).unwrap();
        assert_abs_diff_eq!(table.temperature_at(0.0).unwrap(), 288.15, epsilon = 1e-12);
        assert_abs_diff_eq!(table.temperature_at(2000.0).unwrap(), 275.15, epsilon = 1e-9);
    }

    #[test]
    fn explicit_temperature_column_is_kept() {
        let data = "0,1.225,101325,290.0\n1000,1.112,89880,280.0\n";
        let table = AtmosphereTable::from_reader(data.as_bytes()).unwrap();
        assert_abs_diff_eq!(table.temperature_at(500.0).unwrap(), 285.0, epsilon = 1e-12);
    }

    #[test]
    fn rows_are_sorted_after_load() {
        let data = "2000,1.007,79500\n0,1.225,101325\n1000,1.112,89880\n";
        let table = AtmosphereTable::from_reader(data.as_bytes()).unwrap();
        let altitudes: Vec<f64> = table.samples().iter().map(|s| s.altitude).collect();
        assert_eq!(altitudes, vec![0.0, 1000.0, 2000.0]);
    }

    #[test]
    fn short_and_non_numeric_rows_are_skipped() {
        let data = "altitude,density,pressure\n0,1.225,101325\n500,1.167\n\nabc,1.0,1.0\n1000,1.112,89880\n";
        let table = AtmosphereTable::from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.altitude_range().unwrap(), (0.0, 1000.0));
    }

    #[test]
    fn non_utf8_row_is_skipped() {
        let data: &[u8] =
            b"altitude,density,pressure\n0,1.225,101325\n# \xcf\xe0\xf0\xe0\xec\n\xff\xfe,1.0,1.0\n1000,1.112,89880\n";
        let table = AtmosphereTable::from_reader(data).unwrap();
        assert_eq!(table.len(), 2);
        assert_abs_diff_eq!(table.density_at(500.0).unwrap(), 1.1685, epsilon = 1e-12);
    }

    #[test]
    fn non_finite_samples_are_dropped() {
        let table = AtmosphereTable::from_samples(vec![
            AtmosphereSample::with_standard_temperature(0.0, 1.225, 101325.0),
            AtmosphereSample::with_standard_temperature(f64::NAN, 1.0, 1.0),
            AtmosphereSample::with_standard_temperature(500.0, f64::INFINITY, 1.0),
            AtmosphereSample::new(700.0, 1.1, 93000.0, f64::NEG_INFINITY),
            AtmosphereSample::with_standard_temperature(1000.0, 1.112, 89880.0),
        ])
        .unwrap();
        let altitudes: Vec<f64> = table.samples().iter().map(|s| s.altitude).collect();
        assert_eq!(altitudes, vec![0.0, 1000.0]);
    }

    #[test]
    fn all_non_finite_samples_are_rejected() {
        let result = AtmosphereTable::from_samples(vec![
            AtmosphereSample::with_standard_temperature(f64::NAN, 1.0, 1.0),
            AtmosphereSample::new(100.0, 1.0, f64::INFINITY, 280.0),
        ]);
        assert!(matches!(result, Err(AtmosphereError::NoValidRows)));
    }

    #[test]
    fn duplicate_altitudes_keep_first_row() {
        let data = "0,1.225,101325\n1000,1.112,89880\n1000,9.999,1\n";
        let table = AtmosphereTable::from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.density_at(1000.0).unwrap(), 1.112);
        assert!(table.density_at(999.0).unwrap().is_finite());
    }

    #[test]
    fn header_only_source_is_rejected() {
        let result = AtmosphereTable::from_reader("altitude,density,pressure\n".as_bytes());
        assert!(matches!(result, Err(AtmosphereError::NoValidRows)));
    }

    #[test]
    fn unloaded_table_refuses_queries() {
        let table = AtmosphereTable::new();
        assert!(!table.is_loaded());
        assert!(matches!(table.density_at(0.0), Err(AtmosphereError::NotLoaded)));
        assert!(matches!(table.pressure_at(0.0), Err(AtmosphereError::NotLoaded)));
        assert!(matches!(table.temperature_at(0.0), Err(AtmosphereError::NotLoaded)));
    }

    #[test]
    fn failed_reload_leaves_table_unloaded() {
        let mut table = two_point_table();
        assert!(table.load_from_reader("1,2\n".as_bytes()).is_err());
        assert!(!table.is_loaded());
    }

    #[test]
    fn single_sample_table_is_constant() {
        let table = AtmosphereTable::from_reader("100,1.2,100000\n".as_bytes()).unwrap();
        assert_eq!(table.density_at(-5.0).unwrap(), 1.2);
        assert_eq!(table.density_at(100.0).unwrap(), 1.2);
        assert_eq!(table.density_at(5000.0).unwrap(), 1.2);
    }

    #[test]
    fn missing_file_is_a_source_error() {
        let result = AtmosphereTable::from_path("/nonexistent/atmosphere.csv");
        assert!(matches!(result, Err(AtmosphereError::SourceOpen(_))));
    }
}
