use crate::catalog::Catalog;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeSet, HashSet},
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// One observation of the long-format dataset.
///
/// Missing cells are absent rows: every loaded observation carries a finite
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Sub-national unit the value was measured for.
    pub entity: String,

    /// Macro-region grouping the entity.
    pub region: String,

    /// Stable indicator identifier from the catalog.
    pub indicator: String,

    /// Observation year.
    pub year: i32,

    /// Measured value, unit implied by the indicator's label.
    pub value: f64,
}

impl Observation {
    /// Whether the observation's region passes a region filter.
    ///
    /// `None` means no filtering (all regions).
    pub fn in_regions(&self, regions: Option<&BTreeSet<String>>) -> bool {
        regions.is_none_or(|set| set.contains(&self.region))
    }
}

/// Immutable long-format indicator dataset.
///
/// Constructed once at startup, validated against the catalog, and passed by
/// shared reference into every computation. Derived results are pure
/// functions of the table plus a parameter set.
pub struct IndicatorTable {
    rows: Vec<Observation>,
}

impl IndicatorTable {
    /// Build a validated table from in-memory observations.
    ///
    /// # Errors
    /// Returns an error on empty entity names, indicators outside the
    /// catalog, years outside the configured bounds, non-finite values, or
    /// duplicate `(entity, indicator, year)` observations.
    pub fn new(rows: Vec<Observation>, catalog: &Catalog) -> Result<Self> {
        let table = Self { rows };
        table.validate(catalog).context("failed to validate table")?;
        Ok(table)
    }

    /// Load a table from a semicolon-delimited CSV file.
    ///
    /// The expected header is `entity;region;indicator;year;value`. Records
    /// with an empty value field encode missing cells and are skipped.
    pub fn from_csv_file<P: AsRef<Path>>(file: P, catalog: &Catalog) -> Result<Self> {
        let file = file.as_ref();
        let reader = File::open(file).with_context(|| format!("failed to open {file:?}"))?;
        Self::from_csv_reader(BufReader::new(reader), catalog)
    }

    fn from_csv_reader<R: Read>(reader: R, catalog: &Catalog) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().delimiter(b';').from_reader(reader);

        let mut rows = Vec::new();
        for (i_rec, record) in reader.deserialize().enumerate() {
            let record: CsvRecord =
                record.with_context(|| format!("failed to parse record {i_rec}"))?;

            let Some(value) = record.value else {
                log::debug!("skipped record {i_rec}: missing value");
                continue;
            };

            rows.push(Observation {
                entity: record.entity,
                region: record.region,
                indicator: record.indicator,
                year: record.year,
                value,
            });
        }

        Self::new(rows, catalog)
    }

    fn validate(&self, catalog: &Catalog) -> Result<()> {
        let year_range = catalog.year_range();
        let mut keys = HashSet::new();

        for obs in &self.rows {
            if obs.entity.is_empty() {
                bail!("entity name must not be empty");
            }
            if !catalog.contains(&obs.indicator) {
                bail!("unknown indicator {:?}", obs.indicator);
            }
            if !year_range.contains(&obs.year) {
                bail!(
                    "year must be in the range {year_range:?}, but is {} (entity {:?}, indicator {:?})",
                    obs.year,
                    obs.entity,
                    obs.indicator
                );
            }
            if !obs.value.is_finite() {
                bail!(
                    "value must be finite (entity {:?}, indicator {:?}, year {})",
                    obs.entity,
                    obs.indicator,
                    obs.year
                );
            }
            if !keys.insert((obs.entity.as_str(), obs.indicator.as_str(), obs.year)) {
                bail!(
                    "duplicate observation (entity {:?}, indicator {:?}, year {})",
                    obs.entity,
                    obs.indicator,
                    obs.year
                );
            }
        }

        Ok(())
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Entities whose region passes the filter, in ascending name order.
    pub fn entities_in_regions(&self, regions: Option<&BTreeSet<String>>) -> BTreeSet<&str> {
        self.rows
            .iter()
            .filter(|obs| obs.in_regions(regions))
            .map(|obs| obs.entity.as_str())
            .collect()
    }

    /// Latest year with any observation of the indicator, if one exists.
    pub fn latest_year_of(&self, indicator: &str) -> Option<i32> {
        self.rows
            .iter()
            .filter(|obs| obs.indicator == indicator)
            .map(|obs| obs.year)
            .max()
    }
}

#[derive(Debug, Deserialize)]
struct CsvRecord {
    entity: String,
    region: String,
    indicator: String,
    year: i32,
    value: Option<f64>,
}
