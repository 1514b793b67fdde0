use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fmt::Debug,
    fs,
    ops::{RangeBounds, RangeInclusive},
    path::Path,
};

/// Whether increasing values of an indicator represent deterioration or improvement.
///
/// `Unspecified` indicators still aggregate and correlate normally, but every
/// directional classification they produce is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Polarity {
    HigherIsWorse,
    HigherIsBetter,
    Unspecified,
}

/// Definition of one indicator in the catalog.
///
/// The `id` is the stable identifier used in datasets and queries; `label` is
/// presentation text and carries the unit as a parenthesized suffix.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct IndicatorDef {
    pub id: String,
    pub label: String,
    pub polarity: Polarity,
}

impl IndicatorDef {
    /// Unit implied by the label, extracted from its parenthesized suffix.
    ///
    /// `"Infant mortality (per 1000 live births)"` yields
    /// `"per 1000 live births"`; labels without a suffix fall back to a
    /// generic `"value"`.
    pub fn unit(&self) -> &str {
        match self.label.rsplit_once('(') {
            Some((_, suffix)) => suffix.trim_end().trim_end_matches(')').trim(),
            None => "value",
        }
    }
}

/// Catalog of known indicators and dataset bounds.
///
/// Loaded from a TOML file and validated before use.
/// See [`Catalog::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Earliest admissible observation year.
    pub min_year: i32,
    /// Latest admissible observation year.
    pub max_year: i32,

    /// Definitions of every indicator a dataset may reference.
    pub indicators: Vec<IndicatorDef>,
}

impl Catalog {
    /// Load a [`Catalog`] from a file.
    ///
    /// The file must be TOML-encoded and contain a serialized [`Catalog`].
    /// Performs validation on all entries before returning.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the catalog entries are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let catalog: Catalog = toml::from_str(&contents).context("failed to deserialize catalog")?;

        catalog.validate().context("failed to validate catalog")?;

        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        check_num(self.min_year, 1900..=2100).context("invalid minimum year")?;
        check_num(self.max_year, self.min_year..=2100).context("invalid maximum year")?;

        if self.indicators.is_empty() {
            bail!("catalog must define at least one indicator");
        }

        let mut ids = HashSet::new();
        for def in &self.indicators {
            if def.id.is_empty() {
                bail!("indicator id must not be empty");
            }
            if def.label.is_empty() {
                bail!("indicator {:?} must have a label", def.id);
            }
            if !ids.insert(def.id.as_str()) {
                bail!("duplicate indicator id {:?}", def.id);
            }
        }

        Ok(())
    }

    /// Look up an indicator definition by id.
    ///
    /// Unknown ids are an error, never a silent default: filtering and unit
    /// extraction must not proceed against an indicator outside the catalog.
    pub fn get(&self, id: &str) -> Result<&IndicatorDef> {
        self.indicators
            .iter()
            .find(|def| def.id == id)
            .with_context(|| format!("unknown indicator {id:?}"))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.indicators.iter().any(|def| def.id == id)
    }

    /// Admissible range of observation years.
    pub fn year_range(&self) -> RangeInclusive<i32> {
        self.min_year..=self.max_year
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}
