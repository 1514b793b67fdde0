use crate::analysis::{self, BaselineComparison, Correlation, EntityScope, Overview, Standing};
use crate::catalog::{Catalog, IndicatorDef};
use crate::table::IndicatorTable;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, path::Path};

/// Presentation-facing reference to a catalog indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRef {
    pub id: String,
    pub label: String,
    pub unit: String,
}

impl IndicatorRef {
    fn new(def: &IndicatorDef) -> Self {
        Self {
            id: def.id.clone(),
            label: def.label.clone(),
            unit: def.unit().to_string(),
        }
    }
}

/// One entity of the cross-sectional view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalEntry {
    pub entity: String,
    pub region: String,
    pub mean: f64,
    pub baseline: BaselineComparison,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalReport {
    pub indicator: IndicatorRef,
    /// Year of the cross-section; `None` when the indicator has no data.
    pub year: Option<i32>,
    pub entries: Vec<RegionalEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationReport {
    pub first: IndicatorRef,
    pub second: IndicatorRef,
    /// Restricting year of the cross-sectional view; `None` spans all years.
    pub year: Option<i32>,
    pub correlation: Correlation,
}

/// Holds the loaded catalog and table and answers one query per subcommand.
pub struct Manager {
    catalog: Catalog,
    table: IndicatorTable,
}

impl Manager {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref();

        let catalog = Catalog::from_file(data_dir.join("catalog.toml"))
            .context("failed to construct catalog")?;
        log::info!("loaded catalog with {} indicators", catalog.indicators.len());

        let table = IndicatorTable::from_csv_file(data_dir.join("indicators.csv"), &catalog)
            .context("failed to construct table")?;
        log::info!("loaded table with {} observations", table.len());
        if table.is_empty() {
            log::warn!("table contains no observations");
        }

        Ok(Self { catalog, table })
    }

    pub fn overview(
        &self,
        indicator: &str,
        entity: Option<String>,
        regions: Option<&BTreeSet<String>>,
    ) -> Result<Overview> {
        let scope = match entity {
            Some(name) => {
                if !self.table.entities_in_regions(regions).contains(name.as_str()) {
                    bail!("unknown entity {name:?} for the selected regions");
                }
                EntityScope::Entity(name)
            }
            None => EntityScope::National,
        };

        analysis::overview(&self.table, &self.catalog, indicator, &scope, regions)
            .context("failed to compute overview")
    }

    /// Cross-sectional view for one year, defaulting to the latest year with
    /// data, with each entity compared against the scope's mean.
    pub fn regional(
        &self,
        indicator: &str,
        year: Option<i32>,
        regions: Option<&BTreeSet<String>>,
    ) -> Result<RegionalReport> {
        let def = self.catalog.get(indicator)?;
        let year = year.or_else(|| self.table.latest_year_of(indicator));

        let mut entries = Vec::new();
        if let Some(year) = year {
            let means =
                analysis::regional_means(&self.table, &self.catalog, indicator, year, regions)
                    .context("failed to compute regional means")?;

            let national = analysis::year_series(
                &self.table,
                &self.catalog,
                indicator,
                &EntityScope::National,
                regions,
            )
            .context("failed to compute national series")?
            .into_iter()
            .find(|&(series_year, _)| series_year == year)
            .map(|(_, mean)| mean);

            for entry in means {
                let baseline = match national {
                    Some(mean) => analysis::compare_to_baseline(entry.mean, mean, def.polarity),
                    None => BaselineComparison {
                        percent_difference: None,
                        standing: Standing::Neutral,
                    },
                };
                entries.push(RegionalEntry {
                    entity: entry.entity,
                    region: entry.region,
                    mean: entry.mean,
                    baseline,
                });
            }
        }

        Ok(RegionalReport {
            indicator: IndicatorRef::new(def),
            year,
            entries,
        })
    }

    pub fn correlate(
        &self,
        first: &str,
        second: &str,
        year: Option<i32>,
        regions: Option<&BTreeSet<String>>,
    ) -> Result<CorrelationReport> {
        let correlation = analysis::compute_correlation(
            &self.table,
            &self.catalog,
            first,
            second,
            regions,
            year,
        )
        .context("failed to compute correlation")?;
        log::info!("paired {} samples", correlation.samples.len());

        Ok(CorrelationReport {
            first: IndicatorRef::new(self.catalog.get(first)?),
            second: IndicatorRef::new(self.catalog.get(second)?),
            year,
            correlation,
        })
    }
}
