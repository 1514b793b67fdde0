use crate::catalog::{Catalog, Polarity};
use crate::stats::{self, Accumulator};
use crate::table::IndicatorTable;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Which entities a computation covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityScope {
    /// All entities passing the region filter, averaged together.
    National,
    /// A single named entity.
    Entity(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trend {
    Improving,
    Worsening,
    Neutral,
}

/// Quality of an entity's value relative to the national baseline.
///
/// `AboveBaseline` always means better than the national average, whatever
/// the indicator's polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Standing {
    AboveBaseline,
    BelowBaseline,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strength {
    StrongPositive,
    Positive,
    Weak,
    Negative,
    StrongNegative,
}

impl Strength {
    /// Qualitative label for a correlation coefficient.
    ///
    /// Boundary values resolve to the weaker label: exactly 0.7 is
    /// `Positive`, exactly 0.3 is `Weak`.
    pub fn from_coefficient(coeff: f64) -> Self {
        if coeff > 0.7 {
            Self::StrongPositive
        } else if coeff > 0.3 {
            Self::Positive
        } else if coeff >= -0.3 {
            Self::Weak
        } else if coeff >= -0.7 {
            Self::Negative
        } else {
            Self::StrongNegative
        }
    }
}

/// Percentage change across a time series and its directional reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub percent_change: Option<f64>,
    pub trend: Trend,
}

/// Deviation of one snapshot from the national mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineComparison {
    pub percent_difference: Option<f64>,
    pub standing: Standing,
}

/// One (entity, year) observation present in both correlated indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairedSample {
    pub entity: String,
    pub region: String,
    pub year: i32,
    pub first: f64,
    pub second: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    /// Pearson coefficient over the paired samples; `None` when undefined.
    pub coefficient: Option<f64>,
    pub strength: Option<Strength>,
    pub samples: Vec<PairedSample>,
}

/// Mean value of one entity in a cross-sectional view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMean {
    pub entity: String,
    pub region: String,
    pub mean: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearMean {
    pub year: i32,
    pub mean: f64,
}

/// Summary metrics for one indicator under a scope: endpoint means of the
/// aggregated series, total change, and (for a named entity) the comparison
/// against the national baseline of the latest year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub indicator: String,
    pub label: String,
    pub unit: String,
    pub earliest: Option<YearMean>,
    pub latest: Option<YearMean>,
    pub absolute_change: Option<f64>,
    pub variation: Variation,
    pub baseline: Option<BaselineComparison>,
}

/// Mean value of an indicator per year, in ascending year order.
///
/// Under the national scope every entity passing the region filter
/// contributes to each year's unweighted mean; under an entity scope only
/// that entity's observations do. An empty result means insufficient data,
/// never zero.
pub fn year_series(
    table: &IndicatorTable,
    catalog: &Catalog,
    indicator: &str,
    scope: &EntityScope,
    regions: Option<&BTreeSet<String>>,
) -> Result<Vec<(i32, f64)>> {
    catalog.get(indicator)?;

    let mut groups: BTreeMap<i32, Accumulator> = BTreeMap::new();
    for obs in table.rows() {
        if obs.indicator != indicator || !obs.in_regions(regions) {
            continue;
        }
        if let EntityScope::Entity(name) = scope
            && obs.entity != *name
        {
            continue;
        }
        groups.entry(obs.year).or_insert_with(Accumulator::new).add(obs.value);
    }

    Ok(groups.into_iter().map(|(year, acc)| (year, acc.mean())).collect())
}

/// Mean value of an indicator per entity for one year, in ascending entity
/// order.
pub fn regional_means(
    table: &IndicatorTable,
    catalog: &Catalog,
    indicator: &str,
    year: i32,
    regions: Option<&BTreeSet<String>>,
) -> Result<Vec<EntityMean>> {
    catalog.get(indicator)?;

    let mut groups: BTreeMap<(String, String), Accumulator> = BTreeMap::new();
    for obs in table.rows() {
        if obs.indicator != indicator || obs.year != year || !obs.in_regions(regions) {
            continue;
        }
        groups
            .entry((obs.entity.clone(), obs.region.clone()))
            .or_insert_with(Accumulator::new)
            .add(obs.value);
    }

    Ok(groups
        .into_iter()
        .map(|((entity, region), acc)| EntityMean {
            entity,
            region,
            mean: acc.mean(),
        })
        .collect())
}

/// Percentage change between the chronologically first and last points of a
/// series, classified by the indicator's polarity.
///
/// Series shorter than two points, and series starting at zero, are not
/// applicable: the result is `(None, Neutral)`, not an error. The
/// classification never alters the computed percentage.
pub fn compute_variation(series: &[(i32, f64)], polarity: Polarity) -> Variation {
    let mut series = series.to_vec();
    series.sort_by_key(|&(year, _)| year);

    let (Some(&(_, first)), Some(&(_, last))) = (series.first(), series.last()) else {
        return Variation {
            percent_change: None,
            trend: Trend::Neutral,
        };
    };
    if series.len() < 2 || first == 0.0 {
        return Variation {
            percent_change: None,
            trend: Trend::Neutral,
        };
    }

    let percent_change = (last - first) / first * 100.0;
    let trend = match polarity {
        Polarity::HigherIsWorse if percent_change > 0.0 => Trend::Worsening,
        Polarity::HigherIsWorse => Trend::Improving,
        Polarity::HigherIsBetter if percent_change > 0.0 => Trend::Improving,
        Polarity::HigherIsBetter => Trend::Worsening,
        Polarity::Unspecified => Trend::Neutral,
    };

    Variation {
        percent_change: Some(percent_change),
        trend,
    }
}

/// Deviation of an entity's value from the national mean, classified by the
/// indicator's polarity.
///
/// A zero or undefined baseline is not applicable: the result is
/// `(None, Neutral)`. At equality the standing is neutral, there is no
/// above or below.
pub fn compare_to_baseline(
    entity_value: f64,
    national_mean: f64,
    polarity: Polarity,
) -> BaselineComparison {
    if national_mean == 0.0 || !national_mean.is_finite() || !entity_value.is_finite() {
        return BaselineComparison {
            percent_difference: None,
            standing: Standing::Neutral,
        };
    }

    let percent_difference = (entity_value - national_mean) / national_mean * 100.0;
    let standing = match polarity {
        Polarity::Unspecified => Standing::Neutral,
        _ if entity_value == national_mean => Standing::Neutral,
        Polarity::HigherIsWorse if entity_value < national_mean => Standing::AboveBaseline,
        Polarity::HigherIsWorse => Standing::BelowBaseline,
        Polarity::HigherIsBetter if entity_value > national_mean => Standing::AboveBaseline,
        Polarity::HigherIsBetter => Standing::BelowBaseline,
    };

    BaselineComparison {
        percent_difference: Some(percent_difference),
        standing,
    }
}

struct PairCell {
    region: String,
    first: Option<f64>,
    second: Option<f64>,
}

/// Pearson correlation between two indicators over paired samples.
///
/// Rows are restricted to the region filter and, when given, a single year;
/// the remaining observations pivot into one sample per `(entity, year)`
/// present in both indicators. Keys missing either indicator are dropped,
/// never imputed. The coefficient is `None` for fewer than two pairs or
/// zero variance in either operand.
pub fn compute_correlation(
    table: &IndicatorTable,
    catalog: &Catalog,
    first: &str,
    second: &str,
    regions: Option<&BTreeSet<String>>,
    year_filter: Option<i32>,
) -> Result<Correlation> {
    catalog.get(first)?;
    catalog.get(second)?;
    if first == second {
        bail!("correlation requires two distinct indicators, got {first:?} twice");
    }

    let mut cells: BTreeMap<(String, i32), PairCell> = BTreeMap::new();
    for obs in table.rows() {
        if !obs.in_regions(regions) || year_filter.is_some_and(|year| obs.year != year) {
            continue;
        }
        if obs.indicator != first && obs.indicator != second {
            continue;
        }
        let cell = cells
            .entry((obs.entity.clone(), obs.year))
            .or_insert_with(|| PairCell {
                region: obs.region.clone(),
                first: None,
                second: None,
            });
        if obs.indicator == first {
            cell.first = Some(obs.value);
        } else {
            cell.second = Some(obs.value);
        }
    }

    let samples: Vec<PairedSample> = cells
        .into_iter()
        .filter_map(|((entity, year), cell)| match (cell.first, cell.second) {
            (Some(first), Some(second)) => Some(PairedSample {
                entity,
                region: cell.region,
                year,
                first,
                second,
            }),
            _ => None,
        })
        .collect();

    let vals_first: Vec<f64> = samples.iter().map(|sample| sample.first).collect();
    let vals_second: Vec<f64> = samples.iter().map(|sample| sample.second).collect();

    let coefficient = stats::compute_pearson(&vals_first, &vals_second);
    let strength = coefficient.map(Strength::from_coefficient);

    Ok(Correlation {
        coefficient,
        strength,
        samples,
    })
}

/// Summary metrics for one indicator under a scope.
///
/// Degenerate series degrade field by field to `None`; only an unknown
/// indicator is an error.
pub fn overview(
    table: &IndicatorTable,
    catalog: &Catalog,
    indicator: &str,
    scope: &EntityScope,
    regions: Option<&BTreeSet<String>>,
) -> Result<Overview> {
    let def = catalog.get(indicator)?;
    let series = year_series(table, catalog, indicator, scope, regions)?;

    let earliest = series.first().map(|&(year, mean)| YearMean { year, mean });
    let latest = series.last().map(|&(year, mean)| YearMean { year, mean });
    let absolute_change = match (earliest, latest) {
        (Some(earliest), Some(latest)) if series.len() >= 2 => Some(latest.mean - earliest.mean),
        _ => None,
    };
    let variation = compute_variation(&series, def.polarity);

    let baseline = match (scope, latest) {
        (EntityScope::Entity(_), Some(latest)) => {
            let national =
                year_series(table, catalog, indicator, &EntityScope::National, regions)?;
            national
                .iter()
                .find(|&&(year, _)| year == latest.year)
                .map(|&(_, mean)| compare_to_baseline(latest.mean, mean, def.polarity))
        }
        _ => None,
    };

    Ok(Overview {
        indicator: def.id.clone(),
        label: def.label.clone(),
        unit: def.unit().to_string(),
        earliest,
        latest,
        absolute_change,
        variation,
        baseline,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IndicatorDef;
    use crate::table::Observation;

    fn sample_catalog() -> Catalog {
        Catalog {
            min_year: 2000,
            max_year: 2025,
            indicators: vec![
                IndicatorDef {
                    id: "infant-mortality".into(),
                    label: "Infant mortality (per 1000 live births)".into(),
                    polarity: Polarity::HigherIsWorse,
                },
                IndicatorDef {
                    id: "prenatal-coverage".into(),
                    label: "Prenatal care coverage (%)".into(),
                    polarity: Polarity::HigherIsBetter,
                },
                IndicatorDef {
                    id: "hospital-beds".into(),
                    label: "Hospital beds".into(),
                    polarity: Polarity::Unspecified,
                },
            ],
        }
    }

    fn obs(entity: &str, region: &str, indicator: &str, year: i32, value: f64) -> Observation {
        Observation {
            entity: entity.into(),
            region: region.into(),
            indicator: indicator.into(),
            year,
            value,
        }
    }

    fn sample_table(catalog: &Catalog) -> IndicatorTable {
        IndicatorTable::new(
            vec![
                obs("Alfa", "North", "infant-mortality", 2018, 10.0),
                obs("Alfa", "North", "infant-mortality", 2020, 8.0),
                obs("Beta", "North", "infant-mortality", 2018, 14.0),
                obs("Beta", "North", "infant-mortality", 2020, 12.0),
                obs("Gama", "South", "infant-mortality", 2018, 6.0),
                obs("Gama", "South", "infant-mortality", 2020, 4.0),
                obs("Alfa", "North", "prenatal-coverage", 2018, 70.0),
                obs("Alfa", "North", "prenatal-coverage", 2020, 80.0),
                obs("Beta", "North", "prenatal-coverage", 2020, 60.0),
            ],
            catalog,
        )
        .unwrap()
    }

    fn regions(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn national_series_averages_entities_per_year() {
        let catalog = sample_catalog();
        let table = sample_table(&catalog);

        let series = year_series(
            &table,
            &catalog,
            "infant-mortality",
            &EntityScope::National,
            None,
        )
        .unwrap();
        assert_eq!(series, vec![(2018, 10.0), (2020, 8.0)]);
    }

    #[test]
    fn entity_series_keeps_only_that_entity() {
        let catalog = sample_catalog();
        let table = sample_table(&catalog);

        let series = year_series(
            &table,
            &catalog,
            "infant-mortality",
            &EntityScope::Entity("Gama".into()),
            None,
        )
        .unwrap();
        assert_eq!(series, vec![(2018, 6.0), (2020, 4.0)]);
    }

    #[test]
    fn region_filter_restricts_the_mean() {
        let catalog = sample_catalog();
        let table = sample_table(&catalog);

        let south = regions(&["South"]);
        let series = year_series(
            &table,
            &catalog,
            "infant-mortality",
            &EntityScope::National,
            Some(&south),
        )
        .unwrap();
        assert_eq!(series, vec![(2018, 6.0), (2020, 4.0)]);
    }

    #[test]
    fn series_without_matches_is_empty() {
        let catalog = sample_catalog();
        let table = sample_table(&catalog);

        let west = regions(&["West"]);
        let series = year_series(
            &table,
            &catalog,
            "infant-mortality",
            &EntityScope::National,
            Some(&west),
        )
        .unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn series_rejects_unknown_indicator() {
        let catalog = sample_catalog();
        let table = sample_table(&catalog);

        let result = year_series(
            &table,
            &catalog,
            "life-expectancy",
            &EntityScope::National,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn regional_means_order_by_entity() {
        let catalog = sample_catalog();
        let table = sample_table(&catalog);

        let means = regional_means(&table, &catalog, "infant-mortality", 2020, None).unwrap();
        let entities: Vec<_> = means.iter().map(|entry| entry.entity.as_str()).collect();
        assert_eq!(entities, ["Alfa", "Beta", "Gama"]);
        assert_eq!(means[2].mean, 4.0);
        assert_eq!(means[2].region, "South");
    }

    #[test]
    fn variation_falling_mortality_improves() {
        let variation =
            compute_variation(&[(2018, 10.0), (2025, 5.0)], Polarity::HigherIsWorse);
        assert_eq!(variation.percent_change, Some(-50.0));
        assert_eq!(variation.trend, Trend::Improving);
    }

    #[test]
    fn variation_zero_start_is_not_applicable() {
        let variation = compute_variation(&[(2018, 0.0), (2025, 5.0)], Polarity::HigherIsWorse);
        assert_eq!(variation.percent_change, None);
        assert_eq!(variation.trend, Trend::Neutral);
    }

    #[test]
    fn variation_needs_two_points() {
        for series in [&[][..], &[(2020, 7.5)][..]] {
            let variation = compute_variation(series, Polarity::HigherIsWorse);
            assert_eq!(variation.percent_change, None);
            assert_eq!(variation.trend, Trend::Neutral);
        }
    }

    #[test]
    fn variation_is_scale_invariant() {
        let series = [(2018, 4.0), (2019, 7.0), (2021, 6.0)];
        let scaled: Vec<_> = series.iter().map(|&(year, val)| (year, val * 325.0)).collect();

        let base = compute_variation(&series, Polarity::HigherIsWorse);
        let scaled = compute_variation(&scaled, Polarity::HigherIsWorse);
        let diff = base.percent_change.unwrap() - scaled.percent_change.unwrap();
        assert!(diff.abs() < 1e-9);
    }

    #[test]
    fn variation_sorts_by_year_first() {
        let variation =
            compute_variation(&[(2025, 5.0), (2018, 10.0)], Polarity::HigherIsWorse);
        assert_eq!(variation.percent_change, Some(-50.0));
    }

    #[test]
    fn variation_direction_follows_polarity() {
        let rising = [(2018, 50.0), (2020, 60.0)];
        assert_eq!(
            compute_variation(&rising, Polarity::HigherIsBetter).trend,
            Trend::Improving
        );
        assert_eq!(
            compute_variation(&rising, Polarity::HigherIsWorse).trend,
            Trend::Worsening
        );
        assert_eq!(
            compute_variation(&rising, Polarity::Unspecified).trend,
            Trend::Neutral
        );
    }

    #[test]
    fn baseline_above_national_mortality_is_below_baseline() {
        let comparison = compare_to_baseline(12.0, 10.0, Polarity::HigherIsWorse);
        assert_eq!(comparison.percent_difference, Some(20.0));
        assert_eq!(comparison.standing, Standing::BelowBaseline);
    }

    #[test]
    fn baseline_equality_is_neutral() {
        let comparison = compare_to_baseline(10.0, 10.0, Polarity::HigherIsWorse);
        assert_eq!(comparison.percent_difference, Some(0.0));
        assert_eq!(comparison.standing, Standing::Neutral);
    }

    #[test]
    fn baseline_zero_mean_is_not_applicable() {
        let comparison = compare_to_baseline(12.0, 0.0, Polarity::HigherIsWorse);
        assert_eq!(comparison.percent_difference, None);
        assert_eq!(comparison.standing, Standing::Neutral);
    }

    #[test]
    fn baseline_direction_follows_polarity() {
        assert_eq!(
            compare_to_baseline(8.0, 10.0, Polarity::HigherIsWorse).standing,
            Standing::AboveBaseline
        );
        assert_eq!(
            compare_to_baseline(8.0, 10.0, Polarity::HigherIsBetter).standing,
            Standing::BelowBaseline
        );
        assert_eq!(
            compare_to_baseline(8.0, 10.0, Polarity::Unspecified).standing,
            Standing::Neutral
        );
    }

    #[test]
    fn correlation_pairs_are_an_inner_join() {
        let catalog = sample_catalog();
        let table = sample_table(&catalog);

        // Gama has mortality but no coverage; Beta has coverage only in 2020.
        let correlation = compute_correlation(
            &table,
            &catalog,
            "infant-mortality",
            "prenatal-coverage",
            None,
            None,
        )
        .unwrap();

        let keys: Vec<_> = correlation
            .samples
            .iter()
            .map(|sample| (sample.entity.as_str(), sample.year))
            .collect();
        assert_eq!(keys, [("Alfa", 2018), ("Alfa", 2020), ("Beta", 2020)]);
    }

    #[test]
    fn correlation_perfectly_opposed_series() {
        let catalog = sample_catalog();
        let rows = [1.0, 2.0, 3.0, 4.0]
            .iter()
            .enumerate()
            .flat_map(|(i_ent, &val)| {
                let entity = format!("E{i_ent}");
                vec![
                    obs(&entity, "North", "infant-mortality", 2020, val),
                    obs(&entity, "North", "prenatal-coverage", 2020, 5.0 - val),
                ]
            })
            .collect();
        let table = IndicatorTable::new(rows, &catalog).unwrap();

        let correlation = compute_correlation(
            &table,
            &catalog,
            "infant-mortality",
            "prenatal-coverage",
            None,
            Some(2020),
        )
        .unwrap();
        let coeff = correlation.coefficient.unwrap();
        assert!((coeff + 1.0).abs() < 1e-12);
        assert_eq!(correlation.strength, Some(Strength::StrongNegative));
    }

    #[test]
    fn correlation_zero_variance_is_undefined() {
        let catalog = sample_catalog();
        let rows = [1.0, 2.0, 3.0]
            .iter()
            .enumerate()
            .flat_map(|(i_ent, &val)| {
                let entity = format!("E{i_ent}");
                vec![
                    obs(&entity, "North", "infant-mortality", 2020, val),
                    obs(&entity, "North", "prenatal-coverage", 2020, 1.0),
                ]
            })
            .collect();
        let table = IndicatorTable::new(rows, &catalog).unwrap();

        let correlation = compute_correlation(
            &table,
            &catalog,
            "infant-mortality",
            "prenatal-coverage",
            None,
            None,
        )
        .unwrap();
        assert_eq!(correlation.coefficient, None);
        assert_eq!(correlation.strength, None);
        assert_eq!(correlation.samples.len(), 3);
    }

    #[test]
    fn correlation_year_filter_restricts_pairs() {
        let catalog = sample_catalog();
        let table = sample_table(&catalog);

        let correlation = compute_correlation(
            &table,
            &catalog,
            "infant-mortality",
            "prenatal-coverage",
            None,
            Some(2018),
        )
        .unwrap();
        assert_eq!(correlation.samples.len(), 1);
        assert_eq!(correlation.samples[0].entity, "Alfa");
        // A single pair is insufficient for a coefficient.
        assert_eq!(correlation.coefficient, None);
    }

    #[test]
    fn correlation_rejects_identical_indicators() {
        let catalog = sample_catalog();
        let table = sample_table(&catalog);

        let result = compute_correlation(
            &table,
            &catalog,
            "infant-mortality",
            "infant-mortality",
            None,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn strength_boundaries_resolve_to_weaker_label() {
        assert_eq!(Strength::from_coefficient(0.7), Strength::Positive);
        assert_eq!(Strength::from_coefficient(0.3), Strength::Weak);
        assert_eq!(Strength::from_coefficient(-0.3), Strength::Weak);
        assert_eq!(Strength::from_coefficient(-0.7), Strength::Negative);
        assert_eq!(Strength::from_coefficient(0.71), Strength::StrongPositive);
        assert_eq!(Strength::from_coefficient(-0.71), Strength::StrongNegative);
        assert_eq!(Strength::from_coefficient(0.0), Strength::Weak);
    }

    #[test]
    fn overview_reports_endpoints_and_variation() {
        let catalog = sample_catalog();
        let table = sample_table(&catalog);

        let report = overview(
            &table,
            &catalog,
            "infant-mortality",
            &EntityScope::National,
            None,
        )
        .unwrap();

        assert_eq!(report.unit, "per 1000 live births");
        assert_eq!(report.earliest, Some(YearMean { year: 2018, mean: 10.0 }));
        assert_eq!(report.latest, Some(YearMean { year: 2020, mean: 8.0 }));
        assert_eq!(report.absolute_change, Some(-2.0));
        assert_eq!(report.variation.percent_change, Some(-20.0));
        assert_eq!(report.variation.trend, Trend::Improving);
        assert_eq!(report.baseline, None);
    }

    #[test]
    fn overview_for_entity_compares_to_national_mean() {
        let catalog = sample_catalog();
        let table = sample_table(&catalog);

        let report = overview(
            &table,
            &catalog,
            "infant-mortality",
            &EntityScope::Entity("Beta".into()),
            None,
        )
        .unwrap();

        // Beta's 2020 value is 12.0 against a national mean of 8.0.
        let baseline = report.baseline.unwrap();
        assert_eq!(baseline.percent_difference, Some(50.0));
        assert_eq!(baseline.standing, Standing::BelowBaseline);
    }

    #[test]
    fn overview_degrades_on_empty_series() {
        let catalog = sample_catalog();
        let table = sample_table(&catalog);

        let report = overview(
            &table,
            &catalog,
            "hospital-beds",
            &EntityScope::National,
            None,
        )
        .unwrap();
        assert_eq!(report.earliest, None);
        assert_eq!(report.latest, None);
        assert_eq!(report.absolute_change, None);
        assert_eq!(report.variation.percent_change, None);
        assert_eq!(report.variation.trend, Trend::Neutral);
    }
}
