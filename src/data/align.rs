use std::collections::{BTreeMap, BTreeSet};

use super::model::{check_frequency, AlignedChartData, AlignedSeries, DataError, Series};

// ---------------------------------------------------------------------------
// Series aligner: sparse (year, frequency) lists → dense shared-axis rows
// ---------------------------------------------------------------------------

/// Align `series` onto the sorted union of all their years.
///
/// * The axis is strictly increasing and holds every distinct observed year.
/// * Each output row has one value per axis year, `0.0` where the series has
///   no observation for that year.
/// * Output rows keep the input series order.
/// * If a series lists the same year twice the later observation wins; callers
///   should not depend on that.
///
/// Fails as a whole (no partial result) on the first non-finite frequency.
pub fn align(series: &[Series]) -> Result<AlignedChartData, DataError> {
    let mut years: BTreeSet<i32> = BTreeSet::new();
    let mut lookups: Vec<BTreeMap<i32, f64>> = Vec::with_capacity(series.len());

    for s in series {
        let mut by_year = BTreeMap::new();
        for obs in &s.observations {
            check_frequency(&s.name, obs.year, obs.frequency)?;
            years.insert(obs.year);
            by_year.insert(obs.year, obs.frequency);
        }
        lookups.push(by_year);
    }

    let axis: Vec<i32> = years.into_iter().collect();
    let aligned = series
        .iter()
        .zip(lookups)
        .map(|(s, by_year)| AlignedSeries {
            name: s.name.clone(),
            values: axis
                .iter()
                .map(|year| by_year.get(year).copied().unwrap_or(0.0))
                .collect(),
        })
        .collect();

    Ok(AlignedChartData {
        axis,
        series: aligned,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data::model::Observation;

    fn apple() -> Series {
        Series::from_pairs(
            "apple",
            &[(1900, 0.0001), (1950, 0.0003), (2000, 0.0008), (2010, 0.0012)],
        )
    }

    fn banana() -> Series {
        Series::from_pairs(
            "banana",
            &[(1900, 0.00005), (1950, 0.0001), (2000, 0.0002), (2010, 0.00018)],
        )
    }

    #[test]
    fn aligns_matching_years() {
        let data = align(&[apple(), banana()]).unwrap();

        assert_eq!(data.axis, vec![1900, 1950, 2000, 2010]);
        assert_eq!(
            data.values_for("apple").unwrap(),
            &[0.0001, 0.0003, 0.0008, 0.0012]
        );
        assert_eq!(
            data.values_for("banana").unwrap(),
            &[0.00005, 0.0001, 0.0002, 0.00018]
        );
    }

    #[test]
    fn unsorted_observations_follow_the_axis() {
        let s = Series::from_pairs("pear", &[(2000, 0.5), (1950, 0.25)]);
        let data = align(&[s]).unwrap();

        assert_eq!(data.axis, vec![1950, 2000]);
        assert_eq!(data.values_for("pear").unwrap(), &[0.25, 0.5]);
    }

    #[test]
    fn disjoint_years_are_zero_filled() {
        let early = Series::from_pairs("early", &[(1900, 0.1)]);
        let late = Series::from_pairs("late", &[(2020, 0.2)]);
        let data = align(&[early, late]).unwrap();

        assert_eq!(data.axis, vec![1900, 2020]);
        assert_eq!(data.values_for("early").unwrap(), &[0.1, 0.0]);
        assert_eq!(data.values_for("late").unwrap(), &[0.0, 0.2]);
    }

    #[test]
    fn preserves_input_series_order() {
        let data = align(&[banana(), apple()]).unwrap();
        let names: Vec<&str> = data.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["banana", "apple"]);
    }

    #[test]
    fn empty_input_gives_empty_result() {
        let data = align(&[]).unwrap();
        assert_eq!(data, AlignedChartData::default());
    }

    #[test]
    fn series_without_observations_is_all_zero() {
        let data = align(&[apple(), Series::new("empty", Vec::new())]).unwrap();
        assert_eq!(data.values_for("empty").unwrap(), &[0.0; 4]);
    }

    #[test]
    fn axis_is_strictly_increasing_union() {
        let a = Series::from_pairs("a", &[(2010, 0.1), (1990, 0.2), (2010, 0.3)]);
        let b = Series::from_pairs("b", &[(1990, 0.4), (1800, 0.5)]);
        let data = align(&[a, b]).unwrap();

        assert_eq!(data.axis, vec![1800, 1990, 2010]);
        assert!(data.axis.windows(2).all(|w| w[0] < w[1]));
        for s in &data.series {
            assert_eq!(s.values.len(), data.axis.len());
        }
    }

    #[test]
    fn duplicate_year_keeps_last_observation() {
        let s = Series::from_pairs("dup", &[(2000, 0.1), (2000, 0.3)]);
        let data = align(&[s]).unwrap();
        assert_eq!(data.values_for("dup").unwrap(), &[0.3]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let input = [apple(), banana()];
        assert_eq!(align(&input).unwrap(), align(&input).unwrap());
    }

    #[test]
    fn non_finite_frequency_rejects_whole_alignment() {
        let bad = Series::new("bad", vec![Observation::new(1950, f64::NAN)]);
        let err = align(&[apple(), bad]).unwrap_err();
        match err {
            DataError::MalformedObservation { series, year, .. } => {
                assert_eq!(series, "bad");
                assert_eq!(year, "1950");
            }
        }
    }
}
