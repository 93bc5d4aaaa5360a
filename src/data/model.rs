use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while building or aligning series data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// An observation whose year is not an integer or whose frequency is not finite.
    #[error("malformed observation in '{series}' (year {year}): {reason}")]
    MalformedObservation {
        series: String,
        year: String,
        reason: String,
    },
}

impl DataError {
    fn malformed(series: &str, year: impl fmt::Display, reason: impl Into<String>) -> Self {
        DataError::MalformedObservation {
            series: series.to_string(),
            year: year.to_string(),
            reason: reason.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Observation – one (year, frequency) sample
// ---------------------------------------------------------------------------

/// A single sample. `frequency` is a proportion (0.0001 = 0.01 %), not a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub year: i32,
    pub frequency: f64,
}

impl Observation {
    #[cfg(test)]
    pub fn new(year: i32, frequency: f64) -> Self {
        Self { year, frequency }
    }

    /// Validate an untyped (year, frequency) pair as read from a JSON number.
    ///
    /// The year must be a whole number that fits in `i32`; the frequency must
    /// be finite.
    pub fn from_raw(series: &str, year: f64, frequency: f64) -> Result<Self, DataError> {
        if !year.is_finite() || year.fract() != 0.0 {
            return Err(DataError::malformed(series, year, "year is not an integer"));
        }
        if year < i32::MIN as f64 || year > i32::MAX as f64 {
            return Err(DataError::malformed(series, year, "year out of range"));
        }
        let year = year as i32;
        check_frequency(series, year, frequency)?;
        Ok(Self { year, frequency })
    }
}

/// Reject NaN and infinite frequencies.
pub fn check_frequency(series: &str, year: i32, frequency: f64) -> Result<(), DataError> {
    if frequency.is_finite() {
        Ok(())
    } else {
        Err(DataError::malformed(
            series,
            year,
            format!("frequency {frequency} is not finite"),
        ))
    }
}

// ---------------------------------------------------------------------------
// Series – a named list of observations
// ---------------------------------------------------------------------------

/// A named series. Observations are kept in source order and are not assumed
/// to be sorted by year.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub observations: Vec<Observation>,
}

impl Series {
    pub fn new(name: impl Into<String>, observations: Vec<Observation>) -> Self {
        Self {
            name: name.into(),
            observations,
        }
    }

    /// Convenience constructor from `(year, frequency)` tuples.
    #[cfg(test)]
    pub fn from_pairs(name: impl Into<String>, pairs: &[(i32, f64)]) -> Self {
        Self::new(
            name,
            pairs
                .iter()
                .map(|&(year, frequency)| Observation::new(year, frequency))
                .collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// AlignedChartData – dense, axis-aligned result of the aligner
// ---------------------------------------------------------------------------

/// One series' values, index-aligned with [`AlignedChartData::axis`].
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// A shared, strictly increasing year axis plus one value row per series.
/// Years a series never observed hold `0.0`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlignedChartData {
    pub axis: Vec<i32>,
    pub series: Vec<AlignedSeries>,
}

#[cfg(test)]
impl AlignedChartData {
    /// Values of the series called `name`, if present.
    pub fn values_for(&self, name: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.values.as_slice())
    }

    /// The aligned value of `name` at `year`; `None` if either is unknown or
    /// the row is shorter than the axis.
    pub fn value_at(&self, name: &str, year: i32) -> Option<f64> {
        let idx = self.axis.binary_search(&year).ok()?;
        self.values_for(name)
            .and_then(|values| values.get(idx).copied())
    }
}
