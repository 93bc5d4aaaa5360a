use std::collections::BTreeSet;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::model::{Observation, Series};

// ---------------------------------------------------------------------------
// Built-in mock data
// ---------------------------------------------------------------------------

/// Mock n-gram frequencies shown for every query.
const BUILTIN_NGRAMS: &str = r#"{
  "ngrams": [
    {
      "ngram": "apple",
      "data": [
        { "year": 1900, "frequency": 0.0001 },
        { "year": 1950, "frequency": 0.0003 },
        { "year": 2000, "frequency": 0.0008 },
        { "year": 2010, "frequency": 0.0012 }
      ]
    },
    {
      "ngram": "banana",
      "data": [
        { "year": 1900, "frequency": 0.00005 },
        { "year": 1950, "frequency": 0.0001 },
        { "year": 2000, "frequency": 0.0002 },
        { "year": 2010, "frequency": 0.00018 }
      ]
    }
  ]
}"#;

// -- Document schema --

#[derive(Debug, Deserialize)]
struct NgramDocument {
    ngrams: Vec<NgramRecord>,
}

#[derive(Debug, Deserialize)]
struct NgramRecord {
    ngram: String,
    data: Vec<RawObservation>,
}

/// Years are read as plain JSON numbers so a fractional year surfaces as a
/// malformed observation instead of a generic parse error.
#[derive(Debug, Deserialize)]
struct RawObservation {
    year: f64,
    frequency: f64,
}

// ---------------------------------------------------------------------------
// SampleStore
// ---------------------------------------------------------------------------

/// Immutable collection of named series, built once at startup.
#[derive(Debug, Clone)]
pub struct SampleStore {
    series: Vec<Series>,
}

impl SampleStore {
    /// The store backing the explorer.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_NGRAMS).context("parsing built-in sample data")
    }

    /// Parse a `{ "ngrams": [ { "ngram", "data": [ { "year", "frequency" } ] } ] }` document.
    pub fn from_json(text: &str) -> Result<Self> {
        let doc: NgramDocument = serde_json::from_str(text).context("parsing JSON")?;

        let mut seen = BTreeSet::new();
        let mut series = Vec::with_capacity(doc.ngrams.len());

        for record in doc.ngrams {
            if !seen.insert(record.ngram.clone()) {
                bail!("Duplicate series name '{}'", record.ngram);
            }
            let observations = record
                .data
                .iter()
                .map(|raw| Observation::from_raw(&record.ngram, raw.year, raw.frequency))
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("series '{}'", record.ngram))?;
            series.push(Series::new(record.ngram, observations));
        }

        log::debug!("Sample store holds {} series", series.len());
        Ok(Self { series })
    }

    /// Wrap already-built series. No validation is performed here; the
    /// aligner still rejects non-finite frequencies.
    #[cfg(test)]
    pub fn from_series(series: Vec<Series>) -> Self {
        Self { series }
    }

    /// All series, in document order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Series to chart for `query`.
    ///
    /// The explorer is a mock: the query words are not looked up and the full
    /// store is returned for any input.
    pub fn for_query(&self, _query: &str) -> &[Series] {
        self.series()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }
}
