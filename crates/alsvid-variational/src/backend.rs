//! Measurement records and the simulation collaborator interface.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::ansatz::{CircuitOp, SiteId};
use crate::error::{VariationalError, VariationalResult};

/// Measurement outcomes keyed by measurement tag.
///
/// Each tag maps to repetition rows; a row holds one 0/1 entry per
/// measured site, in the order the measurement listed them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    outcomes: FxHashMap<String, Vec<Vec<u8>>>,
}

impl MeasurementRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one repetition row under `key`.
    pub fn push(&mut self, key: impl Into<String>, row: Vec<u8>) {
        self.outcomes.entry(key.into()).or_default().push(row);
    }

    /// All repetition rows under `key`.
    ///
    /// # Errors
    /// Fails with [`VariationalError::MissingMeasurement`] when the tag
    /// is absent.
    pub fn outcomes(&self, key: &str) -> VariationalResult<&[Vec<u8>]> {
        self.outcomes
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| VariationalError::MissingMeasurement {
                key: key.to_string(),
            })
    }

    /// Measurement tags present in the record.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.outcomes.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// The simulation collaborator: runs an operation sequence over a site
/// layout and reports what was measured.
pub trait Backend {
    /// # Errors
    /// Fails with [`VariationalError::Backend`] when the sequence cannot
    /// run.
    fn run(
        &mut self,
        ops: &[CircuitOp],
        sites: &[SiteId],
    ) -> VariationalResult<MeasurementRecord>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accumulates_rows_per_key() {
        let mut record = MeasurementRecord::new();
        assert!(record.is_empty());

        record.push("all", vec![0, 1]);
        record.push("all", vec![1, 1]);
        record.push("aux", vec![0]);

        assert_eq!(record.outcomes("all").unwrap(), &[vec![0, 1], vec![1, 1]]);
        assert_eq!(record.outcomes("aux").unwrap().len(), 1);
        assert_eq!(record.keys().count(), 2);
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let record = MeasurementRecord::new();
        assert_eq!(
            record.outcomes("all"),
            Err(VariationalError::MissingMeasurement {
                key: "all".to_string()
            })
        );
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let mut record = MeasurementRecord::new();
        record.push("all", vec![1, 0]);
        let json = serde_json::to_string(&record).unwrap();
        let back: MeasurementRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
