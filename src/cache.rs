use std::path::Path;

use tracing::{debug, info};

use crate::basis::{factorize, Decomposition, BASIS_LEN, MAX_FACTORABLE, PRIME_BASIS};
use crate::config::CacheConfig;
use crate::error::{PrimeClockError, Result};

/// Rows in a complete table, one per integer in `0..=60`.
pub const TABLE_ROWS: usize = MAX_FACTORABLE as usize + 1;

/// Decompositions of every integer in `0..=60`, indexed by the integer itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecompositionTable {
    rows: Vec<Decomposition>,
}

impl DecompositionTable {
    /// Factorizes `0..=60` in memory without touching storage.
    pub fn compute() -> Result<Self> {
        let rows = (0..=MAX_FACTORABLE)
            .map(factorize)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }

    /// Computes the table and writes it to `path`, replacing any existing file.
    pub fn build(path: &Path) -> Result<Self> {
        let table = Self::compute()?;

        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(PRIME_BASIS.iter().map(|p| p.to_string()))?;
        for row in &table.rows {
            writer.write_record(row.counts().iter().map(|c| c.to_string()))?;
        }
        writer.flush()?;

        info!(path = %path.display(), rows = table.rows.len(), "built decomposition table");
        Ok(table)
    }

    /// Reads a table previously written by [`DecompositionTable::build`].
    pub fn load(path: &Path) -> Result<Self> {
        let unavailable = |reason: String| PrimeClockError::CacheUnavailable {
            path: path.to_path_buf(),
            reason,
        };

        if !path.is_file() {
            return Err(unavailable("file not found".to_string()));
        }

        let mut reader = csv::Reader::from_path(path).map_err(|e| unavailable(e.to_string()))?;

        let headers = reader.headers().map_err(|e| unavailable(e.to_string()))?;
        let header_matches = headers.len() == BASIS_LEN
            && headers
                .iter()
                .zip(PRIME_BASIS.iter())
                .all(|(cell, prime)| cell.trim().parse::<u32>().ok() == Some(*prime));
        if !header_matches {
            return Err(unavailable(format!(
                "header does not list the {BASIS_LEN} basis primes"
            )));
        }

        let mut rows = Vec::with_capacity(TABLE_ROWS);
        for (line, record) in reader.records().enumerate() {
            let record = record.map_err(|e| unavailable(e.to_string()))?;
            if record.len() != BASIS_LEN {
                return Err(unavailable(format!(
                    "row {line} has {} columns, expected {BASIS_LEN}",
                    record.len()
                )));
            }
            let mut counts = [0u32; BASIS_LEN];
            for (slot, cell) in counts.iter_mut().zip(record.iter()) {
                *slot = cell
                    .trim()
                    .parse()
                    .map_err(|_| unavailable(format!("row {line} has non-integer cell {cell:?}")))?;
            }
            rows.push(Decomposition::from_counts(counts));
        }

        if rows.len() != TABLE_ROWS {
            return Err(unavailable(format!(
                "found {} rows, expected {TABLE_ROWS}",
                rows.len()
            )));
        }

        debug!(path = %path.display(), "loaded decomposition table");
        Ok(Self { rows })
    }

    /// Rebuilds when asked to, otherwise loads. A failed load is fatal.
    pub fn open(config: &CacheConfig) -> Result<Self> {
        if config.rebuild {
            Self::build(&config.cache_path)
        } else {
            Self::load(&config.cache_path)
        }
    }

    /// Decomposition stored for `n`.
    pub fn lookup(&self, n: i32) -> Result<&Decomposition> {
        usize::try_from(n)
            .ok()
            .and_then(|index| self.rows.get(index))
            .ok_or(PrimeClockError::OutOfRange {
                value: i64::from(n),
            })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
