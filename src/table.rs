use std::fmt;

use crate::basis::{Decomposition, PRIME_BASIS};

/// Hours, minutes and seconds decompositions printed as one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeTimeTable {
    pub rows: [Decomposition; 3],
}

impl PrimeTimeTable {
    pub fn new(hours: Decomposition, minutes: Decomposition, seconds: Decomposition) -> Self {
        Self {
            rows: [hours, minutes, seconds],
        }
    }

    fn column_widths(&self) -> Vec<usize> {
        PRIME_BASIS
            .iter()
            .enumerate()
            .map(|(index, prime)| {
                self.rows
                    .iter()
                    .map(|row| row.count(index).to_string().len())
                    .chain(std::iter::once(prime.to_string().len()))
                    .max()
                    .unwrap_or(1)
            })
            .collect()
    }
}

impl fmt::Display for PrimeTimeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        writeln!(f, "Prime Time:")?;
        let header: Vec<String> = PRIME_BASIS
            .iter()
            .zip(&widths)
            .map(|(prime, &w)| format!("{prime:>w$}"))
            .collect();
        write!(f, "{}", header.join("  "))?;

        for row in &self.rows {
            let cells: Vec<String> = row
                .counts()
                .iter()
                .zip(&widths)
                .map(|(count, &w)| format!("{count:>w$}"))
                .collect();
            write!(f, "\n{}", cells.join("  "))?;
        }
        Ok(())
    }
}
