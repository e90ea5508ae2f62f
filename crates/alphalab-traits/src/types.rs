//! Common types used throughout AlphaLab.
//!
//! This module defines the asset identifier type and the [`SignalTable`]
//! produced by running an alpha.

use crate::{AlphaLabError, Result};
use ndarray::Array1;
use polars::prelude::*;
use std::collections::HashMap;
use std::fmt;

/// An asset identifier.
///
/// Typically a ticker symbol like "AAPL" or "MSFT".
pub type Symbol = String;

/// Name of the column holding asset identifiers.
pub const ASSET_COLUMN: &str = "asset";

/// Name of the column holding signal values.
pub const SIGNAL_COLUMN: &str = "signal";

/// Per-asset signal values produced by an [`Alpha`](crate::Alpha).
///
/// `SignalTable` wraps a Polars DataFrame with exactly two columns:
/// - `asset`: the asset identifier, unique per row
/// - `signal`: the signal value as `f64`
///
/// Rows follow the order in which the signal function enumerated its
/// output, not the order of the universe it was given.
///
/// # Example
///
/// ```
/// use alphalab_traits::SignalTable;
///
/// let table = SignalTable::from_pairs([("AAPL", 0.4), ("MSFT", -0.1)]).unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get("MSFT").unwrap(), Some(-0.1));
/// ```
#[derive(Debug, Clone)]
pub struct SignalTable {
    data: DataFrame,
}

impl SignalTable {
    /// Builds a table from `(asset, signal)` pairs.
    ///
    /// Pairs behave like inserts into an ordered dictionary: an asset that
    /// appears more than once keeps the row position of its first
    /// appearance and takes the value of its last.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying DataFrame cannot be constructed.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<Symbol>,
    {
        let mut assets: Vec<Symbol> = Vec::new();
        let mut signals: Vec<f64> = Vec::new();
        let mut positions: HashMap<Symbol, usize> = HashMap::new();

        for (asset, value) in pairs {
            let asset = asset.into();
            match positions.get(&asset) {
                Some(&idx) => signals[idx] = value,
                None => {
                    positions.insert(asset.clone(), assets.len());
                    assets.push(asset);
                    signals.push(value);
                }
            }
        }

        let data = df! {
            ASSET_COLUMN => assets,
            SIGNAL_COLUMN => signals,
        }?;

        Ok(Self { data })
    }

    /// Returns a reference to the underlying DataFrame.
    pub const fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Consumes self and returns the underlying DataFrame.
    pub fn into_inner(self) -> DataFrame {
        self.data
    }

    /// Returns the number of assets in the table.
    pub fn len(&self) -> usize {
        self.data.height()
    }

    /// Returns whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.data.height() == 0
    }

    /// Returns the asset identifiers in row order.
    ///
    /// # Errors
    ///
    /// Returns an error if the asset column is missing, is not a string
    /// column, or contains nulls.
    pub fn assets(&self) -> Result<Vec<Symbol>> {
        self.asset_column()?
            .into_iter()
            .map(|asset| {
                asset
                    .map(str::to_string)
                    .ok_or_else(|| AlphaLabError::InvalidData("null asset identifier".into()))
            })
            .collect()
    }

    /// Returns the signal values in row order.
    ///
    /// Null entries are reported as `NaN`.
    ///
    /// # Errors
    ///
    /// Returns an error if the signal column is missing or not `f64`.
    pub fn signals(&self) -> Result<Vec<f64>> {
        Ok(self
            .signal_column()?
            .into_iter()
            .map(|value| value.unwrap_or(f64::NAN))
            .collect())
    }

    /// Returns the signal values as an ndarray vector.
    ///
    /// # Errors
    ///
    /// See [`SignalTable::signals`].
    pub fn to_array(&self) -> Result<Array1<f64>> {
        Ok(Array1::from_vec(self.signals()?))
    }

    /// Returns `(asset, signal)` rows in table order.
    ///
    /// # Errors
    ///
    /// See [`SignalTable::assets`] and [`SignalTable::signals`].
    pub fn rows(&self) -> Result<Vec<(Symbol, f64)>> {
        Ok(self.assets()?.into_iter().zip(self.signals()?).collect())
    }

    /// Looks up the signal for a single asset.
    ///
    /// # Errors
    ///
    /// See [`SignalTable::rows`].
    pub fn get(&self, asset: &str) -> Result<Option<f64>> {
        let position = self
            .asset_column()?
            .into_iter()
            .position(|candidate| candidate == Some(asset));

        match position {
            Some(idx) => Ok(Some(self.signal_column()?.get(idx).unwrap_or(f64::NAN))),
            None => Ok(None),
        }
    }

    fn asset_column(&self) -> Result<&StringChunked> {
        let column = self
            .data
            .column(ASSET_COLUMN)
            .map_err(|_| AlphaLabError::MissingColumn(ASSET_COLUMN.to_string()))?;
        Ok(column.as_materialized_series().str()?)
    }

    fn signal_column(&self) -> Result<&Float64Chunked> {
        let column = self
            .data
            .column(SIGNAL_COLUMN)
            .map_err(|_| AlphaLabError::MissingColumn(SIGNAL_COLUMN.to_string()))?;
        Ok(column.as_materialized_series().f64()?)
    }
}

impl AsRef<DataFrame> for SignalTable {
    fn as_ref(&self) -> &DataFrame {
        &self.data
    }
}

impl fmt::Display for SignalTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_pairs_preserves_order() {
        let table = SignalTable::from_pairs([("MSFT", 0.2), ("AAPL", -0.5), ("NVDA", 1.0)]).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.assets().unwrap(), vec!["MSFT", "AAPL", "NVDA"]);
        assert_eq!(table.signals().unwrap(), vec![0.2, -0.5, 1.0]);
    }

    #[test]
    fn test_duplicate_asset_keeps_first_position_last_value() {
        let table = SignalTable::from_pairs([("AAPL", 0.1), ("MSFT", 0.2), ("AAPL", 0.3)]).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.assets().unwrap(), vec!["AAPL", "MSFT"]);
        assert_relative_eq!(table.get("AAPL").unwrap().unwrap(), 0.3);
    }

    #[test]
    fn test_empty_table() {
        let table = SignalTable::from_pairs(Vec::<(Symbol, f64)>::new()).unwrap();
        assert!(table.is_empty());
        assert!(table.assets().unwrap().is_empty());
        assert_eq!(table.get("AAPL").unwrap(), None);
    }

    #[test]
    fn test_columns() {
        let table = SignalTable::from_pairs([("AAPL", 0.1)]).unwrap();
        let names: Vec<String> = table
            .data()
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec![ASSET_COLUMN, SIGNAL_COLUMN]);
    }

    #[test]
    fn test_get_missing_asset() {
        let table = SignalTable::from_pairs([("AAPL", 0.1)]).unwrap();
        assert_eq!(table.get("TSLA").unwrap(), None);
    }

    #[test]
    fn test_to_array_and_rows() {
        let table = SignalTable::from_pairs([("AAPL", 1.5), ("GOOGL", -2.0)]).unwrap();

        let array = table.to_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_relative_eq!(array[1], -2.0);

        let rows = table.rows().unwrap();
        assert_eq!(rows[0], ("AAPL".to_string(), 1.5));
        assert_eq!(rows[1], ("GOOGL".to_string(), -2.0));
    }

    #[test]
    fn test_into_inner() {
        let table = SignalTable::from_pairs([("AAPL", 0.1), ("MSFT", 0.2)]).unwrap();
        let inner = table.into_inner();
        assert_eq!(inner.height(), 2);
        assert_eq!(inner.width(), 2);
    }

    #[test]
    fn test_symbol_type() {
        let symbol: Symbol = "AAPL".to_string();
        assert_eq!(symbol, "AAPL");
    }
}
