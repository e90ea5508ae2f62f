//! The alpha signal container.
//!
//! An [`Alpha`] pairs a name with a user-supplied signal function and an
//! optional default universe. Running it resolves a universe, calls the
//! function once and wraps the output in a [`SignalTable`].

use crate::{AlphaLabError, Result, SignalTable, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Signal function stored by an [`Alpha`].
///
/// Takes the resolved universe and returns `(asset, signal)` pairs in the
/// order they should appear in the resulting table.
pub type SignalFn = dyn Fn(&[Symbol]) -> Vec<(Symbol, f64)> + Send + Sync;

/// A named trading signal over a universe of assets.
///
/// `Alpha` is immutable once built. Cloning is cheap: the signal function
/// is shared, and running never touches the stored universe.
///
/// # Example
///
/// ```
/// use alphalab_traits::{Alpha, Symbol};
///
/// let alpha = Alpha::new("flat", |universe: &[Symbol]| {
///     universe.iter().map(|asset| (asset.clone(), 0.0)).collect::<Vec<_>>()
/// })
/// .with_universe(["AAPL", "GOOGL"]);
///
/// let table = alpha.run(None).unwrap();
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Clone)]
pub struct Alpha {
    name: String,
    signal_fn: Arc<SignalFn>,
    universe: Vec<Symbol>,
}

impl Alpha {
    /// Creates an alpha with an empty default universe.
    ///
    /// The signal function may return any collection of `(asset, value)`
    /// pairs: a `Vec`, a `BTreeMap`, a `HashMap`. Its iteration order
    /// becomes the row order of the table.
    pub fn new<F, I, S>(name: impl Into<String>, signal_fn: F) -> Self
    where
        F: Fn(&[Symbol]) -> I + Send + Sync + 'static,
        I: IntoIterator<Item = (S, f64)>,
        S: Into<Symbol>,
    {
        let signal_fn = move |universe: &[Symbol]| {
            signal_fn(universe)
                .into_iter()
                .map(|(asset, value)| (asset.into(), value))
                .collect::<Vec<(Symbol, f64)>>()
        };

        Self {
            name: name.into(),
            signal_fn: Arc::new(signal_fn),
            universe: Vec::new(),
        }
    }

    /// Sets the default universe used when [`Alpha::run`] gets no override.
    ///
    /// Repeated identifiers are dropped, keeping the first occurrence.
    pub fn with_universe<I, S>(mut self, universe: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.universe = unique_symbols(universe);
        self
    }

    /// Returns the name of this alpha.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the default universe, possibly empty.
    pub fn universe(&self) -> &[Symbol] {
        &self.universe
    }

    /// Runs the signal function and returns its output as a table.
    ///
    /// An override universe, when given, replaces the default entirely and
    /// is handed to the signal function exactly as passed, repeats included.
    /// `Some(&[])` is an explicit empty universe and is rejected; it does
    /// not fall back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`AlphaLabError::EmptyUniverse`] if the resolved universe is
    /// empty, or a Polars error if the table cannot be built.
    pub fn run(&self, universe: Option<&[Symbol]>) -> Result<SignalTable> {
        let (assets, source) = match universe {
            Some(overridden) => (overridden, "override"),
            None => (self.universe.as_slice(), "stored"),
        };

        if assets.is_empty() {
            return Err(AlphaLabError::EmptyUniverse);
        }

        let table = SignalTable::from_pairs((self.signal_fn)(assets))?;

        debug!(
            alpha = %self.name,
            source,
            universe_size = assets.len(),
            rows = table.len(),
            "ran alpha"
        );

        Ok(table)
    }

    /// Returns a snapshot describing this alpha.
    pub fn metadata(&self) -> AlphaMetadata {
        AlphaMetadata {
            name: self.name.clone(),
            universe_size: self.universe.len(),
            has_universe: !self.universe.is_empty(),
        }
    }
}

impl fmt::Debug for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alpha")
            .field("name", &self.name)
            .field("universe", &self.universe)
            .finish_non_exhaustive()
    }
}

/// Read-only description of an [`Alpha`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphaMetadata {
    /// Name of the alpha.
    pub name: String,
    /// Number of assets in the default universe.
    pub universe_size: usize,
    /// Whether the default universe is non-empty.
    pub has_universe: bool,
}

fn unique_symbols<I, S>(symbols: I) -> Vec<Symbol>
where
    I: IntoIterator<Item = S>,
    S: Into<Symbol>,
{
    let mut seen = HashSet::new();
    symbols
        .into_iter()
        .map(Into::<Symbol>::into)
        .filter(|symbol: &Symbol| seen.insert(symbol.clone()))
        .collect()
}
