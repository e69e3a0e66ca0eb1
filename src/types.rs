//! Shared types for LOOTLENS.
//!
//! These types form the data model used across all modules.
//! They are designed to be stable so that the catalog, analyzer,
//! and server modules can depend on them without circular references.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Number of inputs a trade-up recipe consumes. Fixed by the economy rules;
/// the selection step enforces exactly this many.
pub const RECIPE_SIZE: usize = 5;

// ---------------------------------------------------------------------------
// Recipe & prices
// ---------------------------------------------------------------------------

/// A trade-up recipe for one target item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Category labels the inputs may come from. Display-only.
    pub eligible_sources: Vec<String>,
    /// Input-item identifiers eligible for this recipe, in catalog order.
    pub required_inputs: Vec<String>,
    /// Probability in (0, 1] that the trade-up yields the desired specific
    /// outcome rather than another valid outcome in the same tier.
    pub success_rate: f64,
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} inputs from [{}] @ {:.0}% success",
            self.required_inputs.len(),
            self.eligible_sources.join(", "),
            self.success_rate * 100.0,
        )
    }
}

/// Caller-supplied input prices, keyed by the exact identifiers used in
/// recipe definitions. Not owned or cached by the analyzer.
pub type PriceTable = HashMap<String, f64>;

// ---------------------------------------------------------------------------
// Cost selection
// ---------------------------------------------------------------------------

/// One priced input chosen for a trade-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedInput {
    pub name: String,
    pub price: f64,
}

impl fmt::Display for SelectedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${:.2}", self.name, self.price)
    }
}

/// The cheapest `RECIPE_SIZE` inputs for a recipe, sorted ascending by price.
/// Ties keep the recipe's input order (stable sort).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostSelection {
    pub inputs: Vec<SelectedInput>,
}

impl CostSelection {
    /// Sum of the selected prices.
    pub fn raw_cost(&self) -> f64 {
        self.inputs.iter().map(|i| i.price).sum()
    }
}

// ---------------------------------------------------------------------------
// Analysis results
// ---------------------------------------------------------------------------

/// Full trade-up cost estimate for one target item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeUpEstimate {
    /// Normalized target item name.
    pub item: String,
    pub eligible_sources: Vec<String>,
    pub selection: CostSelection,
    /// Sum of the selected input prices.
    pub raw_cost: f64,
    /// Success rate as a percentage.
    pub success_rate_pct: f64,
    /// `raw_cost / success_rate` — expected spend to land the specific
    /// desired outcome, modeling failure as a cost multiplier.
    pub expected_cost: f64,
}

impl fmt::Display for TradeUpEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: raw=${:.2} success={:.1}% expected=${:.2}",
            self.item, self.raw_cost, self.success_rate_pct, self.expected_cost,
        )
    }
}

/// Baseline unboxing figures, always present in a result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnboxingFigures {
    /// Per-trial drop rate as a percentage.
    pub per_trial_pct: f64,
    pub trials_for_50_pct: u64,
    pub trials_for_90_pct: u64,
}

impl fmt::Display for UnboxingFigures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3}%/trial | 50%: {} trials | 90%: {} trials",
            self.per_trial_pct, self.trials_for_50_pct, self.trials_for_90_pct,
        )
    }
}

/// Acquisition method recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    TradeUp,
    Unboxing,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::TradeUp => write!(f, "Trade-up"),
            Method::Unboxing => write!(f, "Unboxing"),
        }
    }
}

/// Budget-constrained comparison of the two methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetAnalysis {
    pub budget: f64,
    /// `floor(budget / average_trial_cost)`.
    pub affordable_trials: u64,
    /// Unboxing probability at `affordable_trials`, as a percentage.
    pub unbox_probability_pct: f64,
    /// Present only when a successful trade-up estimate exists.
    pub recommendation: Option<Method>,
}

/// Composed, read-only analysis output. Produced fresh on every call and
/// never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub generated_at: DateTime<Utc>,
    pub unboxing: UnboxingFigures,
    pub trade_up: Option<TradeUpEstimate>,
    /// Captured trade-up failure (`NotFound` / `InsufficientData`), surfaced
    /// here instead of propagated so the baseline figures still complete.
    pub trade_up_failure: Option<String>,
    pub budget: Option<BudgetAnalysis>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for LOOTLENS.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalyzerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Item '{name}' not found. Known items: {}", .known.join(", "))]
    NotFound { name: String, known: Vec<String> },

    #[error("Not enough price data for required inputs. Need {required}, found {found}")]
    InsufficientData { found: usize, required: usize },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
