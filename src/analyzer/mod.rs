//! Acquisition analyzer — probability math, cost optimization, and report
//! composition.
//!
//! Every operation is a pure function of its explicit inputs plus the
//! immutable catalog, so one shared analyzer instance can serve concurrent
//! callers without coordination.

pub mod costing;
pub mod probability;
pub mod report;

use chrono::Utc;
use tracing::{info, warn};

use crate::catalog::{normalize_item_name, RecipeCatalog};
use crate::config::AnalyzerConfig;
use crate::types::{
    AnalysisResult, AnalyzerError, BudgetAnalysis, CostSelection, Method, PriceTable, Recipe,
    TradeUpEstimate, UnboxingFigures,
};
use probability::DropModel;

/// Compares randomized unboxing against deterministic trade-up recipes.
///
/// Holds the recipe catalog (immutable after construction) and the drop
/// model. All analysis entities are created per call and discarded after
/// the report is rendered.
pub struct AcquisitionAnalyzer {
    catalog: RecipeCatalog,
    drop_model: DropModel,
    average_trial_cost: f64,
}

impl AcquisitionAnalyzer {
    pub fn new(catalog: RecipeCatalog, config: AnalyzerConfig) -> Self {
        Self {
            catalog,
            drop_model: DropModel::new(config.drop_rate),
            average_trial_cost: config.average_trial_cost,
        }
    }

    /// Access the recipe catalog.
    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    /// Probability of at least one success in `trials` trials, as a
    /// percentage. Saturates at exactly 100.0 once floating-point
    /// rounding exhausts the gap at very large trial counts.
    pub fn unbox_probability(&self, trials: u64) -> f64 {
        self.drop_model.at_least_one_pct(trials)
    }

    /// Smallest trial count reaching `target_pct` cumulative probability.
    pub fn trials_for_probability(&self, target_pct: f64) -> Result<u64, AnalyzerError> {
        self.drop_model.trials_for_pct(target_pct)
    }

    /// Look up a recipe by item name (case-insensitive).
    pub fn lookup_recipe(&self, item_name: &str) -> Result<&Recipe, AnalyzerError> {
        self.lookup_normalized(&normalize_item_name(item_name))
    }

    fn lookup_normalized(&self, normalized: &str) -> Result<&Recipe, AnalyzerError> {
        self.catalog
            .get(normalized)
            .ok_or_else(|| AnalyzerError::NotFound {
                name: normalized.to_string(),
                known: self.catalog.known_items(),
            })
    }

    /// Select the cheapest valid input set for a recipe.
    pub fn select_cheapest_inputs(
        &self,
        recipe: &Recipe,
        prices: &PriceTable,
    ) -> Result<CostSelection, AnalyzerError> {
        costing::select_cheapest_inputs(recipe, prices)
    }

    /// Full trade-up cost estimate for one item. Errors from lookup and
    /// selection propagate unchanged.
    pub fn estimate_trade_up_cost(
        &self,
        item_name: &str,
        prices: &PriceTable,
    ) -> Result<TradeUpEstimate, AnalyzerError> {
        let normalized = normalize_item_name(item_name);
        let recipe = self.lookup_normalized(&normalized)?;
        let selection = costing::select_cheapest_inputs(recipe, prices)?;
        Ok(costing::build_estimate(normalized, recipe, selection))
    }

    /// Compare unboxing against trade-up.
    ///
    /// Baseline unboxing figures are always computed. The trade-up estimate
    /// is attempted only when both `item_name` and `prices` are supplied;
    /// a `NotFound` or `InsufficientData` failure there is captured into
    /// the result so the baseline still completes. Any other error — and
    /// a malformed budget — propagates to the caller.
    pub fn compare_methods(
        &self,
        item_name: Option<&str>,
        prices: Option<&PriceTable>,
        budget: Option<f64>,
    ) -> Result<AnalysisResult, AnalyzerError> {
        let unboxing = UnboxingFigures {
            per_trial_pct: self.drop_model.rate_pct(),
            trials_for_50_pct: self.trials_for_probability(50.0)?,
            trials_for_90_pct: self.trials_for_probability(90.0)?,
        };

        let (trade_up, trade_up_failure) = match (item_name, prices) {
            (Some(item), Some(prices)) => match self.estimate_trade_up_cost(item, prices) {
                Ok(estimate) => (Some(estimate), None),
                Err(
                    e @ (AnalyzerError::NotFound { .. } | AnalyzerError::InsufficientData { .. }),
                ) => {
                    warn!(item, error = %e, "Trade-up estimate unavailable");
                    (None, Some(e.to_string()))
                }
                Err(e) => return Err(e),
            },
            _ => (None, None),
        };

        let budget = match budget {
            Some(amount) => {
                if !amount.is_finite() || amount < 0.0 {
                    return Err(AnalyzerError::InvalidArgument(format!(
                        "Budget must be a non-negative amount, got {amount}"
                    )));
                }
                let affordable_trials = (amount / self.average_trial_cost).floor() as u64;
                let recommendation = trade_up.as_ref().map(|estimate| {
                    if estimate.expected_cost <= amount {
                        Method::TradeUp
                    } else {
                        Method::Unboxing
                    }
                });
                Some(BudgetAnalysis {
                    budget: amount,
                    affordable_trials,
                    unbox_probability_pct: self.unbox_probability(affordable_trials),
                    recommendation,
                })
            }
            None => None,
        };

        info!(
            item = item_name.unwrap_or("-"),
            trade_up = trade_up.is_some(),
            captured_failure = trade_up_failure.is_some(),
            budget = budget.as_ref().map(|b| b.budget).unwrap_or(0.0),
            "Comparison complete"
        );

        Ok(AnalysisResult {
            generated_at: Utc::now(),
            unboxing,
            trade_up,
            trade_up_failure,
            budget,
        })
    }

    /// Render an analysis result as a text report.
    pub fn render_report(&self, result: &AnalysisResult) -> String {
        report::render_report(result)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
