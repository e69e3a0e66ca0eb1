//! Trade-up cost optimization.
//!
//! Selects the cheapest valid input set for a recipe from caller-supplied
//! prices and derives the raw and success-adjusted expected cost.

use tracing::debug;

use crate::types::{
    AnalyzerError, CostSelection, PriceTable, Recipe, SelectedInput, TradeUpEstimate, RECIPE_SIZE,
};

/// Select the cheapest `RECIPE_SIZE` inputs for a recipe.
///
/// Filters `required_inputs` to those present in `prices` (recipe order
/// preserved), sorts ascending by price with a stable sort so ties keep
/// recipe order, and takes exactly `RECIPE_SIZE`. Partial price coverage
/// never produces a smaller selection — fewer than `RECIPE_SIZE` priced
/// inputs is `InsufficientData` reporting the found count.
pub fn select_cheapest_inputs(
    recipe: &Recipe,
    prices: &PriceTable,
) -> Result<CostSelection, AnalyzerError> {
    let mut priced: Vec<SelectedInput> = recipe
        .required_inputs
        .iter()
        .filter_map(|name| {
            prices.get(name).map(|&price| SelectedInput {
                name: name.clone(),
                price,
            })
        })
        .collect();

    if priced.len() < RECIPE_SIZE {
        return Err(AnalyzerError::InsufficientData {
            found: priced.len(),
            required: RECIPE_SIZE,
        });
    }

    priced.sort_by(|a, b| a.price.total_cmp(&b.price));
    priced.truncate(RECIPE_SIZE);

    debug!(
        selected = priced.len(),
        cheapest = %format!("${:.2}", priced[0].price),
        total = %format!("${:.2}", priced.iter().map(|i| i.price).sum::<f64>()),
        "Cheapest inputs selected"
    );

    Ok(CostSelection { inputs: priced })
}

/// Derive the full trade-up estimate from a selection.
///
/// `expected_cost = raw_cost / success_rate`: failed attempts are modeled
/// as a cost multiplier, not a retry loop.
pub fn build_estimate(item: String, recipe: &Recipe, selection: CostSelection) -> TradeUpEstimate {
    let raw_cost = selection.raw_cost();
    let expected_cost = raw_cost / recipe.success_rate;

    TradeUpEstimate {
        item,
        eligible_sources: recipe.eligible_sources.clone(),
        selection,
        raw_cost,
        success_rate_pct: recipe.success_rate * 100.0,
        expected_cost,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
