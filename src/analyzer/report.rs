//! Report rendering.
//!
//! Pure formatting of an `AnalysisResult` into the fixed text layout:
//! baseline section, trade-up section (when present), budget section
//! (when present), then the informational notes. When a trade-up was
//! requested but its estimate failed, a short "Unavailable" block takes
//! the trade-up section's place so readers see why the numbers are
//! missing. No computation happens here.

use crate::types::AnalysisResult;

const RULE_WIDE: usize = 60;
const RULE_NARROW: usize = 40;

/// Fixed informational notes appended to every report.
const NOTES: &[&str] = &[
    "Case unboxing yields a random drop at the base rate per case",
    "Trade-ups target a specific item but consume 5 priced inputs from eligible collections",
    "Trade-up success rates cover the desired specific outcome, not just any same-tier result",
    "Expected trade-up cost divides the raw input cost by the success rate",
];

/// Render a full text report for an analysis result.
pub fn render_report(result: &AnalysisResult) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("=".repeat(RULE_WIDE));
    lines.push("LOOTLENS ACQUISITION REPORT".to_string());
    lines.push("=".repeat(RULE_WIDE));
    lines.push(String::new());

    // -- Baseline unboxing -------------------------------------------------

    lines.push("CASE UNBOXING PROBABILITIES".to_string());
    lines.push("-".repeat(RULE_NARROW));
    lines.push(format!(
        "Base drop rate: {:.3}% per case",
        result.unboxing.per_trial_pct
    ));
    lines.push(format!(
        "Cases needed for 50% chance: {}",
        group_thousands(result.unboxing.trials_for_50_pct)
    ));
    lines.push(format!(
        "Cases needed for 90% chance: {}",
        group_thousands(result.unboxing.trials_for_90_pct)
    ));
    lines.push(String::new());

    // -- Trade-up ----------------------------------------------------------

    if let Some(trade_up) = &result.trade_up {
        lines.push(format!(
            "TRADE-UP REQUIREMENTS FOR {}",
            trade_up.item.to_uppercase()
        ));
        lines.push("-".repeat(RULE_NARROW));
        lines.push(format!(
            "Required: {} inputs from eligible collections",
            trade_up.selection.inputs.len()
        ));
        lines.push(format!(
            "Eligible collections: {}",
            trade_up.eligible_sources.join(", ")
        ));
        lines.push(String::new());
        lines.push("Cost analysis:".to_string());
        lines.push("  Selected inputs (cheapest options):".to_string());
        for (i, input) in trade_up.selection.inputs.iter().enumerate() {
            lines.push(format!("  {}. {}: ${:.2}", i + 1, input.name, input.price));
        }
        lines.push(format!("  Total raw cost: ${:.2}", trade_up.raw_cost));
        lines.push(format!("  Success rate: {:.1}%", trade_up.success_rate_pct));
        lines.push(format!(
            "  Expected cost (factoring in success rate): ${:.2}",
            trade_up.expected_cost
        ));
        lines.push(String::new());
    } else if let Some(failure) = &result.trade_up_failure {
        lines.push("TRADE-UP ANALYSIS".to_string());
        lines.push("-".repeat(RULE_NARROW));
        lines.push(format!("Unavailable: {failure}"));
        lines.push(String::new());
    }

    // -- Budget ------------------------------------------------------------

    if let Some(budget) = &result.budget {
        lines.push(format!("BUDGET ANALYSIS (${:.2})", budget.budget));
        lines.push("-".repeat(RULE_NARROW));
        lines.push(format!(
            "Cases you can afford: {}",
            group_thousands(budget.affordable_trials)
        ));
        lines.push(format!(
            "Probability of at least one drop: {:.2}%",
            budget.unbox_probability_pct
        ));
        if let Some(trade_up) = &result.trade_up {
            let affordable = trade_up.expected_cost <= budget.budget;
            lines.push(String::new());
            lines.push(format!(
                "Trade-up cost for {}: ${:.2}",
                trade_up.item, trade_up.expected_cost
            ));
            lines.push(format!(
                "Can afford trade-up: {}",
                if affordable { "YES" } else { "NO" }
            ));
            if let Some(recommendation) = budget.recommendation {
                lines.push(format!("Recommendation: {recommendation}"));
            }
        }
        lines.push(String::new());
    }

    // -- Notes -------------------------------------------------------------

    lines.push("KEY NOTES".to_string());
    lines.push("-".repeat(RULE_NARROW));
    for note in NOTES {
        lines.push(format!("- {note}"));
    }

    lines.join("\n")
}

/// Format a trial count with thousands separators ("12345" → "12,345").
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        BudgetAnalysis, CostSelection, Method, SelectedInput, TradeUpEstimate, UnboxingFigures,
    };
    use chrono::Utc;

    fn baseline() -> UnboxingFigures {
        UnboxingFigures {
            per_trial_pct: 0.26,
            trials_for_50_pct: 267,
            trials_for_90_pct: 885,
        }
    }

    fn trade_up() -> TradeUpEstimate {
        TradeUpEstimate {
            item: "Karambit".into(),
            eligible_sources: vec!["Dreams & Nightmares".into(), "Shattered Web".into()],
            selection: CostSelection {
                inputs: vec![
                    SelectedInput { name: "C".into(), price: 5.0 },
                    SelectedInput { name: "D".into(), price: 8.0 },
                    SelectedInput { name: "A".into(), price: 10.0 },
                    SelectedInput { name: "E".into(), price: 12.0 },
                    SelectedInput { name: "B".into(), price: 20.0 },
                ],
            },
            raw_cost: 55.0,
            success_rate_pct: 80.0,
            expected_cost: 68.75,
        }
    }

    fn result(
        trade_up: Option<TradeUpEstimate>,
        failure: Option<String>,
        budget: Option<BudgetAnalysis>,
    ) -> AnalysisResult {
        AnalysisResult {
            generated_at: Utc::now(),
            unboxing: baseline(),
            trade_up,
            trade_up_failure: failure,
            budget,
        }
    }

    #[test]
    fn test_baseline_only_report() {
        let report = render_report(&result(None, None, None));
        assert!(report.contains("CASE UNBOXING PROBABILITIES"));
        assert!(report.contains("Base drop rate: 0.260% per case"));
        assert!(report.contains("Cases needed for 50% chance: 267"));
        assert!(report.contains("Cases needed for 90% chance: 885"));
        assert!(report.contains("KEY NOTES"));
        assert!(!report.contains("TRADE-UP"));
        assert!(!report.contains("BUDGET ANALYSIS"));
    }

    #[test]
    fn test_trade_up_section() {
        let report = render_report(&result(Some(trade_up()), None, None));
        assert!(report.contains("TRADE-UP REQUIREMENTS FOR KARAMBIT"));
        assert!(report.contains("Eligible collections: Dreams & Nightmares, Shattered Web"));
        assert!(report.contains("1. C: $5.00"));
        assert!(report.contains("5. B: $20.00"));
        assert!(report.contains("Total raw cost: $55.00"));
        assert!(report.contains("Success rate: 80.0%"));
        assert!(report.contains("Expected cost (factoring in success rate): $68.75"));
    }

    #[test]
    fn test_captured_failure_shown() {
        let report = render_report(&result(
            None,
            Some("Not enough price data for required inputs. Need 5, found 3".into()),
            None,
        ));
        assert!(report.contains("TRADE-UP ANALYSIS"));
        assert!(report.contains("Unavailable: Not enough price data"));
    }

    #[test]
    fn test_budget_section_with_recommendation() {
        let budget = BudgetAnalysis {
            budget: 1000.0,
            affordable_trials: 400,
            unbox_probability_pct: 64.70,
            recommendation: Some(Method::TradeUp),
        };
        let report = render_report(&result(Some(trade_up()), None, Some(budget)));
        assert!(report.contains("BUDGET ANALYSIS ($1000.00)"));
        assert!(report.contains("Cases you can afford: 400"));
        assert!(report.contains("Probability of at least one drop: 64.70%"));
        assert!(report.contains("Trade-up cost for Karambit: $68.75"));
        assert!(report.contains("Can afford trade-up: YES"));
        assert!(report.contains("Recommendation: Trade-up"));
    }

    #[test]
    fn test_budget_section_unaffordable() {
        let budget = BudgetAnalysis {
            budget: 50.0,
            affordable_trials: 20,
            unbox_probability_pct: 5.07,
            recommendation: Some(Method::Unboxing),
        };
        let report = render_report(&result(Some(trade_up()), None, Some(budget)));
        assert!(report.contains("Can afford trade-up: NO"));
        assert!(report.contains("Recommendation: Unboxing"));
    }

    #[test]
    fn test_budget_without_trade_up_omits_verdict() {
        let budget = BudgetAnalysis {
            budget: 1000.0,
            affordable_trials: 400,
            unbox_probability_pct: 64.70,
            recommendation: None,
        };
        let report = render_report(&result(None, None, Some(budget)));
        assert!(report.contains("BUDGET ANALYSIS"));
        assert!(!report.contains("Can afford trade-up"));
        assert!(!report.contains("Recommendation:"));
    }

    #[test]
    fn test_section_order() {
        let budget = BudgetAnalysis {
            budget: 1000.0,
            affordable_trials: 400,
            unbox_probability_pct: 64.70,
            recommendation: Some(Method::TradeUp),
        };
        let report = render_report(&result(Some(trade_up()), None, Some(budget)));
        let unboxing = report.find("CASE UNBOXING").unwrap();
        let trade = report.find("TRADE-UP REQUIREMENTS").unwrap();
        let budget_pos = report.find("BUDGET ANALYSIS").unwrap();
        let notes = report.find("KEY NOTES").unwrap();
        assert!(unboxing < trade && trade < budget_pos && budget_pos < notes);
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(12_345), "12,345");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_large_trial_counts_grouped() {
        let mut figures = baseline();
        figures.trials_for_90_pct = 1_234_567;
        let r = AnalysisResult {
            generated_at: Utc::now(),
            unboxing: figures,
            trade_up: None,
            trade_up_failure: None,
            budget: None,
        };
        assert!(render_report(&r).contains("1,234,567"));
    }
}
