//! Budget estimation from event type, guest count, and an optional client budget.
//!
//! This module is the single source of truth for the allocation rules: the
//! per-category ratio table, the per-head cost defaults, and the large-event
//! logistics premium. The rules live in [`EstimatorConfig`] so deployments can
//! override them from a JSON file without touching code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Warning appended when a supplied budget looks too small for the guest count.
pub const LOW_BUDGET_WARNING: &str = "Budget might be too low for the guest count.";

/// Recognised event types. Unrecognised labels fall back to [`EventType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventType {
    Wedding,
    Birthday,
    Corporate,
    Other,
}

impl EventType {
    /// Map a client-supplied label to an event type.
    ///
    /// Matching is exact (case-sensitive); anything unknown becomes `Other`.
    pub fn parse(label: &str) -> Self {
        match label {
            "Wedding" => EventType::Wedding,
            "Birthday" => EventType::Birthday,
            "Corporate" => EventType::Corporate,
            _ => EventType::Other,
        }
    }
}

/// Budget categories an estimate is split across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Venue,
    Catering,
    Decor,
    Photography,
    Entertainment,
}

/// Tunable estimation rules.
///
/// Defaults mirror typical Indian wedding/event market ratios. A partial JSON
/// override keeps the defaults for any field it omits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Per-category allocation ratios for each event type.
    ///
    /// Each table must sum to 1.0 and the `Other` fallback table must exist.
    pub ratios: BTreeMap<EventType, BTreeMap<Category, f64>>,

    /// Per-head cost (INR) used when no budget is supplied.
    pub base_cost_per_head: f64,

    /// Per-head cost (INR) for weddings.
    pub wedding_cost_per_head: f64,

    /// Guest count above which the logistics premium applies.
    pub large_event_guests: u64,

    /// Multiplier applied to guest-based estimates for large-scale logistics.
    pub logistics_premium: f64,

    /// Guest count above which a supplied budget is sanity-checked.
    pub low_budget_guests: u64,

    /// Supplied budgets below this trigger the low-budget warning.
    pub low_budget_floor: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        let ratios = BTreeMap::from([
            (
                EventType::Wedding,
                BTreeMap::from([
                    (Category::Venue, 0.4),
                    (Category::Catering, 0.3),
                    (Category::Decor, 0.15),
                    (Category::Photography, 0.1),
                    (Category::Entertainment, 0.05),
                ]),
            ),
            (
                EventType::Birthday,
                BTreeMap::from([
                    (Category::Venue, 0.2),
                    (Category::Catering, 0.4),
                    (Category::Decor, 0.2),
                    (Category::Photography, 0.1),
                    (Category::Entertainment, 0.1),
                ]),
            ),
            (
                EventType::Corporate,
                BTreeMap::from([
                    (Category::Venue, 0.5),
                    (Category::Catering, 0.3),
                    (Category::Decor, 0.05),
                    (Category::Photography, 0.05),
                    (Category::Entertainment, 0.1),
                ]),
            ),
            (
                EventType::Other,
                BTreeMap::from([
                    (Category::Venue, 0.3),
                    (Category::Catering, 0.3),
                    (Category::Decor, 0.2),
                    (Category::Photography, 0.1),
                    (Category::Entertainment, 0.1),
                ]),
            ),
        ]);

        Self {
            ratios,
            base_cost_per_head: 1000.0,
            wedding_cost_per_head: 2500.0,
            large_event_guests: 500,
            logistics_premium: 1.1,
            low_budget_guests: 1000,
            low_budget_floor: 500_000.0,
        }
    }
}

/// Errors from validating a set of estimation rules.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("missing ratio table for the Other fallback")]
    MissingFallback,

    #[error("ratios for {event_type:?} sum to {sum}, expected 1.0")]
    BadRatioSum { event_type: EventType, sum: f64 },

    #[error("ratio {ratio} for {event_type:?}/{category:?} is outside (0, 1]")]
    RatioOutOfRange {
        event_type: EventType,
        category: Category,
        ratio: f64,
    },
}

impl EstimatorConfig {
    /// Validate the ratio tables.
    ///
    /// Every table must sum to 1.0 (within floating tolerance) with each
    /// fraction in (0, 1], and the `Other` fallback table must be present.
    pub fn validate(&self) -> Result<(), RulesError> {
        if !self.ratios.contains_key(&EventType::Other) {
            return Err(RulesError::MissingFallback);
        }

        for (&event_type, table) in &self.ratios {
            for (&category, &ratio) in table {
                if !(ratio > 0.0 && ratio <= 1.0) {
                    return Err(RulesError::RatioOutOfRange {
                        event_type,
                        category,
                        ratio,
                    });
                }
            }
            let sum: f64 = table.values().sum();
            if (sum - 1.0).abs() > 1e-6 {
                return Err(RulesError::BadRatioSum { event_type, sum });
            }
        }

        Ok(())
    }

    fn cost_per_head(&self, event_type: EventType) -> f64 {
        match event_type {
            EventType::Wedding => self.wedding_cost_per_head,
            _ => self.base_cost_per_head,
        }
    }
}

/// A computed budget estimate.
#[derive(Debug, Clone)]
pub struct Estimate {
    /// Total the breakdown was computed from, truncated to whole currency units.
    pub estimated_total: u64,

    /// Per-category allocation of the total.
    pub breakdown: BTreeMap<Category, u64>,

    /// Zero or more advisory warnings about the input.
    pub warnings: Vec<String>,
}

/// Errors from invalid estimation input.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("budget must be non-negative, got {0}")]
    NegativeBudget(f64),

    #[error("budget must be a finite number")]
    NonFiniteBudget,
}

/// Estimate a budget breakdown.
///
/// When `budget` is positive it is used as the total directly; otherwise the
/// total is derived from the guest count at the configured per-head cost, with
/// the logistics premium applied above the large-event threshold. The total is
/// then split across categories by the event type's ratio table, truncating
/// each share toward zero.
///
/// `rules` must carry an `Other` fallback table, which
/// [`EstimatorConfig::validate`] guarantees.
///
/// # Errors
///
/// Returns `EstimateError` if `budget` is negative or not finite.
pub fn estimate(
    rules: &EstimatorConfig,
    event_type: EventType,
    guests: u64,
    budget: f64,
) -> Result<Estimate, EstimateError> {
    if !budget.is_finite() {
        return Err(EstimateError::NonFiniteBudget);
    }
    if budget < 0.0 {
        return Err(EstimateError::NegativeBudget(budget));
    }

    let selected_ratios = rules
        .ratios
        .get(&event_type)
        .or_else(|| rules.ratios.get(&EventType::Other))
        .expect("validated rules always carry an Other fallback table");

    let logistics_factor = if guests > rules.large_event_guests {
        rules.logistics_premium
    } else {
        1.0
    };

    // A supplied budget wins as-is; the logistics premium only applies to
    // guest-derived totals.
    let total = if budget > 0.0 {
        budget
    } else {
        guests as f64 * rules.cost_per_head(event_type) * logistics_factor
    };

    let breakdown = selected_ratios
        .iter()
        .map(|(&category, &ratio)| (category, (total * ratio) as u64))
        .collect();

    let mut warnings = Vec::new();
    if guests > rules.low_budget_guests && budget > 0.0 && budget < rules.low_budget_floor {
        warnings.push(LOW_BUDGET_WARNING.to_string());
    }

    Ok(Estimate {
        estimated_total: total as u64,
        breakdown,
        warnings,
    })
}
