//! What-if projections over a repeated monthly baseline.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::MonthlySummary;

pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

const MONTH_LABELS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

/// One representative month of the business.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baseline {
    /// Monthly revenue.
    pub revenue: f64,
    /// Monthly fixed costs.
    pub fixed_costs: f64,
    /// Monthly variable costs.
    pub variable_costs: f64,
    /// Cash on hand when the projection starts.
    pub cash_balance: f64,
}

impl Baseline {
    pub fn expenses(&self) -> f64 {
        self.fixed_costs + self.variable_costs
    }

    pub fn profit(&self) -> f64 {
        self.revenue - self.expenses()
    }

    /// Baseline from one reporting month of a parsed ledger. The ledger does
    /// not split costs, so all expenses count as fixed.
    pub fn from_summary(month: &MonthlySummary, cash_balance: f64) -> Self {
        Self {
            revenue: month.revenue,
            fixed_costs: month.expenses,
            variable_costs: 0.0,
            cash_balance,
        }
    }
}

/// Kind of hypothetical change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    /// Recurring revenue change.
    Revenue,
    /// Recurring change to costs.
    CostReduction,
    /// Single-month cost.
    OneTimeCost,
    /// Single-month revenue.
    OneTimeRevenue,
}

/// The metric a change's amount is added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Revenue,
    Expenses,
}

impl ChangeType {
    pub fn is_one_time(self) -> bool {
        matches!(self, Self::OneTimeCost | Self::OneTimeRevenue)
    }

    pub fn target(self) -> Metric {
        match self {
            Self::Revenue | Self::OneTimeRevenue => Metric::Revenue,
            Self::CostReduction | Self::OneTimeCost => Metric::Expenses,
        }
    }
}

/// A hypothetical change overlaid on the baseline.
///
/// `amount` is always already signed for direct addition to the target
/// metric: revenue changes add to revenue, cost changes add to expenses. A
/// saving is therefore negative and a one-time cost positive. Build changes
/// from user input with [`SimulationChange::from_profit_impact`] so that the
/// sign flip for cost types happens in one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationChange {
    pub id: String,
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Carried for callers. Activation depends only on the change type.
    #[serde(default)]
    pub is_recurring: bool,
}

impl SimulationChange {
    /// Build a change from its effect on profit as a user states it: costs
    /// negative, revenue and savings positive.
    pub fn from_profit_impact(
        id: impl Into<String>,
        change_type: ChangeType,
        description: impl Into<String>,
        profit_impact: f64,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Self {
        let amount = match change_type.target() {
            Metric::Revenue => profit_impact,
            Metric::Expenses => -profit_impact,
        };
        Self {
            id: id.into(),
            change_type,
            description: description.into(),
            amount,
            start_date,
            end_date,
            is_recurring: !change_type.is_one_time(),
        }
    }

    /// Effect on profit, the inverse of [`SimulationChange::from_profit_impact`].
    pub fn profit_impact(&self) -> f64 {
        match self.change_type.target() {
            Metric::Revenue => self.amount,
            Metric::Expenses => -self.amount,
        }
    }

    pub fn is_active(&self, month: NaiveDate) -> bool {
        let m = month_ordinal(month);
        let start = month_ordinal(self.start_date);
        if self.change_type.is_one_time() {
            return m == start;
        }
        m >= start && self.end_date.map_or(true, |end| m < month_ordinal(end))
    }
}

fn month_ordinal(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn month_label(month: NaiveDate) -> String {
    format!("{} {}", MONTH_LABELS[month.month0() as usize], month.year())
}

/// Base and simulated figures for one projected month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthProjection {
    /// First day of the projected month.
    pub month: NaiveDate,
    pub month_label: String,
    pub base_revenue: f64,
    pub base_expenses: f64,
    pub base_profit: f64,
    pub base_cash: f64,
    pub simulated_revenue: f64,
    pub simulated_expenses: f64,
    pub simulated_profit: f64,
    pub simulated_cash: f64,
    pub revenue_difference: f64,
    pub expenses_difference: f64,
    pub profit_difference: f64,
    pub cash_difference: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub total_revenue_difference: f64,
    pub total_expenses_difference: f64,
    pub total_profit_difference: f64,
    pub final_cash_difference: f64,
    /// Month index at which cumulative profit difference first turns
    /// non-negative after being negative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_even_month: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub projections: Vec<MonthProjection>,
    pub summary: ProjectionSummary,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Project `horizon` months starting at the month containing `start`.
///
/// The baseline repeats verbatim every month; active changes are added on
/// top. Pure and total: empty change lists give base-only figures and a zero
/// horizon gives an empty projection.
pub fn project(
    baseline: &Baseline,
    changes: &[SimulationChange],
    horizon: u32,
    start: NaiveDate,
) -> ProjectionResult {
    let first = first_of_month(start);
    let mut base_cash = baseline.cash_balance;
    let mut sim_cash = baseline.cash_balance;
    let mut cumulative = 0.0;
    let mut summary = ProjectionSummary::default();
    let mut projections = Vec::new();

    let months = (0..horizon).map_while(|i| first.checked_add_months(Months::new(i)).map(|m| (i, m)));
    for (i, month) in months {
        let (revenue_delta, expenses_delta) = changes
            .iter()
            .filter(|c| c.is_active(month))
            .fold((0.0, 0.0), |(rev, exp), c| match c.change_type.target() {
                Metric::Revenue => (rev + c.amount, exp),
                Metric::Expenses => (rev, exp + c.amount),
            });

        let base_revenue = baseline.revenue;
        let base_expenses = baseline.expenses();
        let base_profit = base_revenue - base_expenses;
        let simulated_revenue = base_revenue + revenue_delta;
        let simulated_expenses = base_expenses + expenses_delta;
        let simulated_profit = simulated_revenue - simulated_expenses;
        base_cash += base_profit;
        sim_cash += simulated_profit;

        let profit_difference = simulated_profit - base_profit;
        let previous = cumulative;
        cumulative += profit_difference;
        if i > 0 && summary.break_even_month.is_none() && previous < 0.0 && cumulative >= 0.0 {
            summary.break_even_month = Some(i);
        }

        let p = MonthProjection {
            month,
            month_label: month_label(month),
            base_revenue,
            base_expenses,
            base_profit,
            base_cash,
            simulated_revenue,
            simulated_expenses,
            simulated_profit,
            simulated_cash: sim_cash,
            revenue_difference: simulated_revenue - base_revenue,
            expenses_difference: simulated_expenses - base_expenses,
            profit_difference,
            cash_difference: sim_cash - base_cash,
        };
        summary.total_revenue_difference += p.revenue_difference;
        summary.total_expenses_difference += p.expenses_difference;
        summary.total_profit_difference += p.profit_difference;
        summary.final_cash_difference = p.cash_difference;
        projections.push(p);
    }

    tracing::debug!(
        months = projections.len(),
        changes = changes.len(),
        break_even = ?summary.break_even_month,
        "projection computed"
    );
    ProjectionResult { projections, summary }
}

/// [`project`] starting at the current calendar month.
pub fn project_from_today(
    baseline: &Baseline,
    changes: &[SimulationChange],
    horizon: u32,
) -> ProjectionResult {
    project(baseline, changes, horizon, chrono::Local::now().date_naive())
}
