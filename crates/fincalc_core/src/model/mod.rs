mod inputs;
mod results;

pub use inputs::{
    AssetHoldings, BacktestInput, BudgetInput, CompoundInput, ContributionPolicy, ExpectancyInput,
    GoalInput, Granularity, Horizon, MonthlyExpenses, MonthlyIncome, RateBasis,
};
pub use results::{
    BacktestResult, BacktestYear, CategoryShare, CompoundProjection, ExpectancyResult,
    GoalResult, GoalYear, PatternPoint, ProjectionPoint, RecoveryRow, ReviewResult, RuinPoint,
    SpendingStatus, Sustainability, YearValue,
};
