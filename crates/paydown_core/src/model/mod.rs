mod debt;
mod ids;
mod preferences;
mod results;

pub use debt::{Debt, Ledger, Payment, SimulatedDebt};
pub use ids::{DebtId, PaymentId};
pub use preferences::{Preferences, Strategy, WeekStart};
pub use results::{MonthlyScheduleEntry, PaymentRecord, SimulationResult};
