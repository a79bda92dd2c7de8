pub mod amortization;

pub use amortization::{annuity_payment, build_schedule, total_cost, PaymentScheduleEntry};
