pub mod client;
pub mod config;
pub mod decimal;
pub mod documents;
pub mod errors;
pub mod events;
pub mod payments;
pub mod pricing;
pub mod statement;
pub mod store;
pub mod types;
pub mod workflow;

// re-export key types
pub use client::{Client, FinishRegistration, LoanRequest, Passport};
pub use config::RateConfig;
pub use decimal::{Money, Rate};
pub use documents::{DocumentData, DocumentRenderer, TextDocumentRenderer};
pub use errors::{OriginationError, Result};
pub use events::{Notification, NotificationSink, RecordingSink, Topic};
pub use payments::{annuity_payment, build_schedule, total_cost, PaymentScheduleEntry};
pub use pricing::{check_eligibility, rate_adjustment, Calculator, LoanOffer};
pub use statement::Statement;
pub use store::{ApplicationStore, InMemoryStore};
pub use types::{
    ApplicationStatus, ChangeType, ClientId, Credit, CreditId, CreditStatus, Employment,
    EmploymentStatus, Gender, MaritalStatus, ScoringData, StatementId, StatusHistoryEntry,
    WorkPosition,
};
pub use workflow::{
    generate_signature_code, LocalPricingService, OriginationService, PricingService,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
