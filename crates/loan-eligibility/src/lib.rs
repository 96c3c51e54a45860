//! Loan eligibility evaluation and the ambient plumbing shared by the service.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod telemetry;
