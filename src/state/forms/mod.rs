//! Form domain layer
//!
//! Field value objects, validators and the onboarding page state machine.

mod field;
mod onboarding;
mod validate;

pub use field::FormField;
pub use onboarding::{OnboardingController, OnboardingPage, Step};
pub use validate::EmailPattern;
