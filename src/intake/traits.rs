//! Trait abstraction for the identity intake sink to enable mocking in tests

use super::IntakeRecord;

/// Receives a completed onboarding record.
///
/// Delivery is fire-and-forget from the form's point of view: the sink owns any
/// storage, retries and navigation that follow.
#[cfg_attr(test, mockall::automock)]
pub trait IntakeSink: Send {
    fn onboard(&mut self, record: IntakeRecord);
}
