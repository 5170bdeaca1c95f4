//! Identity intake: the sink the onboarding form submits to, and the task that
//! turns a submitted record into a stored profile.

mod channel;
mod onboarder;
mod record;
mod store;
mod traits;

pub use channel::ChannelIntakeSink;
pub use onboarder::{Onboarder, OnboardingOutcome};
pub use record::{IntakeRecord, Profile};
pub use store::ProfileStore;
pub use traits::IntakeSink;

#[cfg(test)]
pub use traits::MockIntakeSink;
