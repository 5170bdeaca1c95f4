//! Receiving side of the channel sink

use super::{IntakeRecord, Profile, ProfileStore};
use tokio::sync::mpsc;

/// Result of handling one submitted record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingOutcome {
    Completed(Profile),
    Failed(String),
}

/// Persists the first successfully stored record as the user's profile.
///
/// Records arriving after a completed onboarding are dropped, so repeated
/// submits from the form are harmless. A failed save leaves the onboarder
/// waiting for another attempt.
pub struct Onboarder {
    records: mpsc::UnboundedReceiver<IntakeRecord>,
    store: ProfileStore,
    outcomes: mpsc::UnboundedSender<OnboardingOutcome>,
}

impl Onboarder {
    pub fn new(
        records: mpsc::UnboundedReceiver<IntakeRecord>,
        store: ProfileStore,
    ) -> (Self, mpsc::UnboundedReceiver<OnboardingOutcome>) {
        let (outcomes, outcome_rx) = mpsc::unbounded_channel();
        (
            Self {
                records,
                store,
                outcomes,
            },
            outcome_rx,
        )
    }

    /// Run until the sending side is dropped
    pub async fn run(mut self) {
        let mut completed = false;

        while let Some(record) = self.records.recv().await {
            if completed {
                tracing::debug!("ignoring record received after onboarding completed");
                continue;
            }

            let profile = Profile::from_record(record);
            let outcome = match self.store.save(&profile).await {
                Ok(()) => {
                    tracing::info!(id = %profile.id, "onboarding completed");
                    completed = true;
                    OnboardingOutcome::Completed(profile)
                }
                Err(err) => {
                    tracing::error!("failed to save profile: {err:#}");
                    OnboardingOutcome::Failed(format!("Could not save profile: {err:#}"))
                }
            };

            if self.outcomes.send(outcome).is_err() {
                tracing::debug!("outcome receiver closed, stopping onboarder");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(first: &str) -> IntakeRecord {
        IntakeRecord {
            first_name: first.to_string(),
            last_name: "Silva".to_string(),
            email: "a@b.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_first_record_is_stored() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));
        let (tx, rx) = mpsc::unbounded_channel();
        let (onboarder, mut outcomes) = Onboarder::new(rx, store.clone());

        tx.send(record("Ana")).unwrap();
        drop(tx);
        onboarder.run().await;

        match outcomes.recv().await {
            Some(OnboardingOutcome::Completed(profile)) => {
                assert_eq!(profile.first_name, "Ana");
                assert_eq!(store.load().await.unwrap(), Some(profile));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_duplicate_records_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));
        let (tx, rx) = mpsc::unbounded_channel();
        let (onboarder, mut outcomes) = Onboarder::new(rx, store.clone());

        tx.send(record("Ana")).unwrap();
        tx.send(record("Bea")).unwrap();
        drop(tx);
        onboarder.run().await;

        assert!(matches!(
            outcomes.recv().await,
            Some(OnboardingOutcome::Completed(_))
        ));
        assert!(outcomes.recv().await.is_none());
        let stored = store.load().await.unwrap().unwrap();
        assert_eq!(stored.first_name, "Ana");
    }

    #[tokio::test]
    async fn test_failed_save_reports_and_allows_retry() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the write fail
        let path = dir.path().join("profile.json");
        std::fs::create_dir(&path).unwrap();
        let store = ProfileStore::new(&path);
        let (tx, rx) = mpsc::unbounded_channel();
        let (onboarder, mut outcomes) = Onboarder::new(rx, store);

        tx.send(record("Ana")).unwrap();
        tx.send(record("Ana")).unwrap();
        drop(tx);
        onboarder.run().await;

        assert!(matches!(
            outcomes.recv().await,
            Some(OnboardingOutcome::Failed(_))
        ));
        assert!(matches!(
            outcomes.recv().await,
            Some(OnboardingOutcome::Failed(_))
        ));
    }
}
