//! Password hardener - runs the ordered stages over a password.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::avoid_list::AvoidList;
use crate::random::{CharacterSource, RngSource};
use crate::stages::{
    HardeningState, Stage, ensure_digit, ensure_lowercase, ensure_uppercase, pad_to_minimum,
    scrub_avoid_list, suppress_repeats, trim_to_maximum,
};

/// Stages in execution order.
///
/// No stage re-checks the ones before it: class repair may grow the password
/// past the maximum length, and avoid list repair may reintroduce a third
/// occurrence of a character. Both are part of the policy as defined.
const STAGES: [(&str, Stage); 7] = [
    ("pad", pad_to_minimum),
    ("trim", trim_to_maximum),
    ("lowercase", ensure_lowercase),
    ("uppercase", ensure_uppercase),
    ("digit", ensure_digit),
    ("repeats", suppress_repeats),
    ("avoid", scrub_avoid_list),
];

/// Operations performed by a single stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    pub name: &'static str,
    pub operations: usize,
}

/// A password after hardening.
///
/// All work happens in the constructor; the result is read-only.
#[derive(Debug)]
pub struct HardenedPassword {
    original: SecretString,
    hardened: SecretString,
    length: usize,
    operations: usize,
    stages: Vec<StageReport>,
}

impl HardenedPassword {
    /// Hardens `password`, drawing replacement characters from the thread RNG.
    pub fn new(password: &SecretString, avoid: &AvoidList) -> Self {
        Self::with_source(password, avoid, &mut RngSource::thread())
    }

    /// Hardens `password`, drawing replacement characters from `source`.
    ///
    /// With a seeded source the result is fully reproducible.
    pub fn with_source<S: CharacterSource>(
        password: &SecretString,
        avoid: &AvoidList,
        source: &mut S,
    ) -> Self {
        let mut state = HardeningState::new(password.expose_secret(), avoid, source);
        let mut stages = Vec::with_capacity(STAGES.len());

        // Orchestrator: execute stages in sequence
        for (name, stage) in STAGES {
            let before = state.operations();
            stage(&mut state);
            let operations = state.operations() - before;

            #[cfg(feature = "tracing")]
            tracing::debug!(
                "stage {} done: {} operations, length {}",
                name,
                operations,
                state.len()
            );

            stages.push(StageReport { name, operations });
        }

        let (buffer, operations) = state.finish();
        let hardened: String = buffer.iter().collect();

        #[cfg(feature = "tracing")]
        tracing::info!(
            "password hardened: {} operations, final length {}",
            operations,
            buffer.len()
        );

        Self {
            original: SecretString::new(password.expose_secret().into()),
            hardened: SecretString::new(hardened.into()),
            length: buffer.len(),
            operations,
            stages,
        }
    }

    pub fn original(&self) -> &SecretString {
        &self.original
    }

    pub fn final_password(&self) -> &SecretString {
        &self.hardened
    }

    /// Number of appends, removals and replacements performed.
    pub fn operation_count(&self) -> usize {
        self.operations
    }

    /// Length of the hardened password in characters.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Per-stage operation counts, in execution order.
    pub fn stage_reports(&self) -> &[StageReport] {
        &self.stages
    }

    /// Renders the original password, the hardened password and the
    /// operation count, one per line.
    pub fn report(&self) -> String {
        format!(
            "Original password: {}\nSecure password: {}\nOperations required: {}\n",
            self.original.expose_secret(),
            self.hardened.expose_secret(),
            self.operations
        )
    }
}

/// Async version that sends the hardened password via channel.
///
/// Nothing is hardened or sent if `token` is already cancelled.
#[cfg(feature = "async")]
pub async fn harden_password_tx(
    password: &SecretString,
    avoid: &AvoidList,
    token: CancellationToken,
    tx: mpsc::Sender<HardenedPassword>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("hardening cancelled before start");
        return;
    }

    let hardened = HardenedPassword::new(password, avoid);

    if let Err(_e) = tx.send(hardened).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send hardened password: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    async fn test_harden_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let avoid = AvoidList::default();

        harden_password_tx(&secret("abc"), &avoid, token, tx).await;

        let hardened = rx.recv().await.expect("Should receive hardened password");
        assert!(hardened.len() >= 7);
        assert_eq!(hardened.original().expose_secret(), "abc");
    }

    #[tokio::test]
    async fn test_harden_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();
        let avoid = AvoidList::default();

        harden_password_tx(&secret("abc"), &avoid, token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_harden_password_tx_closed_channel() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let avoid = AvoidList::default();

        harden_password_tx(&secret("abc"), &avoid, CancellationToken::new(), tx).await;
    }
}
