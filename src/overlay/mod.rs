//! Ephemeral celebration overlay.
//!
//! A successful calculation triggers a short burst of decorative tokens
//! printed on a timed schedule. Each trigger is fire-and-forget: the tokens
//! never feed back into calculation state, and the whole overlay clears
//! itself once its window elapses.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

/// Configuration for one overlay: which tokens rain down and for how long.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Tokens to display, one timed task each
    pub tokens: Vec<String>,

    /// Total window before the overlay clears itself
    pub duration: Duration,

    /// Upper bound on the per-token spawn delay
    pub max_spawn_delay: Duration,

    /// Width of the band tokens are scattered across
    pub columns: u16,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            tokens: [
                "💎",
                "🚀",
                "🚀 To the Moon!",
                "💎 Hands",
                "🦍 Apes Strong Together",
                "🦧 YOLO",
                "🦄 Unicorn Mode",
                "📈 Diamond Hands",
                "💰 Bag Holder",
                "📉 Paper Hands",
                "🔥 FOMO",
                "💸 Lambo",
                "🦍🚀",
                "💎💎💎",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            duration: Duration::from_secs(7),
            max_spawn_delay: Duration::from_secs(1),
            columns: 48,
        }
    }
}

impl OverlayConfig {
    /// Token set for the profit/loss panel.
    pub fn profit() -> Self {
        Self {
            tokens: [
                "💎",
                "🚀",
                "🚀 To the Moon!",
                "💎 Hands",
                "🦍 Apes Strong Together",
                "🔥 Profit Time!",
                "💰 Cash In!",
                "📈 Winning Trade",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            ..Self::default()
        }
    }
}

/// Reusable trigger for an ephemeral token overlay.
pub struct Overlay {
    config: OverlayConfig,
}

impl Overlay {
    pub fn new(config: OverlayConfig) -> Self {
        Self { config }
    }

    /// Fire the overlay once. Each token gets an independent timed task with
    /// a random spawn delay and column; the returned handle completes when
    /// the overlay window has fully elapsed and everything is cleared.
    ///
    /// Callers may detach the handle (the overlay carries no state) or await
    /// it to keep the process alive through the animation.
    pub fn trigger(&self) -> JoinHandle<()> {
        let mut rng = rand::rng();
        let max_delay_ms = self.config.max_spawn_delay.as_millis() as u64;
        let columns = self.config.columns.max(1);

        // Plan the randomness up front; the tasks themselves are deterministic.
        let plan: Vec<(String, u64, u16)> = self
            .config
            .tokens
            .iter()
            .map(|token| {
                (
                    token.clone(),
                    rng.random_range(0..=max_delay_ms),
                    rng.random_range(0..columns),
                )
            })
            .collect();

        let duration = self.config.duration;
        debug!(tokens = plan.len(), "Overlay triggered");

        tokio::spawn(async move {
            let started = tokio::time::Instant::now();

            let drops: Vec<JoinHandle<()>> = plan
                .into_iter()
                .map(|(token, delay_ms, column)| {
                    tokio::spawn(async move {
                        sleep(Duration::from_millis(delay_ms)).await;
                        println!("{}{}", " ".repeat(column as usize), token);
                    })
                })
                .collect();

            let _ = futures::future::join_all(drops).await;

            // Hold the window open for its full duration, then clear.
            if let Some(remaining) = duration.checked_sub(started.elapsed()) {
                sleep(remaining).await;
            }
            debug!("Overlay cleared");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_config() -> OverlayConfig {
        OverlayConfig {
            tokens: vec!["*".to_string(), "**".to_string()],
            duration: Duration::from_millis(50),
            max_spawn_delay: Duration::from_millis(10),
            columns: 4,
        }
    }

    #[tokio::test]
    async fn test_trigger_self_clears() {
        let overlay = Overlay::new(quick_config());
        let handle = overlay.trigger();

        // The handle resolves on its own once the window elapses.
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("overlay did not clear in time")
            .expect("overlay task panicked");
    }

    #[tokio::test]
    async fn test_triggers_are_independent() {
        let overlay = Overlay::new(quick_config());
        let first = overlay.trigger();
        let second = overlay.trigger();

        let (a, b) = tokio::join!(first, second);
        assert!(a.is_ok());
        assert!(b.is_ok());
    }

    #[test]
    fn test_default_window_is_seven_seconds() {
        assert_eq!(OverlayConfig::default().duration, Duration::from_secs(7));
        assert!(!OverlayConfig::profit().tokens.is_empty());
    }
}
