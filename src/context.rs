//! Application Context
//!
//! Shared configuration and reload triggers provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;

/// Grants the startup seed to exactly one loader run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedLatch {
    claimed: bool,
}

impl SeedLatch {
    /// True only for the first caller
    pub fn claim(&mut self) -> bool {
        !std::mem::replace(&mut self.claimed, true)
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    seed: StoredValue<SeedLatch>,
    /// Bumped to re-run the feed loader - read
    pub feed_trigger: ReadSignal<u32>,
    set_feed_trigger: WriteSignal<u32>,
    /// Bumped to re-run the marketplace loader - read
    pub marketplace_trigger: ReadSignal<u32>,
    set_marketplace_trigger: WriteSignal<u32>,
    /// Bumped to re-run the events loader - read
    pub events_trigger: ReadSignal<u32>,
    set_events_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let (feed_trigger, set_feed_trigger) = signal(0u32);
        let (marketplace_trigger, set_marketplace_trigger) = signal(0u32);
        let (events_trigger, set_events_trigger) = signal(0u32);
        Self {
            config: StoredValue::new(config),
            seed: StoredValue::new(SeedLatch::default()),
            feed_trigger,
            set_feed_trigger,
            marketplace_trigger,
            set_marketplace_trigger,
            events_trigger,
            set_events_trigger,
        }
    }

    /// Owned copy of the configuration, for moving into async tasks
    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Claim the startup seed; must be called before any await
    pub fn claim_seed(&self) -> bool {
        let mut latch = self.seed.get_value();
        let claimed = latch.claim();
        self.seed.set_value(latch);
        claimed
    }

    pub fn reload_feed(&self) {
        self.set_feed_trigger.update(|v| *v += 1);
    }

    pub fn reload_marketplace(&self) {
        self.set_marketplace_trigger.update(|v| *v += 1);
    }

    pub fn reload_events(&self) {
        self.set_events_trigger.update(|v| *v += 1);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_latch_claims_once() {
        let mut latch = SeedLatch::default();
        assert!(latch.claim());
        assert!(!latch.claim());
        assert!(!latch.claim());
    }
}
