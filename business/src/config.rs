use std::{env::vars, time::Duration};

use anyhow::ensure;
use log::info;
use roster_states::State;
use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_TOAST_SECONDS: u64 = 4;
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    page_size: usize,
    toast_duration: Duration,
    login_delay: Duration,
}

// Intermediate struct for deserializing environment variables,
// every field falls back to a default.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    roster_page_size: Option<usize>,
    roster_toast_seconds: Option<u64>,
    roster_login_delay_ms: Option<u64>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            toast_duration: Duration::from_secs(DEFAULT_TOAST_SECONDS),
            login_delay: Duration::from_millis(DEFAULT_LOGIN_DELAY_MS),
        }
    }
}

impl RosterConfig {
    /// Reads `ROSTER_PAGE_SIZE`, `ROSTER_TOAST_SECONDS` and
    /// `ROSTER_LOGIN_DELAY_MS` from the process environment.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_vars(vars())
    }

    pub fn from_vars<S: AsRef<str>>(
        vars: impl IntoIterator<Item = (S, S)>,
    ) -> anyhow::Result<Self> {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            roster_page_size,
            roster_toast_seconds,
            roster_login_delay_ms,
        } = raw;

        let page_size = roster_page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        ensure!(page_size > 0, "ROSTER_PAGE_SIZE must be greater than 0");

        let toast_seconds = roster_toast_seconds.unwrap_or(DEFAULT_TOAST_SECONDS);
        ensure!(
            toast_seconds > 0,
            "ROSTER_TOAST_SECONDS must be greater than 0"
        );

        let config = Self {
            page_size,
            toast_duration: Duration::from_secs(toast_seconds),
            login_delay: Duration::from_millis(
                roster_login_delay_ms.unwrap_or(DEFAULT_LOGIN_DELAY_MS),
            ),
        };
        info!("Using {config:?}");
        Ok(config)
    }

    /// Test configuration: no login delay, everything else default.
    pub fn new_for_test() -> Self {
        Self {
            login_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_login_delay(mut self, login_delay: Duration) -> Self {
        self.login_delay = login_delay;
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn toast_duration(&self) -> Duration {
        self.toast_duration
    }

    pub fn login_delay(&self) -> Duration {
        self.login_delay
    }
}

impl State for RosterConfig {}
