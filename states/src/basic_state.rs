use chrono::{DateTime, Utc};

use crate::State;

/// Wall-clock time as seen by the state graph.
///
/// The app refreshes it once per frame. Tests set it directly, which keeps
/// anything deadline-based deterministic.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl Default for Time {
    fn default() -> Self {
        Self { virt: Utc::now() }
    }
}

impl Time {
    pub fn at(virt: DateTime<Utc>) -> Self {
        Self { virt }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.virt
    }
}

impl State for Time {}

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.virt
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}
