use std::time::Duration;

/// How long a toast stays on screen before auto-dismissing.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A fire-and-forget notification shown in the overlay stack.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
}
