use crate::{
    client::store::toast::{ToastKind, BULK_FAILURE_TOAST_MS, DEFAULT_TOAST_MS},
    model::server::OperationResultDto,
};

/// Aggregate of a bulk endpoint answer, one entry per targeted server.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BulkOutcome {
    pub succeeded: usize,
    pub failures: Vec<String>,
}

impl BulkOutcome {
    pub fn from_results(results: &[OperationResultDto]) -> Self {
        let mut outcome = Self::default();
        for result in results {
            if result.success {
                outcome.succeeded += 1;
            } else {
                let message = if result.message.is_empty() {
                    "Error"
                } else {
                    result.message.as_str()
                };
                outcome.failures.push(format!("{}: {}", result.ip, message));
            }
        }
        outcome
    }

    pub fn toast_kind(&self) -> ToastKind {
        if self.failures.is_empty() {
            ToastKind::Success
        } else if self.succeeded > 0 {
            ToastKind::Warning
        } else {
            ToastKind::Error
        }
    }

    pub fn toast_duration_ms(&self) -> u32 {
        if self.failures.is_empty() {
            DEFAULT_TOAST_MS
        } else {
            BULK_FAILURE_TOAST_MS
        }
    }

    /// Toast text, `action` being a phrase like `Script "update.sh"` or `Reboot`.
    pub fn summary(&self, action: &str) -> String {
        if self.failures.is_empty() {
            format!("{} finished on {} server(s).", action, self.succeeded)
        } else {
            format!(
                "Succeeded: {}, failed: {}. {}",
                self.succeeded,
                self.failures.len(),
                self.failures.join("; ")
            )
        }
    }

    /// Every target succeeded; forms reset only in this case.
    pub fn all_succeeded(&self) -> bool {
        self.succeeded > 0 && self.failures.is_empty()
    }

    pub fn should_clear_selection(&self) -> bool {
        self.succeeded > 0 || !self.failures.is_empty()
    }
}
