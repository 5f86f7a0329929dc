pub const DEFAULT_TOAST_MS: u32 = 4000;
pub const BULK_FAILURE_TOAST_MS: u32 = 7000;

/// Deletes run one request per server, so the progress toast stays up longer for more.
pub fn delete_progress_ms(count: usize) -> u32 {
    3000 + 300 * count as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    /// daisyUI alert modifier.
    pub fn alert_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "alert-success",
            ToastKind::Error => "alert-error",
            ToastKind::Warning => "alert-warning",
            ToastKind::Info => "alert-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toaster {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl Toaster {
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u32 {
        self.push_for(message, kind, DEFAULT_TOAST_MS)
    }

    pub fn push_for(&mut self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            duration_ms,
        });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids_and_default_duration() {
        let mut toaster = Toaster::default();

        let first = toaster.push("Loaded 3 servers", ToastKind::Success);
        let second = toaster.push_for("Deleting", ToastKind::Info, delete_progress_ms(2));

        assert_ne!(first, second);
        assert_eq!(toaster.toasts()[0].duration_ms, DEFAULT_TOAST_MS);
        assert_eq!(toaster.toasts()[1].duration_ms, 3600);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut toaster = Toaster::default();
        let first = toaster.push("a", ToastKind::Info);
        toaster.push("b", ToastKind::Error);

        toaster.dismiss(first);
        toaster.dismiss(999);

        assert_eq!(toaster.toasts().len(), 1);
        assert_eq!(toaster.toasts()[0].message, "b");
    }
}
