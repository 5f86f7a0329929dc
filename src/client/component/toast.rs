use dioxus::prelude::*;

use crate::client::{
    model::error::ApiError,
    store::toast::{Toast, ToastKind, Toaster, BULK_FAILURE_TOAST_MS, DEFAULT_TOAST_MS},
};

/// Handle to the toast stack provided by the app root.
#[derive(Clone, Copy)]
pub struct ToastContext {
    inner: Signal<Toaster>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(Toaster::default()),
        }
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.push_for(message, kind, DEFAULT_TOAST_MS);
    }

    pub fn push_for(&mut self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) {
        let id = self.inner.write().push_for(message, kind, duration_ms);

        #[cfg(feature = "web")]
        {
            let mut inner = self.inner;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                inner.write().dismiss(id);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = id;
    }

    /// Reports a failed call; rate limiting is shown as a warning on its own.
    pub fn push_error(&mut self, context: &str, err: &ApiError) {
        if err.is_rate_limited() {
            self.push(err.message.clone(), ToastKind::Warning);
        } else {
            self.push_for(
                format!("{}: {}", context, err),
                ToastKind::Error,
                BULK_FAILURE_TOAST_MS,
            );
        }
    }

    pub fn dismiss(&mut self, id: u32) {
        self.inner.write().dismiss(id);
    }
}

pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>()
}

#[component]
pub fn ToastContainer() -> Element {
    let toasts = use_toasts();
    let items = toasts.inner.read().toasts().to_vec();

    rsx!(
        div {
            class: "toast toast-top toast-end z-50",
            for toast in items {
                ToastItem { key: "{toast.id}", toast }
            }
        }
    )
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut toasts = use_toasts();
    let id = toast.id;
    let alert_class = toast.kind.alert_class();
    let role = if toast.kind == ToastKind::Error {
        "alert"
    } else {
        "status"
    };

    rsx!(
        div {
            class: "alert {alert_class} shadow-lg max-w-sm cursor-pointer",
            role,
            onclick: move |_| toasts.dismiss(id),
            span { class: "text-sm break-words", "{toast.message}" }
        }
    )
}
