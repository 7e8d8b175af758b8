use crate::api::ApiError;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient notifications shown in the corner of every page.
#[derive(Clone, Copy)]
pub struct ToastStore {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastStore {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(1),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn push_success(&self, message: impl Into<String>) -> Option<u64> {
        self.push(ToastKind::Success, message.into())
    }

    /// Shows the server's message when there is one, else `fallback`.
    pub fn push_error(&self, error: &ApiError, fallback: &str) -> Option<u64> {
        self.push(ToastKind::Error, error.user_message(fallback))
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts
            .try_update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) -> Option<u64> {
        let id = self.next_id.try_update_value(|next| {
            let id = *next;
            *next += 1;
            id
        })?;
        self.toasts.try_update(|toasts| {
            toasts.push(Toast { id, kind, message });
        })?;
        self.schedule_dismiss(id);
        Some(id)
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let store = *self;
        let timeout = crate::config::runtime().toast_timeout_ms();
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(timeout).await;
            store.dismiss(id);
        });
    }

    // No timers outside the browser; host tests dismiss explicitly.
    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

pub fn use_toasts() -> ToastStore {
    match use_context::<ToastStore>() {
        Some(store) => store,
        None => {
            let store = ToastStore::new();
            provide_context(store);
            store
        }
    }
}
