use crate::utils::storage::{KeyValueStore, LocalStorage, MemoryStorage};
use leptos::*;
use std::rc::Rc;

pub const SESSION_FLAG_KEY: &str = "hrms_session";
const PROBE_KEY: &str = "hrms_storage_probe";

/// Whether the browser holds a signed-in session. The in-memory flag is always
/// re-read from storage after a write, so the two never disagree.
#[derive(Clone, Copy)]
pub struct SessionStore {
    authenticated: RwSignal<bool>,
    storage: StoredValue<Rc<dyn KeyValueStore>>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        let authenticated = create_rw_signal(read_flag(storage.as_ref()));
        Self {
            authenticated,
            storage: store_value(storage),
        }
    }

    /// Backed by `localStorage`, or by memory when the browser refuses storage
    /// (private mode, quota), in which case the session lasts for the page only.
    pub fn browser() -> Self {
        let probe = LocalStorage
            .set(PROBE_KEY, "1")
            .and_then(|_| LocalStorage.remove(PROBE_KEY));
        match probe {
            Ok(()) => Self::new(Rc::new(LocalStorage)),
            Err(err) => {
                log::warn!("localStorage unavailable ({}), session will not persist", err);
                Self::new(Rc::new(MemoryStorage::default()))
            }
        }
    }

    pub fn login(&self) {
        self.write(true);
        log::info!("session started");
    }

    pub fn logout(&self) {
        self.write(false);
        log::info!("session cleared");
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.try_get_untracked().unwrap_or(false)
    }

    /// Tracked view of the flag for guards and menus.
    pub fn authenticated(&self) -> Signal<bool> {
        self.authenticated.into()
    }

    fn write(&self, value: bool) {
        let persisted = self.storage.try_with_value(|storage| {
            let result = if value {
                storage.set(SESSION_FLAG_KEY, "1")
            } else {
                storage.remove(SESSION_FLAG_KEY)
            };
            if let Err(err) = result {
                log::warn!("failed to persist session flag: {}", err);
            }
            read_flag(storage.as_ref())
        });
        // None means the owning scope is gone; nothing left to update.
        if let Some(persisted) = persisted {
            self.authenticated.try_set(persisted);
        }
    }
}

fn read_flag(storage: &dyn KeyValueStore) -> bool {
    storage.get(SESSION_FLAG_KEY).as_deref() == Some("1")
}

pub fn use_session() -> SessionStore {
    match use_context::<SessionStore>() {
        Some(session) => session,
        None => {
            let session = SessionStore::browser();
            provide_context(session);
            session
        }
    }
}
