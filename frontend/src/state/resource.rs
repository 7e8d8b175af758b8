use crate::api::ApiError;
use leptos::*;
use std::{future::Future, pin::Pin, rc::Rc};

/// Snapshot of one remote-backed view. Replaced as a whole on every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> ResourceState<T> {
    pub fn begin(self) -> Self {
        Self {
            data: self.data,
            loading: true,
            error: None,
        }
    }

    /// A failure keeps the previous data so a refresh error does not blank the table.
    pub fn finish(self, result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self {
                data: Some(data),
                loading: false,
                error: None,
            },
            Err(error) => Self {
                data: self.data,
                loading: false,
                error: Some(error),
            },
        }
    }

    pub fn is_initial_load(&self) -> bool {
        self.loading && self.data.is_none()
    }
}

type LoadFuture<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>>>>;
type Loader<P, T> = Rc<dyn Fn(P) -> LoadFuture<T>>;

/// Load/loading/error/data state for one API call, parametrised by `P`.
///
/// Responses that arrive after a newer `load` started, or after the owning view was
/// disposed, are ignored.
pub struct RemoteResource<P: 'static, T: 'static> {
    state: RwSignal<ResourceState<T>>,
    generation: StoredValue<u64>,
    last_params: StoredValue<Option<P>>,
    loader: StoredValue<Loader<P, T>>,
}

impl<P: 'static, T: 'static> Clone for RemoteResource<P, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: 'static, T: 'static> Copy for RemoteResource<P, T> {}

impl<P: Clone + 'static, T: Clone + 'static> RemoteResource<P, T> {
    pub fn new<F, Fut>(loader: F) -> Self
    where
        F: Fn(P) -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let boxed: Loader<P, T> = Rc::new(move |params: P| -> LoadFuture<T> {
            Box::pin(loader(params))
        });
        Self {
            state: create_rw_signal(ResourceState::default()),
            generation: store_value(0),
            last_params: store_value(None),
            loader: store_value(boxed),
        }
    }

    pub fn state(&self) -> Signal<ResourceState<T>> {
        self.state.into()
    }

    pub fn data(&self) -> Signal<Option<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.data.clone()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading))
    }

    pub fn error(&self) -> Signal<Option<ApiError>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }

    /// Starts a fetch in the background.
    pub fn load(&self, params: P) {
        let resource = *self;
        spawn_local(async move { resource.fetch(params).await });
    }

    /// Repeats the last `load` with the same parameters. No-op before the first load.
    pub fn reload(&self) {
        let resource = *self;
        spawn_local(async move { resource.refetch().await });
    }

    pub async fn fetch(&self, params: P) {
        let Some(loader) = self.loader.try_get_value() else {
            return;
        };
        let Some(generation) = self.generation.try_update_value(|g| {
            *g += 1;
            *g
        }) else {
            return;
        };
        self.last_params.try_set_value(Some(params.clone()));
        self.state.try_update(|s| *s = std::mem::take(s).begin());

        let result = loader(params).await;

        if self.generation.try_get_value() != Some(generation) {
            return;
        }
        if let Err(err) = &result {
            log::warn!("load failed: {}", err);
        }
        self.state.try_update(|s| *s = std::mem::take(s).finish(result));
    }

    pub async fn refetch(&self) {
        if let Some(Some(params)) = self.last_params.try_get_value() {
            self.fetch(params).await;
        }
    }

    /// Awaits `mutation`, then reloads so the view reflects the server's state.
    /// The reload also runs after a failure, so a rejected change shows what the
    /// server actually holds.
    pub async fn mutate<R, M>(&self, mutation: M) -> Result<R, ApiError>
    where
        M: Future<Output = Result<R, ApiError>>,
    {
        let result = mutation.await;
        self.refetch().await;
        result
    }

    /// Edits the loaded data in place. Only for changes the server has already
    /// confirmed; the next reload replaces the data anyway.
    pub fn patch(&self, f: impl FnOnce(&mut T)) {
        self.state.try_update(|s| {
            if let Some(data) = s.data.as_mut() {
                f(data);
            }
        });
    }
}
