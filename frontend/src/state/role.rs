use crate::api::{ApiClient, ApiError, CurrentUser, Role};
use leptos::*;

/// Outcome of asking the server who the current user is. `Pending` is kept apart
/// from `Failed` so guards never deny before the answer arrives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RoleResolution {
    #[default]
    Pending,
    Resolved(CurrentUser),
    Failed(ApiError),
    /// Dropped on logout; nothing is being fetched.
    SignedOut,
}

impl RoleResolution {
    pub fn is_pending(&self) -> bool {
        matches!(self, RoleResolution::Pending)
    }

    /// The acting role; `Unresolved` while pending or after a failure.
    pub fn role(&self) -> Role {
        match self {
            RoleResolution::Resolved(user) => user.role,
            RoleResolution::Pending | RoleResolution::Failed(_) | RoleResolution::SignedOut => {
                Role::Unresolved
            }
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            RoleResolution::Resolved(user) if !user.email.is_empty() => Some(&user.email),
            _ => None,
        }
    }
}

impl From<Result<CurrentUser, ApiError>> for RoleResolution {
    fn from(result: Result<CurrentUser, ApiError>) -> Self {
        match result {
            Ok(user) => RoleResolution::Resolved(user),
            Err(err) => RoleResolution::Failed(err),
        }
    }
}

pub async fn fetch_role(api: &ApiClient) -> Result<CurrentUser, ApiError> {
    api.fetch_current_user().await
}

/// Caches the current user's role for the lifetime of the navigation shell.
#[derive(Clone, Copy)]
pub struct RoleResolver {
    state: RwSignal<RoleResolution>,
    generation: StoredValue<u64>,
    api: StoredValue<ApiClient>,
}

impl RoleResolver {
    pub fn new(api: ApiClient) -> Self {
        Self {
            state: create_rw_signal(RoleResolution::Pending),
            generation: store_value(0),
            api: store_value(api),
        }
    }

    pub fn resolution(&self) -> Signal<RoleResolution> {
        self.state.into()
    }

    pub fn role(&self) -> Signal<Role> {
        let state = self.state;
        Signal::derive(move || state.with(RoleResolution::role))
    }

    /// Starts the fetch in the background.
    pub fn load(&self) {
        let resolver = *self;
        spawn_local(async move { resolver.refresh().await });
    }

    /// Re-runs the fetch, e.g. after login. Answers from an older fetch are dropped.
    pub async fn refresh(&self) {
        let Some(api) = self.api.try_get_value() else {
            return;
        };
        let Some(generation) = self.generation.try_update_value(|g| {
            *g += 1;
            *g
        }) else {
            return;
        };
        self.state.try_set(RoleResolution::Pending);

        let result = fetch_role(&api).await;
        if let Err(err) = &result {
            log::warn!("role lookup failed: {}", err);
        }
        if self.generation.try_get_value() != Some(generation) {
            return;
        }
        self.state.try_set(result.into());
    }

    #[cfg(test)]
    pub fn overwrite_for_test(&self, resolution: RoleResolution) {
        self.state.set(resolution);
    }

    /// Forgets the cached role, e.g. on logout.
    pub fn clear(&self) {
        self.generation.try_update_value(|g| *g += 1);
        self.state.try_set(RoleResolution::SignedOut);
    }
}

/// Resolver shared through context. When a page is mounted without the shell,
/// a resolver is created and loaded on the spot.
pub fn use_role_resolver() -> RoleResolver {
    match use_context::<RoleResolver>() {
        Some(resolver) => resolver,
        None => {
            let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
            let resolver = RoleResolver::new(api);
            provide_context(resolver);
            resolver.load();
            resolver
        }
    }
}
