pub mod mock {
    use crate::api::client::mock::{register, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const PUT: Method = Method::PUT;
    pub const PATCH: Method = Method::PATCH;
    pub const DELETE: Method = Method::DELETE;

    /// In-process stand-in for the HR API. Routes match on method and path; the most
    /// recently registered route wins, and `times(n)` routes are used up after `n` hits.
    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    struct Inner {
        routes: Vec<Route>,
        calls: Vec<(Method, String)>,
    }

    struct Route {
        method: Method,
        path: String,
        response: MockResponse,
        remaining: Option<usize>,
    }

    impl MockServer {
        pub async fn start_async() -> Self {
            Self::start()
        }

        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                inner: Arc::new(Mutex::new(Inner {
                    routes: Vec::new(),
                    calls: Vec::new(),
                })),
                base: format!("http://mock-{}", id),
            }
        }

        pub fn url(&self, path: &str) -> String {
            let base_url = format!("{}{}", self.base, path);
            register(base_url.clone(), Arc::new(self.clone()));
            base_url
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let status = then.status.unwrap_or(200);
            let response = match then.raw.take() {
                Some(bytes) => MockResponse::bytes(status, bytes),
                None => MockResponse::json(
                    status,
                    then.body.take().unwrap_or_else(|| serde_json::json!({})),
                ),
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                response,
                remaining: then.times,
            });
        }

        /// Requests seen so far, in order, as `(method, path)`.
        pub fn calls(&self) -> Vec<(Method, String)> {
            self.inner.lock().expect("mock lock").calls.clone()
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            self.calls()
                .into_iter()
                .filter(|(m, p)| *m == method && p == path)
                .count()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method().clone();
            let path = request.url().path().to_string();
            let mut inner = self
                .inner
                .lock()
                .map_err(|_| ApiError::network("mock lock"))?;
            inner.calls.push((method.clone(), path.clone()));

            let route = inner
                .routes
                .iter_mut()
                .rev()
                .filter(|route| route.remaining != Some(0))
                .find(|route| route.method == method && route.path == path)
                .ok_or_else(|| ApiError::network(format!("No mock for {} {}", method, path)))?;
            if let Some(remaining) = route.remaining.as_mut() {
                *remaining -= 1;
            }
            Ok(route.response.clone())
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        raw: Option<Vec<u8>>,
        times: Option<usize>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn body(&mut self, bytes: impl Into<Vec<u8>>) -> &mut Self {
            self.raw = Some(bytes.into());
            self
        }

        pub fn times(&mut self, times: usize) -> &mut Self {
            self.times = Some(times);
            self
        }
    }

    /// `{code, data}` envelope.
    pub fn envelope(code: i64, data: Value) -> Value {
        serde_json::json!({ "code": code, "data": data })
    }

    /// `{code, message}` envelope with no payload.
    pub fn rejection(code: i64, message: &str) -> Value {
        serde_json::json!({ "code": code, "message": message })
    }
}
