//! Remote value bound to a fetch function.
//!
//! `refetch` may be called at any time; only the newest request is allowed to
//! land. Older responses still complete on the wire but are dropped when they
//! arrive.

use contracts::shared::api_error::ApiError;
use contracts::shared::resource::{ResourceSnapshot, ResourceState};
use leptos::prelude::*;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

type FetchFuture<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>>>>;
type Fetcher<T> = Arc<dyn Fn() -> FetchFuture<T> + Send + Sync>;

pub struct RemoteResource<T: Send + Sync + 'static> {
    snapshot: RwSignal<ResourceSnapshot<T>>,
    fetcher: StoredValue<Fetcher<T>>,
}

/// The common case: a table's rows
pub type ListResource<T> = RemoteResource<Vec<T>>;

impl<T: Send + Sync + 'static> Clone for RemoteResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RemoteResource<T> {}

impl<T> RemoteResource<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create the resource and start the first fetch immediately
    pub fn new<F, Fut>(fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let resource = Self::idle(fetch);
        resource.refetch();
        resource
    }

    /// Create the resource without fetching; the caller decides when to start
    pub fn idle<F, Fut>(fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let fetcher: Fetcher<T> = Arc::new(move || Box::pin(fetch()) as FetchFuture<T>);
        Self {
            snapshot: RwSignal::new(ResourceSnapshot::new()),
            fetcher: StoredValue::new(fetcher),
        }
    }

    pub fn refetch(&self) {
        let Some(generation) = self.snapshot.try_update(|s| s.begin()) else {
            // owner already disposed
            return;
        };
        let Some(fetch) = self.fetcher.try_get_value() else {
            return;
        };
        let snapshot = self.snapshot;

        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch().await;
            let applied = snapshot
                .try_update(|s| s.complete(generation, result))
                .unwrap_or(false);
            if !applied {
                log::debug!("dropping stale response of request #{}", generation);
            }
        });
    }

    /// Resolve the resource without a request (e.g. nothing selected yet)
    pub fn set_ready(&self, value: T) {
        self.snapshot.update(|s| {
            let generation = s.begin();
            s.complete(generation, Ok(value));
        });
    }

    /// Edit the loaded value in place
    pub fn mutate(&self, f: impl FnOnce(&mut T)) {
        self.snapshot.update(|s| s.mutate(f));
    }

    pub fn get(&self) -> ResourceState<T> {
        self.snapshot.with(|s| s.state().clone())
    }

    pub fn with<R>(&self, f: impl FnOnce(&ResourceState<T>) -> R) -> R {
        self.snapshot.with(|s| f(s.state()))
    }

    /// Reactive view of the state, for components that only read it
    pub fn state(&self) -> Signal<ResourceState<T>> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.state().clone()))
    }

    pub fn refetch_callback(&self) -> Callback<()> {
        let resource = *self;
        Callback::new(move |_| resource.refetch())
    }
}
