//! Snapshot of an asynchronously fetched value.
//!
//! A page owns one snapshot per remote list it shows. Every refetch bumps
//! the generation; a response is only applied when it belongs to the most
//! recent request, so a slow, superseded response can never overwrite a
//! newer one.

use super::api_error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum ResourceState<T> {
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> ResourceState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ResourceState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ResourceState::Ready(v) => Some(v),
            ResourceState::Loading | ResourceState::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ResourceState::Failed(e) => Some(e),
            ResourceState::Loading | ResourceState::Ready(_) => None,
        }
    }
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        ResourceState::Loading
    }
}

impl<T> From<Result<T, ApiError>> for ResourceState<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(v) => ResourceState::Ready(v),
            Err(e) => ResourceState::Failed(e),
        }
    }
}

/// Resource state tagged with the generation of the request that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSnapshot<T> {
    generation: u64,
    state: ResourceState<T>,
}

impl<T> Default for ResourceSnapshot<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            state: ResourceState::Loading,
        }
    }
}

impl<T> ResourceSnapshot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ResourceState<T> {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new request: switch to `Loading` and return its generation.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = ResourceState::Loading;
        self.generation
    }

    /// Apply the outcome of request `generation`.
    ///
    /// Returns `false` (and leaves the snapshot untouched) when a newer
    /// request has been started since.
    pub fn complete(&mut self, generation: u64, result: Result<T, ApiError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.state = result.into();
        true
    }

    /// Locally edit a ready value (e.g. drop a deleted row) without refetching
    pub fn mutate(&mut self, f: impl FnOnce(&mut T)) {
        if let ResourceState::Ready(v) = &mut self.state {
            f(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut snap: ResourceSnapshot<Vec<i32>> = ResourceSnapshot::new();
        assert!(snap.state().is_loading());

        let gen = snap.begin();
        assert!(snap.complete(gen, Ok(vec![1, 2, 3])));
        assert_eq!(snap.state().value(), Some(&vec![1, 2, 3]));

        let gen = snap.begin();
        assert!(snap.state().is_loading());
        assert!(snap.complete(gen, Err(ApiError::Network("refused".into()))));
        assert_eq!(
            snap.state().error(),
            Some(&ApiError::Network("refused".into()))
        );
    }

    #[test]
    fn test_latest_request_wins() {
        let mut snap: ResourceSnapshot<&str> = ResourceSnapshot::new();
        let first = snap.begin();
        let second = snap.begin();

        // The newer request finishes first...
        assert!(snap.complete(second, Ok("fresh")));
        // ...and the stale one arriving later is ignored.
        assert!(!snap.complete(first, Ok("stale")));
        assert_eq!(snap.state().value(), Some(&"fresh"));
        assert_eq!(snap.generation(), second);
    }

    #[test]
    fn test_stale_response_while_loading_is_dropped() {
        let mut snap: ResourceSnapshot<u8> = ResourceSnapshot::new();
        let first = snap.begin();
        let _second = snap.begin();
        assert!(!snap.complete(first, Ok(1)));
        assert!(snap.state().is_loading());
    }

    #[test]
    fn test_mutate_only_touches_ready_values() {
        let mut snap: ResourceSnapshot<Vec<i32>> = ResourceSnapshot::new();
        snap.mutate(|v| v.push(9));
        assert!(snap.state().is_loading());

        let gen = snap.begin();
        snap.complete(gen, Ok(vec![1, 2, 3]));
        snap.mutate(|v| v.retain(|x| *x != 2));
        assert_eq!(snap.state().value(), Some(&vec![1, 3]));
    }
}
