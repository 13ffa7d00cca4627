use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use api::{
    fetch_achievements, fetch_profile, fetch_projects, Achievements, DataSource, FetchError,
    Profile, Project,
};
use dioxus::logger::tracing;
use dioxus::prelude::*;

use super::state::ContentState;

/// Shared handle to the remote store, provided at the application root.
#[derive(Clone)]
pub struct DataHandle(Rc<dyn DataSource>);

impl DataHandle {
    pub fn new(source: impl DataSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    pub fn source(&self) -> &dyn DataSource {
        self.0.as_ref()
    }
}

impl PartialEq for DataHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

pub fn use_data_handle() -> DataHandle {
    use_context::<DataHandle>()
}

/// Reactive adapter state plus its refetch operation.
pub struct Content<T: 'static> {
    state: Signal<ContentState<T>>,
    refetch: Callback<()>,
}

impl<T: 'static> Clone for Content<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Content<T> {}

impl<T: Clone + 'static> Content<T> {
    /// Current snapshot; subscribes the calling component.
    pub fn state(&self) -> ContentState<T> {
        self.state.read().clone()
    }

    /// Re-run the query; the newest result wins.
    pub fn refetch(&self) {
        self.refetch.call(());
    }
}

/// Run `fetch` once on mount and on every `refetch`.
///
/// Tasks are spawned in the calling component's scope, so they are dropped
/// with it and never write state after teardown. Results of superseded
/// fetches are discarded.
pub fn use_content<T, F, Fut>(initial: impl FnOnce() -> T, fetch: F) -> Content<T>
where
    T: Clone + 'static,
    F: Fn(DataHandle) -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let handle = use_data_handle();
    let mut state = use_signal(|| ContentState::pending(initial()));
    let generation = use_hook(|| Rc::new(Cell::new(0u64)));

    let refetch = use_callback(move |()| {
        let ticket = generation.get() + 1;
        generation.set(ticket);

        if !state.peek().loading {
            state.write().begin();
        }

        let pending = fetch(handle.clone());
        let generation = generation.clone();
        spawn(async move {
            let result = pending.await;
            if generation.get() != ticket {
                tracing::debug!(ticket, "dropping result of superseded fetch");
                return;
            }
            if let Err(err) = &result {
                tracing::warn!("content fetch failed: {err}");
            }
            state.write().settle(result);
        });
    });

    use_hook(move || refetch.call(()));

    Content { state, refetch }
}

pub fn use_profile() -> Content<Option<Profile>> {
    use_content(
        || None,
        |handle| async move { fetch_profile(handle.source()).await },
    )
}

pub fn use_projects() -> Content<Vec<Project>> {
    use_content(Vec::new, |handle| async move {
        fetch_projects(handle.source()).await
    })
}

pub fn use_achievements() -> Content<Achievements> {
    use_content(Achievements::default, |handle| async move {
        fetch_achievements(handle.source()).await
    })
}
