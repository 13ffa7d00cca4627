use std::fmt::Display;

/// Snapshot of one adapter.
///
/// `data` keeps its previous value across failures and reloads; only a
/// successful fetch replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> ContentState<T> {
    /// State right after the adapter is invoked.
    pub fn pending(initial: T) -> Self {
        Self {
            data: initial,
            loading: true,
            error: None,
        }
    }

    pub fn begin(&mut self) {
        self.loading = true;
    }

    pub fn settle<E: Display>(&mut self, result: Result<T, E>) {
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
            }
            Err(err) => {
                let message = err.to_string();
                self.error = Some(if message.trim().is_empty() {
                    "An error occurred".to_string()
                } else {
                    message
                });
            }
        }
        self.loading = false;
    }

    pub fn is_failed(&self) -> bool {
        !self.loading && self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::FetchError;

    #[test]
    fn pending_is_loading_without_error() {
        let state = ContentState::pending(Vec::<u8>::new());
        assert!(state.loading);
        assert_eq!(state.error, None);
        assert!(!state.is_failed());
    }

    #[test]
    fn success_clears_loading_and_error() {
        let mut state = ContentState::pending(Vec::new());
        state.settle(Err::<Vec<u8>, _>(FetchError::Transport("offline".into())));
        state.begin();
        state.settle(Ok::<_, FetchError>(vec![1, 2]));

        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.data, [1, 2]);
    }

    #[test]
    fn failure_keeps_previous_data_and_stores_message() {
        let mut state = ContentState::pending(vec![7]);
        state.settle(Err::<Vec<u8>, _>(FetchError::Transport("offline".into())));

        assert!(!state.loading);
        assert_eq!(state.data, [7]);
        assert_eq!(state.error.as_deref(), Some("Network error: offline"));
        assert!(state.is_failed());
    }

    #[test]
    fn blank_error_message_gets_generic_text() {
        let mut state = ContentState::pending(());
        state.settle(Err::<(), _>(""));
        assert_eq!(state.error.as_deref(), Some("An error occurred"));
    }
}
