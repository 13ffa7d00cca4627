//! Content-fetching adapters: `{data, loading, error}` state per page
//! section, backed by the `api` fetch protocol.

mod hooks;
mod state;

pub use hooks::{
    use_achievements, use_content, use_data_handle, use_profile, use_projects, Content, DataHandle,
};
pub use state::ContentState;
