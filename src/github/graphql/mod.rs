mod events;
mod fetch;
mod query;
mod types;

pub use events::{STATE_CLOSED, STATE_MERGED, STATE_OPEN};
pub use types::{EventNode, UserActivity};

pub(crate) use fetch::fetch_user_activity;
