mod auth;
mod client;
mod graphql;

pub use client::Client;
pub use graphql::{EventNode, STATE_CLOSED, STATE_MERGED, STATE_OPEN, UserActivity};

pub(crate) use graphql::fetch_user_activity;

pub(crate) mod prelude {
    pub use super::Client;
    pub(crate) use super::fetch_user_activity;
}
