use anyhow::Context;
use std::time::Duration;

use valq::query_value;

use super::events::{EventDescriptor, EventKind};
use super::query::{GraphqlRequest, generate};
use super::types::*;

pub(super) const MAX_PAGES: usize = 1000;
const FETCH_RETRIES: usize = 3;

// One query per round covering every still-pending connection; a connection
// drops out once its pageInfo reports no further pages.
pub(crate) async fn fetch_user_activity(
    client: &octocrab::Octocrab,
    login: &str,
) -> anyhow::Result<UserActivity> {
    let mut activity = UserActivity::new(login);
    let mut pending: Vec<EventDescriptor> = vec![
        EventKind::PullRequests.descriptor(),
        EventKind::Issues.descriptor(),
        EventKind::IssueComments.descriptor(),
    ];
    let mut repo_contribution = Some(EventKind::RepositoriesContributedTo.descriptor());

    for _ in 0..MAX_PAGES {
        if pending.is_empty() && repo_contribution.is_none() {
            break;
        }

        let request = generate(&pending, login, repo_contribution.as_ref());
        let resp = graphql_with_retry::<GraphqlResponse<serde_json::Value>>(
            client,
            &request,
            "GraphQL user events query failed",
        )
        .await?;

        let data = graphql_data(resp)?;
        let user = data.get("user").expect("events response missing user");

        if let Some(descriptor) = repo_contribution.take() {
            repo_contribution = drain_connection(user, descriptor, &mut activity)?;
        }

        let mut still_pending = Vec::with_capacity(pending.len());
        for descriptor in pending {
            if let Some(next) = drain_connection(user, descriptor, &mut activity)? {
                still_pending.push(next);
            }
        }
        pending = still_pending;
    }

    log::debug!(
        "fetched activity for {login}: {} pull requests, {} issues, {} comments, {} repositories",
        activity.pull_requests.len(),
        activity.issues.len(),
        activity.issue_comments.len(),
        activity.repositories.len(),
    );

    Ok(activity)
}

fn drain_connection(
    user: &serde_json::Value,
    mut descriptor: EventDescriptor,
    activity: &mut UserActivity,
) -> anyhow::Result<Option<EventDescriptor>> {
    let connection = user
        .get(descriptor.kind.name())
        .expect("events response missing connection");

    if let Some(edges) = query_value!(connection.edges -> array) {
        for edge in edges.iter() {
            let Some(node) = query_value!(edge.node) else {
                continue;
            };
            let updated_at = parse_datetime(
                query_value!(node."updatedAt" -> str).expect("event node missing updatedAt"),
            )?;
            let state = query_value!(node.state -> str).map(str::to_string);
            activity
                .bucket_mut(descriptor.kind)
                .push(EventNode { updated_at, state });
        }
    }

    let page_info = connection
        .get("pageInfo")
        .expect("events response missing pageInfo");
    let has_next_page = page_info
        .get("hasNextPage")
        .and_then(|value| value.as_bool())
        .expect("events response missing pageInfo.hasNextPage");
    let end_cursor = page_info
        .get("endCursor")
        .and_then(|value| value.as_str())
        .map(|value| value.to_string());

    if !has_next_page {
        return Ok(None);
    }
    let Some(cursor) = end_cursor else {
        return Ok(None);
    };
    descriptor.set_cursor(&cursor);
    Ok(Some(descriptor))
}

async fn graphql_with_retry<T>(
    client: &octocrab::Octocrab,
    payload: &GraphqlRequest,
    context: &'static str,
) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    for attempt in 1..=FETCH_RETRIES {
        match client.graphql::<T>(payload).await {
            Ok(resp) => return Ok(resp),
            Err(err) => {
                if attempt == FETCH_RETRIES {
                    return Err(anyhow::Error::new(err)).context(context);
                }
                let backoff = 200u64.saturating_mul(1 << (attempt - 1));
                log::warn!(
                    "user events query failed; retrying attempt={} error={}",
                    attempt,
                    err
                );
                tokio::time::sleep(Duration::from_millis(backoff)).await;
            }
        }
    }

    unreachable!("FETCH_RETRIES must be >= 1");
}

pub(super) fn graphql_data<T>(resp: GraphqlResponse<T>) -> anyhow::Result<T> {
    if let Some(errors) = resp.errors {
        let msg = errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        anyhow::bail!("GraphQL returned errors: {msg}");
    }
    resp.data.context("GraphQL response missing data")
}

pub(super) fn parse_datetime(value: &str) -> anyhow::Result<chrono::DateTime<chrono::Utc>> {
    let dt = chrono::DateTime::parse_from_rfc3339(value).context("invalid datetime")?;
    Ok(dt.with_timezone(&chrono::Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_datetime_accepts_rfc3339() {
        let dt = parse_datetime("2026-08-01T12:00:00Z").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-08-01T12:00:00+00:00");
    }

    #[test]
    fn parse_datetime_rejects_garbage() {
        assert!(parse_datetime("last tuesday").is_err());
    }

    #[test]
    fn graphql_data_joins_error_messages() {
        let resp = GraphqlResponse::<serde_json::Value> {
            data: None,
            errors: Some(vec![
                GraphqlError {
                    message: "boom".to_string(),
                },
                GraphqlError {
                    message: "bang".to_string(),
                },
            ]),
        };
        let err = graphql_data(resp).unwrap_err();
        assert_eq!(err.to_string(), "GraphQL returned errors: boom; bang");
    }

    #[test]
    fn drain_connection_collects_nodes_and_advances() {
        let user = json!({
            "issues": {
                "pageInfo": {"hasNextPage": true, "endCursor": "Y3Vyc29yOjE="},
                "edges": [
                    {"node": {"updatedAt": "2026-08-01T12:00:00Z", "state": "OPEN"}},
                    {"node": {"updatedAt": "2026-07-30T08:00:00Z", "state": "OPEN"}},
                ],
            },
        });
        let mut activity = UserActivity::new("alice");

        let next = drain_connection(&user, EventKind::Issues.descriptor(), &mut activity)
            .unwrap()
            .expect("more pages expected");

        assert_eq!(activity.issues.len(), 2);
        assert_eq!(activity.issues[0].state.as_deref(), Some("OPEN"));
        assert_eq!(next.variables[0].value, json!("Y3Vyc29yOjE="));
    }

    #[test]
    fn drain_connection_stops_on_last_page() {
        let user = json!({
            "issueComments": {
                "pageInfo": {"hasNextPage": false, "endCursor": null},
                "edges": [
                    {"node": {"updatedAt": "2026-08-01T12:00:00Z"}},
                ],
            },
        });
        let mut activity = UserActivity::new("alice");

        let next =
            drain_connection(&user, EventKind::IssueComments.descriptor(), &mut activity).unwrap();

        assert!(next.is_none());
        assert_eq!(activity.issue_comments.len(), 1);
        assert_eq!(activity.issue_comments[0].state, None);
    }

    #[test]
    fn drain_connection_stops_without_cursor() {
        let user = json!({
            "issues": {
                "pageInfo": {"hasNextPage": true, "endCursor": null},
                "edges": [],
            },
        });
        let mut activity = UserActivity::new("alice");

        let next = drain_connection(&user, EventKind::Issues.descriptor(), &mut activity).unwrap();
        assert!(next.is_none());
        assert!(activity.issues.is_empty());
    }
}
