use super::events::EventKind;

// Repository and comment nodes carry no state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventNode {
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserActivity {
    pub login: String,
    pub pull_requests: Vec<EventNode>,
    pub issues: Vec<EventNode>,
    pub issue_comments: Vec<EventNode>,
    pub repositories: Vec<EventNode>,
}

impl UserActivity {
    pub(crate) fn new(login: &str) -> Self {
        Self {
            login: login.to_string(),
            pull_requests: Vec::new(),
            issues: Vec::new(),
            issue_comments: Vec::new(),
            repositories: Vec::new(),
        }
    }

    pub(crate) fn bucket_mut(&mut self, kind: EventKind) -> &mut Vec<EventNode> {
        match kind {
            EventKind::PullRequests => &mut self.pull_requests,
            EventKind::Issues => &mut self.issues,
            EventKind::IssueComments => &mut self.issue_comments,
            EventKind::RepositoriesContributedTo => &mut self.repositories,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct GraphqlError {
    pub message: String,
}
