use serde_json::Value;

pub const STATE_OPEN: &str = "OPEN";
pub const STATE_CLOSED: &str = "CLOSED";
pub const STATE_MERGED: &str = "MERGED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PullRequests,
    Issues,
    IssueComments,
    RepositoriesContributedTo,
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::PullRequests => "pullRequests",
            EventKind::Issues => "issues",
            EventKind::IssueComments => "issueComments",
            EventKind::RepositoriesContributedTo => "repositoriesContributedTo",
        }
    }

    // issueComments pages backward (last/before) so the most recent
    // comments arrive first; every other connection pages forward.
    pub fn descriptor(&self) -> EventDescriptor {
        match self {
            EventKind::PullRequests => EventDescriptor {
                kind: *self,
                variables: vec![VariableSpec {
                    name: "pullRequestAfter",
                    ty: "String",
                    value: Value::Null,
                    event_name: "pullRequests",
                }],
                query: "pullRequests(first:100,states:[OPEN,MERGED],after: $pullRequestAfter,orderBy: {field: UPDATED_AT, direction: DESC}){pageInfo {hasNextPage, endCursor},edges{node{updatedAt,state}}}",
            },
            EventKind::Issues => EventDescriptor {
                kind: *self,
                variables: vec![VariableSpec {
                    name: "issueAfter",
                    ty: "String",
                    value: Value::Null,
                    event_name: "issues",
                }],
                query: "issues(first:100,after: $issueAfter,states:OPEN,orderBy: {field: UPDATED_AT, direction: DESC}){pageInfo {hasNextPage, endCursor},edges{node{updatedAt,state}}}",
            },
            EventKind::IssueComments => EventDescriptor {
                kind: *self,
                variables: vec![VariableSpec {
                    name: "issueCommentBefore",
                    ty: "String",
                    value: Value::Null,
                    event_name: "issueComments",
                }],
                query: "issueComments(last:100,before: $issueCommentBefore){pageInfo {hasNextPage, endCursor},edges{node{updatedAt}}}",
            },
            EventKind::RepositoriesContributedTo => EventDescriptor {
                kind: *self,
                variables: vec![VariableSpec {
                    name: "repositoriesContributedToAfter",
                    ty: "String",
                    value: Value::Null,
                    event_name: "repositoriesContributedTo",
                }],
                query: "repositoriesContributedTo(first:100,after: $repositoriesContributedToAfter,orderBy:{field: UPDATED_AT, direction: DESC}){pageInfo {hasNextPage, endCursor},edges{node{updatedAt}}}",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSpec {
    pub name: &'static str,
    pub ty: &'static str,
    pub value: Value,
    pub event_name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDescriptor {
    pub kind: EventKind,
    pub variables: Vec<VariableSpec>,
    pub query: &'static str,
}

impl EventDescriptor {
    // The pagination cursor is the descriptor's first declared variable.
    pub fn set_cursor(&mut self, cursor: &str) {
        if let Some(spec) = self.variables.first_mut() {
            log::trace!("advancing {} cursor to {cursor}", spec.event_name);
            spec.value = Value::String(cursor.to_string());
        }
    }
}
