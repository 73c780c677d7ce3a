use chrono::{DateTime, Utc};

use crate::github::{EventNode, STATE_CLOSED, STATE_MERGED, STATE_OPEN, UserActivity};

// Only events updated within this many days count towards the leaderboard.
pub const DAYS_TO_CONSIDER: i64 = 7;

pub const NAME_LABEL: &str = "Name";
pub const SCORE_LABEL: &str = "Score";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    PullRequestsMerged,
    PullRequestsOpen,
    IssuesOpen,
    IssueComments,
    RepositoriesContributed,
}

impl Metric {
    // Leaderboard column order.
    pub const ALL: [Metric; 5] = [
        Metric::PullRequestsMerged,
        Metric::PullRequestsOpen,
        Metric::IssuesOpen,
        Metric::IssueComments,
        Metric::RepositoriesContributed,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Metric::PullRequestsMerged => "pullRequestsMerged",
            Metric::PullRequestsOpen => "pullRequestsOpen",
            Metric::IssuesOpen => "issuesOpen",
            Metric::IssueComments => "issueComments",
            Metric::RepositoriesContributed => "repositoriesContributed",
        }
    }

    pub fn weight(&self) -> i64 {
        match self {
            Metric::PullRequestsMerged => 3,
            Metric::PullRequestsOpen => 3,
            Metric::IssuesOpen => 1,
            Metric::IssueComments => 1,
            Metric::RepositoriesContributed => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::PullRequestsMerged => "PR Merged",
            Metric::PullRequestsOpen => "PR Opened",
            Metric::IssuesOpen => "Issue Opened",
            Metric::IssueComments => "Issue Comments",
            Metric::RepositoriesContributed => "Repos Contributed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub login: String,
    pull_requests_merged: i64,
    pull_requests_open: i64,
    issues_open: i64,
    issue_comments: i64,
    repositories_contributed: i64,
}

impl UserStats {
    pub fn from_activity(activity: &UserActivity, since: DateTime<Utc>) -> Self {
        let mut stats = Self {
            login: activity.login.clone(),
            pull_requests_merged: 0,
            pull_requests_open: 0,
            issues_open: 0,
            issue_comments: 0,
            repositories_contributed: 0,
        };

        for node in &activity.pull_requests {
            if node.updated_at < since {
                continue;
            }
            match node.state.as_deref() {
                Some(STATE_MERGED) => stats.pull_requests_merged += 1,
                Some(STATE_OPEN) => stats.pull_requests_open += 1,
                // The query filters on [OPEN, MERGED]; anything else is ignored.
                Some(STATE_CLOSED) | _ => {}
            }
        }
        for node in &activity.issues {
            if node.updated_at >= since && node.state.as_deref() == Some(STATE_OPEN) {
                stats.issues_open += 1;
            }
        }
        stats.issue_comments = recent(&activity.issue_comments, since);
        stats.repositories_contributed = recent(&activity.repositories, since);

        for metric in Metric::ALL {
            log::debug!("{}: {}={}", stats.login, metric.key(), stats.count(metric));
        }

        stats
    }

    pub fn count(&self, metric: Metric) -> i64 {
        match metric {
            Metric::PullRequestsMerged => self.pull_requests_merged,
            Metric::PullRequestsOpen => self.pull_requests_open,
            Metric::IssuesOpen => self.issues_open,
            Metric::IssueComments => self.issue_comments,
            Metric::RepositoriesContributed => self.repositories_contributed,
        }
    }

    pub fn score(&self) -> i64 {
        Metric::ALL
            .iter()
            .map(|metric| self.count(*metric) * metric.weight())
            .sum()
    }
}

fn recent(nodes: &[EventNode], since: DateTime<Utc>) -> i64 {
    nodes.iter().filter(|node| node.updated_at >= since).count() as i64
}
