use crate::score::{Metric, NAME_LABEL, SCORE_LABEL, UserStats};

pub const FILE_NAME: &str = "oss-leaderboard.md";

pub fn format_leaderboard(stats: &[UserStats]) -> String {
    let mut out = String::new();
    out.push_str("# OSS Leaderboard\n\n");

    if stats.is_empty() {
        out.push_str("_No contributors to rank._\n");
        return out;
    }

    out.push_str(&format!("| {NAME_LABEL} |"));
    for metric in Metric::ALL {
        out.push_str(&format!(" {} |", metric.label()));
    }
    out.push_str(&format!(" {SCORE_LABEL} |\n"));

    out.push_str("| :---: |");
    for _ in Metric::ALL {
        out.push_str(" :---: |");
    }
    out.push_str(" :---: |\n");

    let mut sorted: Vec<&UserStats> = stats.iter().collect();
    sorted.sort_by(|a, b| {
        b.score()
            .cmp(&a.score())
            .then_with(|| a.login.cmp(&b.login))
    });

    for user in sorted {
        out.push_str(&format!("| {} |", user.login));
        for metric in Metric::ALL {
            out.push_str(&format!(" {} |", user.count(metric)));
        }
        out.push_str(&format!(" {} |\n", user.score()));
    }

    out
}
