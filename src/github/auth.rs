use anyhow::Context;

// GITHUB_TOKEN takes precedence: the Actions runner injects it.
pub(super) fn fetch_token(host: &str) -> anyhow::Result<String> {
    if let Some(token) = token_from_env(host) {
        return Ok(token);
    }
    if let Some(token) = token_from_gh(host)? {
        return Ok(token);
    }

    anyhow::bail!(
        "token for {host} not found. Please set `GITHUB_TOKEN` or log in with `gh auth login`."
    );
}

fn token_from_env(host: &str) -> Option<String> {
    let keys = if host.eq_ignore_ascii_case("github.com") {
        ["GITHUB_TOKEN", "GH_TOKEN"]
    } else {
        ["GITHUB_ENTERPRISE_TOKEN", "GH_ENTERPRISE_TOKEN"]
    };

    for key in keys {
        if let Ok(token) = std::env::var(key) {
            let token = token.trim();
            if !token.is_empty() {
                return Some(token.to_string());
            }
        }
    }

    None
}

fn token_from_gh(host: &str) -> anyhow::Result<Option<String>> {
    let output = match std::process::Command::new("gh")
        .args(["auth", "token", "--secure-storage", "--hostname", host])
        .output()
    {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).context("failed to execute `gh auth token`"),
    };

    if !output.status.success() {
        return Ok(None);
    }
    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(if token.is_empty() { None } else { Some(token) })
}

#[cfg(test)]
mod tests {
    use super::fetch_token;
    use temp_env::with_vars;

    #[test]
    fn token_prefers_github_token() {
        with_vars(
            [
                ("GITHUB_TOKEN", Some("actions-token")),
                ("GH_TOKEN", Some("gh-token")),
            ],
            || {
                let token = fetch_token("github.com").unwrap();
                assert_eq!(token, "actions-token");
            },
        );
    }

    #[test]
    fn fetch_token_env_differs_by_host() {
        with_vars(
            [
                ("GITHUB_TOKEN", Some("actions-token")),
                ("GITHUB_ENTERPRISE_TOKEN", Some("ghe-token")),
            ],
            || {
                let github_token = fetch_token("github.com").unwrap();
                assert_eq!(github_token, "actions-token");

                let ghe_token = fetch_token("ghe.example.com").unwrap();
                assert_eq!(ghe_token, "ghe-token");
            },
        );
    }

    #[test]
    fn fetch_token_skips_empty_vars() {
        with_vars(
            [("GITHUB_TOKEN", Some("")), ("GH_TOKEN", Some("gh-token"))],
            || {
                let token = fetch_token("github.com").unwrap();
                assert_eq!(token, "gh-token");
            },
        );
    }
}
