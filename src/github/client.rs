use anyhow::Context;

pub struct Client {
    octocrab: octocrab::Octocrab,
}

impl Client {
    pub fn new(host: &str) -> anyhow::Result<Self> {
        let token = super::auth::fetch_token(host)?;
        let octocrab = octocrab::Octocrab::builder()
            .base_uri(api_base_url(host))
            .context("failed to set base URI")?
            .personal_token(token)
            .build()?;
        Ok(Self { octocrab })
    }

    pub(crate) fn octocrab(&self) -> &octocrab::Octocrab {
        &self.octocrab
    }
}

fn api_base_url(host: &str) -> String {
    if host.eq_ignore_ascii_case("github.com") {
        "https://api.github.com".to_string()
    } else {
        format!("https://{host}/api")
    }
}

#[cfg(test)]
mod tests {
    use super::api_base_url;

    #[test]
    fn api_base_url_for_github_com() {
        assert_eq!(api_base_url("github.com"), "https://api.github.com");
        assert_eq!(api_base_url("GitHub.com"), "https://api.github.com");
    }

    #[test]
    fn api_base_url_for_enterprise_host() {
        assert_eq!(api_base_url("ghe.example.com"), "https://ghe.example.com/api");
    }
}
