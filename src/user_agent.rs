//! User-Agent string for upstream assistant requests.

const CLIENT_NAME: &str = "arxiv-assistant";

/// Default User-Agent for run requests (identifies the tool and version).
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("{CLIENT_NAME}/{version} (research-assistant-client)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_agent_contains_name_and_version() {
        let ua = default_user_agent();
        assert_eq!(
            Some(env!("CARGO_PKG_VERSION")),
            ua.strip_prefix("arxiv-assistant/")
                .and_then(|rest| rest.split(' ').next()),
            "UA must carry crate version"
        );
        assert!(ua.ends_with("(research-assistant-client)"));
    }
}
