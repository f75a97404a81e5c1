use std::env;

/// Environment variable naming the remote API server.
pub const SERVER_ENV: &str = "HITBASE_SERVER";

/// Where the hits live for this process. Resolved once at startup and
/// handed to the storage factory; nothing re-detects after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deployment {
    Local,
    Remote(String),
}

impl Deployment {
    /// Detect the deployment from the `--server` flag and `HITBASE_SERVER`.
    pub fn detect(server_flag: Option<&str>) -> Self {
        Self::resolve(server_flag.map(str::to_string), env::var(SERVER_ENV).ok())
    }

    /// Flag beats environment; blank values count as unset.
    fn resolve(flag: Option<String>, env_value: Option<String>) -> Self {
        let set = |value: Option<String>| value.filter(|url| !url.trim().is_empty());
        match set(flag).or(set(env_value)) {
            Some(url) => Deployment::Remote(url),
            None => Deployment::Local,
        }
    }
}
