//! Build information
//!
//! `GIT_COMMIT` and `BUILD_TIME` are read from the compile-time environment,
//! e.g. `GIT_COMMIT=$(git rev-parse --short HEAD) cargo build --release`.

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const GIT_COMMIT: &str = match option_env!("GIT_COMMIT") {
    Some(commit) => commit,
    None => "unknown-commit",
};

pub const BUILD_TIME: &str = match option_env!("BUILD_TIME") {
    Some(time) => time,
    None => "unknown-buildtime",
};

/// Version details of the running binary
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub version: &'static str,
    pub git_commit: &'static str,
    pub build_time: &'static str,
}

impl VersionInfo {
    pub fn current() -> Self {
        Self {
            version: VERSION,
            git_commit: GIT_COMMIT,
            build_time: BUILD_TIME,
        }
    }

    /// Multi-line message printed by `server version`
    pub fn formatted_message(&self) -> String {
        format!(
            "graphql-server\n  Version: {}\n  GitCommit: {}\n  BuildTime: {}\n",
            self.version, self.git_commit, self.build_time
        )
    }
}
