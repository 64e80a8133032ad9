//! Build script for pf-demo - embeds build info into the version string.
//!
//! Without the `release` feature, `VERGEN_GIT_SHA` carries the commit hash.
//! `PF_DEMO_REPO_NAME` and `PF_DEMO_BUILD_DATE` are always emitted.

use std::process::Command;

/// Current date as YYYY-MM-DD
fn build_date() -> String {
    Command::new("date")
        .args(["+%Y-%m-%d"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// "owner/repo" from the origin remote, or the published repository.
fn repo_name() -> String {
    Command::new("git")
        .args(["remote", "get-url", "origin"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| parse_repo_from_url(String::from_utf8_lossy(&output.stdout).trim()))
        .unwrap_or_else(|| "eduardo-nicola/path-fast".to_string())
}

/// Handles `https://host/owner/repo(.git)` and `git@host:owner/repo(.git)`.
fn parse_repo_from_url(url: &str) -> Option<String> {
    let url = url.trim_end_matches(".git");
    let path = if let Some(rest) = url.strip_prefix("git@") {
        rest.split_once(':')?.1.to_string()
    } else {
        url.split('/').skip(3).collect::<Vec<_>>().join("/")
    };
    (!path.is_empty()).then_some(path)
}

fn main() {
    println!("cargo:rustc-env=PF_DEMO_REPO_NAME={}", repo_name());
    println!("cargo:rustc-env=PF_DEMO_BUILD_DATE={}", build_date());

    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        let emitted = GitclBuilder::default()
            .sha(true)
            .build()
            .map_err(|e| e.to_string())
            .and_then(|git| {
                Emitter::default()
                    .add_instructions(&git)
                    .and_then(|emitter| emitter.emit())
                    .map_err(|e| e.to_string())
            });

        if let Err(e) = emitted {
            // Not a git checkout (e.g. a source tarball)
            println!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }
}
