//! Stamps the binary with the commit it was built from; `bankstmt --version`
//! prints it next to the package version.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

const SHA_VAR: &str = "BANKSTMT_BUILD_SHA";

fn git_describe(workspace: &Path) -> Option<String> {
    let out = Command::new("git")
        .arg("-C")
        .arg(workspace)
        .args(["describe", "--always", "--dirty", "--abbrev=8"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    let rev = rev.trim();
    (!rev.is_empty()).then(|| rev.to_string())
}

fn main() {
    println!("cargo:rerun-if-env-changed={SHA_VAR}");

    // Source tarballs have no .git, so packagers pass the revision in.
    let from_env = env::var(SHA_VAR).ok().filter(|s| !s.trim().is_empty());

    let sha = from_env
        .or_else(|| {
            let manifest = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
            let workspace = manifest.parent()?;
            let head = workspace.join(".git").join("HEAD");
            if head.exists() {
                println!("cargo:rerun-if-changed={}", head.display());
            }
            git_describe(workspace)
        })
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env={SHA_VAR}={sha}");
}
