// Inject version information from git describe at build time, falling
// back to CARGO_PKG_VERSION when git or tags are unavailable.

use std::process::Command;

fn main() {
    let version = git_describe_version().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=TONECRAFT_VERSION={}", version);
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/tags");
}

fn git_describe_version() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();

    match described.strip_prefix('v') {
        // Tagged build: keep the version part only ("v0.1.0-5-gabc123" -> "0.1.0")
        Some(tagged) => Some(
            tagged
                .split('-')
                .next()
                .unwrap_or(tagged)
                .to_string(),
        ),
        // Untagged build: append the commit description to the package version
        None => Some(format!("{}-{}", env!("CARGO_PKG_VERSION"), described)),
    }
}
