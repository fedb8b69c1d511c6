use anyhow::Context;
use serde_json::Value;

/// The domain crate stays free of runtime, I/O and logging concerns.
const DOMAIN_CRATE: &str = "rlrpg-domain";
const FORBIDDEN_DOMAIN_DEPS: &[&str] = &[
    "rlrpg-player",
    "tokio",
    "tokio-util",
    "tracing",
    "tracing-subscriber",
    "directories",
    "dotenvy",
    "anyhow",
];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Value =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata output")?;
    let violations = domain_violations(&metadata)?;

    if !violations.is_empty() {
        anyhow::bail!(
            "{DOMAIN_CRATE} must not depend on: {}",
            violations.join(", ")
        );
    }

    println!("arch-check passed: {DOMAIN_CRATE} has no runtime dependencies");
    Ok(())
}

/// Normal (non-dev) dependencies of the domain crate that are on the deny list.
fn domain_violations(metadata: &Value) -> anyhow::Result<Vec<String>> {
    let packages = metadata["packages"]
        .as_array()
        .context("cargo metadata has no packages")?;
    let domain = packages
        .iter()
        .find(|p| p["name"] == DOMAIN_CRATE)
        .with_context(|| format!("{DOMAIN_CRATE} not found in workspace"))?;

    let violations = domain["dependencies"]
        .as_array()
        .into_iter()
        .flatten()
        .filter(|dep| dep["kind"].is_null())
        .filter_map(|dep| dep["name"].as_str())
        .filter(|name| FORBIDDEN_DOMAIN_DEPS.contains(name))
        .map(str::to_string)
        .collect();
    Ok(violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metadata(deps: Value) -> Value {
        json!({ "packages": [{ "name": DOMAIN_CRATE, "dependencies": deps }] })
    }

    #[test]
    fn clean_domain_passes() {
        let meta = metadata(json!([
            { "name": "serde", "kind": null },
            { "name": "thiserror", "kind": null },
            { "name": "tokio", "kind": "dev" }
        ]));
        assert!(domain_violations(&meta).expect("metadata").is_empty());
    }

    #[test]
    fn runtime_dependency_is_reported() {
        let meta = metadata(json!([
            { "name": "chrono", "kind": null },
            { "name": "tracing", "kind": null }
        ]));
        assert_eq!(domain_violations(&meta).expect("metadata"), vec!["tracing"]);
    }

    #[test]
    fn missing_domain_crate_is_an_error() {
        assert!(domain_violations(&json!({ "packages": [] })).is_err());
    }
}
