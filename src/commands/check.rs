//! `ciadmin check` - load and verify collection files

use anyhow::{Result, bail};
use std::path::PathBuf;

use crate::Context;
use crate::config;

pub fn run(ctx: &Context, files: &[PathBuf]) -> Result<()> {
    let mut failed = 0;

    for file in files {
        match config::load_resources(file) {
            Ok(resources) => {
                if !ctx.quiet {
                    termkit::success(format!(
                        "{}: {} resources, {} managed patterns",
                        file.display(),
                        resources.len(),
                        resources.managed().len()
                    ));
                }
            }
            Err(err) => {
                failed += 1;
                termkit::error(format!("{err:#}"));
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} collection files failed verification", files.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn ctx() -> Context {
        Context {
            verbose: 0,
            quiet: true,
            config: None,
        }
    }

    #[test]
    fn test_check_valid_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roles.json");
        let json = r#"{"managed": ["Role=.*"], "resources": [{"kind": "Role", "roleId": "a"}]}"#;
        fs::write(&path, json).unwrap();
        assert!(run(&ctx(), &[path]).is_ok());
    }

    #[test]
    fn test_check_counts_failures() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.json");
        fs::write(&good, r#"{"managed": [], "resources": []}"#).unwrap();
        let dupes = dir.path().join("dupes.json");
        fs::write(
            &dupes,
            r#"{
                "managed": ["Role=.*"],
                "resources": [{"kind": "Role", "roleId": "a"}, {"kind": "Role", "roleId": "a"}]
            }"#,
        )
        .unwrap();
        let missing = dir.path().join("missing.json");

        let err = run(&ctx(), &[good, dupes, missing]).unwrap_err();
        assert_eq!(err.to_string(), "2 of 3 collection files failed verification");
    }
}
