// verdict/src/commands/check.rs
//
// USE CASE: Validate one account document and report the raised error.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;
use verdict_core::Group;
use verdict_core::application::build_router;
use verdict_core::infrastructure::adapters::ValidatorEngine;

use crate::account::{AccountRequest, AccountViolationHandler};

pub fn execute(file: PathBuf, groups: Vec<String>, project_dir: PathBuf) -> anyhow::Result<()> {
    let request = load_request(&file)?;

    let registry = verdict_core::global()?.clone();
    let router = build_router(ValidatorEngine, registry, &project_dir)
        .with_context(|| format!("Failed to configure router from {:?}", project_dir))?
        .with_handler(AccountViolationHandler { request: &request });

    let groups: Vec<Group> = groups.into_iter().map(Group::new).collect();
    info!(file = ?file, groups = groups.len(), "Checking account document");

    match router.validate(&request, &groups) {
        Ok(()) => {
            println!("✅ {} is valid", file.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ [{}] {}", e.kind(), e);
            std::process::exit(1);
        }
    }
}

fn load_request(file: &Path) -> anyhow::Result<AccountRequest> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read account document at {:?}", file))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse account document YAML at {:?}", file))
}
