//! Ability permission command

use anyhow::Result;
use clap::Parser;
use console::style;
use serde::Serialize;

use golden_age_core::AbilityPermissions;
use golden_age_runtime::{Runtime, RuntimeConfig};

#[derive(Debug, Serialize)]
struct Verdict {
    ability: String,
    allowed: bool,
}

/// Grant, revoke and check ability permissions
///
/// Starts from the abilities in GOLDEN_AGE_ABILITIES, applies grants, then
/// revocations, then checks each named ability.
#[derive(Parser, Debug)]
pub struct Abilities {
    /// Abilities to grant
    #[arg(long)]
    pub grant: Vec<String>,

    /// Abilities to revoke
    #[arg(long)]
    pub revoke: Vec<String>,

    /// Abilities to check (all granted abilities if empty)
    pub check: Vec<String>,

    /// Print the verdicts as JSON
    #[arg(long)]
    pub json: bool,
}

impl Abilities {
    fn verdicts(&self, permissions: &mut AbilityPermissions) -> Vec<Verdict> {
        for ability in &self.grant {
            permissions.grant_permission(ability.as_str());
        }
        for ability in &self.revoke {
            permissions.revoke_permission(ability);
        }

        let mut names: Vec<String> = if self.check.is_empty() {
            permissions.granted().map(str::to_owned).collect()
        } else {
            self.check.clone()
        };
        names.sort_unstable();

        names
            .into_iter()
            .map(|ability| Verdict {
                allowed: permissions.is_ability_allowed(&ability),
                ability,
            })
            .collect()
    }

    /// Verdicts against the abilities granted by `config`.
    ///
    /// The metadata file is never read.
    fn run(&self, config: RuntimeConfig) -> Result<Vec<Verdict>> {
        let runtime = Runtime::builder()
            .config(RuntimeConfig {
                metadata_path: None,
                ..config
            })
            .build()?;
        Ok(runtime.permissions().with(|p| self.verdicts(p))?)
    }

    pub fn execute(self) -> Result<()> {
        let verdicts = self.run(RuntimeConfig::from_env()?)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&verdicts)?);
            return Ok(());
        }

        for Verdict { ability, allowed } in verdicts {
            let mark = if allowed {
                style("allowed").green()
            } else {
                style("denied").red()
            };
            println!("{} {}", mark.bold(), ability);
        }
        Ok(())
    }
}
