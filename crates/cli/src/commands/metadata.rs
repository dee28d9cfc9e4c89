//! Program metadata command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use golden_age_runtime::{
    DesktopMetadata, GoldenAge, LifecycleKind, LifecycleRegistry, MetadataProgram,
    ProgramMetadata, RuntimeConfig,
};

/// Show program metadata from a RON file
#[derive(Parser, Debug)]
pub struct Metadata {
    /// Metadata file (defaults to GOLDEN_AGE_METADATA)
    pub path: Option<PathBuf>,

    /// Start these services to check they are declared
    #[arg(long = "start")]
    pub start: Vec<String>,

    /// Print the metadata as JSON
    #[arg(long)]
    pub json: bool,
}

impl Metadata {
    /// Wrap `metadata` in a program and start every `--start` service.
    fn start_services(&self, metadata: DesktopMetadata) -> Result<MetadataProgram> {
        let mut program = MetadataProgram::new(metadata, LifecycleRegistry::default());
        for service in &self.start {
            program
                .start_service(service)
                .with_context(|| format!("cannot start service '{service}'"))?;
        }
        Ok(program)
    }

    pub fn execute(self) -> Result<()> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => RuntimeConfig::from_env()?
                .metadata_path
                .context("no metadata file given and GOLDEN_AGE_METADATA is unset")?,
        };
        let program = self.start_services(DesktopMetadata::load(&path)?)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(program.metadata())?);
        } else {
            print_program(&program);
        }
        Ok(())
    }
}

fn print_program(program: &MetadataProgram) {
    print_list("core principles", program.core_principles());
    print_list("assets", program.assets());
    print_list("academics", program.academics());
    print_list("abilities", program.abilities());
    print_list("services", program.services());

    println!("{}", style("injection points").yellow().bold());
    for (point, target) in program.injection_points() {
        println!("  {} {} {}", point, style("→").cyan(), target);
    }

    let running: Vec<_> = program.registry().active(LifecycleKind::Service).collect();
    if !running.is_empty() {
        println!("{} {}", style("running").green().bold(), running.join(", "));
    }
}

fn print_list(title: &str, items: &[String]) {
    println!("{}", style(title).yellow().bold());
    for item in items {
        println!("  {} {}", style("•").dim(), item);
    }
}
