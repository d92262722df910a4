//! Seed import and reset
//!
//! Usage: gymadmin seed import <PATH> | gymadmin reset

use clap::{Args, Subcommand};
use gymadmin_core::{apply, Command, SeedData};
use std::path::PathBuf;

use super::context::Context;
use super::CmdResult;

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Replace every collection with the contents of a YAML fixture
    Import {
        /// Path to the seed YAML file
        path: PathBuf,
    },
}

pub fn execute(ctx: &mut Context, args: SeedArgs) -> CmdResult {
    match args.command {
        SeedCommand::Import { path } => {
            tracing::info!(path = %path.display(), "importing seed fixture");
            let summary = gymadmin_store::import_seed(&path, &mut ctx.store)?;
            if ctx.json {
                return ctx.print_json(&summary);
            }
            println!(
                "✓ Imported {} members, {} instructors, {} classes, {} reservations (digest: {})",
                summary.members,
                summary.instructors,
                summary.classes,
                summary.reservations,
                summary.digest
            );
            Ok(())
        }
    }
}

/// Replace everything with the demo data dated today
pub fn execute_reset(ctx: &mut Context) -> CmdResult {
    apply(&mut ctx.store, Command::ReplaceAll(SeedData::demo_today()))?;
    println!("Datos de demostración restaurados");
    Ok(())
}
