//! Member commands
//!
//! Usage: gymadmin members {list [--search TERM] | add ... | update ID ... | delete ID}

use clap::{Args, Subcommand};
use gymadmin_core::errors::{ExError, ExErrorKind};
use gymadmin_core::model::{Collection, Member};
use gymadmin_core::queries::search_members;
use gymadmin_core::{apply, Command, CommandOutcome};

use super::context::Context;
use super::person::{print_people, PersonFields, PersonPatch};
use super::CmdResult;

#[derive(Debug, Args)]
pub struct MembersArgs {
    #[command(subcommand)]
    pub command: MembersCommand,
}

#[derive(Debug, Subcommand)]
pub enum MembersCommand {
    /// List members, optionally filtered by name or DNI
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Register a member
    Add(PersonFields),
    /// Edit a member
    Update {
        id: u32,
        #[command(flatten)]
        patch: PersonPatch,
    },
    /// Delete a member and their reservations
    Delete { id: u32 },
}

pub fn execute(ctx: &mut Context, args: MembersArgs) -> CmdResult {
    match args.command {
        MembersCommand::List { search } => {
            let rows = search_members(&ctx.store, search.as_deref().unwrap_or(""));
            if ctx.json {
                return ctx.print_json(&rows);
            }
            print_people(rows.iter().map(|m| (m.id, &m.details)));
            Ok(())
        }
        MembersCommand::Add(fields) => {
            let draft = fields.into_draft()?;
            if let CommandOutcome::Created(id) = apply(&mut ctx.store, Command::MemberAdd(draft))? {
                println!("Socio creado con id {}", id);
            }
            Ok(())
        }
        MembersCommand::Update { id, patch } => {
            let current = ctx
                .store
                .member(id)
                .ok_or_else(|| not_found(id))?
                .details
                .clone();
            let details = patch.apply_to(&current)?;
            apply(&mut ctx.store, Command::MemberUpdate(Member { id, details }))?;
            println!("Socio {} actualizado", id);
            Ok(())
        }
        MembersCommand::Delete { id } => {
            let before = ctx.store.reservations().len();
            let outcome = apply(&mut ctx.store, Command::MemberDelete { id })?;
            let cascaded = before - ctx.store.reservations().len();
            if outcome.changed() {
                println!("Socio {} eliminado ({} reservas eliminadas)", id, cascaded);
            } else {
                println!("Socio {} no existe", id);
            }
            Ok(())
        }
    }
}

fn not_found(id: u32) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_op("update_member")
        .with_collection(Collection::Members.key())
        .with_entity_id(id)
        .with_message("no member with this id")
}
