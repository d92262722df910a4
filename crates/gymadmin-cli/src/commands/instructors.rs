//! Instructor commands
//!
//! Instructors are not referenced by reservations, so delete never cascades.

use clap::{Args, Subcommand};
use gymadmin_core::errors::{ExError, ExErrorKind};
use gymadmin_core::model::{Collection, Instructor};
use gymadmin_core::queries::search_instructors;
use gymadmin_core::{apply, Command, CommandOutcome};

use super::context::Context;
use super::person::{print_people, PersonFields, PersonPatch};
use super::CmdResult;

#[derive(Debug, Args)]
pub struct InstructorsArgs {
    #[command(subcommand)]
    pub command: InstructorsCommand,
}

#[derive(Debug, Subcommand)]
pub enum InstructorsCommand {
    /// List instructors, optionally filtered by name
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Register an instructor
    Add(PersonFields),
    /// Edit an instructor
    Update {
        id: u32,
        #[command(flatten)]
        patch: PersonPatch,
    },
    /// Delete an instructor
    Delete { id: u32 },
}

pub fn execute(ctx: &mut Context, args: InstructorsArgs) -> CmdResult {
    match args.command {
        InstructorsCommand::List { search } => {
            let rows = search_instructors(&ctx.store, search.as_deref().unwrap_or(""));
            if ctx.json {
                return ctx.print_json(&rows);
            }
            print_people(rows.iter().map(|i| (i.id, &i.details)));
            Ok(())
        }
        InstructorsCommand::Add(fields) => {
            let draft = fields.into_draft()?;
            if let CommandOutcome::Created(id) =
                apply(&mut ctx.store, Command::InstructorAdd(draft))?
            {
                println!("Instructor creado con id {}", id);
            }
            Ok(())
        }
        InstructorsCommand::Update { id, patch } => {
            let current = ctx
                .store
                .instructor(id)
                .ok_or_else(|| {
                    ExError::new(ExErrorKind::NotFound)
                        .with_op("update_instructor")
                        .with_collection(Collection::Instructors.key())
                        .with_entity_id(id)
                        .with_message("no instructor with this id")
                })?
                .details
                .clone();
            let details = patch.apply_to(&current)?;
            apply(
                &mut ctx.store,
                Command::InstructorUpdate(Instructor { id, details }),
            )?;
            println!("Instructor {} actualizado", id);
            Ok(())
        }
        InstructorsCommand::Delete { id } => {
            if apply(&mut ctx.store, Command::InstructorDelete { id })?.changed() {
                println!("Instructor {} eliminado", id);
            } else {
                println!("Instructor {} no existe", id);
            }
            Ok(())
        }
    }
}
