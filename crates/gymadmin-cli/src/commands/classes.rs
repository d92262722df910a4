//! Class commands

use clap::{Args, Subcommand};
use gymadmin_core::errors::{ExError, ExErrorKind};
use gymadmin_core::model::{Collection, GymClass, GymClassDraft};
use gymadmin_core::rules::validation::{parse_capacity, validate_class};
use gymadmin_core::{apply, Command, CommandOutcome};

use super::context::Context;
use super::CmdResult;

#[derive(Debug, Args)]
pub struct ClassesArgs {
    #[command(subcommand)]
    pub command: ClassesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ClassesCommand {
    /// List classes
    List,
    /// Create a class
    Add {
        #[arg(long)]
        name: String,
        /// Free text, e.g. "Lun/Mie 18:00"
        #[arg(long)]
        schedule: String,
        /// Positive integer
        #[arg(long)]
        capacity: String,
    },
    /// Edit a class; omitted fields keep their value
    Update {
        id: u32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        schedule: Option<String>,
        #[arg(long)]
        capacity: Option<String>,
    },
    /// Delete a class and its reservations
    Delete { id: u32 },
}

pub fn execute(ctx: &mut Context, args: ClassesArgs) -> CmdResult {
    match args.command {
        ClassesCommand::List => {
            let rows = ctx.store.classes();
            if ctx.json {
                return ctx.print_json(&rows);
            }
            println!("{:>4}  {:<16}  {:<20}  {:>5}", "ID", "NOMBRE", "HORARIO", "CUPO");
            for class in rows {
                println!(
                    "{:>4}  {:<16}  {:<20}  {:>5}",
                    class.id, class.details.name, class.details.schedule, class.details.capacity
                );
            }
            Ok(())
        }
        ClassesCommand::Add {
            name,
            schedule,
            capacity,
        } => {
            let draft = GymClassDraft::new(name.trim(), schedule.trim(), parse_capacity(&capacity)?);
            validate_class(&draft)?;
            if let CommandOutcome::Created(id) = apply(&mut ctx.store, Command::ClassAdd(draft))? {
                println!("Clase creada con id {}", id);
            }
            Ok(())
        }
        ClassesCommand::Update {
            id,
            name,
            schedule,
            capacity,
        } => {
            let current = ctx
                .store
                .class(id)
                .ok_or_else(|| {
                    ExError::new(ExErrorKind::NotFound)
                        .with_op("update_class")
                        .with_collection(Collection::Classes.key())
                        .with_entity_id(id)
                        .with_message("no class with this id")
                })?
                .details
                .clone();
            let details = GymClassDraft {
                name: name.map_or(current.name, |v| v.trim().to_string()),
                schedule: schedule.map_or(current.schedule, |v| v.trim().to_string()),
                capacity: match capacity {
                    Some(raw) => parse_capacity(&raw)?,
                    None => current.capacity,
                },
            };
            validate_class(&details)?;
            apply(&mut ctx.store, Command::ClassUpdate(GymClass { id, details }))?;
            println!("Clase {} actualizada", id);
            Ok(())
        }
        ClassesCommand::Delete { id } => {
            let before = ctx.store.reservations().len();
            let outcome = apply(&mut ctx.store, Command::ClassDelete { id })?;
            let cascaded = before - ctx.store.reservations().len();
            if outcome.changed() {
                println!("Clase {} eliminada ({} reservas eliminadas)", id, cascaded);
            } else {
                println!("Clase {} no existe", id);
            }
            Ok(())
        }
    }
}
