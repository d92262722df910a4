//! Reservation commands
//!
//! Reservations cannot be edited, only created and cancelled.

use chrono::Utc;
use clap::{Args, Subcommand};
use gymadmin_core::model::ReservationDraft;
use gymadmin_core::queries::reservation_views;
use gymadmin_core::rules::validation::{parse_date, validate_reservation_refs};
use gymadmin_core::{apply, Command, CommandOutcome};

use super::context::Context;
use super::CmdResult;

#[derive(Debug, Args)]
pub struct ReservationsArgs {
    #[command(subcommand)]
    pub command: ReservationsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReservationsCommand {
    /// List reservations with member and class names
    List,
    /// Book a member into a class
    Add {
        #[arg(long)]
        member: u32,
        #[arg(long)]
        class: u32,
        /// YYYY-MM-DD, defaults to today (UTC)
        #[arg(long)]
        date: Option<String>,
    },
    /// Cancel a reservation
    Delete { id: u32 },
}

pub fn execute(ctx: &mut Context, args: ReservationsArgs) -> CmdResult {
    match args.command {
        ReservationsCommand::List => {
            let views = reservation_views(&ctx.store);
            if ctx.json {
                return ctx.print_json(&views);
            }
            println!("{:>4}  {:<24}  {:<32}  {}", "ID", "SOCIO", "CLASE", "FECHA");
            for view in views {
                println!(
                    "{:>4}  {:<24}  {:<32}  {}",
                    view.id, view.member, view.class, view.date
                );
            }
            Ok(())
        }
        ReservationsCommand::Add {
            member,
            class,
            date,
        } => {
            let date = match date {
                Some(raw) => parse_date(&raw)?,
                None => Utc::now().date_naive(),
            };
            let draft = ReservationDraft::new(member, class, date);
            validate_reservation_refs(&ctx.store, &draft)?;
            if let CommandOutcome::Created(id) =
                apply(&mut ctx.store, Command::ReservationAdd(draft))?
            {
                println!("Reserva creada con id {}", id);
            }
            Ok(())
        }
        ReservationsCommand::Delete { id } => {
            if apply(&mut ctx.store, Command::ReservationDelete { id })?.changed() {
                println!("Reserva {} eliminada", id);
            } else {
                println!("Reserva {} no existe", id);
            }
            Ok(())
        }
    }
}
