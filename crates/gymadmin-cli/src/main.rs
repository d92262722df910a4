//! Gym administration console
//!
//! Every command logs in with the configured account before touching the
//! store.

use clap::{Parser, Subcommand};
use gymadmin_core_types::RequestId;

mod commands;

use commands::context::GlobalArgs;

#[derive(Debug, Parser)]
#[command(name = "gymadmin")]
#[command(about = "Gimnasio Admin - members, instructors, classes and reservations", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check the credentials and show the logged-in operator
    Login,
    /// Collection counts
    Dashboard,
    /// Member operations
    Members(commands::members::MembersArgs),
    /// Instructor operations
    Instructors(commands::instructors::InstructorsArgs),
    /// Class operations
    Classes(commands::classes::ClassesArgs),
    /// Reservation operations
    Reservations(commands::reservations::ReservationsArgs),
    /// Seed fixture operations
    Seed(commands::seed::SeedArgs),
    /// Replace everything with the demo data
    Reset,
}

fn main() {
    let cli = Cli::parse();

    let request_id = RequestId::new();
    let result = commands::context::Context::open(&cli.global).and_then(|mut ctx| {
        let span = tracing::info_span!("request", request_id = %request_id);
        let _guard = span.enter();

        match cli.command {
            Commands::Login => commands::dashboard::execute_login(&ctx),
            Commands::Dashboard => commands::dashboard::execute(&ctx),
            Commands::Members(args) => commands::members::execute(&mut ctx, args),
            Commands::Instructors(args) => commands::instructors::execute(&mut ctx, args),
            Commands::Classes(args) => commands::classes::execute(&mut ctx, args),
            Commands::Reservations(args) => commands::reservations::execute(&mut ctx, args),
            Commands::Seed(args) => commands::seed::execute(&mut ctx, args),
            Commands::Reset => commands::seed::execute_reset(&mut ctx),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
