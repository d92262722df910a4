//! `login` and `dashboard`

use gymadmin_core::queries::dashboard_counts;

use super::context::Context;
use super::CmdResult;

pub fn execute_login(ctx: &Context) -> CmdResult {
    let admin = ctx.session.admin();
    if ctx.json {
        return ctx.print_json(admin);
    }
    println!("Bienvenido, {} ({})", admin.display_name, admin.username);
    Ok(())
}

pub fn execute(ctx: &Context) -> CmdResult {
    let counts = dashboard_counts(&ctx.store);
    if ctx.json {
        return ctx.print_json(&counts);
    }
    println!("Socios:       {}", counts.members);
    println!("Instructores: {}", counts.instructors);
    println!("Clases:       {}", counts.classes);
    println!("Reservas:     {}", counts.reservations);
    Ok(())
}
