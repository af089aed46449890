//! The interactive menu session: a dispatch loop over the same handlers the
//! flag-driven subcommands use.

use anyhow::Result;

use pantry_core::catalog::Catalog;
use pantry_core::io::LineIo;
use pantry_core::plan::PlanStore;

use crate::meal_cmds::{cmd_add, cmd_show};
use crate::plan_cmds::{cmd_list_plan, cmd_plan};
use crate::shopping_cmd::cmd_save;

/// Run the menu loop until the user types `exit`.
///
/// Errors from individual operations are reported and the loop continues;
/// nothing in here terminates the session except `exit` or losing stdin.
pub async fn cmd_menu(
    catalog: &mut Catalog,
    store: &PlanStore,
    io: &mut dyn LineIo,
) -> Result<()> {
    loop {
        io.write_line("What would you like to do (add, show, plan, list plan, save, exit)?")?;
        let choice = io.read_line()?.trim().to_lowercase();

        let result = match choice.as_str() {
            "add" => cmd_add(catalog, io, None, None, None).await,
            "show" => cmd_show(catalog, io, None).await,
            "plan" => cmd_plan(catalog, store, io).await,
            "list plan" => cmd_list_plan(catalog, store, io).await,
            "save" => cmd_save(catalog, store, io, None).await,
            "exit" => {
                io.write_line("Bye!")?;
                return Ok(());
            }
            _ => {
                io.write_line("Invalid option. Please try again.")?;
                Ok(())
            }
        };

        if let Err(e) = result {
            io.write_line(&format!("{e:#}"))?;
        }
    }
}
