use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::store::LocalStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, force } = cmd {
        let mut store = LocalStore::open(&cfg.database)?;

        // Fails early with NotFound before asking anything
        let rec = store.get_record(*id)?;

        let prompt = format!(
            "Delete service record #{} ({}, {:.1}h)? This action is irreversible.",
            rec.id, rec.date, rec.hours
        );

        if !*force && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        DeleteLogic::record(&mut store, *id)?;
    }

    Ok(())
}
