use crate::auth::TokenAuth;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::LocalStore;
use crate::errors::AppResult;
use crate::remote::SheetsClient;
use crate::sync::{ImportMode, RemoteSync};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Restore { merge, force } = cmd {
        let mode = if *merge {
            ImportMode::MergeIncoming
        } else {
            ImportMode::ReplaceAll
        };

        let prompt = match mode {
            ImportMode::ReplaceAll => format!(
                "Restore from sheet '{}'? ALL local records and visits will be replaced by your remote rows.",
                cfg.sheet_name
            ),
            ImportMode::MergeIncoming => format!(
                "Restore from sheet '{}'? Your remote rows will be added to the local data.",
                cfg.sheet_name
            ),
        };
        if !*force && !ask_confirmation(&prompt) {
            info("Restore cancelled.");
            return Ok(());
        }

        let mut store = LocalStore::open(&cfg.database)?;
        let auth = TokenAuth::from_config(cfg);
        let remote = SheetsClient::from_config(cfg);

        info("Restoring…");
        let summary = RemoteSync::new(&auth, &remote).import_all(&mut store, mode)?;

        success(format!(
            "Restore completed: {} service records and {} return visits imported.",
            summary.record_count, summary.visit_count
        ));
        if summary.skipped_rows > 0 {
            warning(format!(
                "{} rows had an unreadable date and were skipped.",
                summary.skipped_rows
            ));
        }
    }

    Ok(())
}
