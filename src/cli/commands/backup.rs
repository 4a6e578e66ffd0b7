use crate::auth::TokenAuth;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::LocalStore;
use crate::errors::AppResult;
use crate::remote::SheetsClient;
use crate::sync::RemoteSync;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { force } = cmd {
        let prompt = format!(
            "Upload every local service record to sheet '{}'? Rows are appended, existing rows are kept.",
            cfg.sheet_name
        );
        if !*force && !ask_confirmation(&prompt) {
            info("Backup cancelled.");
            return Ok(());
        }

        let store = LocalStore::open(&cfg.database)?;
        let auth = TokenAuth::from_config(cfg);
        let remote = SheetsClient::from_config(cfg);

        info("Backing up…");
        let summary = RemoteSync::new(&auth, &remote).export_all(&store)?;

        success(format!(
            "Backup completed: {} records uploaded.",
            summary.count
        ));
    }

    Ok(())
}
