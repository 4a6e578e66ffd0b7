use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::store::LocalStore;
use crate::errors::{AppError, AppResult};
use crate::models::record::RecordFields;
use crate::utils::date;

/// Add a service record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        hours,
        minutes,
        studies,
        note,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Hours + minutes → decimal hours
        //
        let fields = RecordFields::from_hours_minutes(d, *hours, *minutes, *studies, note.trim());

        //
        // 3. Open DB and execute logic
        //
        let mut store = LocalStore::open(&cfg.database)?;
        AddLogic::record(&mut store, &fields)?;
    }

    Ok(())
}
