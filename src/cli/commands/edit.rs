use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::db::store::LocalStore;
use crate::errors::{AppError, AppResult};
use crate::models::record::RecordFields;
use crate::utils::date;

/// Edit a service record. Options left out keep the stored value; the
/// resulting field set then overwrites the record as a whole.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date: date_str,
        hours,
        minutes,
        studies,
        note,
    } = cmd
    {
        let new_date = match date_str {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        let mut store = LocalStore::open(&cfg.database)?;
        let current = store.get_record(*id)?.fields();

        let new_hours = if hours.is_some() || minutes.is_some() {
            hours.unwrap_or(0.0) + f64::from(minutes.unwrap_or(0)) / 60.0
        } else {
            current.hours
        };

        let fields = RecordFields::new(
            new_date.unwrap_or(current.date),
            new_hours,
            studies.unwrap_or(current.study_count),
            note.as_deref().map(str::trim).unwrap_or(&current.note),
        );

        EditLogic::record(&mut store, *id, &fields)?;
    }

    Ok(())
}
