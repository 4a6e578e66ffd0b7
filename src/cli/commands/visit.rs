use crate::cli::parser::{Commands, VisitAction};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::del::DeleteLogic;
use crate::core::edit::EditLogic;
use crate::db::store::LocalStore;
use crate::errors::AppResult;
use crate::models::visit::{ContactVisit, VisitFields};
use crate::ui::messages::info;
use crate::ui::prompt::ask_confirmation;
use crate::utils::formatting::study_mark;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Visit { action } = cmd else {
        return Ok(());
    };

    let mut store = LocalStore::open(&cfg.database)?;

    match action {
        VisitAction::Add { name, note, study } => {
            AddLogic::visit(&mut store, &VisitFields::new(name.as_str(), note.as_str(), *study))?;
        }

        VisitAction::List => print_visits(&store.visits()?),

        VisitAction::Edit {
            id,
            name,
            note,
            study,
            no_study,
        } => {
            let current = store.get_visit(*id)?;
            let is_study = if *study {
                true
            } else if *no_study {
                false
            } else {
                current.is_study
            };

            let fields = VisitFields::new(
                name.clone().unwrap_or(current.name),
                note.clone().unwrap_or(current.note),
                is_study,
            );
            EditLogic::visit(&mut store, *id, &fields)?;
        }

        VisitAction::Del { id, force } => {
            let visit = store.get_visit(*id)?;
            let prompt = format!("Delete return visit #{} ({})?", visit.id, visit.name);

            if !*force && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            DeleteLogic::visit(&mut store, *id)?;
        }
    }

    Ok(())
}

fn print_visits(visits: &[ContactVisit]) {
    if visits.is_empty() {
        println!("No return visits recorded.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("NAME", 12),
        Column::new("STUDY", 5),
        Column::new("NOTE", 4),
    ]);

    for v in visits {
        table.add_row(vec![
            v.id.to_string(),
            v.name.clone(),
            study_mark(v.is_study).to_string(),
            v.note.clone(),
        ]);
    }

    print!("{}", table.render());
}
