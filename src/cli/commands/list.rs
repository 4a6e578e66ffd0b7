use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::records::load_records_between;
use crate::db::store::LocalStore;
use crate::errors::{AppError, AppResult};
use crate::models::record::ActivityRecord;
use crate::utils::date;
use crate::utils::formatting::{bold, format_hours, hours2readable};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let store = LocalStore::open(&cfg.database)?;

        let (from, to) = resolve_period(period)?;
        let records = load_records_between(store.conn(), from, to)?;

        if records.is_empty() {
            println!("No service records between {} and {}", from, to);
            return Ok(());
        }

        print_records(from, to, &records);
    }
    Ok(())
}

fn resolve_period(period: &Option<String>) -> AppResult<(NaiveDate, NaiveDate)> {
    match period {
        Some(p) => date::resolve_range(p).map_err(AppError::InvalidDate),
        None => date::current_month_range().map_err(AppError::InvalidDate),
    }
}

fn print_records(from: NaiveDate, to: NaiveDate, records: &[ActivityRecord]) {
    println!("{}", bold(&format!("Service records {} → {}", from, to)));
    println!();

    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("DATE", 10),
        Column::new("HOURS", 6),
        Column::new("TIME", 7),
        Column::new("STUDIES", 7),
        Column::new("NOTE", 4),
    ]);

    for r in records {
        table.add_row(vec![
            r.id.to_string(),
            r.date_str(),
            format_hours(r.hours),
            hours2readable(r.hours),
            r.study_count.to_string(),
            r.note.clone(),
        ]);
    }

    print!("{}", table.render());

    let total_hours: f64 = records.iter().map(|r| r.hours).sum();
    let total_studies: u64 = records.iter().map(|r| u64::from(r.study_count)).sum();
    println!();
    println!(
        "Total: {} hours ({}), {} studies, {} records",
        format_hours(total_hours),
        hours2readable(total_hours),
        total_studies,
        records.len()
    );
}
