use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::Aggregator;
use crate::db::store::LocalStore;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::formatting::format_hours;
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { month } = cmd {
        let today = date::today();

        let (year, month) = match month {
            Some(m) => date::parse_month(m).ok_or_else(|| AppError::InvalidDate(m.clone()))?,
            None => (today.year(), today.month()),
        };

        let store = LocalStore::open(&cfg.database)?;
        let aggregator = Aggregator::new(&store);

        let monthly = aggregator.monthly_totals(year, month)?;
        // The service year always follows the real current date
        let service_year = aggregator.service_year_totals(&today)?;

        println!("📊 Month {:04}-{:02}", monthly.year, monthly.month);
        println!(
            "   Hours:   {}",
            colorize_optional(&format_hours(monthly.total_hours))
        );
        println!(
            "   Studies: {}",
            colorize_optional(&monthly.total_studies.to_string())
        );
        println!("   Records: {}", monthly.record_count);
        println!();
        println!(
            "📅 Service year {} ({} → {})",
            service_year.label,
            service_year.window.first_day(),
            service_year.window.last_day()
        );
        println!(
            "   Hours:   {}",
            colorize_optional(&format_hours(service_year.total_hours))
        );
    }

    Ok(())
}
