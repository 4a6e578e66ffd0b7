use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

fn step(label: &str) {
    println!("{}▶ {}…{}", CYAN, label, RESET);
}

fn done(label: &str) {
    println!("{}✔ {}{}\n", GREEN, label, RESET);
}

/// Maintenance on the service database. Flags run in a fixed order:
/// migrate, info, check, vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;

    if *migrate {
        step("Running migrations");
        run_pending_migrations(&pool.conn)?;
        done("Migration completed.");
    }

    if *info {
        // counts below need the service tables
        run_pending_migrations(&pool.conn)?;
        stats::print_db_info(&pool.conn, &cfg.database)?;
    }

    if *check {
        step("Running integrity check");
        let verdict = pool.integrity_check()?;
        if verdict == "ok" {
            done("Integrity check passed.");
        } else {
            println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, verdict);
        }
    }

    if *vacuum {
        step("Running VACUUM");
        pool.vacuum()?;
        done("Vacuum completed.");
    }

    Ok(())
}
