//! Backup to and restore from the remote table.
//!
//! Export appends one row per local service record and never touches the
//! rows already there, so exporting twice stores everything twice.
//!
//! Import keeps only the rows tagged with the caller's identity and writes
//! them locally inside a single transaction. All network I/O happens before
//! that transaction opens: if anything fails, the local store is exactly
//! what it was before the call.

pub mod row;

use crate::auth::AuthProvider;
use crate::db::log::ttlog_quiet;
use crate::db::store::{LocalStore, clear_tables, now_stamp};
use crate::db::{records, visits};
use crate::errors::{AppError, AppResult};
use crate::models::record::RecordFields;
use crate::models::visit::VisitFields;
use crate::remote::RemoteTable;
use crate::ui::messages::warning;
use row::{RecordCell, RemoteRow, export_row};
use std::collections::HashSet;

/// How imported rows are combined with local data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Local data is discarded and replaced by the imported rows.
    #[default]
    ReplaceAll,
    /// Imported rows are added next to the existing local data.
    MergeIncoming,
}

impl ImportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportMode::ReplaceAll => "replace",
            ImportMode::MergeIncoming => "merge",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub record_count: usize,
    pub visit_count: usize,
    /// Rows whose date cell could not be read.
    pub skipped_rows: usize,
}

/// Local writes derived from a batch of remote rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportPlan {
    pub records: Vec<RecordFields>,
    pub visits: Vec<VisitFields>,
    pub bad_dates: Vec<String>,
}

/// Turn matching rows into inserts, in row order.
///
/// Visit names are de-duplicated within this batch only: the first row
/// carrying a name wins, and nothing already stored locally is consulted.
pub fn plan_import<'a, I>(rows: I) -> ImportPlan
where
    I: IntoIterator<Item = RemoteRow<'a>>,
{
    let mut plan = ImportPlan::default();
    let mut seen_names: HashSet<String> = HashSet::new();

    for row in rows {
        match row.record() {
            RecordCell::Parsed(fields) => plan.records.push(fields),
            RecordCell::BadDate(raw) => plan.bad_dates.push(raw),
            RecordCell::Absent => {}
        }

        if let Some(visit) = row.visit()
            && seen_names.insert(visit.name.clone())
        {
            plan.visits.push(visit);
        }
    }

    plan
}

pub struct RemoteSync<'a> {
    auth: &'a dyn AuthProvider,
    remote: &'a dyn RemoteTable,
}

impl<'a> RemoteSync<'a> {
    pub fn new(auth: &'a dyn AuthProvider, remote: &'a dyn RemoteTable) -> Self {
        Self { auth, remote }
    }

    /// Append every local service record to the remote table.
    pub fn export_all(&self, store: &LocalStore) -> AppResult<ExportSummary> {
        let creds = self.auth.acquire()?;

        let local = store.records()?;
        if local.is_empty() {
            return Err(AppError::EmptyLocalData);
        }

        let rows: Vec<_> = local
            .iter()
            .map(|r| export_row(r, &creds.identity))
            .collect();

        let count = self.remote.append_rows(&creds.token, &rows)?;

        ttlog_quiet(
            store.conn(),
            "backup",
            &creds.identity,
            &format!("Exported {} service records", count),
        );

        Ok(ExportSummary { count })
    }

    /// Pull the caller's rows from the remote table into the local store.
    pub fn import_all(&self, store: &mut LocalStore, mode: ImportMode) -> AppResult<ImportSummary> {
        let creds = self.auth.acquire()?;
        let rows = self.remote.fetch_rows(&creds.token)?;

        let mine: Vec<RemoteRow<'_>> = rows
            .iter()
            .map(|cells| RemoteRow::new(cells))
            .filter(|row| row.belongs_to(&creds.identity))
            .collect();

        if mine.is_empty() {
            return Err(AppError::NoMatchingRemoteData);
        }

        let plan = plan_import(mine);
        for raw in &plan.bad_dates {
            warning(format!("Skipping service record with unreadable date '{}'", raw));
        }

        let created_at = now_stamp();
        let summary = store.pool().with_transaction(|tx| {
            if mode == ImportMode::ReplaceAll {
                clear_tables(tx)?;
            }
            for fields in &plan.records {
                records::insert_record(tx, fields, &created_at)?;
            }
            for fields in &plan.visits {
                visits::insert_visit(tx, fields, &created_at)?;
            }
            Ok(ImportSummary {
                record_count: plan.records.len(),
                visit_count: plan.visits.len(),
                skipped_rows: plan.bad_dates.len(),
            })
        })?;

        ttlog_quiet(
            store.conn(),
            "restore",
            &creds.identity,
            &format!(
                "Imported {} service records and {} return visits ({})",
                summary.record_count,
                summary.visit_count,
                mode.as_str()
            ),
        );

        Ok(summary)
    }
}
