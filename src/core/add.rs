use crate::db::log::ttlog_quiet;
use crate::db::store::LocalStore;
use crate::errors::AppResult;
use crate::models::record::RecordFields;
use crate::models::visit::VisitFields;
use crate::ui::messages::success;

/// High-level business logic for the `add` and `visit add` commands.
pub struct AddLogic;

impl AddLogic {
    pub fn record(store: &mut LocalStore, fields: &RecordFields) -> AppResult<i64> {
        let id = store.add_record(fields)?;

        ttlog_quiet(
            store.conn(),
            "add",
            &format!("record #{}", id),
            &format!(
                "{}: {:.2}h, {} studies",
                fields.date, fields.hours, fields.study_count
            ),
        );

        success(format!(
            "Service record #{} saved for {} ({:.1}h, {} studies).",
            id, fields.date, fields.hours, fields.study_count
        ));
        Ok(id)
    }

    pub fn visit(store: &mut LocalStore, fields: &VisitFields) -> AppResult<i64> {
        let id = store.add_visit(fields)?;

        ttlog_quiet(
            store.conn(),
            "visit_add",
            &format!("visit #{}", id),
            &fields.name,
        );

        success(format!("Return visit #{} saved: {}", id, fields.name));
        Ok(id)
    }
}
