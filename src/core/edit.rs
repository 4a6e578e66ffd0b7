use crate::db::log::ttlog_quiet;
use crate::db::store::LocalStore;
use crate::errors::AppResult;
use crate::models::record::RecordFields;
use crate::models::visit::VisitFields;
use crate::ui::messages::success;

/// Full overwrite of an existing record's mutable fields.
pub struct EditLogic;

impl EditLogic {
    pub fn record(store: &mut LocalStore, id: i64, fields: &RecordFields) -> AppResult<()> {
        let before = store.get_record(id)?;
        store.update_record(id, fields)?;

        ttlog_quiet(
            store.conn(),
            "edit",
            &format!("record #{}", id),
            &format!(
                "{} {:.2}h {}s → {} {:.2}h {}s",
                before.date,
                before.hours,
                before.study_count,
                fields.date,
                fields.hours,
                fields.study_count
            ),
        );

        success(format!("Service record #{} updated.", id));
        Ok(())
    }

    pub fn visit(store: &mut LocalStore, id: i64, fields: &VisitFields) -> AppResult<()> {
        store.update_visit(id, fields)?;

        ttlog_quiet(
            store.conn(),
            "visit_edit",
            &format!("visit #{}", id),
            &fields.name,
        );

        success(format!("Return visit #{} updated.", id));
        Ok(())
    }
}
