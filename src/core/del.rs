use crate::db::log::ttlog_quiet;
use crate::db::store::LocalStore;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one service record. Unknown ids are reported as `NotFound`.
    pub fn record(store: &mut LocalStore, id: i64) -> AppResult<()> {
        let rec = store.get_record(id)?;
        store.delete_record(id)?;

        ttlog_quiet(
            store.conn(),
            "del",
            &format!("record #{}", id),
            &format!("{}: {:.2}h", rec.date, rec.hours),
        );

        info(format!("Deleted service record #{} ({})", id, rec.date));
        Ok(())
    }

    pub fn visit(store: &mut LocalStore, id: i64) -> AppResult<()> {
        let visit = store.get_visit(id)?;
        store.delete_visit(id)?;

        ttlog_quiet(
            store.conn(),
            "visit_del",
            &format!("visit #{}", id),
            &visit.name,
        );

        info(format!("Deleted return visit #{} ({})", id, visit.name));
        Ok(())
    }
}
