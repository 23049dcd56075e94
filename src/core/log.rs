use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{color_for_operation, paint};
use crate::utils::table::{Table, truncate};

const MAX_TARGET_WIDTH: usize = 60;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(pool)?;

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");

        let mut table = Table::new(["ID", "DATE", "OPERATION", "TARGET", "MESSAGE"]);
        for e in &entries {
            table.add_row(vec![
                e.id.to_string(),
                e.display_date(),
                paint(color_for_operation(&e.operation), &e.operation),
                truncate(&e.target, MAX_TARGET_WIDTH),
                e.message.clone(),
            ]);
        }

        print!("{}", table.render());
        Ok(())
    }
}
