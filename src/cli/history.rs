//! Audit history command

use crate::error::KitchenResult;
use crate::storage::Storage;

/// Print the last `limit` audit entries, oldest first
pub fn handle_history_command(storage: &Storage, limit: usize) -> KitchenResult<()> {
    let entries = storage.audit().read_recent(limit)?;
    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
