//! Audit history command

use crate::audit::AuditLogger;
use crate::config::SpendbookPaths;
use crate::error::SpendbookResult;

/// Print the most recent `limit` audit entries, oldest first
pub fn handle_history(paths: &SpendbookPaths, limit: usize) -> SpendbookResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
