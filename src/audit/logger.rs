//! Audit logger for the append-only audit log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{SpendbookError, SpendbookResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file (JSON lines)
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry and flush
    pub fn log(&self, entry: &AuditEntry) -> SpendbookResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| SpendbookError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| SpendbookError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| SpendbookError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| SpendbookError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all audit entries, oldest first
    pub fn read_all(&self) -> SpendbookResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| SpendbookError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                SpendbookError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                SpendbookError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries from the log
    pub fn read_recent(&self, count: usize) -> SpendbookResult<Vec<AuditEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Get the path to the audit log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{ExpenseRecord, MonthKey};
    use tempfile::TempDir;

    fn logger_in(dir: &TempDir) -> AuditLogger {
        AuditLogger::new(dir.path().join("audit.log"))
    }

    #[test]
    fn test_missing_log_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);

        assert!(logger.read_all().unwrap().is_empty());
        assert!(!logger.path().exists());
    }

    #[test]
    fn test_log_and_read_back_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);
        let month = MonthKey::from_raw("2024-05");
        let record = ExpenseRecord::new("Coffee", "3.50", "2024-05-02", "Food");

        logger.log(&AuditEntry::add(&month, 0, &record)).unwrap();
        logger.log(&AuditEntry::delete(&month, 0, &record)).unwrap();
        logger.log(&AuditEntry::set_budget(None, "100")).unwrap();

        let entries = logger.read_all().unwrap();
        let ops: Vec<_> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(ops, vec![Operation::Add, Operation::Delete, Operation::SetBudget]);

        let content = std::fs::read_to_string(logger.path()).unwrap();
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_read_recent() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);

        for value in ["10", "20", "30"] {
            logger.log(&AuditEntry::set_budget(None, value)).unwrap();
        }

        let recent = logger.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[1].after, Some(serde_json::Value::from("30")));
        assert_eq!(logger.read_recent(10).unwrap().len(), 3);
    }

    #[test]
    fn test_corrupt_line_reports_line_number() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);
        logger.log(&AuditEntry::set_budget(None, "10")).unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(logger.path())
            .and_then(|mut f| writeln!(f, "garbage"))
            .unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
