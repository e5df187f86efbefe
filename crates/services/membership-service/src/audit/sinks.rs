//! Audit sink implementations.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use domain::{DomainError, DomainResult, AUDIT_TRACING_TARGET};

use super::audit_log::{AuditAction, AuditEntry, AuditLog};

/// Audit sink that accepts and discards every record.
///
/// Bound when no audit destination is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAuditLog;

impl AuditLog for NullAuditLog {
    fn audit(&self, _login: &str, _action: AuditAction) -> DomainResult<()> {
        Ok(())
    }
}

/// Audit sink that forwards records to the tracing pipeline on the `audit` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditLog;

impl AuditLog for TracingAuditLog {
    fn audit(&self, login: &str, action: AuditAction) -> DomainResult<()> {
        tracing::info!(
            target: AUDIT_TRACING_TARGET,
            login = %login,
            action = ?action,
            "{}",
            action.message()
        );
        Ok(())
    }
}

/// Audit sink that keeps records in memory.
#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MemoryAuditLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record, oldest first
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Recorded actions, oldest first
    pub fn actions(&self) -> Vec<AuditAction> {
        self.entries().into_iter().map(|entry| entry.action).collect()
    }

    /// Recorded actions for a single login, oldest first
    pub fn actions_for(&self, login: &str) -> Vec<AuditAction> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.login == login)
            .map(|entry| entry.action)
            .collect()
    }

    /// Drop all records
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl AuditLog for MemoryAuditLog {
    fn audit(&self, login: &str, action: AuditAction) -> DomainResult<()> {
        self.entries
            .lock()
            .map_err(|_| DomainError::internal("Audit log lock poisoned"))?
            .push(AuditEntry::new(login, action));
        Ok(())
    }
}

/// Audit sink writing one JSON `AuditEntry` per line.
pub struct JsonLinesAuditLog<W: Write + Send> {
    writer: Mutex<W>,
}

impl JsonLinesAuditLog<File> {
    /// Open (or create) a file and append records to it
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self::new(file))
    }
}

impl<W: Write + Send> JsonLinesAuditLog<W> {
    /// Wrap any writer
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and return the writer
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> AuditLog for JsonLinesAuditLog<W> {
    fn audit(&self, login: &str, action: AuditAction) -> DomainResult<()> {
        let entry = AuditEntry::new(login, action);
        let mut line = serde_json::to_vec(&entry)
            .map_err(|e| DomainError::internal(format!("Audit entry encoding failed: {}", e)))?;
        line.push(b'\n');

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| DomainError::internal("Audit log lock poisoned"))?;
        writer.write_all(&line).map_err(write_failed)?;
        writer.flush().map_err(write_failed)
    }
}

fn write_failed(err: io::Error) -> DomainError {
    DomainError::unavailable(format!("Audit log write failed: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_null_log_accepts_writes() {
        assert!(NullAuditLog.audit("alice", AuditAction::Attempt).is_ok());
    }

    #[test]
    fn test_tracing_log_accepts_writes() {
        assert!(TracingAuditLog.audit("alice", AuditAction::Failure).is_ok());
    }

    #[test]
    fn test_memory_log_records_in_order() {
        let log = MemoryAuditLog::new();
        log.audit("alice", AuditAction::Attempt).unwrap();
        log.audit("bob", AuditAction::Attempt).unwrap();
        log.audit("alice", AuditAction::Success).unwrap();

        assert_eq!(
            log.actions(),
            vec![AuditAction::Attempt, AuditAction::Attempt, AuditAction::Success]
        );
        assert_eq!(
            log.actions_for("alice"),
            vec![AuditAction::Attempt, AuditAction::Success]
        );

        log.clear();
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_json_lines_log_writes_one_entry_per_line() {
        let log = JsonLinesAuditLog::new(Vec::new());
        log.audit("alice", AuditAction::Attempt).unwrap();
        log.audit("alice", AuditAction::Failure).unwrap();

        let output = String::from_utf8(log.into_inner()).unwrap();
        let entries: Vec<AuditEntry> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].action, AuditAction::Attempt);
        assert_eq!(entries[1].message, "Failed to log in.");
        assert!(entries.iter().all(|entry| entry.login == "alice"));
    }

    #[test]
    fn test_json_lines_write_failure_is_unavailable() {
        let log = JsonLinesAuditLog::new(BrokenWriter);
        let result = log.audit("alice", AuditAction::Attempt);

        assert!(matches!(result, Err(DomainError::Unavailable(_))));
    }

    #[test]
    fn test_json_lines_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");

        JsonLinesAuditLog::open(&path)
            .unwrap()
            .audit("alice", AuditAction::Attempt)
            .unwrap();
        JsonLinesAuditLog::open(&path)
            .unwrap()
            .audit("alice", AuditAction::Success)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }
}
