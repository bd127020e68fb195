//! SQLite-backed credential store.
//!
//! Rows live in a `passwords` table with hex-encoded `hash` and `salt`
//! columns. The database path is always supplied by the caller.

use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row};
use tracing::debug;

use super::{encode_field, CredentialRecord, CredentialStore};
use crate::errors::Result;

/// A connection to a credential database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path`.
    ///
    /// The file is created with owner-only permissions on Unix.
    pub fn open(path: &Path) -> Result<Self> {
        let store = Self::init(Connection::open(path)?)?;

        // The table now exists, so the file is on disk.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            let _ = std::fs::set_permissions(path, perms);
        }

        debug!(path = %path.display(), "opened credential database");
        Ok(store)
    }

    /// Open a private in-memory database (gone when dropped).
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS passwords (
                id   INTEGER PRIMARY KEY AUTOINCREMENT,
                hash TEXT NOT NULL,
                salt TEXT NOT NULL
            );",
        )?;
        Ok(Self { conn })
    }

    /// Number of stored records.
    pub fn len(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM passwords", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Write a row verbatim, bypassing hex encoding.
    ///
    /// Used to exercise the verifier against damaged data.
    pub fn insert_raw(&mut self, hash: &str, salt: &str) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO passwords (hash, salt) VALUES (?1, ?2)",
            rusqlite::params![hash, salt],
        )?;
        Ok(self.conn.last_insert_rowid())
    }
}

impl CredentialStore for SqliteStore {
    fn insert_credential(&mut self, hash: &[u8], salt: &[u8]) -> Result<i64> {
        let id = self.insert_raw(&encode_field(hash), &encode_field(salt))?;
        debug!(id, "inserted credential");
        Ok(id)
    }

    fn list_credentials(&self) -> Result<Vec<CredentialRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, hash, salt FROM passwords ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok(CredentialRecord {
                id: row.get(0)?,
                hash: text_column(row, 1)?,
                salt: text_column(row, 2)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}

/// Read a column as text, or `None` for NULL, BLOB and numeric values.
///
/// Legacy tables declare `hash TEXT, salt TEXT` without NOT NULL, and
/// TEXT affinity never converts a BLOB, so any of these can turn up.
fn text_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Text(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Null | ValueRef::Blob(_) | ValueRef::Integer(_) | ValueRef::Real(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PwGuardError;
    use tempfile::TempDir;

    #[test]
    fn open_creates_database() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("passwords.db");
        let store = SqliteStore::open(&path).unwrap();
        assert!(path.exists());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn insert_and_list_roundtrip() {
        let mut store = SqliteStore::open_in_memory().unwrap();

        let first = store.insert_credential(&[0xAA; 32], &[0x01; 16]).unwrap();
        let second = store.insert_credential(&[0xBB; 32], &[0x02; 16]).unwrap();
        assert!(second > first);

        let records = store.list_credentials().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, first);
        assert_eq!(records[0].hash.as_deref(), Some("aa".repeat(32).as_str()));
        assert_eq!(records[0].salt.as_deref(), Some("01".repeat(16).as_str()));
        assert_eq!(records[1].id, second);
    }

    #[test]
    fn columns_have_documented_widths() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.insert_credential(&[0x5A; 32], &[0xC3; 16]).unwrap();

        let rec = &store.list_credentials().unwrap()[0];
        let hash = rec.hash.as_deref().unwrap();
        assert_eq!(hash.len(), 64);
        assert_eq!(rec.salt.as_deref().unwrap().len(), 32);
        assert_eq!(hash, hash.to_lowercase());
    }

    #[test]
    fn non_text_columns_list_as_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO passwords (hash, salt) VALUES (X'00', X'01')",
                [],
            )
            .unwrap();

        let records = store.list_credentials().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].hash, None);
        assert_eq!(records[0].salt, None);
    }

    #[test]
    fn legacy_schema_null_row_lists_as_none() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE passwords (id INTEGER PRIMARY KEY AUTOINCREMENT, hash TEXT, salt TEXT);
             INSERT INTO passwords (hash, salt) VALUES (NULL, NULL);",
        )
        .unwrap();
        let store = SqliteStore::init(conn).unwrap();

        let records = store.list_credentials().unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].hash.is_none());
        assert!(records[0].salt.is_none());
    }

    #[test]
    fn records_persist_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("passwords.db");

        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.insert_credential(&[1; 32], &[2; 16]).unwrap();
        }

        let reopened = SqliteStore::open(&path).unwrap();
        assert_eq!(reopened.len().unwrap(), 1);
    }

    #[test]
    fn open_fails_on_bad_path() {
        let result = SqliteStore::open(Path::new("/nonexistent/path/that/does/not/exist/pw.db"));
        assert!(matches!(result, Err(PwGuardError::StorageUnavailable(_))));
    }

    #[cfg(unix)]
    #[test]
    fn database_has_restrictive_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("passwords.db");
        let _store = SqliteStore::open(&path).unwrap();

        let perms = std::fs::metadata(&path).unwrap().permissions();
        assert_eq!(perms.mode() & 0o777, 0o600);
    }
}
