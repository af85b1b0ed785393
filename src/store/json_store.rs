//! JSON-based credential storage.
//!
//! The whole vault lives in a single JSON object mapping website names to
//! credential records. Every save loads the full mapping, merges one
//! record, and rewrites the file; every lookup re-reads the file. Nothing
//! is cached between calls, so a reader always sees its own writes.

use crate::config::Paths;
use crate::error::{StorageError, ValidationError, VaultError, VaultResult};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A stored credential: the email/password pair for one website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Email or username for the account. May be empty.
    pub email: String,
    /// The account password.
    pub password: String,
}

/// File-backed credential vault.
///
/// Holds nothing but the backing-file path. Operations are synchronous
/// and complete before returning; concurrent writers from separate
/// processes are not coordinated (last writer wins).
pub struct Vault {
    path: PathBuf,
}

impl Vault {
    /// Create a vault over the given backing file.
    ///
    /// The file is not created until the first successful save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a vault over the default XDG data-dir backing file.
    pub fn open_default() -> Self {
        Self::new(Paths::get().credentials_file())
    }

    /// The backing-file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save a credential, overwriting any prior record for the website.
    ///
    /// Website and password must be non-empty; email may be empty. The
    /// existing mapping is loaded (empty if the file is absent), the new
    /// record merged in, and the complete mapping rewritten.
    pub fn save(&self, website: &str, email: &str, password: &str) -> VaultResult<()> {
        if website.is_empty() {
            return Err(ValidationError::EmptyField("website").into());
        }
        if password.is_empty() {
            return Err(ValidationError::EmptyField("password").into());
        }

        let mut records = self.load_or_empty()?;
        records.insert(
            website.to_string(),
            Credential {
                email: email.to_string(),
                password: password.to_string(),
            },
        );

        self.write(&records)?;
        debug!(
            website,
            total = records.len(),
            "saved credential to {}",
            self.path.display()
        );
        Ok(())
    }

    /// Look up the credential stored for a website.
    pub fn find(&self, website: &str) -> VaultResult<Credential> {
        if !self.path.exists() {
            return Err(StorageError::Missing(self.path.clone()).into());
        }

        let records = self.load()?;
        records
            .get(website)
            .cloned()
            .ok_or_else(|| VaultError::NotFound(website.to_string()))
    }

    /// List all stored website keys, sorted.
    ///
    /// An absent backing file is an empty vault here, not an error.
    pub fn websites(&self) -> VaultResult<Vec<String>> {
        let records = self.load_or_empty()?;
        Ok(records.into_keys().collect())
    }

    /// Load the mapping from an existing backing file.
    fn load(&self) -> Result<BTreeMap<String, Credential>, StorageError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| StorageError::ReadFailed(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    /// Load the mapping, treating an absent file as an empty vault.
    fn load_or_empty(&self) -> Result<BTreeMap<String, Credential>, StorageError> {
        if self.path.exists() {
            self.load()
        } else {
            Ok(BTreeMap::new())
        }
    }

    /// Rewrite the backing file with the complete mapping.
    ///
    /// Output is pretty-printed with a 4-space indent to keep the file
    /// hand-readable; the indent is presentation only.
    fn write(&self, records: &BTreeMap<String, Credential>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| StorageError::DirectoryError(e.to_string()))?;
            }
        }

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records
            .serialize(&mut serializer)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        fs::write(&self.path, buf).map_err(|e| StorageError::WriteFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_vault() -> (TempDir, Vault) {
        let dir = TempDir::new().unwrap();
        let vault = Vault::new(dir.path().join("data.json"));
        (dir, vault)
    }

    #[test]
    fn test_save_then_find_round_trip() {
        let (_dir, vault) = temp_vault();
        vault.save("site.com", "e@x.com", "pw123").unwrap();

        let cred = vault.find("site.com").unwrap();
        assert_eq!(cred.email, "e@x.com");
        assert_eq!(cred.password, "pw123");
    }

    #[test]
    fn test_overwrite_keeps_latest() {
        let (_dir, vault) = temp_vault();
        vault.save("site.com", "e@x.com", "old").unwrap();
        vault.save("site.com", "e@x.com", "new").unwrap();

        let cred = vault.find("site.com").unwrap();
        assert_eq!(cred.password, "new");
    }

    #[test]
    fn test_merge_preserves_unrelated_keys() {
        let (_dir, vault) = temp_vault();
        vault.save("a.com", "a@x.com", "pw-a").unwrap();
        vault.save("b.com", "b@x.com", "pw-b").unwrap();

        assert_eq!(vault.find("a.com").unwrap().password, "pw-a");
        assert_eq!(vault.find("b.com").unwrap().password, "pw-b");
    }

    #[test]
    fn test_empty_website_rejected() {
        let (_dir, vault) = temp_vault();
        let err = vault.save("", "e@x.com", "pw").unwrap_err();
        assert!(matches!(
            err,
            VaultError::Validation(ValidationError::EmptyField("website"))
        ));
        assert!(!vault.path().exists(), "store must not be touched");
    }

    #[test]
    fn test_empty_password_rejected() {
        let (_dir, vault) = temp_vault();
        let err = vault.save("site.com", "e@x.com", "").unwrap_err();
        assert!(matches!(
            err,
            VaultError::Validation(ValidationError::EmptyField("password"))
        ));
        assert!(!vault.path().exists(), "store must not be touched");
    }

    #[test]
    fn test_empty_email_allowed() {
        let (_dir, vault) = temp_vault();
        vault.save("site.com", "", "pw123").unwrap();
        assert_eq!(vault.find("site.com").unwrap().email, "");
    }

    #[test]
    fn test_find_missing_file() {
        let (_dir, vault) = temp_vault();
        let err = vault.find("site.com").unwrap_err();
        assert!(matches!(err, VaultError::Storage(StorageError::Missing(_))));
    }

    #[test]
    fn test_find_unknown_website() {
        let (_dir, vault) = temp_vault();
        vault.save("site.com", "e@x.com", "pw").unwrap();

        let err = vault.find("nosuch.com").unwrap_err();
        assert!(matches!(err, VaultError::NotFound(ref w) if w == "nosuch.com"));
    }

    #[test]
    fn test_corrupt_file_propagates_on_find() {
        let (_dir, vault) = temp_vault();
        fs::write(vault.path(), "not json").unwrap();

        let err = vault.find("site.com").unwrap_err();
        assert!(matches!(err, VaultError::Storage(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_corrupt_file_propagates_on_save() {
        let (_dir, vault) = temp_vault();
        fs::write(vault.path(), "not json").unwrap();

        let err = vault.save("site.com", "e@x.com", "pw").unwrap_err();
        assert!(matches!(err, VaultError::Storage(StorageError::Corrupt(_))));

        // The corrupt content must survive untouched.
        assert_eq!(fs::read_to_string(vault.path()).unwrap(), "not json");
    }

    #[test]
    fn test_file_created_lazily() {
        let (_dir, vault) = temp_vault();
        assert!(!vault.path().exists());
        vault.save("site.com", "e@x.com", "pw").unwrap();
        assert!(vault.path().exists());
    }

    #[test]
    fn test_parent_directory_created_on_save() {
        let dir = TempDir::new().unwrap();
        let vault = Vault::new(dir.path().join("nested").join("data.json"));
        vault.save("site.com", "e@x.com", "pw").unwrap();
        assert!(vault.find("site.com").is_ok());
    }

    #[test]
    fn test_websites_sorted() {
        let (_dir, vault) = temp_vault();
        vault.save("b.com", "", "pw").unwrap();
        vault.save("a.com", "", "pw").unwrap();
        assert_eq!(vault.websites().unwrap(), vec!["a.com", "b.com"]);
    }

    #[test]
    fn test_websites_empty_without_file() {
        let (_dir, vault) = temp_vault();
        assert!(vault.websites().unwrap().is_empty());
    }

    #[test]
    fn test_file_format_matches_reference() {
        let (_dir, vault) = temp_vault();
        vault.save("example.com", "user@example.com", "aB3!xyz9").unwrap();

        let content = fs::read_to_string(vault.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["example.com"]["email"], "user@example.com");
        assert_eq!(parsed["example.com"]["password"], "aB3!xyz9");
        // 4-space indent, one field per line.
        assert!(content.contains("    \"email\""));
    }
}
