use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

pub mod hashing;
pub mod password_generation;
mod record;
pub mod strength;

pub use hashing::hash_password;
pub use password_generation::generate_password;
pub use record::Record;
pub use strength::Strength;

/// Shown by front-ends when a site has no stored record.
pub const NOT_FOUND_MESSAGE: &str = "No password found for this site.";

/// The site -> record mapping, as held in memory between a load and a save.
pub type Credentials = BTreeMap<String, Record>;

/// A flat-file store of credential records, keyed by site.
///
/// Nothing is cached: every operation re-reads the file, and every write replaces it in full.
/// There is no locking, so two processes storing at the same time race, and the last one to save
/// wins.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Bind a store to the file at the given path. The file need not exist yet.
    pub fn new(path: PathBuf) -> CredentialStore {
        CredentialStore { path }
    }

    /// `passwords.json`, relative to the working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("passwords.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole mapping from disk. A missing file is an empty store.
    pub fn load(&self) -> Result<Credentials, VaultError> {
        let data = match fs::read(&self.path) {
            Ok(d) => d,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no credential store yet; starting empty");
                return Ok(Credentials::new());
            }
            Err(err) => return Err(VaultErrorRepr::Io(err).into()),
        };
        let credentials: Credentials = serde_json::from_slice(&data)
            .map_err(|source| VaultErrorRepr::CorruptStore {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(
            path = %self.path.display(),
            records = credentials.len(),
            "loaded credential store"
        );
        Ok(credentials)
    }

    /// Write the whole mapping to disk, replacing whatever was there.
    ///
    /// The data is written to a temporary file next to the store and then renamed over it.
    pub fn save(&self, credentials: &Credentials) -> Result<(), VaultError> {
        let data = encode_credentials(credentials)?;

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(VaultErrorRepr::Io)?;
        temp_file.write_all(&data).map_err(VaultErrorRepr::Io)?;
        temp_file.flush().map_err(VaultErrorRepr::Io)?;
        temp_file
            .persist(&self.path)
            .map_err(|err| VaultErrorRepr::Io(err.error))?;

        tracing::debug!(
            path = %self.path.display(),
            records = credentials.len(),
            "saved credential store"
        );
        Ok(())
    }

    /// Hash `password` and store it with `username` under `site`, replacing any existing record
    /// for that site.
    ///
    /// Returns a confirmation message suitable for showing to the user.
    pub fn store(&self, site: &str, username: &str, password: &Secret) -> Result<String, VaultError> {
        let mut credentials = self.load()?;
        let record = Record {
            username: username.to_owned(),
            password_hash: hash_password(password.as_str()),
        };
        if credentials.insert(site.to_owned(), record).is_some() {
            tracing::info!(site, "replacing existing record");
        }
        self.save(&credentials)?;
        Ok(format!("Password for {} saved successfully!", site))
    }

    /// Look up the record for `site`.
    ///
    /// Returns `None` if nothing is stored under that exact (case-sensitive) name.
    pub fn retrieve(&self, site: &str) -> Result<Option<Record>, VaultError> {
        let mut credentials = self.load()?;
        Ok(credentials.remove(site))
    }
}

fn encode_credentials(credentials: &Credentials) -> Result<Vec<u8>, VaultErrorRepr> {
    let mut data = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut data, formatter);
    credentials
        .serialize(&mut serializer)
        .map_err(VaultErrorRepr::SerializationFailure)?;
    Ok(data)
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct VaultError(VaultErrorRepr);

impl VaultError {
    pub fn kind(&self) -> ErrorKind {
        match &self.0 {
            VaultErrorRepr::Io(_) | VaultErrorRepr::SerializationFailure(_) => ErrorKind::Io,
            VaultErrorRepr::CorruptStore { .. } => ErrorKind::CorruptStore,
            VaultErrorRepr::InvalidLength => ErrorKind::InvalidLength,
        }
    }
}

impl From<VaultErrorRepr> for VaultError {
    fn from(err: VaultErrorRepr) -> VaultError {
        VaultError(err)
    }
}

/// Broad classification of a [`VaultError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Reading or writing the store failed.
    Io,
    /// The store file exists but isn't a valid site -> record mapping.
    CorruptStore,
    /// A password of length zero was requested.
    InvalidLength,
}

#[derive(Debug, thiserror::Error)]
enum VaultErrorRepr {
    #[error("I/O error: {0}")]
    Io(io::Error),
    #[error("failed to serialize the credential store into JSON: {0}")]
    SerializationFailure(serde_json::Error),
    #[error("corrupt store: {path:?} is not a valid password file: {source}")]
    CorruptStore {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid argument: password length must be at least 1")]
    InvalidLength,
}

/// A plaintext password. `Debug` doesn't print the contents.
#[derive(Clone, Eq, PartialEq)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}

impl From<&str> for Secret {
    fn from(s: &str) -> Secret {
        Secret(s.to_owned())
    }
}
