use crate::models::UserProfile;
use crate::store::{
    PersistedAuthRecord, StoreError, StoreResult, TOKEN_KEY, TokenStore, USER_KEY,
};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, info, warn};

/// Stores the token and user profile as two files in one directory.
///
/// Every write goes through a temp file that is fsynced and renamed into
/// place, so a reader sees either the old file or the new one. All operations
/// hold the same lock, which keeps save/load/clear from interleaving within
/// the process.
#[derive(Debug)]
pub struct FileTokenStore {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl FileTokenStore {
    /// The directory is created lazily on the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_KEY)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_KEY)
    }

    fn write_atomic(&self, name: &str, contents: &[u8]) -> StoreResult<()> {
        let final_path = self.dir.join(name);
        let temp_path = self
            .dir
            .join(format!("{name}.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(contents)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, final_path, e)
        })
    }

    fn read_optional(path: &Path) -> StoreResult<Option<String>> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::file_read(path.to_path_buf(), e)),
        }
    }

    fn remove_optional(path: &Path) -> StoreResult<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::file_remove(path.to_path_buf(), e)),
        }
    }

    /// Caller must hold `self.lock`.
    fn clear_locked(&self) -> StoreResult<()> {
        Self::remove_optional(&self.token_path())?;
        Self::remove_optional(&self.user_path())?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn save(&self, record: &PersistedAuthRecord) -> StoreResult<()> {
        let _guard = self.lock.lock().map_err(|_| StoreError::poisoned())?;

        fs::create_dir_all(&self.dir)
            .map_err(|e| StoreError::dir_creation(self.dir.clone(), e))?;

        let user_json = serde_json::to_string_pretty(&record.user)?;

        self.write_atomic(USER_KEY, user_json.as_bytes())?;

        // The new user is already in place; an old token must not pair with it.
        if let Err(e) = self.write_atomic(TOKEN_KEY, record.token.as_bytes()) {
            if let Err(clear_err) = self.clear_locked() {
                warn!(
                    "Failed to clear half-written session in {}: {clear_err}",
                    self.dir.display()
                );
            }
            return Err(e);
        }

        info!(
            "Saved session for user {} to {}",
            record.user.username,
            self.dir.display()
        );
        Ok(())
    }

    fn load(&self) -> StoreResult<Option<PersistedAuthRecord>> {
        let _guard = self.lock.lock().map_err(|_| StoreError::poisoned())?;

        let token = Self::read_optional(&self.token_path())?;
        let user = Self::read_optional(&self.user_path())?;

        let (token, user_json) = match (token, user) {
            (Some(token), Some(user)) => (token, user),
            (None, None) => {
                debug!("No persisted session in {}", self.dir.display());
                return Ok(None);
            }
            _ => {
                warn!(
                    "Incomplete session in {} (token and user must both exist), clearing",
                    self.dir.display()
                );
                self.clear_locked()?;
                return Ok(None);
            }
        };

        let token = token.trim().to_string();
        if token.is_empty() {
            warn!("Empty token in {}, clearing", self.dir.display());
            self.clear_locked()?;
            return Ok(None);
        }

        match serde_json::from_str::<UserProfile>(&user_json) {
            Ok(user) => Ok(Some(PersistedAuthRecord { token, user })),
            Err(e) => {
                warn!(
                    "Persisted user profile corrupted in {}: {e}, clearing",
                    self.dir.display()
                );
                self.clear_locked()?;
                Ok(None)
            }
        }
    }

    fn token(&self) -> StoreResult<Option<String>> {
        let _guard = self.lock.lock().map_err(|_| StoreError::poisoned())?;

        if !self.user_path().exists() {
            return Ok(None);
        }

        let token = Self::read_optional(&self.token_path())?
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        Ok(token)
    }

    fn clear(&self) -> StoreResult<()> {
        let _guard = self.lock.lock().map_err(|_| StoreError::poisoned())?;
        self.clear_locked()?;
        debug!("Cleared session in {}", self.dir.display());
        Ok(())
    }
}
