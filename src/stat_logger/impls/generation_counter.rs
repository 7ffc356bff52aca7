use std::path::{Path, PathBuf};
use log::{debug, info};
use crate::stat_logger::enums::stat_logger_error::StatLoggerError;
use crate::stat_logger::structs::generation_counter::GenerationCounter;

impl GenerationCounter {
    /// Opens the counter, creating it with `0` (and any missing parent
    /// directory) when the file does not exist yet.
    pub async fn new(path: impl Into<PathBuf>) -> Result<GenerationCounter, StatLoggerError>
    {
        let path = path.into();
        if !tokio::fs::try_exists(&path).await? {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, b"0").await?;
            info!("[COUNTER] Created counter file {}", path.display());
        }
        Ok(GenerationCounter { path })
    }

    pub fn path(&self) -> &Path
    {
        &self.path
    }

    pub async fn read(&self) -> Result<u128, StatLoggerError>
    {
        let content = tokio::fs::read_to_string(&self.path).await?;
        content.trim().parse::<u128>().map_err(|_| StatLoggerError::InvalidCounter(content))
    }

    /// Adds one to the stored total and returns the new value.
    pub async fn increment(&self) -> Result<u128, StatLoggerError>
    {
        let count = self.read().await?;
        debug!("before: {}", count);
        let count = count.checked_add(1).ok_or(StatLoggerError::CounterOverflow)?;
        debug!("after: {}", count);
        tokio::fs::write(&self.path, count.to_string()).await?;
        Ok(count)
    }
}
