use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GenerationCounter {
    pub(crate) path: PathBuf,
}
