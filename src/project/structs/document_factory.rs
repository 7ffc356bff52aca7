use crate::config::structs::metadata_config::MetadataConfig;

#[derive(Debug, Clone)]
pub struct DocumentFactory {
    pub metadata: MetadataConfig,
}
