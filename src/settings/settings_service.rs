use std::collections::HashMap;
use std::sync::Arc;

use log::warn;

use super::settings_model::{default_columns, COLUMNS_KEY, DASHBOARD_BLOCKS_KEY};
use super::settings_repository::SettingsRepositoryTrait;
use crate::settings::settings_errors::Result;
use crate::views::ColumnConfig;

/// Typed access to persisted UI state. Malformed stored values degrade to
/// defaults instead of failing the caller.
pub struct SettingsService {
    repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService { repository }
    }

    pub fn get_columns(&self) -> Vec<ColumnConfig> {
        match self.repository.get(COLUMNS_KEY) {
            Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
                warn!("Stored column config is malformed, using defaults: {}", e);
                default_columns()
            }),
            None => default_columns(),
        }
    }

    pub fn set_columns(&self, columns: &[ColumnConfig]) -> Result<()> {
        self.repository
            .set(COLUMNS_KEY, serde_json::to_value(columns)?)
    }

    pub fn set_column_visible(&self, column_id: &str, visible: bool) -> Result<()> {
        let mut columns = self.get_columns();
        for column in columns.iter_mut() {
            if column.id == column_id {
                column.visible = visible;
            }
        }
        self.set_columns(&columns)
    }

    pub fn get_dashboard_blocks(&self) -> HashMap<String, bool> {
        match self.repository.get(DASHBOARD_BLOCKS_KEY) {
            Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
                warn!("Stored dashboard blocks are malformed, using defaults: {}", e);
                HashMap::new()
            }),
            None => HashMap::new(),
        }
    }

    pub fn set_dashboard_block(&self, block_id: &str, visible: bool) -> Result<()> {
        let mut blocks = self.get_dashboard_blocks();
        blocks.insert(block_id.to_string(), visible);
        self.repository
            .set(DASHBOARD_BLOCKS_KEY, serde_json::to_value(blocks)?)
    }
}
