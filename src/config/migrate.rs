//! Bring an existing config file up to date with the current defaults.
//!
//! Missing sections and keys are appended; existing values, comments and
//! formatting are left untouched.

use toml_edit::{DocumentMut, Item, Table};

use super::{Config, ConfigError};

/// Outcome of [`migrate_config`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationResult {
    /// Migrated file content
    pub content: String,
    /// Added keys as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that did not exist before
    pub sections_added: Vec<String>,
}

impl MigrationResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add every default field missing from `content`.
pub fn migrate_config(content: &str) -> Result<MigrationResult, ConfigError> {
    let mut doc: DocumentMut = content.parse()?;
    let defaults: DocumentMut = Config::default().to_toml()?.parse()?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, item) in defaults.iter() {
        let Some(default_table) = item.as_table() else {
            continue;
        };

        if !doc.contains_key(section) {
            doc.insert(section, Item::Table(Table::new()));
            sections_added.push(section.to_string());
        }

        let Some(table) = doc.get_mut(section).and_then(Item::as_table_like_mut) else {
            tracing::warn!(section, "config key is not a table, skipping");
            continue;
        };

        for (key, value) in default_table.iter() {
            if !table.contains_key(key) {
                table.insert(key, value.clone());
                added_fields.push(format!("{section}.{key}"));
            }
        }
    }

    Ok(MigrationResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
