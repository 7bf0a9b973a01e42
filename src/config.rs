use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CodekitConfig {
    /// Database file, relative to the working directory
    pub database: Option<String>,
    /// Folder scanned by `sync` when no folder is given
    pub sync_dir: Option<String>,
}

impl CodekitConfig {
    /// Database path: explicit flag, then config, then the default location
    pub fn database_path(&self, flag: Option<&Path>, base: &Path) -> PathBuf {
        match (flag, &self.database) {
            (Some(path), _) => path.to_path_buf(),
            (None, Some(configured)) => PathBuf::from(configured),
            (None, None) => default_database_path_in(base),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("codekit.toml")
}

pub fn default_database_path_in(base: &Path) -> PathBuf {
    base.join(".codekit").join("codekit.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<CodekitConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: CodekitConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &CodekitConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
