//! spendlog-storage-json
//!
//! Filesystem-backed JSON persistence for the expense slot: one file holding
//! the whole collection as a flat array, rewritten atomically on every save.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use spendlog_core::{CoreError, ExpenseStorage};
use spendlog_domain::Expense;

const SLOT_FILE: &str = "expenses.json";
const TMP_SUFFIX: &str = "tmp";

/// JSON file backend for the single persisted expense slot.
#[derive(Debug, Clone)]
pub struct JsonExpenseStorage {
    slot_path: PathBuf,
}

impl JsonExpenseStorage {
    /// Uses `slot_path` directly as the slot file.
    pub fn new(slot_path: PathBuf) -> Self {
        Self { slot_path }
    }

    /// Places the slot file inside `base`, creating the directory if needed.
    pub fn with_base_dir(base: &Path) -> Result<Self, CoreError> {
        fs::create_dir_all(base)?;
        Ok(Self::new(base.join(SLOT_FILE)))
    }

    /// Resolves the platform data directory for the slot, falling back to the
    /// home directory and then the current directory.
    pub fn default_base_dir() -> PathBuf {
        dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spendlog")
    }

    pub fn slot_path(&self) -> &Path {
        &self.slot_path
    }
}

impl ExpenseStorage for JsonExpenseStorage {
    fn load(&self) -> Result<Vec<Expense>, CoreError> {
        if !self.slot_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.slot_path)?;
        serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
    }

    fn save(&self, records: &[Expense]) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.slot_path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.slot_path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
