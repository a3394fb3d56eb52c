//! Filesystem catalog store: one YAML mapping per (language, category) pair,
//! grouped under language-named directories.

use crate::error::SyncResult;
use crate::types::CatalogRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Persistence boundary for catalogs. The engine only ever sees full
/// in-memory copies; implementations own the actual records.
pub trait CatalogStore {
    /// Enumerate all stored `(category, language)` pairs in discovery order.
    fn list(&self) -> SyncResult<Vec<(String, String)>>;

    /// Read one catalog. `None` means the pair has never been written.
    fn read(&self, category: &str, language: &str) -> SyncResult<Option<CatalogRecord>>;

    /// Replace one catalog. Must be atomic at single-record granularity.
    fn write(
        &mut self,
        category: &str,
        language: &str,
        record: &CatalogRecord,
    ) -> SyncResult<()>;
}

/// Store over a message directory laid out as `<root>/<language>/<category>.yml`.
pub struct FsCatalogStore {
    root: PathBuf,
}

impl FsCatalogStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the file for a pair, preferring an existing `.yaml` variant
    /// over creating a fresh `.yml` one.
    fn catalog_path(&self, category: &str, language: &str) -> PathBuf {
        let dir = self.root.join(language);
        let yml = dir.join(format!("{category}.yml"));
        if yml.is_file() {
            return yml;
        }
        let yaml = dir.join(format!("{category}.yaml"));
        if yaml.is_file() {
            return yaml;
        }
        yml
    }
}

impl CatalogStore for FsCatalogStore {
    fn list(&self) -> SyncResult<Vec<(String, String)>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut paths: Vec<PathBuf> = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let dir = entry?.path();
            if !dir.is_dir() {
                continue;
            }
            for file in fs::read_dir(&dir)? {
                let path = file?.path();
                let is_catalog = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext == "yml" || ext == "yaml");
                if is_catalog {
                    paths.push(path);
                }
            }
        }

        // Sorted paths give a stable discovery order: language directory
        // first, category stem second.
        paths.sort();

        Ok(paths
            .iter()
            .filter_map(|path| {
                let category = path.file_stem()?.to_str()?.to_string();
                let language = path.parent()?.file_name()?.to_str()?.to_string();
                Some((category, language))
            })
            .collect())
    }

    fn read(&self, category: &str, language: &str) -> SyncResult<Option<CatalogRecord>> {
        let path = self.catalog_path(category, language);
        if !path.is_file() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        // An empty or comment-only file is an empty catalog, not an error.
        let record: Option<CatalogRecord> = serde_yaml::from_str(&content)?;
        Ok(Some(record.unwrap_or_default()))
    }

    fn write(
        &mut self,
        category: &str,
        language: &str,
        record: &CatalogRecord,
    ) -> SyncResult<()> {
        let path = self.catalog_path(category, language);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut content = String::new();

        // Any leading comment block of the prior version survives the
        // rewrite verbatim.
        if path.is_file() {
            let previous = fs::read_to_string(&path)?;
            if let Some(block) = leading_comment_block(&previous) {
                content.push_str(block);
            }
        }

        content.push_str(&serde_yaml::to_string(record)?);

        // Write-then-rename so a concurrent reader never observes a partial
        // catalog.
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{category}.yml"));
        let tmp = path.with_file_name(format!("{file_name}.tmp"));
        fs::write(&tmp, &content)?;
        fs::rename(&tmp, &path)?;

        Ok(())
    }
}

/// The maximal run of `#` comment lines at the top of a catalog file,
/// byte-for-byte including line terminators.
fn leading_comment_block(content: &str) -> Option<&str> {
    let mut end = 0;

    for line in content.split_inclusive('\n') {
        if !line.starts_with('#') {
            break;
        }
        end += line.len();
    }

    (end > 0).then(|| &content[..end])
}
