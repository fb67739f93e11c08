use crate::domain::model::GeneratedUnit;
use crate::domain::ports::SourceWriter;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes generated units under a base directory, one subdirectory per
/// package segment, mirroring a Java source root.
#[derive(Debug, Clone)]
pub struct DirectoryWriter {
    base_path: PathBuf,
}

impl DirectoryWriter {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl SourceWriter for DirectoryWriter {
    fn write_unit(&self, unit: &GeneratedUnit) -> Result<String> {
        let package_dir: PathBuf = unit.package.split('.').filter(|s| !s.is_empty()).collect();
        let dir = Path::new(&self.base_path).join(package_dir);
        fs::create_dir_all(&dir)?;

        let full_path = dir.join(&unit.file_name);
        fs::write(&full_path, unit.content.as_bytes())?;
        Ok(full_path.display().to_string())
    }
}
