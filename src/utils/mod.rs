use std::fs;
use std::path::Path;
use anyhow::{Context, Result};

/// Ensures that the directory for the given file path exists
///
/// This function extracts the directory part of a given file path
/// and creates it if it doesn't exist.
pub fn ensure_directory_exists(file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(||
                format!("Failed to create directory: {}", parent.display())
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_missing_parent() -> Result<()> {
        let root = std::env::temp_dir().join(format!("themekeeper-utils-{}", std::process::id()));
        let file = root.join("nested").join("prefs.db");

        ensure_directory_exists(&file)?;
        assert!(file.parent().map(Path::exists).unwrap_or(false));

        fs::remove_dir_all(&root)?;
        Ok(())
    }

    #[test]
    fn test_bare_file_name_is_fine() -> Result<()> {
        ensure_directory_exists(Path::new("prefs.db"))
    }
}
