use crate::utils::error::{ConvertError, Result};
use std::path::{Component, Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Lexically resolves `path` against `base`, dropping `.` and folding `..`.
/// Symlinks are not followed.
pub fn resolve_lexically(base: &Path, path: &str) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in base.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !resolved.pop() {
                    resolved.push(component);
                }
            }
            other => resolved.push(other),
        }
    }
    resolved
}

/// Rejects an output that would overwrite the input before it is read back.
pub fn validate_distinct_paths(base: &Path, input: &str, output: &str) -> Result<()> {
    if resolve_lexically(base, input) == resolve_lexically(base, output) {
        return Err(ConvertError::ConfigError {
            message: format!(
                "input '{}' and output '{}' point to the same file",
                input, output
            ),
        });
    }
    Ok(())
}
