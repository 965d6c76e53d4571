//! Source file matching and output path mapping
//!
//! Pure path arithmetic for mirroring a source tree into the docs tree. The
//! shell does the walking and the writing.

use std::path::{Path, PathBuf};

/// Suffix of the files this tool documents.
pub const SOURCE_SUFFIX: &str = ".py";

/// Extension given to generated documents.
pub const OUTPUT_EXTENSION: &str = "md";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("{path} is not inside source directory {root}")]
    OutsideRoot { path: String, root: String },

    #[error("{0} has no file name")]
    NoFileName(String),
}

/// A source file read during a run.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path as produced by the walker, rooted at the source directory.
    pub path: PathBuf,
    /// Path relative to the source directory.
    pub relative: PathBuf,
    /// Full UTF-8 text.
    pub content: String,
}

impl SourceFile {
    pub fn new(root: &Path, path: PathBuf, content: String) -> Result<Self, PathError> {
        let relative = relative_path(root, &path)?;
        Ok(Self {
            path,
            relative,
            content,
        })
    }

    /// Bare file name, used as the document heading.
    pub fn file_name(&self) -> Result<&str, PathError> {
        file_name(&self.path)
    }
}

/// Whether the file name ends with the documented suffix.
pub fn is_source_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(SOURCE_SUFFIX))
}

pub fn relative_path(root: &Path, path: &Path) -> Result<PathBuf, PathError> {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|_| PathError::OutsideRoot {
            path: path.display().to_string(),
            root: root.display().to_string(),
        })
}

/// Map a relative source path to its document path under `output_dir`.
///
/// `pkg/mod.py` becomes `<output_dir>/pkg/mod.md`.
pub fn output_path(output_dir: &Path, relative: &Path) -> PathBuf {
    output_dir
        .join(relative)
        .with_extension(OUTPUT_EXTENSION)
}

fn file_name(path: &Path) -> Result<&str, PathError> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| PathError::NoFileName(path.display().to_string()))
}

/// Render the document body: a heading with the file name, a blank line,
/// then the generated text verbatim.
pub fn render_markdown(file_name: &str, documentation: &str) -> String {
    format!("# {file_name}\n\n{documentation}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_source_file() {
        assert!(is_source_file(Path::new("src/a.py")));
        assert!(is_source_file(Path::new("a.tar.py")));
        assert!(!is_source_file(Path::new("src/a.pyc")));
        assert!(!is_source_file(Path::new("src/a.rs")));
        assert!(!is_source_file(Path::new("src/py")));
    }

    #[test]
    fn test_output_path_replaces_extension() {
        let out = output_path(Path::new("docs"), Path::new("a.py"));
        assert_eq!(out, PathBuf::from("docs/a.md"));
    }

    #[test]
    fn test_output_path_mirrors_subdirectories() {
        let out = output_path(Path::new("./docs"), Path::new("sub/deep/b.py"));
        assert_eq!(out, PathBuf::from("./docs/sub/deep/b.md"));
    }

    #[test]
    fn test_output_path_keeps_inner_dots() {
        let out = output_path(Path::new("docs"), Path::new("pkg/a.b.py"));
        assert_eq!(out, PathBuf::from("docs/pkg/a.b.md"));
    }

    #[test]
    fn test_relative_path_from_current_dir() {
        let rel = relative_path(Path::new("."), Path::new("./sub/b.py")).unwrap();
        assert_eq!(rel, PathBuf::from("sub/b.py"));
    }

    #[test]
    fn test_relative_path_outside_root() {
        let err = relative_path(Path::new("src"), Path::new("other/a.py")).unwrap_err();
        assert!(matches!(err, PathError::OutsideRoot { .. }));
    }

    #[test]
    fn test_source_file_record() {
        let file = SourceFile::new(
            Path::new("src"),
            PathBuf::from("src/sub/b.py"),
            "print(2)".to_string(),
        )
        .unwrap();

        assert_eq!(file.relative, PathBuf::from("sub/b.py"));
        assert_eq!(file.file_name().unwrap(), "b.py");
    }

    #[test]
    fn test_render_markdown() {
        assert_eq!(render_markdown("a.py", "DOC"), "# a.py\n\nDOC");
    }

    #[test]
    fn test_render_markdown_keeps_text_verbatim() {
        let doc = "## Functions\n\n- `f()`\n";
        assert_eq!(render_markdown("m.py", doc), format!("# m.py\n\n{doc}"));
    }
}
