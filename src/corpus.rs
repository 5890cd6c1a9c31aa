//! Article discovery and loading

use crate::config::is_ignored;
use crate::Document;
use anyhow::{Context, Result};
use globset::GlobSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect article paths under `path` (or `path` itself when it is a file).
/// Sorted for consistent output.
pub fn collect_article_files(
    path: &Path,
    extensions: &[&str],
    ignore_set: Option<&GlobSet>,
) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        if let Some(set) = ignore_set {
            if is_ignored(path, set) {
                return Ok(vec![]);
            }
        }
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let file_path = entry.path();
        if entry.file_type().is_file() && is_article_file(file_path, extensions) {
            if let Some(set) = ignore_set {
                if is_ignored(file_path, set) {
                    continue;
                }
            }
            files.push(file_path.to_path_buf());
        }
    }

    files.sort();

    Ok(files)
}

pub fn is_article_file(path: &Path, extensions: &[&str]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    // Skip hidden files such as editor swap files
    if name.starts_with('.') {
        return false;
    }

    extensions.iter().any(|ext| name.ends_with(ext))
}

/// Read an article into a [`Document`] whose id is the file stem.
///
/// With `skip_title`, the first line becomes the title and is left out of
/// the scored text.
pub fn load_document(path: &Path, skip_title: bool) -> Result<Document> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read article: {}", path.display()))?;

    let id = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(document_from_text(id, &content, skip_title))
}

/// Split article text into an optional title line and the body
pub fn document_from_text(id: impl Into<String>, content: &str, skip_title: bool) -> Document {
    if !skip_title {
        return Document::new(id, content.trim());
    }

    let (title, body) = content.split_once('\n').unwrap_or((content, ""));
    let title = title.trim();
    let document = Document::new(id, body.trim());
    if title.is_empty() {
        document
    } else {
        document.with_title(title)
    }
}

/// Load every path, logging and skipping files that cannot be read.
/// Returns each loaded document beside its path, and whether any file failed.
pub fn load_documents(
    paths: &[PathBuf],
    skip_title: impl Fn(&Path) -> bool,
) -> (Vec<(PathBuf, Document)>, bool) {
    let mut documents = Vec::with_capacity(paths.len());
    let mut had_errors = false;

    for path in paths {
        match load_document(path, skip_title(path)) {
            Ok(doc) => documents.push((path.clone(), doc)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping article");
                had_errors = true;
            }
        }
    }

    (documents, had_errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::build_ignore_set;
    use tempfile::TempDir;

    #[test]
    fn test_is_article_file() {
        assert!(is_article_file(Path::new("articles/blackassign0001.txt"), &[".txt"]));
        assert!(!is_article_file(Path::new("articles/notes.md"), &[".txt"]));
        assert!(!is_article_file(Path::new("articles/.draft.txt"), &[".txt"]));
        assert!(is_article_file(Path::new("a/notes.md"), &[".txt", ".md"]));
    }

    #[test]
    fn test_document_from_text_splits_title() {
        let doc = document_from_text("a1", "Rising Rates\nThe bank raised rates.\n", true);
        assert_eq!(doc.title.as_deref(), Some("Rising Rates"));
        assert_eq!(doc.raw_text, "The bank raised rates.");
    }

    #[test]
    fn test_document_from_text_keeps_title() {
        let doc = document_from_text("a1", "Rising Rates\nThe bank raised rates.", false);
        assert!(doc.title.is_none());
        assert_eq!(doc.raw_text, "Rising Rates\nThe bank raised rates.");
    }

    #[test]
    fn test_title_only_file() {
        let doc = document_from_text("a1", "Only a title", true);
        assert_eq!(doc.title.as_deref(), Some("Only a title"));
        assert_eq!(doc.raw_text, "");
    }

    #[test]
    fn test_collect_and_load() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("b.txt"), "Title B\nBody b.").unwrap();
        fs::write(dir.path().join("a.txt"), "Title A\nBody a.").unwrap();
        fs::write(dir.path().join("drafts/c.txt"), "Title C\nBody c.").unwrap();
        fs::write(dir.path().join("readme.md"), "ignored").unwrap();

        let ignore = build_ignore_set(&["**/drafts/**".to_string()]).unwrap();
        let files = collect_article_files(dir.path(), &[".txt"], Some(&ignore)).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.txt"));

        let (docs, had_errors) = load_documents(&files, |_| true);
        assert!(!had_errors);
        assert_eq!(docs[0].1.id, "a");
        assert_eq!(docs[1].0, files[1]);
        assert_eq!(docs[1].1.raw_text, "Body b.");
    }

    #[test]
    fn test_missing_path() {
        let err = collect_article_files(Path::new("/no/such/articles"), &[".txt"], None)
            .unwrap_err();
        assert!(err.to_string().contains("Path does not exist"));
    }

    #[test]
    fn test_load_documents_reports_failures() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone.txt");
        let (docs, had_errors) = load_documents(&[missing], |_| true);
        assert!(docs.is_empty());
        assert!(had_errors);
    }
}
