use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SearchError};

#[derive(Debug, Clone)]
pub struct PageText {
    /// 1-based page number.
    pub number: u32,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct DocumentPages {
    /// Document identifier: the file name within the corpus directory.
    pub name: String,
    pub pages: Vec<PageText>,
}

impl DocumentPages {
    pub fn from_texts(name: impl Into<String>, texts: Vec<String>) -> Self {
        let pages = texts
            .into_iter()
            .enumerate()
            .map(|(idx, text)| PageText {
                number: idx as u32 + 1,
                text,
            })
            .collect();
        Self {
            name: name.into(),
            pages,
        }
    }
}

/// Reads the corpus directory fresh on every call; there is no index
/// and no cache, so edits to the directory are picked up by the next
/// query.
#[derive(Debug, Clone)]
pub struct CorpusReader {
    root: PathBuf,
}

impl CorpusReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerates the PDF files directly under the corpus root, sorted
    /// by path for deterministic scan order. A missing directory is a
    /// valid empty corpus.
    pub fn document_paths(&self) -> Vec<PathBuf> {
        if !self.root.is_dir() {
            return Vec::new();
        }
        let mut paths: Vec<PathBuf> = WalkDir::new(&self.root)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                    .unwrap_or(false)
            })
            .map(|entry| entry.into_path())
            .collect();
        paths.sort();
        paths
    }

    pub fn load_document(&self, path: &Path) -> Result<DocumentPages> {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("unknown")
            .to_string();
        let texts = pdf_extract::extract_text_by_pages(path).map_err(|err| {
            SearchError::Extract {
                path: path.to_path_buf(),
                reason: err.to_string(),
            }
        })?;
        Ok(DocumentPages::from_texts(name, texts))
    }

    /// Loads every enumerated document, skipping the ones that fail to
    /// parse; a corrupt file never aborts the scan.
    pub fn load_all(&self) -> Vec<DocumentPages> {
        self.load_all_with(|path| self.load_document(path))
    }

    fn load_all_with<F>(&self, load: F) -> Vec<DocumentPages>
    where
        F: Fn(&Path) -> Result<DocumentPages>,
    {
        let mut docs = Vec::new();
        for path in self.document_paths() {
            match load(&path) {
                Ok(doc) => docs.push(doc),
                Err(err) => tracing::warn!("skipping {}: {err}", path.display()),
            }
        }
        docs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_directory_is_an_empty_corpus() {
        let reader = CorpusReader::new("/definitely/not/here");
        assert!(reader.document_paths().is_empty());
        assert!(reader.load_all().is_empty());
    }

    #[test]
    fn enumerates_only_pdfs_in_sorted_order() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("b.pdf"), "fake").unwrap();
        std::fs::write(dir.path().join("A.PDF"), "fake").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "fake").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested/c.pdf"), "fake").unwrap();

        let reader = CorpusReader::new(dir.path());
        let names: Vec<String> = reader
            .document_paths()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["A.PDF", "b.pdf"]);
    }

    #[test]
    fn corrupt_document_is_skipped_not_fatal() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("broken.pdf"), b"not a pdf at all").unwrap();

        let reader = CorpusReader::new(dir.path());
        assert_eq!(reader.document_paths().len(), 1);
        assert!(reader.load_all().is_empty());
    }

    #[test]
    fn one_bad_document_does_not_stop_the_scan() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("bad.pdf"), "x").unwrap();
        std::fs::write(dir.path().join("good.pdf"), "x").unwrap();

        let reader = CorpusReader::new(dir.path());
        let docs = reader.load_all_with(|path| {
            if path.ends_with("bad.pdf") {
                Err(SearchError::Extract {
                    path: path.to_path_buf(),
                    reason: "parse fault".to_string(),
                })
            } else {
                Ok(DocumentPages::from_texts(
                    "good.pdf",
                    vec!["conteúdo".to_string()],
                ))
            }
        });
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].name, "good.pdf");
    }

    #[test]
    fn from_texts_numbers_pages_from_one() {
        let doc = DocumentPages::from_texts("d.pdf", vec!["a".into(), "b".into()]);
        assert_eq!(doc.pages[0].number, 1);
        assert_eq!(doc.pages[1].number, 2);
    }
}
