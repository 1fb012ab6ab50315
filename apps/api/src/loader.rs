//! Document loading: turns a `.pdf`, `.docx` or `.doc` file into plain text.
//!
//! Missing files and unsupported extensions are rejected before any bytes are
//! decoded. Decoding is blocking; async callers run it on the blocking pool.

use std::fs;
use std::path::{Path, PathBuf};

use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file_path '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("unsupported file type '{0}' (expected .pdf, .docx or .doc)")]
    UnsupportedType(String),

    #[error("could not read PDF text: {0}")]
    Pdf(String),

    #[error("could not read Word document text: {0}")]
    Docx(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Pdf,
    Docx,
    /// Legacy `.doc`; routed through the same reader as `.docx`.
    Doc,
}

impl SourceFormat {
    /// Picks the format from a file name's extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Result<Self, LoadError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(SourceFormat::Pdf),
            "docx" => Ok(SourceFormat::Docx),
            "doc" => Ok(SourceFormat::Doc),
            "" => Err(LoadError::UnsupportedType(file_name.to_string())),
            other => Err(LoadError::UnsupportedType(format!(".{other}"))),
        }
    }
}

/// Reads a document from disk and returns its trimmed plain text.
pub fn load_document(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let format = SourceFormat::from_file_name(&path.to_string_lossy())?;

    let bytes = fs::read(path)?;
    debug!("Loaded {} ({} bytes)", path.display(), bytes.len());

    decode(format, &bytes)
}

/// Same as [`load_document`] for bytes already in memory, e.g. an upload.
/// `file_name` is only used to pick the format.
pub fn extract_from_bytes(file_name: &str, bytes: &[u8]) -> Result<String, LoadError> {
    let format = SourceFormat::from_file_name(file_name)?;
    decode(format, bytes)
}

fn decode(format: SourceFormat, bytes: &[u8]) -> Result<String, LoadError> {
    let text = match format {
        SourceFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| LoadError::Pdf(e.to_string()))?,
        SourceFormat::Docx | SourceFormat::Doc => docx_text(bytes)?,
    };
    Ok(text.trim().to_string())
}

/// Paragraph text joined by newlines. Tables and images are skipped.
fn docx_text(bytes: &[u8]) -> Result<String, LoadError> {
    let docx = read_docx(bytes).map_err(|e| LoadError::Docx(format!("{e:?}")))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

/// Builds a minimal `.docx` with one run per paragraph.
#[cfg(test)]
pub(crate) fn docx_fixture(paragraphs: &[&str]) -> Vec<u8> {
    let mut docx = docx_rs::Docx::new();
    for p in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(docx_rs::Run::new().add_text(*p)));
    }
    let mut cursor = std::io::Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).unwrap();
    cursor.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SourceFormat::from_file_name("cv.pdf").unwrap(), SourceFormat::Pdf);
        assert_eq!(SourceFormat::from_file_name("CV.PDF").unwrap(), SourceFormat::Pdf);
        assert_eq!(SourceFormat::from_file_name("cv.docx").unwrap(), SourceFormat::Docx);
        assert_eq!(SourceFormat::from_file_name("cv.doc").unwrap(), SourceFormat::Doc);
    }

    #[test]
    fn test_unsupported_extension_is_named() {
        let err = SourceFormat::from_file_name("notes.txt").unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedType(ref ext) if ext == ".txt"));

        let err = SourceFormat::from_file_name("README").unwrap_err();
        assert!(err.to_string().contains("README"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.pdf");
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
        assert!(err.to_string().contains("absent.pdf"));
    }

    #[test]
    fn test_existence_checked_before_extension() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_existing_unsupported_file_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "plain text resume").unwrap();
        let err = load_document(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedType(_)));
    }

    #[test]
    fn test_corrupt_pdf_is_a_pdf_error() {
        let err = extract_from_bytes("broken.pdf", b"not a pdf at all").unwrap_err();
        assert!(matches!(err, LoadError::Pdf(_)));
    }

    #[test]
    fn test_corrupt_docx_is_a_docx_error() {
        let err = extract_from_bytes("broken.docx", b"not a zip archive").unwrap_err();
        assert!(matches!(err, LoadError::Docx(_)));
    }

    #[test]
    fn test_docx_paragraphs_joined_by_newline() {
        let bytes = docx_fixture(&["Jane Doe", "SKILLS", "Rust, Go"]);
        let text = extract_from_bytes("resume.docx", &bytes).unwrap();
        assert_eq!(text, "Jane Doe\nSKILLS\nRust, Go");
    }

    #[test]
    fn test_load_docx_from_disk() {
        let bytes = docx_fixture(&["  Senior Rust Engineer  "]);
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(&bytes).unwrap();

        let text = load_document(file.path()).unwrap();
        assert_eq!(text, "Senior Rust Engineer");
    }
}
