//! Input resolution: validate the resume path and load its bytes.
//!
//! The magic-byte check happens here, before lopdf ever sees the buffer, so
//! a user who uploads a DOCX or a PNG gets "not a valid PDF" with the
//! offending bytes rather than a parser error from deep inside the xref
//! machinery.

use crate::error::AtsError;
use std::path::Path;
use tracing::debug;

/// PDF files start with `%PDF`; anything else is rejected up front.
const PDF_MAGIC: &[u8; 4] = b"%PDF";

/// Read the resume file at `path`, validating existence, readability, and
/// PDF magic bytes.
pub fn load_document(path: &Path) -> Result<Vec<u8>, AtsError> {
    if !path.exists() {
        return Err(AtsError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(AtsError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(_) => {
            return Err(AtsError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
    };

    check_magic(&bytes).map_err(|magic| AtsError::NotAPdf {
        path: path.to_path_buf(),
        magic,
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "resolved resume PDF");
    Ok(bytes)
}

/// Validate the magic bytes of an in-memory document.
///
/// Returns the first four bytes on mismatch so the error message can show
/// the user what the file actually was.
pub fn check_magic(bytes: &[u8]) -> Result<(), [u8; 4]> {
    let mut magic = [0u8; 4];
    let n = bytes.len().min(4);
    magic[..n].copy_from_slice(&bytes[..n]);
    if &magic == PDF_MAGIC {
        Ok(())
    } else {
        Err(magic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn magic_accepts_pdf_header() {
        assert!(check_magic(b"%PDF-1.7\n...").is_ok());
    }

    #[test]
    fn magic_rejects_zip_header() {
        assert_eq!(check_magic(b"PK\x03\x04rest"), Err(*b"PK\x03\x04"));
    }

    #[test]
    fn magic_rejects_short_input() {
        assert!(check_magic(b"%P").is_err());
        assert!(check_magic(b"").is_err());
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let err = load_document(Path::new("/definitely/not/here.pdf")).unwrap_err();
        assert!(matches!(err, AtsError::FileNotFound { .. }));
    }

    #[test]
    fn non_pdf_file_is_not_a_pdf() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"just some text").unwrap();
        let err = load_document(f.path()).unwrap_err();
        assert!(matches!(err, AtsError::NotAPdf { .. }));
    }
}
