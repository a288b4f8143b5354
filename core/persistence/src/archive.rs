//! FILENAME: core/persistence/src/archive.rs
//! Bundles rendered page documents into a deflate ZIP archive with a JSON
//! manifest, the download format for a finished report run.

use crate::PersistenceError;
use serde::{Deserialize, Serialize};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Name of the manifest file inside the archive.
pub const MANIFEST_NAME: &str = "manifest.json";

/// One rendered page document to include in the archive.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    /// File name inside the archive, e.g. "page_1_serials_001-002.pdf".
    pub file_name: String,

    /// One-based page number.
    pub page_number: usize,

    /// Keys of the groups rendered on this page.
    pub group_keys: Vec<String>,

    /// The finished document bytes from the drawing collaborator.
    pub bytes: Vec<u8>,
}

/// Manifest describing every page in the archive, stored as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveManifest {
    pub version: u32,
    pub pages: Vec<ManifestPage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestPage {
    pub file_name: String,
    pub page_number: usize,
    pub group_keys: Vec<String>,
}

impl ArchiveManifest {
    pub fn new(entries: &[ArchiveEntry]) -> Self {
        ArchiveManifest {
            version: 1,
            pages: entries
                .iter()
                .map(|e| ManifestPage {
                    file_name: e.file_name.clone(),
                    page_number: e.page_number,
                    group_keys: e.group_keys.clone(),
                })
                .collect(),
        }
    }
}

/// Writes all page documents plus the manifest into an in-memory ZIP
/// archive and returns its bytes.
pub fn bundle_pages(entries: &[ArchiveEntry]) -> Result<Vec<u8>, PersistenceError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        writer.start_file(entry.file_name.as_str(), options)?;
        writer.write_all(&entry.bytes)?;
    }

    let manifest = ArchiveManifest::new(entries);
    writer.start_file(MANIFEST_NAME, options)?;
    let json = serde_json::to_vec_pretty(&manifest)?;
    writer.write_all(&json)?;

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn sample_entries() -> Vec<ArchiveEntry> {
        vec![
            ArchiveEntry {
                file_name: "page_1.pdf".to_string(),
                page_number: 1,
                group_keys: vec!["001".to_string(), "002".to_string()],
                bytes: b"%PDF-1.4 first".to_vec(),
            },
            ArchiveEntry {
                file_name: "page_2.pdf".to_string(),
                page_number: 2,
                group_keys: vec!["003".to_string()],
                bytes: b"%PDF-1.4 second".to_vec(),
            },
        ]
    }

    #[test]
    fn test_bundle_contains_pages_and_manifest() {
        let bytes = bundle_pages(&sample_entries()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        assert_eq!(archive.len(), 3);

        let mut page = archive.by_name("page_1.pdf").unwrap();
        let mut content = Vec::new();
        page.read_to_end(&mut content).unwrap();
        assert_eq!(content, b"%PDF-1.4 first");
    }

    #[test]
    fn test_manifest_round_trip() {
        let bytes = bundle_pages(&sample_entries()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        let mut manifest_file = archive.by_name(MANIFEST_NAME).unwrap();
        let mut json = String::new();
        manifest_file.read_to_string(&mut json).unwrap();

        let manifest: ArchiveManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(manifest.version, 1);
        assert_eq!(manifest.pages.len(), 2);
        assert_eq!(manifest.pages[0].group_keys, vec!["001", "002"]);
        assert_eq!(manifest.pages[1].page_number, 2);
    }

    #[test]
    fn test_empty_bundle_still_has_manifest() {
        let bytes = bundle_pages(&[]).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 1);
        assert!(archive.by_name(MANIFEST_NAME).is_ok());
    }
}
