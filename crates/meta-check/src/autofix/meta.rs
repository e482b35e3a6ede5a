//! Companion stub content

use std::path::Path;

use super::guid::Guid;

/// What a companion describes, which decides its stub content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKind {
    FileCompanion,
    DirectoryCompanion,
}

impl MetaKind {
    /// Probe the asset on disk; anything but a directory is a file.
    pub fn probe(asset: &Path) -> std::io::Result<Self> {
        let metadata = std::fs::metadata(asset)?;
        Ok(if metadata.is_dir() {
            Self::DirectoryCompanion
        } else {
            Self::FileCompanion
        })
    }
}

/// Render the stub Unity writes for a newly imported asset.
pub fn render_meta(kind: MetaKind, guid: Guid) -> String {
    let folder = match kind {
        MetaKind::DirectoryCompanion => "folderAsset: yes\n",
        MetaKind::FileCompanion => "",
    };
    format!(
        "fileFormatVersion: 2\n\
         guid: {guid}\n\
         {folder}\
         DefaultImporter:\n  \
         externalObjects: {{}}\n  \
         userData: \n  \
         assetBundleName: \n  \
         assetBundleVariant: \n"
    )
}
