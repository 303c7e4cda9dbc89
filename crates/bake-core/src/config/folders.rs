//! The four folders derived from the source root.

use super::keys;

/// A folder that lives under the source root by default.
///
/// Each has a *name* property read from configuration (`asset.folder=assets`)
/// and a *path* property holding `source / name` after derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Folder {
    Asset,
    Template,
    Content,
    Destination,
}

impl Folder {
    pub const ALL: [Folder; 4] = [
        Folder::Asset,
        Folder::Template,
        Folder::Content,
        Folder::Destination,
    ];

    /// Folders re-derived whenever the source folder changes.
    /// Destination is left out: it only follows an explicit rename.
    pub const FOLLOW_SOURCE: [Folder; 3] = [Folder::Asset, Folder::Template, Folder::Content];

    pub fn name_key(self) -> &'static str {
        match self {
            Folder::Asset => keys::ASSET_FOLDER,
            Folder::Template => keys::TEMPLATE_FOLDER,
            Folder::Content => keys::CONTENT_FOLDER,
            Folder::Destination => keys::DESTINATION_FOLDER,
        }
    }

    pub fn path_key(self) -> &'static str {
        match self {
            Folder::Asset => keys::ASSET_FOLDER_PATH,
            Folder::Template => keys::TEMPLATE_FOLDER_PATH,
            Folder::Content => keys::CONTENT_FOLDER_PATH,
            Folder::Destination => keys::DESTINATION_FOLDER_PATH,
        }
    }
}
