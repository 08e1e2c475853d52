pub mod art;
pub mod artist;
pub mod classification;
pub mod error;
pub mod validate;

pub use art::{Art, ArtPatch};
pub use artist::{Artist, ArtistPatch, ArtistRef};
pub use classification::{Classification, ClassificationPatch, ClassificationRef};
pub use error::ValidationError;

/// Server-assigned identifier. The client never generates these.
pub type EntityId = i32;

/// The three record kinds managed by the catalog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Artist,
    Art,
    Classification,
}

impl EntityKind {
    /// Path segment under `/api` for this kind.
    pub fn path_segment(&self) -> &'static str {
        match self {
            EntityKind::Artist => "artist",
            EntityKind::Art => "art",
            EntityKind::Classification => "classification",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path_segment())
    }
}
