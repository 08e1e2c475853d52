mod art;
mod artist;
mod classification;

pub use art::ArtForm;
pub use artist::ArtistForm;
pub use classification::ClassificationForm;
