pub mod art_list;
pub mod art_save;
pub mod artist_list;
pub mod artist_save;
pub mod classification_list;
pub mod classification_save;
pub mod config;
pub mod delete;
pub mod import;
pub mod show;
