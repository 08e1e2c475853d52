//! View models for the admin client, decoupled from the terminal.
//!
//! Each list view owns its result set, search inputs, pending delete
//! target, and transient notice; each form owns its field state and
//! assembles payloads against the freshest reference lists. Renderers
//! (the CLI crate) only read state and forward user actions.

pub mod error;
pub mod form;
pub mod list;
pub mod messages;
pub mod notice;
pub mod store;

pub use error::Error;
pub use form::{ArtForm, ArtistForm, ClassificationForm};
pub use list::{ArtListView, ArtistListView, ClassificationListView, DeleteFlow};
pub use notice::Notice;
pub use store::Store;
