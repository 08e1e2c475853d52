mod art;
mod artist;
mod classification;

pub use art::ArtListView;
pub use artist::ArtistListView;
pub use classification::ClassificationListView;

use artshop_types::EntityId;

/// Pending delete-confirmation target, shared by all list views. Holds
/// the id between "delete clicked" and "confirmed"/"cancelled"; nothing
/// is mutated until confirmation.
#[derive(Debug, Default)]
pub struct DeleteFlow {
    pending: Option<EntityId>,
}

impl DeleteFlow {
    pub fn request(&mut self, id: EntityId) {
        self.pending = Some(id);
    }

    pub fn pending(&self) -> Option<EntityId> {
        self.pending
    }

    /// Closes the dialog and discards the target.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Closes the dialog and yields the target for the delete call.
    pub fn confirm(&mut self) -> Option<EntityId> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_discards_pending_target() {
        let mut flow = DeleteFlow::default();
        flow.request(5);
        assert_eq!(flow.pending(), Some(5));
        flow.cancel();
        assert_eq!(flow.confirm(), None);
    }
}
