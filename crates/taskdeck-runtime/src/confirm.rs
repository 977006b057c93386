use taskdeck_types::TaskId;

/// Pending-delete state for the confirmation surface. At most one deletion
/// awaits confirmation at a time; cancelling never touches the backend.
#[derive(Debug, Default)]
pub struct DeleteConfirmation {
    pending: Option<TaskId>,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, id: TaskId) {
        self.pending = Some(id);
    }

    pub fn pending(&self) -> Option<TaskId> {
        self.pending
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub(crate) fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_then_cancel_clears_pending() {
        let mut confirmation = DeleteConfirmation::new();
        confirmation.request(5);
        assert!(confirmation.is_open());
        assert_eq!(confirmation.pending(), Some(5));

        confirmation.cancel();
        assert!(!confirmation.is_open());
        assert_eq!(confirmation.pending(), None);
    }

    #[test]
    fn later_request_replaces_the_pending_id() {
        let mut confirmation = DeleteConfirmation::new();
        confirmation.request(5);
        confirmation.request(9);
        assert_eq!(confirmation.pending(), Some(9));
    }
}
