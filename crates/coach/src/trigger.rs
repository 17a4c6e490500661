use crate::core::GameSnapshot;
use crate::request::CoachRequest;
use crate::types::Status;

/// Decides when the session deserves a new line of commentary.
///
/// Fires when the status or level changes while the session is playing or
/// over. Changes into idle are recorded without a request.
#[derive(Debug, Clone, Default)]
pub struct CoachTrigger {
    last: Option<(Status, u32)>,
}

impl CoachTrigger {
    pub fn new() -> Self {
        Self { last: None }
    }

    pub fn observe(&mut self, snap: &GameSnapshot) -> Option<CoachRequest> {
        let key = (snap.status, snap.level);
        if self.last == Some(key) {
            return None;
        }
        self.last = Some(key);

        matches!(snap.status, Status::Playing | Status::GameOver)
            .then(|| CoachRequest::from_snapshot(snap))
    }
}
