use std::sync::Arc;

use dashmap::DashSet;
use uuid::Uuid;

use crate::interceptors::Notification;
use crate::utils::FieldErrors;

/// How a form submission ended
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Field checks failed; nothing was sent
    Rejected(FieldErrors),
    /// Another submission of the same form is still in flight; nothing was sent
    Busy(Notification),
    Succeeded(Notification),
    Failed(Notification),
}

impl Submission {
    pub fn busy() -> Self {
        Submission::Busy(Notification::error(
            "Please wait",
            "A submission is already in progress",
        ))
    }

    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Submission::Rejected(_) => None,
            Submission::Busy(n) | Submission::Succeeded(n) | Submission::Failed(n) => Some(n),
        }
    }
}

/// Fresh token for a newly rendered form
pub fn new_submission_id() -> String {
    Uuid::new_v4().to_string()
}

/// At most one in-flight submission per rendered form, keyed by the form's
/// submission token. Different forms never block each other.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGuard {
    in_flight: Arc<DashSet<String>>,
}

/// Held while a submission is in flight; dropping it reopens the form.
#[derive(Debug)]
pub struct InFlight {
    in_flight: Arc<DashSet<String>>,
    submission_id: String,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` while another submission of the same form still holds it. A
    /// blank token gets a one-off key of its own.
    pub fn try_acquire(&self, submission_id: &str) -> Option<InFlight> {
        let submission_id = match submission_id.trim() {
            "" => new_submission_id(),
            token => token.to_string(),
        };

        self.in_flight.insert(submission_id.clone()).then(|| InFlight {
            in_flight: self.in_flight.clone(),
            submission_id,
        })
    }

    pub fn is_in_flight(&self, submission_id: &str) -> bool {
        self.in_flight.contains(submission_id.trim())
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.in_flight.remove(&self.submission_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_submission_of_a_form_is_refused_until_release() {
        let guard = SubmissionGuard::new();

        let first = guard.try_acquire("form-1");
        assert!(first.is_some());
        assert!(guard.is_in_flight("form-1"));
        assert!(guard.try_acquire("form-1").is_none());

        drop(first);
        assert!(!guard.is_in_flight("form-1"));
        assert!(guard.try_acquire("form-1").is_some());
    }

    #[test]
    fn separate_forms_do_not_block_each_other() {
        let guard = SubmissionGuard::new();

        let _alice = guard.try_acquire("alice").unwrap();
        let bob = guard.try_acquire("bob");

        assert!(bob.is_some());
        assert_eq!(guard.in_flight_count(), 2);
    }

    #[test]
    fn blank_tokens_never_collide() {
        let guard = SubmissionGuard::new();

        let first = guard.try_acquire("");
        let second = guard.try_acquire("  ");

        assert!(first.is_some() && second.is_some());
        drop((first, second));
        assert_eq!(guard.in_flight_count(), 0);
    }

    #[test]
    fn clones_share_the_set() {
        let guard = SubmissionGuard::new();
        let other = guard.clone();

        let _held = guard.try_acquire("form-1").unwrap();
        assert!(other.try_acquire("form-1").is_none());
    }

    #[test]
    fn fresh_tokens_differ() {
        assert_ne!(new_submission_id(), new_submission_id());
    }

    #[tokio::test]
    async fn released_when_the_holder_panics() {
        let guard = SubmissionGuard::new();
        let task_guard = guard.clone();

        let result = tokio::spawn(async move {
            let _held = task_guard.try_acquire("form-1").unwrap();
            panic!("request blew up");
        })
        .await;

        assert!(result.is_err());
        assert!(!guard.is_in_flight("form-1"));
    }
}
