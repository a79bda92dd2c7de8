use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::Result;
use crate::types::StatementId;

/// notification topics the workflow emits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    FinishRegistration,
    CreateDocuments,
    StatementDenied,
    SendDocuments,
    SendCode,
    CreditIssued,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::FinishRegistration => "finish-registration",
            Topic::CreateDocuments => "create-documents",
            Topic::StatementDenied => "statement-denied",
            Topic::SendDocuments => "send-documents",
            Topic::SendCode => "send-code",
            Topic::CreditIssued => "credit-issued",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// one outbound notification: which statement, where to, what to say
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub topic: Topic,
    pub statement_id: StatementId,
    pub address: String,
    pub text: String,
}

/// the narrow seam to the notification-delivery collaborator
///
/// Emission is fire-and-forget from the workflow's viewpoint; delivery
/// guarantees (and exactly-once side effects) belong to the implementor.
pub trait NotificationSink {
    fn emit(&mut self, notification: Notification) -> Result<()>;
}

/// in-memory sink collecting notifications, for tests and local wiring
#[derive(Debug, Default)]
pub struct RecordingSink {
    notifications: Vec<Notification>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

impl NotificationSink for RecordingSink {
    fn emit(&mut self, notification: Notification) -> Result<()> {
        self.notifications.push(notification);
        Ok(())
    }
}
