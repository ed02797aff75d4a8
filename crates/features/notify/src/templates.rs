//! Email content for the two notifications this application sends.
//!
//! Wording is part of the user-facing contract; keep changes deliberate.

use crate::message::EmailMessage;

/// Confirmation email sent to the organizer after assignments are computed.
#[must_use]
pub fn confirmation_email(recipient: &str, confirmation_link: &str) -> EmailMessage {
    let body = format!(
        "Hello,\n\n\
         Please click the following link to confirm and send out the Secret Santa assignments: {confirmation_link}\n\n\
         This link will expire after one use or if the game is reset."
    );

    EmailMessage::new(recipient, "Confirm Secret Santa Assignments", body)
}

/// Assignment email telling one giver who they are gifting.
#[must_use]
pub fn assignment_email(recipient: &str, giver_name: &str, receiver_name: &str) -> EmailMessage {
    let body = format!(
        "Hello {giver_name},\n\n\
         You are the Secret Santa for: {receiver_name}!"
    );

    EmailMessage::new(recipient, "Your Secret Santa Assignment!", body)
}
