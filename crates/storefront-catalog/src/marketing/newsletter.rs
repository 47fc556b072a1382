//! Newsletter signup form.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// A validated newsletter subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub email: String,
}

/// Form state for the newsletter section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsletterForm {
    pub subscribed: bool,
    pub error: Option<String>,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate an address and update the form state.
    ///
    /// The address is trimmed and lowercased. On failure the error message
    /// is kept on the form and any earlier success is cleared.
    pub fn submit(&mut self, email: &str) -> Result<Subscription, CommerceError> {
        match validate_email(email) {
            Ok(email) => {
                self.subscribed = true;
                self.error = None;
                tracing::info!(domain = email_domain(&email), "newsletter signup");
                Ok(Subscription { email })
            }
            Err(e) => {
                self.subscribed = false;
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

/// Domain part of a validated address. Logs carry this, never the address.
fn email_domain(email: &str) -> &str {
    email.rsplit_once('@').map_or("", |(_, domain)| domain)
}

/// Light syntactic check: one `@`, non-empty local part, dotted domain.
pub fn validate_email(email: &str) -> Result<String, CommerceError> {
    let email = email.trim().to_lowercase();
    let invalid = || CommerceError::InvalidEmail(email.clone());

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return Err(invalid());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(invalid());
    }

    Ok(email)
}
