//! Password change form.
//!
//! Local checks run before any network call: minimum length and
//! new/confirm agreement. The current password is held only for the single
//! submission — a rejected attempt clears it.

use crate::api::client::PortalApi;
use crate::api::error::ApiError;
use crate::api::types::ChangePasswordRequest;

const MIN_PASSWORD_LEN: usize = 8;

/// Why a change was rejected.
#[derive(Debug, thiserror::Error)]
pub enum PasswordChangeError {
    #[error("New password must be at least 8 characters")]
    TooShort,
    #[error("New password and confirmation do not match")]
    Mismatch,
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub struct PasswordChangeForm<'a, A: PortalApi> {
    api: &'a A,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
    error: Option<PasswordChangeError>,
    changed: bool,
}

impl<'a, A: PortalApi> PasswordChangeForm<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            current_password: String::new(),
            new_password: String::new(),
            confirm_password: String::new(),
            error: None,
            changed: false,
        }
    }

    pub fn error(&self) -> Option<&PasswordChangeError> {
        self.error.as_ref()
    }

    /// Whether the last submission succeeded (drives the confirmation note).
    pub fn changed(&self) -> bool {
        self.changed
    }

    fn validate(&self) -> Result<(), PasswordChangeError> {
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(PasswordChangeError::TooShort);
        }
        if self.new_password != self.confirm_password {
            return Err(PasswordChangeError::Mismatch);
        }
        Ok(())
    }

    /// Submit the change. Local validation failures never reach the
    /// network; a server rejection clears the current password field.
    pub async fn submit(&mut self) {
        self.changed = false;
        self.error = None;

        if let Err(e) = self.validate() {
            self.error = Some(e);
            return;
        }

        let request = ChangePasswordRequest {
            current_password: std::mem::take(&mut self.current_password),
            new_password: self.new_password.clone(),
        };
        match self.api.change_password(&request).await {
            Ok(()) => {
                self.new_password.clear();
                self.confirm_password.clear();
                self.changed = true;
            }
            Err(e) => {
                // current_password was already taken out of the form above
                self.error = Some(e.into());
            }
        }
    }
}
