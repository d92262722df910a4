//! Login gate
//!
//! A boolean gate only: one configured account, compared verbatim. There is
//! no hashing, lockout or expiry. A failed login never touches store state.

use gymadmin_core_types::{Sensitive, SessionId};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::errors::{GymError, Result};
use crate::model::Admin;
use crate::{log_op_end, log_op_error, log_op_start};

/// The single account allowed to operate the console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminAccount {
    pub username: String,
    pub password: Sensitive<String>,
    pub display_name: String,
}

impl Default for AdminAccount {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: Sensitive::new("admin".to_string()),
            display_name: "Administrador".to_string(),
        }
    }
}

/// Proof of a successful login
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    admin: Admin,
}

impl Session {
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn admin(&self) -> &Admin {
        &self.admin
    }
}

impl AdminAccount {
    /// Check a username/password pair
    ///
    /// # Errors
    ///
    /// `GymError::InvalidCredentials` for any pair other than the configured one.
    pub fn login(&self, username: &str, password: &Sensitive<String>) -> Result<Session> {
        let started = Instant::now();
        log_op_start!("login", username = username);

        if username != self.username || !self.password.matches(password.expose()) {
            log_op_error!(
                "login",
                GymError::InvalidCredentials,
                duration_ms = started.elapsed().as_millis() as u64
            );
            return Err(GymError::InvalidCredentials);
        }

        let session = Session {
            id: SessionId::new(),
            admin: Admin {
                id: 1,
                username: self.username.clone(),
                display_name: self.display_name.clone(),
            },
        };
        log_op_end!(
            "login",
            duration_ms = started.elapsed().as_millis() as u64,
            session_id = %session.id
        );
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pw(s: &str) -> Sensitive<String> {
        Sensitive::new(s.to_string())
    }

    #[test]
    fn test_default_account_accepts_admin_admin() {
        let session = AdminAccount::default().login("admin", &pw("admin")).unwrap();
        assert_eq!(session.admin().username, "admin");
        assert_eq!(session.admin().display_name, "Administrador");
    }

    #[test]
    fn test_any_other_pair_is_rejected_with_literal_message() {
        let account = AdminAccount::default();
        for (user, pass) in [("admin", "Admin"), ("root", "admin"), ("", ""), ("admin", "")] {
            let err = account.login(user, &pw(pass)).unwrap_err();
            assert_eq!(err.to_string(), "Credenciales inválidas. Pruebe admin/admin");
        }
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        let account = AdminAccount::default();
        let a = account.login("admin", &pw("admin")).unwrap();
        let b = account.login("admin", &pw("admin")).unwrap();
        assert_ne!(a.id().as_str(), b.id().as_str());
    }
}
