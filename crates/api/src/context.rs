use membergate_auth::Principal;
use membergate_core::{AccountStatus, Role, UserId};

/// Resolved identity for the current request, injected by the gate on
/// every allowed, authenticated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    principal: Principal,
}

impl CurrentUser {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    pub fn id(&self) -> UserId {
        self.principal.id
    }

    pub fn display_name(&self) -> &str {
        &self.principal.display_name
    }

    pub fn role(&self) -> Role {
        self.principal.role
    }

    pub fn status(&self) -> AccountStatus {
        self.principal.status
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }
}
