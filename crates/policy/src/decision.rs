//! Authorization decision engine.
//!
//! A pure function from (principal state, policy class) to a decision.
//! Status is checked **before** role: a pending or disabled account is
//! rejected no matter what role it carries, admin included. Reordering
//! those checks is a security defect.

use serde::Serialize;

use membergate_core::{AccountStatus, Role};

use crate::route::PolicyClass;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// The state a principal is in for decision purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrincipalState {
    Anonymous,
    Pending,
    Inactive,
    Active(Role),
}

impl PrincipalState {
    /// Derive the state from a resolved account's status and role.
    pub fn of(status: AccountStatus, role: Role) -> Self {
        match status {
            AccountStatus::Pending => PrincipalState::Pending,
            AccountStatus::Inactive => PrincipalState::Inactive,
            AccountStatus::Active => PrincipalState::Active(role),
        }
    }
}

/// Reason code attached to every non-allow decision; the transport layer
/// maps these to status codes and user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    Unauthenticated,
    AccountPending,
    AccountDisabled,
    ForbiddenRole,
}

impl DenyReason {
    /// Stable wire code.
    pub fn as_str(&self) -> &'static str {
        match self {
            DenyReason::Unauthenticated => "unauthenticated",
            DenyReason::AccountPending => "account_pending",
            DenyReason::AccountDisabled => "account_disabled",
            DenyReason::ForbiddenRole => "forbidden_role",
        }
    }

    /// User-facing message. Deliberately terse; never internal detail.
    pub fn message(&self) -> &'static str {
        match self {
            DenyReason::Unauthenticated => "authentication required",
            DenyReason::AccountPending => "account pending verification",
            DenyReason::AccountDisabled => "account disabled",
            DenyReason::ForbiddenRole => "insufficient permissions",
        }
    }
}

impl core::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of an authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Forward the request.
    Allow,

    /// Terminal denial: 403 on API routes, safe-default redirect on pages.
    Deny(DenyReason),

    /// Send the caller to login (page) / 401 or 403 (API).
    RedirectToLogin(DenyReason),

    /// Send the caller to a specific page (API routes map this to 403).
    RedirectTo {
        path: &'static str,
        reason: DenyReason,
    },
}

impl Decision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn reason(&self) -> Option<DenyReason> {
        match self {
            Decision::Allow => None,
            Decision::Deny(reason)
            | Decision::RedirectToLogin(reason)
            | Decision::RedirectTo { reason, .. } => Some(*reason),
        }
    }
}

/// Decide whether `state` may access a route of class `class`.
///
/// Pure and idempotent; identical inputs always yield identical output.
pub fn decide(state: PrincipalState, class: &PolicyClass) -> Decision {
    if matches!(class, PolicyClass::Public) {
        return Decision::Allow;
    }

    match state {
        PrincipalState::Anonymous => match class {
            PolicyClass::PendingAllowList => Decision::Allow,
            _ => Decision::RedirectToLogin(DenyReason::Unauthenticated),
        },

        PrincipalState::Pending => match class {
            PolicyClass::PendingAllowList => Decision::Allow,
            PolicyClass::AuthenticatedOnly => Decision::RedirectTo {
                path: HOME_PATH,
                reason: DenyReason::AccountPending,
            },
            _ => Decision::Deny(DenyReason::AccountPending),
        },

        PrincipalState::Inactive => match class {
            PolicyClass::AuthenticatedOnly => {
                Decision::RedirectToLogin(DenyReason::AccountDisabled)
            }
            // Unlike pending accounts, a disabled account does not get the
            // onboarding allow-list back.
            _ => Decision::Deny(DenyReason::AccountDisabled),
        },

        PrincipalState::Active(role) => match class {
            PolicyClass::RoleRestricted(allowed) => {
                if allowed.contains(&role) {
                    Decision::Allow
                } else {
                    Decision::Deny(DenyReason::ForbiddenRole)
                }
            }
            _ => Decision::Allow,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_only() -> PolicyClass {
        PolicyClass::restricted([Role::Admin])
    }

    #[test]
    fn public_allows_every_state() {
        for state in [
            PrincipalState::Anonymous,
            PrincipalState::Pending,
            PrincipalState::Inactive,
            PrincipalState::Active(Role::Guest),
        ] {
            assert_eq!(decide(state, &PolicyClass::Public), Decision::Allow);
        }
    }

    #[test]
    fn anonymous_row() {
        assert_eq!(
            decide(PrincipalState::Anonymous, &PolicyClass::AuthenticatedOnly),
            Decision::RedirectToLogin(DenyReason::Unauthenticated)
        );
        assert_eq!(
            decide(PrincipalState::Anonymous, &admin_only()),
            Decision::RedirectToLogin(DenyReason::Unauthenticated)
        );
        assert_eq!(
            decide(PrincipalState::Anonymous, &PolicyClass::PendingAllowList),
            Decision::Allow
        );
    }

    #[test]
    fn pending_row() {
        assert_eq!(
            decide(PrincipalState::Pending, &PolicyClass::AuthenticatedOnly),
            Decision::RedirectTo {
                path: HOME_PATH,
                reason: DenyReason::AccountPending
            }
        );
        assert_eq!(
            decide(PrincipalState::Pending, &admin_only()),
            Decision::Deny(DenyReason::AccountPending)
        );
        assert_eq!(
            decide(PrincipalState::Pending, &PolicyClass::PendingAllowList),
            Decision::Allow
        );
    }

    #[test]
    fn inactive_row() {
        assert_eq!(
            decide(PrincipalState::Inactive, &PolicyClass::AuthenticatedOnly),
            Decision::RedirectToLogin(DenyReason::AccountDisabled)
        );
        assert_eq!(
            decide(PrincipalState::Inactive, &admin_only()),
            Decision::Deny(DenyReason::AccountDisabled)
        );
        // inactive ≠ pending: no onboarding allow-list.
        assert_eq!(
            decide(PrincipalState::Inactive, &PolicyClass::PendingAllowList),
            Decision::Deny(DenyReason::AccountDisabled)
        );
    }

    #[test]
    fn active_row() {
        assert_eq!(
            decide(
                PrincipalState::Active(Role::Guest),
                &PolicyClass::AuthenticatedOnly
            ),
            Decision::Allow
        );
        assert_eq!(
            decide(PrincipalState::Active(Role::Admin), &admin_only()),
            Decision::Allow
        );
        assert_eq!(
            decide(PrincipalState::Active(Role::Staff), &admin_only()),
            Decision::Deny(DenyReason::ForbiddenRole)
        );
        assert_eq!(
            decide(
                PrincipalState::Active(Role::Staff),
                &PolicyClass::restricted([Role::Admin, Role::Staff])
            ),
            Decision::Allow
        );
    }

    #[test]
    fn status_is_checked_before_role() {
        // An inactive admin is still locked out of admin routes.
        let state = PrincipalState::of(AccountStatus::Inactive, Role::Admin);
        assert_eq!(
            decide(state, &admin_only()),
            Decision::Deny(DenyReason::AccountDisabled)
        );

        // Same for a pending admin.
        let state = PrincipalState::of(AccountStatus::Pending, Role::Admin);
        assert_eq!(
            decide(state, &admin_only()),
            Decision::Deny(DenyReason::AccountPending)
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn any_role() -> impl Strategy<Value = Role> {
            prop::sample::select(vec![Role::Admin, Role::Staff, Role::User, Role::Guest])
        }

        fn any_class() -> impl Strategy<Value = PolicyClass> {
            (any::<prop::sample::Index>(), prop::collection::vec(any_role(), 0..4)).prop_map(
                |(index, roles)| match index.index(4) {
                    0 => PolicyClass::Public,
                    1 => PolicyClass::PendingAllowList,
                    2 => PolicyClass::AuthenticatedOnly,
                    _ => PolicyClass::RoleRestricted(roles),
                },
            )
        }

        fn any_state() -> impl Strategy<Value = PrincipalState> {
            prop_oneof![
                Just(PrincipalState::Anonymous),
                Just(PrincipalState::Pending),
                Just(PrincipalState::Inactive),
                any_role().prop_map(PrincipalState::Active),
            ]
        }

        proptest! {
            #[test]
            fn anonymous_is_always_sent_to_login_on_protected_routes(roles in prop::collection::vec(any_role(), 0..4)) {
                for class in [PolicyClass::AuthenticatedOnly, PolicyClass::RoleRestricted(roles.clone())] {
                    prop_assert_eq!(
                        decide(PrincipalState::Anonymous, &class),
                        Decision::RedirectToLogin(DenyReason::Unauthenticated)
                    );
                }
            }

            #[test]
            fn pending_never_passes_outside_the_allow_list(class in any_class()) {
                let decision = decide(PrincipalState::Pending, &class);
                let allowed = matches!(class, PolicyClass::Public | PolicyClass::PendingAllowList);
                prop_assert_eq!(decision.is_allow(), allowed);
            }

            #[test]
            fn inactive_is_denied_on_protected_routes_for_every_role_set(roles in prop::collection::vec(any_role(), 0..4)) {
                // Even a role set containing Admin does not help: status first.
                let decision = decide(PrincipalState::Inactive, &PolicyClass::RoleRestricted(roles));
                prop_assert_eq!(decision, Decision::Deny(DenyReason::AccountDisabled));
            }

            #[test]
            fn decide_is_idempotent(state in any_state(), class in any_class()) {
                prop_assert_eq!(decide(state, &class), decide(state, &class));
            }

            #[test]
            fn every_denial_carries_a_reason(state in any_state(), class in any_class()) {
                let decision = decide(state, &class);
                prop_assert_eq!(decision.reason().is_none(), decision.is_allow());
            }
        }
    }
}
