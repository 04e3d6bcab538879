//! Canonical route table.
//!
//! One table, consulted for every request. Historically this policy lived
//! in several places with overlapping allow-lists and inconsistent
//! defaults; the rules here are the consolidation of those lists. The
//! table is immutable after construction and safe for unsynchronized
//! concurrent reads.

use membergate_core::Role;

/// Access class of a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyClass {
    /// Reachable by everyone, including anonymous and disabled accounts
    /// (login page, legal pages, health probe).
    Public,

    /// The narrow allow-list pending accounts may reach to finish
    /// onboarding (signup, verification). Anonymous callers may reach
    /// these too; disabled accounts may not.
    PendingAllowList,

    /// Requires an authenticated, active account.
    AuthenticatedOnly,

    /// Requires an authenticated, active account whose role is in the set.
    /// Membership check, not a hierarchy.
    RoleRestricted(Vec<Role>),
}

impl PolicyClass {
    pub fn restricted(roles: impl Into<Vec<Role>>) -> Self {
        PolicyClass::RoleRestricted(roles.into())
    }
}

/// Whether a route renders pages (redirect on denial) or serves the JSON
/// API (structured 401/403 on denial).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Page,
    Api,
}

#[derive(Debug, Clone)]
struct RouteRule {
    prefix: String,
    class: PolicyClass,
}

/// The (path-prefix → policy class) table.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    rules: Vec<RouteRule>,
}

static FAIL_CLOSED_DEFAULT: PolicyClass = PolicyClass::AuthenticatedOnly;

impl RoutePolicy {
    pub fn builder() -> RoutePolicyBuilder {
        RoutePolicyBuilder { rules: Vec::new() }
    }

    /// The canonical table for the membership/contract application.
    pub fn standard() -> Self {
        Self::builder()
            // Reachable by everyone, disabled accounts included.
            .rule("/", PolicyClass::Public)
            .rule("/health", PolicyClass::Public)
            .rule("/login", PolicyClass::Public)
            .rule("/logout", PolicyClass::Public)
            .rule("/legal", PolicyClass::Public)
            .rule("/api/session", PolicyClass::Public)
            // Onboarding allow-list for pending accounts.
            .rule("/signup", PolicyClass::PendingAllowList)
            .rule("/verify", PolicyClass::PendingAllowList)
            // Member-facing surfaces.
            .rule("/dashboard", PolicyClass::AuthenticatedOnly)
            .rule("/members", PolicyClass::AuthenticatedOnly)
            .rule("/contracts", PolicyClass::AuthenticatedOnly)
            .rule("/api/me", PolicyClass::AuthenticatedOnly)
            .rule("/api/members", PolicyClass::AuthenticatedOnly)
            .rule("/api/contracts", PolicyClass::AuthenticatedOnly)
            // Back-office surfaces.
            .rule("/staff", PolicyClass::restricted([Role::Admin, Role::Staff]))
            .rule("/api/staff", PolicyClass::restricted([Role::Admin, Role::Staff]))
            .rule("/admin", PolicyClass::restricted([Role::Admin]))
            .rule("/api/admin", PolicyClass::restricted([Role::Admin]))
            .build()
    }

    /// Classify `path` by its longest matching prefix rule.
    ///
    /// Unmatched paths are `AuthenticatedOnly`: fail closed.
    pub fn classify(&self, path: &str) -> &PolicyClass {
        let mut best: Option<&RouteRule> = None;
        for rule in &self.rules {
            if prefix_matches(&rule.prefix, path) {
                // Ties go to the later rule, so overrides appended to a
                // base table win.
                if best.is_none_or(|b| rule.prefix.len() >= b.prefix.len()) {
                    best = Some(rule);
                }
            }
        }
        best.map_or(&FAIL_CLOSED_DEFAULT, |rule| &rule.class)
    }

    /// Page routes redirect on denial; `/api/...` routes get JSON errors.
    pub fn kind(path: &str) -> RouteKind {
        if path == "/api" || path.starts_with("/api/") {
            RouteKind::Api
        } else {
            RouteKind::Page
        }
    }
}

pub struct RoutePolicyBuilder {
    rules: Vec<RouteRule>,
}

impl RoutePolicyBuilder {
    pub fn rule(mut self, prefix: impl Into<String>, class: PolicyClass) -> Self {
        self.rules.push(RouteRule {
            prefix: prefix.into(),
            class,
        });
        self
    }

    pub fn build(self) -> RoutePolicy {
        RoutePolicy { rules: self.rules }
    }
}

/// Segment-aware prefix match: `/admin` matches `/admin` and
/// `/admin/users`, never `/administrator`. The root rule matches only the
/// root itself.
fn prefix_matches(prefix: &str, path: &str) -> bool {
    if prefix == "/" {
        return path == "/";
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
