//! The access policy engine.
//!
//! Every collection read/write is gated by a policy function that maps the
//! requesting principal to an [`Access`] decision: an unconditional allow
//! or deny, or a declarative scoping predicate restricting the operation
//! to matching rows. Predicates are expressed as a small
//! condition-expression tree ([`Condition`]) that the storage layer lowers
//! into its native filter syntax; the engine itself is backend-agnostic.
//!
//! Policy functions never fail: an invalid or missing principal degrades
//! to the least-privileged applicable branch.

use crate::principal::{is_admin, is_project_admin, is_project_staff, Principal, Project, Role};
use crate::types::DbId;

/// Publication status value for publicly visible content.
pub const STATUS_PUBLISHED: &str = "published";

/// Publication status value for retained drafts.
pub const STATUS_DRAFT: &str = "draft";

/// Media category reserved for merch payment slips. Rows in this category
/// are excluded from every listing surface, including the admin panel.
pub const PAYSLIP_CATEGORY: &str = "merch-payslips";

/// A field a scoping predicate may constrain. Closed by design: the
/// storage layer maps each variant to a concrete column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Project,
    Status,
    Role,
    Category,
}

/// A comparison operand in a scoping predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Id(DbId),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<DbId> for Value {
    fn from(id: DbId) -> Self {
        Value::Id(id)
    }
}

impl From<Project> for Value {
    fn from(p: Project) -> Self {
        Value::Str(p.as_str().to_string())
    }
}

impl From<Role> for Value {
    fn from(r: Role) -> Self {
        Value::Str(r.as_str().to_string())
    }
}

/// A declarative filter condition: "allow only rows matching this".
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Field equals value.
    Eq(Field, Value),
    /// Field is absent (NULL) or not in the given set.
    NotIn(Field, Vec<Value>),
    /// All sub-conditions hold.
    And(Vec<Condition>),
    /// At least one sub-condition holds.
    Or(Vec<Condition>),
}

impl Condition {
    pub fn eq(field: Field, value: impl Into<Value>) -> Condition {
        Condition::Eq(field, value.into())
    }
}

/// A policy decision: total allow/deny, or a data-dependent scope.
#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    Allow,
    Deny,
    Where(Condition),
}

impl Access {
    /// True for `Deny`; lets callers short-circuit before touching storage.
    pub fn is_deny(&self) -> bool {
        matches!(self, Access::Deny)
    }
}

/// Unconditional admin policy: global staff only.
pub fn admin_only(principal: Option<&Principal>) -> Access {
    if is_admin(principal) {
        Access::Allow
    } else {
        Access::Deny
    }
}

/// Any authenticated principal. Used for media create/update.
pub fn authenticated(principal: Option<&Principal>) -> Access {
    if principal.is_some() {
        Access::Allow
    } else {
        Access::Deny
    }
}

/// Everyone, including anonymous callers.
pub fn public_read(_principal: Option<&Principal>) -> Access {
    Access::Allow
}

/// Project-scoped write policy: global staff unrestricted; project staff
/// scoped to rows of their own project; everyone else denied.
pub fn project_scoped_write(principal: Option<&Principal>) -> Access {
    if is_admin(principal) {
        return Access::Allow;
    }
    match principal {
        Some(p) if is_project_staff(principal) => match p.project {
            Some(project) => Access::Where(Condition::eq(Field::Project, project)),
            // A project role without an assigned project can scope to nothing.
            None => Access::Deny,
        },
        _ => Access::Deny,
    }
}

/// Read policy for draft-versioned collections (events, articles): global
/// staff see everything, project staff see their project, the public sees
/// published rows only.
pub fn project_read_or_published(principal: Option<&Principal>) -> Access {
    if is_admin(principal) {
        return Access::Allow;
    }
    if is_project_staff(principal) {
        return project_scoped_write(principal);
    }
    Access::Where(Condition::eq(Field::Status, STATUS_PUBLISHED))
}

/// Read policy for authors: like [`project_read_or_published`] but the
/// public fallback is a full allow (authors carry no draft state).
pub fn project_read_or_public(principal: Option<&Principal>) -> Access {
    if is_admin(principal) {
        return Access::Allow;
    }
    if is_project_staff(principal) {
        return project_scoped_write(principal);
    }
    Access::Allow
}

/// Row-level read/update/delete policy for the users collection.
///
/// Global staff manage everyone. Any other authenticated principal always
/// reaches their own record; a project admin additionally reaches the
/// project managers of their own project. Anonymous callers are denied.
pub fn users_access(principal: Option<&Principal>) -> Access {
    if is_admin(principal) {
        return Access::Allow;
    }
    let Some(p) = principal else {
        return Access::Deny;
    };

    let mut conditions = vec![Condition::eq(Field::Id, p.id)];
    if is_project_admin(principal) {
        if let Some(project) = p.project {
            conditions.push(Condition::And(vec![
                Condition::eq(Field::Project, project),
                Condition::eq(Field::Role, Role::ProjectManager),
            ]));
        }
    }
    Access::Where(Condition::Or(conditions))
}

/// Create policy for the users collection: global staff and project
/// admins. What a project admin may actually create is clamped separately
/// by [`crate::stamp::clamp_user_role`].
pub fn users_create(principal: Option<&Principal>) -> Access {
    if is_admin(principal) || is_project_admin(principal) {
        Access::Allow
    } else {
        Access::Deny
    }
}

/// Read policy for the media library.
///
/// Payment slips are hidden from every caller, admins included. Project
/// staff are further restricted to their own project's category folder.
pub fn media_read(principal: Option<&Principal>) -> Access {
    let base = Condition::NotIn(Field::Category, vec![Value::from(PAYSLIP_CATEGORY)]);

    if let Some(p) = principal {
        if is_project_staff(principal) {
            if let Some(project) = p.project {
                return Access::Where(Condition::And(vec![
                    base,
                    Condition::eq(Field::Category, project),
                ]));
            }
        }
    }
    Access::Where(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global_admin() -> Principal {
        Principal {
            id: 1,
            role: Role::Admin,
            project: None,
        }
    }

    fn global_manager() -> Principal {
        Principal {
            id: 2,
            role: Role::Manager,
            project: Some(Project::Ypsl),
        }
    }

    fn project_admin(project: Project) -> Principal {
        Principal {
            id: 3,
            role: Role::ProjectAdmin,
            project: Some(project),
        }
    }

    fn project_manager(project: Project) -> Principal {
        Principal {
            id: 4,
            role: Role::ProjectManager,
            project: Some(project),
        }
    }

    #[test]
    fn test_global_staff_allowed_everywhere() {
        for p in [global_admin(), global_manager()] {
            let p = Some(&p);
            assert_eq!(admin_only(p), Access::Allow);
            assert_eq!(project_scoped_write(p), Access::Allow);
            assert_eq!(project_read_or_published(p), Access::Allow);
            assert_eq!(project_read_or_public(p), Access::Allow);
            assert_eq!(users_access(p), Access::Allow);
            assert_eq!(users_create(p), Access::Allow);
            assert_eq!(public_read(p), Access::Allow);
        }
    }

    #[test]
    fn test_write_policy_scopes_project_staff_to_own_project() {
        let pm = project_manager(Project::Insl);
        assert_eq!(
            project_scoped_write(Some(&pm)),
            Access::Where(Condition::eq(Field::Project, Project::Insl))
        );

        let pa = project_admin(Project::StudPro);
        assert_eq!(
            project_scoped_write(Some(&pa)),
            Access::Where(Condition::eq(Field::Project, Project::StudPro))
        );
    }

    #[test]
    fn test_write_policy_denies_public_and_unassigned_staff() {
        assert_eq!(project_scoped_write(None), Access::Deny);

        // Project role without an assigned project degrades to deny.
        let unassigned = Principal {
            id: 9,
            role: Role::ProjectManager,
            project: None,
        };
        assert_eq!(project_scoped_write(Some(&unassigned)), Access::Deny);
    }

    #[test]
    fn test_public_read_restricted_to_published() {
        assert_eq!(
            project_read_or_published(None),
            Access::Where(Condition::eq(Field::Status, STATUS_PUBLISHED))
        );
    }

    #[test]
    fn test_authors_public_fallback_is_allow() {
        assert_eq!(project_read_or_public(None), Access::Allow);
    }

    #[test]
    fn test_users_access_is_self_or_managed_managers() {
        let pa = project_admin(Project::Y2nPro);
        let access = users_access(Some(&pa));
        assert_eq!(
            access,
            Access::Where(Condition::Or(vec![
                Condition::eq(Field::Id, 3i64),
                Condition::And(vec![
                    Condition::eq(Field::Project, Project::Y2nPro),
                    Condition::eq(Field::Role, Role::ProjectManager),
                ]),
            ]))
        );

        // A project manager reaches only their own record.
        let pm = project_manager(Project::Y2nPro);
        assert_eq!(
            users_access(Some(&pm)),
            Access::Where(Condition::Or(vec![Condition::eq(Field::Id, 4i64)]))
        );

        assert_eq!(users_access(None), Access::Deny);
    }

    #[test]
    fn test_users_create_matrix() {
        assert_eq!(users_create(Some(&project_admin(Project::Insl))), Access::Allow);
        assert_eq!(
            users_create(Some(&project_manager(Project::Insl))),
            Access::Deny
        );
        assert_eq!(users_create(None), Access::Deny);
    }

    #[test]
    fn test_media_read_always_hides_payslips() {
        let base = Condition::NotIn(Field::Category, vec![Value::from(PAYSLIP_CATEGORY)]);

        assert_eq!(media_read(None), Access::Where(base.clone()));
        // Admins do not get an unconditional allow here.
        assert_eq!(media_read(Some(&global_admin())), Access::Where(base.clone()));

        let pm = project_manager(Project::LetsTalk);
        assert_eq!(
            media_read(Some(&pm)),
            Access::Where(Condition::And(vec![
                base,
                Condition::eq(Field::Category, Project::LetsTalk),
            ]))
        );
    }

    #[test]
    fn test_authenticated_policy() {
        assert_eq!(authenticated(Some(&project_manager(Project::Insl))), Access::Allow);
        assert_eq!(authenticated(None), Access::Deny);
    }
}
