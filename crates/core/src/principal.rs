//! The principal/role model.
//!
//! A [`Principal`] is the authenticated actor behind a request, built once
//! from the persisted user record at authentication time and immutable for
//! the duration of the request. Anonymous callers are represented as
//! `Option::<Principal>::None`; every predicate treats a missing principal
//! as "no role".

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Editor roles, from most to least privileged.
///
/// `Admin` and `Manager` are global roles; `ProjectAdmin` and
/// `ProjectManager` are scoped to a single [`Project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Admin,
    Manager,
    ProjectAdmin,
    ProjectManager,
}

impl Role {
    /// The wire/database representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::ProjectAdmin => "project-admin",
            Role::ProjectManager => "project-manager",
        }
    }

    /// Parse from the wire/database representation.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            "project-admin" => Some(Role::ProjectAdmin),
            "project-manager" => Some(Role::ProjectManager),
            _ => None,
        }
    }
}

/// The closed set of project codes used as partition keys across content
/// collections: the chapter itself plus its named sub-initiatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Project {
    #[serde(rename = "ypsl")]
    Ypsl,
    #[serde(rename = "ai-driven-sri-lanka")]
    AiDrivenSriLanka,
    #[serde(rename = "sl-inspire")]
    SlInspire,
    #[serde(rename = "lets-talk")]
    LetsTalk,
    #[serde(rename = "insl")]
    Insl,
    #[serde(rename = "studpro")]
    StudPro,
    #[serde(rename = "y2npro")]
    Y2nPro,
}

impl Project {
    pub const ALL: [Project; 7] = [
        Project::Ypsl,
        Project::AiDrivenSriLanka,
        Project::SlInspire,
        Project::LetsTalk,
        Project::Insl,
        Project::StudPro,
        Project::Y2nPro,
    ];

    /// The wire/database representation of the project code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Project::Ypsl => "ypsl",
            Project::AiDrivenSriLanka => "ai-driven-sri-lanka",
            Project::SlInspire => "sl-inspire",
            Project::LetsTalk => "lets-talk",
            Project::Insl => "insl",
            Project::StudPro => "studpro",
            Project::Y2nPro => "y2npro",
        }
    }

    /// Parse from the wire/database representation.
    pub fn parse(s: &str) -> Option<Project> {
        Project::ALL.iter().copied().find(|p| p.as_str() == s)
    }
}

/// The authenticated actor making a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// The user's internal database id.
    pub id: DbId,
    /// The user's role.
    pub role: Role,
    /// Assigned project. Required for project-scoped roles; ignored for
    /// global roles if present.
    pub project: Option<Project>,
}

/// True iff the principal holds a global role (`admin` or `manager`).
pub fn is_admin(principal: Option<&Principal>) -> bool {
    matches!(
        principal.map(|p| p.role),
        Some(Role::Admin) | Some(Role::Manager)
    )
}

/// True iff the principal is a project admin.
pub fn is_project_admin(principal: Option<&Principal>) -> bool {
    matches!(principal.map(|p| p.role), Some(Role::ProjectAdmin))
}

/// True iff the principal is a project manager.
pub fn is_project_manager(principal: Option<&Principal>) -> bool {
    matches!(principal.map(|p| p.role), Some(Role::ProjectManager))
}

/// True iff the principal holds either project-scoped role.
pub fn is_project_staff(principal: Option<&Principal>) -> bool {
    is_project_admin(principal) || is_project_manager(principal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(role: Role, project: Option<Project>) -> Principal {
        Principal {
            id: 1,
            role,
            project,
        }
    }

    #[test]
    fn test_anonymous_has_no_role() {
        assert!(!is_admin(None));
        assert!(!is_project_admin(None));
        assert!(!is_project_manager(None));
        assert!(!is_project_staff(None));
    }

    #[test]
    fn test_global_roles_are_admin() {
        let admin = principal(Role::Admin, None);
        let manager = principal(Role::Manager, None);
        assert!(is_admin(Some(&admin)));
        assert!(is_admin(Some(&manager)));
        assert!(!is_project_staff(Some(&admin)));
        assert!(!is_project_staff(Some(&manager)));
    }

    #[test]
    fn test_project_roles_are_staff_not_admin() {
        let pa = principal(Role::ProjectAdmin, Some(Project::Insl));
        let pm = principal(Role::ProjectManager, Some(Project::StudPro));
        assert!(!is_admin(Some(&pa)));
        assert!(!is_admin(Some(&pm)));
        assert!(is_project_admin(Some(&pa)));
        assert!(is_project_manager(Some(&pm)));
        assert!(is_project_staff(Some(&pa)));
        assert!(is_project_staff(Some(&pm)));
    }

    #[test]
    fn test_project_round_trips_through_wire_form() {
        for p in Project::ALL {
            assert_eq!(Project::parse(p.as_str()), Some(p));
        }
        assert_eq!(Project::parse("atlantis"), None);
    }

    #[test]
    fn test_role_round_trips_through_wire_form() {
        for r in [
            Role::Admin,
            Role::Manager,
            Role::ProjectAdmin,
            Role::ProjectManager,
        ] {
            assert_eq!(Role::parse(r.as_str()), Some(r));
        }
        assert_eq!(Role::parse("root"), None);
    }
}
