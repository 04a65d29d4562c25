//! Write-time sanitize-and-stamp transforms.
//!
//! Untrusted client input for privilege-relevant fields is never trusted,
//! but rejecting the write is not the desired behaviour either: these
//! functions silently coerce the offending fields to the permitted value
//! before the record reaches the storage layer. They run after the policy
//! gate and never fail.

use crate::principal::{is_admin, is_project_staff, Principal, Project, Role};

/// Force a record's `project` to the acting principal's own project when
/// the actor is project staff. Global staff (and the anonymous case, which
/// the policy gate has already rejected for writes) pass the client value
/// through untouched.
pub fn stamp_project(
    principal: Option<&Principal>,
    requested: Option<Project>,
) -> Option<Project> {
    if is_admin(principal) {
        return requested;
    }
    match principal {
        Some(p) if is_project_staff(principal) && p.project.is_some() => p.project,
        _ => requested,
    }
}

/// Force a media row's `category` to the uploader's project for project
/// staff; everyone else keeps the requested category.
pub fn stamp_media_category(principal: Option<&Principal>, requested: String) -> String {
    if is_admin(principal) {
        return requested;
    }
    match principal {
        Some(p) if is_project_staff(principal) => match p.project {
            Some(project) => project.as_str().to_string(),
            None => requested,
        },
        _ => requested,
    }
}

/// Clamp the role/project a user-management write may produce.
///
/// A project admin can only ever mint project managers inside their own
/// project; whatever role/project the client supplied is discarded.
/// Global staff pass through unchanged.
pub fn clamp_user_role(
    principal: Option<&Principal>,
    requested_role: Role,
    requested_project: Option<Project>,
) -> (Role, Option<Project>) {
    if is_admin(principal) {
        return (requested_role, requested_project);
    }
    match principal {
        Some(p) if p.role == Role::ProjectAdmin => (Role::ProjectManager, p.project),
        _ => (requested_role, requested_project),
    }
}

/// Derive alt text from an uploaded filename when the client sent none:
/// drop the extension, turn `-`/`_` into spaces, title-case each word.
pub fn alt_from_filename(filename: &str) -> String {
    let stem = match filename.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => filename,
    };
    stem.split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive a sub-committee member's display name from its parts.
pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name.trim(), last_name.trim())
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff(role: Role, project: Project) -> Principal {
        Principal {
            id: 7,
            role,
            project: Some(project),
        }
    }

    #[test]
    fn test_project_stamp_overrides_client_value() {
        let pm = staff(Role::ProjectManager, Project::Insl);
        // Attempt to write into another project's partition is coerced.
        assert_eq!(
            stamp_project(Some(&pm), Some(Project::StudPro)),
            Some(Project::Insl)
        );
        assert_eq!(stamp_project(Some(&pm), None), Some(Project::Insl));
    }

    #[test]
    fn test_project_stamp_passes_global_staff_through() {
        let admin = Principal {
            id: 1,
            role: Role::Admin,
            project: None,
        };
        assert_eq!(
            stamp_project(Some(&admin), Some(Project::Y2nPro)),
            Some(Project::Y2nPro)
        );
        assert_eq!(stamp_project(Some(&admin), None), None);
    }

    #[test]
    fn test_media_category_stamp() {
        let pa = staff(Role::ProjectAdmin, Project::LetsTalk);
        assert_eq!(
            stamp_media_category(Some(&pa), "events".into()),
            "lets-talk"
        );

        let manager = Principal {
            id: 2,
            role: Role::Manager,
            project: None,
        };
        assert_eq!(stamp_media_category(Some(&manager), "events".into()), "events");
    }

    #[test]
    fn test_role_clamp_for_project_admin() {
        let pa = staff(Role::ProjectAdmin, Project::Y2nPro);
        // Requested admin-in-another-project becomes PM-in-own-project.
        let (role, project) = clamp_user_role(Some(&pa), Role::Admin, Some(Project::Insl));
        assert_eq!(role, Role::ProjectManager);
        assert_eq!(project, Some(Project::Y2nPro));
    }

    #[test]
    fn test_role_clamp_passes_admin_through() {
        let admin = Principal {
            id: 1,
            role: Role::Admin,
            project: None,
        };
        let (role, project) =
            clamp_user_role(Some(&admin), Role::ProjectAdmin, Some(Project::Insl));
        assert_eq!(role, Role::ProjectAdmin);
        assert_eq!(project, Some(Project::Insl));
    }

    #[test]
    fn test_alt_from_filename() {
        assert_eq!(alt_from_filename("annual-gala_2026.jpg"), "Annual Gala 2026");
        assert_eq!(alt_from_filename("logo.png"), "Logo");
        assert_eq!(alt_from_filename("no_extension"), "No Extension");
    }

    #[test]
    fn test_full_name_trims_parts() {
        assert_eq!(full_name(" Amara ", "Perera"), "Amara Perera");
        assert_eq!(full_name("Amara", ""), "Amara");
    }
}
