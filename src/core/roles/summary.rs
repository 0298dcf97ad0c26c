//! Capability summary projection

use crate::core::models::{Module, PermissionLevel, PermissionMatrix};

/// Render a human-readable capability summary for a permission matrix
///
/// Module names within each bucket follow the catalog's display order, never
/// insertion order, so the projection is deterministic.
pub fn permission_summary(modules: &[Module], permissions: &PermissionMatrix) -> String {
    let mut ordered: Vec<&Module> = modules.iter().collect();
    ordered.sort_by_key(|module| module.display_order);

    let mut manageable = Vec::new();
    let mut view_only = Vec::new();

    for module in ordered {
        let level = permissions.get(&module.key).copied().unwrap_or_default();
        if level.is_manageable() {
            manageable.push(module.name.as_str());
        } else if level == PermissionLevel::View {
            view_only.push(module.name.as_str());
        }
    }

    let mut clauses = Vec::new();

    if !manageable.is_empty() {
        let shown = manageable.len().min(3);
        let mut clause = format!("Can manage {}", manageable[..shown].join(", "));
        if manageable.len() > 3 {
            clause.push_str("...");
        }
        clauses.push(clause);
    }

    if !view_only.is_empty() {
        let shown = view_only.len().min(2);
        let mut clause = format!("view {}", view_only[..shown].join(", "));
        if view_only.len() > 2 {
            clause.push_str("...");
        }
        clauses.push(clause);
    }

    if clauses.is_empty() {
        "No permissions".to_string()
    } else {
        clauses.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn catalog() -> Vec<Module> {
        [
            ("user_management", "User Management"),
            ("payroll", "Payroll"),
            ("contracts", "Contracts"),
            ("compliance", "Compliance"),
            ("reports", "Reports"),
            ("settings", "Settings"),
        ]
        .iter()
        .enumerate()
        .map(|(order, (key, name))| Module {
            id: Uuid::new_v4(),
            key: key.to_string(),
            name: name.to_string(),
            display_order: order as i32 + 1,
        })
        .collect()
    }

    fn matrix(entries: &[(&str, PermissionLevel)]) -> PermissionMatrix {
        entries
            .iter()
            .map(|(key, level)| (key.to_string(), *level))
            .collect()
    }

    #[test]
    fn test_mixed_buckets() {
        let summary = permission_summary(
            &catalog(),
            &matrix(&[
                ("payroll", PermissionLevel::Admin),
                ("contracts", PermissionLevel::Manage),
                ("compliance", PermissionLevel::View),
            ]),
        );

        assert_eq!(summary, "Can manage Payroll, Contracts, view Compliance");
    }

    #[test]
    fn test_empty_matrix() {
        assert_eq!(
            permission_summary(&catalog(), &PermissionMatrix::new()),
            "No permissions"
        );
    }

    #[test]
    fn test_none_levels_are_ignored() {
        let summary = permission_summary(
            &catalog(),
            &matrix(&[
                ("payroll", PermissionLevel::None),
                ("contracts", PermissionLevel::None),
            ]),
        );

        assert_eq!(summary, "No permissions");
    }

    #[test]
    fn test_manageable_overflow_gets_ellipsis() {
        let summary = permission_summary(
            &catalog(),
            &matrix(&[
                ("user_management", PermissionLevel::Admin),
                ("payroll", PermissionLevel::Manage),
                ("contracts", PermissionLevel::Approve),
                ("reports", PermissionLevel::Manage),
            ]),
        );

        assert_eq!(summary, "Can manage User Management, Payroll, Contracts...");
    }

    #[test]
    fn test_view_overflow_gets_ellipsis() {
        let summary = permission_summary(
            &catalog(),
            &matrix(&[
                ("payroll", PermissionLevel::View),
                ("compliance", PermissionLevel::View),
                ("settings", PermissionLevel::View),
            ]),
        );

        assert_eq!(summary, "view Payroll, Compliance...");
    }

    #[test]
    fn test_ordering_follows_display_order_not_insertion() {
        // Insert in reverse catalog order; output must still follow the
        // catalog.
        let summary = permission_summary(
            &catalog(),
            &matrix(&[
                ("settings", PermissionLevel::Manage),
                ("payroll", PermissionLevel::Manage),
            ]),
        );

        assert_eq!(summary, "Can manage Payroll, Settings");
    }

    #[test]
    fn test_unknown_module_keys_are_ignored() {
        let summary = permission_summary(
            &catalog(),
            &matrix(&[
                ("decommissioned", PermissionLevel::Admin),
                ("payroll", PermissionLevel::View),
            ]),
        );

        assert_eq!(summary, "view Payroll");
    }
}
