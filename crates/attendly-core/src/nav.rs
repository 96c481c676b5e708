//! Route-to-capability table.
//!
//! Which navigation entries a role sees is a static table, evaluated
//! per navigation rather than scattered conditional rendering. The gating is
//! advisory: it only hides entries client-side, and the backend must
//! independently authorize every endpoint.

use strum::Display;

use crate::session::Role;

/// The navigable sections of the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum RouteId {
    /// Daily summary dashboard.
    Home,
    /// Employee management.
    Employees,
    /// Camera configuration.
    Configure,
    /// Admin account management.
    Admins,
    /// Recognition model control panel.
    #[strum(serialize = "Model-Manager")]
    ModelManager,
}

impl RouteId {
    /// All entries in menu order.
    pub const ALL: [RouteId; 5] = [
        Self::Home,
        Self::Employees,
        Self::Configure,
        Self::Admins,
        Self::ModelManager,
    ];
}

impl Role {
    /// The navigation entries visible to this role.
    ///
    /// Employees see none of the admin console: they land on the
    /// personal attendance view instead of the sidebar shell. Only the
    /// superuser account gets Configure and Admins.
    pub fn routes(self) -> &'static [RouteId] {
        match self {
            Role::Employee => &[],
            Role::Admin => &[RouteId::Home, RouteId::Employees, RouteId::ModelManager],
            Role::Superuser => &RouteId::ALL,
        }
    }

    /// Whether this role's menu includes the given route.
    pub fn allows(self, route: RouteId) -> bool {
        self.routes().contains(&route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_sees_no_admin_entries() {
        assert!(Role::Employee.routes().is_empty());
        for route in RouteId::ALL {
            assert!(!Role::Employee.allows(route));
        }
    }

    #[test]
    fn superuser_sees_all_five() {
        assert_eq!(Role::Superuser.routes().len(), 5);
    }

    #[test]
    fn admin_sees_three_without_configure_or_admins() {
        let routes = Role::Admin.routes();
        assert_eq!(routes.len(), 3);
        assert!(Role::Admin.allows(RouteId::Home));
        assert!(Role::Admin.allows(RouteId::Employees));
        assert!(Role::Admin.allows(RouteId::ModelManager));
        assert!(!Role::Admin.allows(RouteId::Configure));
        assert!(!Role::Admin.allows(RouteId::Admins));
    }
}
