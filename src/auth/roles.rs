// src/auth/roles.rs
//
// Stored roles carry legacy aliases from the old deployment; the frontend
// only understands the five screen roles, so login maps them down.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_CASHIER: &str = "caja";
pub const ROLE_KITCHEN: &str = "cocina";
pub const ROLE_WAITER: &str = "pedido";
pub const ROLE_MENU: &str = "menu";

/// Roles accepted when an admin creates an account.
pub const ASSIGNABLE_ROLES: &[&str] = &[
    ROLE_ADMIN,
    ROLE_CASHIER,
    ROLE_KITCHEN,
    ROLE_WAITER,
    ROLE_MENU,
];

/// Map a stored role (including legacy aliases) to the screen the
/// frontend should route to. Unknown roles land on the read-only menu.
pub fn frontend_role(stored: &str) -> &'static str {
    match stored.to_lowercase().as_str() {
        "admin" => ROLE_ADMIN,
        "caja" | "encargado" | "encargado_caja" => ROLE_CASHIER,
        "cocina" | "kitchen" => ROLE_KITCHEN,
        "pedido" | "mozo" => ROLE_WAITER,
        _ => ROLE_MENU,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_aliases_map_to_screen_roles() {
        assert_eq!(frontend_role("admin"), "admin");
        assert_eq!(frontend_role("encargado_caja"), "caja");
        assert_eq!(frontend_role("kitchen"), "cocina");
        assert_eq!(frontend_role("mozo"), "pedido");
    }

    #[test]
    fn mapping_ignores_case() {
        assert_eq!(frontend_role("Admin"), "admin");
        assert_eq!(frontend_role("COCINA"), "cocina");
    }

    #[test]
    fn unknown_roles_fall_back_to_menu() {
        assert_eq!(frontend_role("intern"), "menu");
        assert_eq!(frontend_role(""), "menu");
    }
}
