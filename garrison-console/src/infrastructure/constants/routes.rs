//! Admin API route constants.

pub const USERS: &str = "/api/users";
pub const USER_ITEM: &str = "/api/users/{id}";
pub const BASES: &str = "/api/bases";

/// Substitute a `{param}` placeholder in a route template.
pub fn replace_param(route: &str, param: &str, value: impl AsRef<str>) -> String {
    route.replace(param, value.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_item_route_takes_an_id() {
        assert_eq!(
            replace_param(USER_ITEM, "{id}", "u-42"),
            "/api/users/u-42"
        );
    }
}
