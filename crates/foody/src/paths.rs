//! Endpoint paths of the Food service, relative to the base URL.

/// Login.
pub const AUTHENTICATION: &str = "/api/User/Authentication";

/// Create a food.
pub const CREATE_FOOD: &str = "/api/Food/Create";

/// List every food.
pub const ALL_FOODS: &str = "/api/Food/All";

/// Edit the food with the given id.
pub fn edit_food(id: &str) -> String {
    format!("/api/Food/Edit/{}", id)
}

/// Delete the food with the given id.
pub fn delete_food(id: &str) -> String {
    format!("/api/Food/Delete/{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_paths() {
        assert_eq!(edit_food("1234567890"), "/api/Food/Edit/1234567890");
        assert_eq!(delete_food("abc"), "/api/Food/Delete/abc");
    }
}
