//! The seven ordered checks of the suite.
//!
//! Each check is a plain async function over an authenticated [`ApiClient`].
//! The create check returns the [`FoodHandle`] that the edit and delete checks
//! take as an argument; nothing is shared through global state.
//!
//! | Order | Scenario | Request | Expected |
//! |-------|----------|---------|----------|
//! | 1 | create-food | `POST /api/Food/Create` | 201 + non-empty `foodId` |
//! | 2 | edit-food-title | `PATCH /api/Food/Edit/{id}` | 200 + "Successfully edited" |
//! | 3 | get-all-foods | `GET /api/Food/All` | 200 + at least one item |
//! | 4 | delete-food | `DELETE /api/Food/Delete/{id}` | 200 + "Deleted successfully!" |
//! | 5 | create-food-without-required-fields | `POST /api/Food/Create` | 400 |
//! | 6 | edit-non-existing-food | `PATCH /api/Food/Edit/{missing}` | 404 |
//! | 7 | delete-non-existing-food | `DELETE /api/Food/Delete/{missing}` | 400 |
//!
//! The service answers 404 when editing an unknown id but 400 when deleting
//! it. Both are asserted as observed.

use std::fmt;

use clap::ValueEnum;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::assertions::{
    expect_body_contains, expect_non_empty, expect_non_empty_list, expect_status,
};
use crate::client::ApiClient;
use crate::error::{SuiteError, SuiteResult};
use crate::models::{CreatedFood, FoodHandle, FoodInput, rename_patch};
use crate::paths;

/// Title the edit scenarios set.
pub const UPDATED_NAME: &str = "Updated food name";

/// Confirmation phrase of a successful edit.
pub const EDITED_PHRASE: &str = "Successfully edited";

/// Confirmation phrase of a successful delete.
pub const DELETED_PHRASE: &str = "Deleted successfully!";

/// A check of the suite, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Scenario {
    /// Create a food and capture its id.
    CreateFood,
    /// Rename the created food.
    EditFoodTitle,
    /// List every food.
    GetAllFoods,
    /// Delete the created food.
    DeleteFood,
    /// Create with blank required fields.
    CreateFoodWithoutRequiredFields,
    /// Edit an id that does not exist.
    EditNonExistingFood,
    /// Delete an id that does not exist.
    DeleteNonExistingFood,
}

impl Scenario {
    /// Every scenario in execution order.
    pub const ALL: [Scenario; 7] = [
        Scenario::CreateFood,
        Scenario::EditFoodTitle,
        Scenario::GetAllFoods,
        Scenario::DeleteFood,
        Scenario::CreateFoodWithoutRequiredFields,
        Scenario::EditNonExistingFood,
        Scenario::DeleteNonExistingFood,
    ];

    /// Returns the 1-based execution order.
    pub fn order(self) -> u8 {
        match self {
            Scenario::CreateFood => 1,
            Scenario::EditFoodTitle => 2,
            Scenario::GetAllFoods => 3,
            Scenario::DeleteFood => 4,
            Scenario::CreateFoodWithoutRequiredFields => 5,
            Scenario::EditNonExistingFood => 6,
            Scenario::DeleteNonExistingFood => 7,
        }
    }

    /// Returns the name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Scenario::CreateFood => "create-food",
            Scenario::EditFoodTitle => "edit-food-title",
            Scenario::GetAllFoods => "get-all-foods",
            Scenario::DeleteFood => "delete-food",
            Scenario::CreateFoodWithoutRequiredFields => "create-food-without-required-fields",
            Scenario::EditNonExistingFood => "edit-non-existing-food",
            Scenario::DeleteNonExistingFood => "delete-non-existing-food",
        }
    }

    /// Returns a one-line summary of what the scenario checks.
    pub fn summary(self) -> &'static str {
        match self {
            Scenario::CreateFood => "create a food, expect 201 and a food id",
            Scenario::EditFoodTitle => "rename the created food, expect 200",
            Scenario::GetAllFoods => "list foods, expect 200 and a non-empty list",
            Scenario::DeleteFood => "delete the created food, expect 200",
            Scenario::CreateFoodWithoutRequiredFields => "create with blank fields, expect 400",
            Scenario::EditNonExistingFood => "edit an unknown id, expect 404",
            Scenario::DeleteNonExistingFood => "delete an unknown id, expect 400",
        }
    }

    /// Returns true if the scenario needs the food created by [`Scenario::CreateFood`].
    pub fn requires_food(self) -> bool {
        matches!(self, Scenario::EditFoodTitle | Scenario::DeleteFood)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Order 1: creates a food and returns its id.
pub async fn create_food(client: &ApiClient) -> SuiteResult<FoodHandle> {
    let response = client
        .post_json(paths::CREATE_FOOD, &FoodInput::sample())
        .await?;
    expect_status(&response, StatusCode::CREATED, "Response status should be Created")?;

    let created: CreatedFood = response.json()?;
    expect_non_empty(
        created.food_id.as_deref(),
        "Food ID should not be null or empty",
    )?;

    let handle = created
        .food_id
        .and_then(FoodHandle::new)
        .ok_or_else(|| SuiteError::InvalidResponse {
            message: "foodId is blank".to_string(),
        })?;
    debug!(food_id = %handle, "Captured food id");

    Ok(handle)
}

/// Order 2: renames the created food.
pub async fn edit_food_title(client: &ApiClient, food: &FoodHandle) -> SuiteResult<()> {
    let response = client
        .patch_json(&paths::edit_food(food.id()), &rename_patch(UPDATED_NAME))
        .await?;
    expect_status(&response, StatusCode::OK, "Response status should be OK")?;
    expect_body_contains(&response, EDITED_PHRASE, "Response should confirm the edit")?;
    Ok(())
}

/// Order 3: lists every food and returns how many there are.
pub async fn get_all_foods(client: &ApiClient) -> SuiteResult<usize> {
    let response = client.get(paths::ALL_FOODS).await?;
    expect_status(&response, StatusCode::OK, "Response status should be OK")?;

    let foods: Vec<Value> = response.json()?;
    expect_non_empty_list(&foods, "Food list should not be null or empty")?;
    Ok(foods.len())
}

/// Order 4: deletes the created food.
pub async fn delete_food(client: &ApiClient, food: &FoodHandle) -> SuiteResult<()> {
    let response = client.delete(&paths::delete_food(food.id())).await?;
    expect_status(&response, StatusCode::OK, "Response status should be OK")?;
    expect_body_contains(&response, DELETED_PHRASE, "Response should confirm the delete")?;
    Ok(())
}

/// Order 5: creating a food with blank required fields is rejected.
pub async fn create_food_without_required_fields(client: &ApiClient) -> SuiteResult<()> {
    let response = client
        .post_json(paths::CREATE_FOOD, &FoodInput::blank())
        .await?;
    expect_status(
        &response,
        StatusCode::BAD_REQUEST,
        "Response status should be Bad Request",
    )?;
    Ok(())
}

/// Order 6: editing an unknown id answers 404.
pub async fn edit_non_existing_food(client: &ApiClient, missing_id: &str) -> SuiteResult<()> {
    let response = client
        .patch_json(&paths::edit_food(missing_id), &rename_patch(UPDATED_NAME))
        .await?;
    expect_status(
        &response,
        StatusCode::NOT_FOUND,
        &format!("No food revues {}", missing_id),
    )?;
    Ok(())
}

/// Order 7: deleting an unknown id answers 400.
pub async fn delete_non_existing_food(client: &ApiClient, missing_id: &str) -> SuiteResult<()> {
    let response = client.delete(&paths::delete_food(missing_id)).await?;
    expect_status(
        &response,
        StatusCode::BAD_REQUEST,
        "Unable to delete this food revue!",
    )?;
    Ok(())
}
