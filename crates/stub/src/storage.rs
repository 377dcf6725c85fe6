//! Food storage.
//!
//! Handlers only talk to the [`FoodStorage`] trait. The in-memory backend keeps
//! every food in a map guarded by a `parking_lot` lock and hands out clones, so
//! no lock is ever held across an `.await`.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::error::{StorageError, StorageResult};

/// A food review as persisted by a storage backend.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredFood {
    id: String,
    content: Value,
    sequence: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StoredFood {
    /// Returns the food id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the editable document (`name`, `description`, `url`).
    pub fn content(&self) -> &Value {
        &self.content
    }

    /// Returns the current title.
    pub fn name(&self) -> Option<&str> {
        self.content.get("name").and_then(Value::as_str)
    }

    /// Returns when the food was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Renders the food as it appears in API listings.
    pub fn to_json(&self) -> Value {
        let mut value = self.content.clone();
        if let Value::Object(map) = &mut value {
            map.insert("id".to_string(), json!(self.id));
            map.insert("createdOn".to_string(), json!(self.created_at.to_rfc3339()));
            map.insert("editedOn".to_string(), json!(self.updated_at.to_rfc3339()));
        }
        value
    }
}

/// Storage operations needed by the Food API.
#[async_trait]
pub trait FoodStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Stores a new food and assigns it an id.
    async fn create(&self, content: Value) -> StorageResult<StoredFood>;

    /// Reads a food by id.
    async fn read(&self, id: &str) -> StorageResult<Option<StoredFood>>;

    /// Lists every food in creation order.
    async fn list(&self) -> StorageResult<Vec<StoredFood>>;

    /// Replaces the document of an existing food.
    async fn update(&self, id: &str, content: Value) -> StorageResult<StoredFood>;

    /// Removes a food.
    ///
    /// # Errors
    ///
    /// * `StorageError::NotFound` - If no food has the given id
    async fn delete(&self, id: &str) -> StorageResult<()>;
}

#[derive(Debug, Default)]
struct Inner {
    foods: HashMap<String, StoredFood>,
    next_sequence: u64,
}

/// Process-local storage backend.
#[derive(Debug, Default)]
pub struct InMemoryFoodStorage {
    inner: RwLock<Inner>,
}

impl InMemoryFoodStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored foods.
    pub fn len(&self) -> usize {
        self.inner.read().foods.len()
    }

    /// Returns true when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl FoodStorage for InMemoryFoodStorage {
    fn backend_name(&self) -> &'static str {
        "in-memory"
    }

    async fn create(&self, content: Value) -> StorageResult<StoredFood> {
        if !content.is_object() {
            return Err(StorageError::Backend {
                message: "food document must be a JSON object".to_string(),
            });
        }

        let now = Utc::now();
        let mut inner = self.inner.write();
        let sequence = inner.next_sequence;
        inner.next_sequence += 1;

        let food = StoredFood {
            id: Uuid::new_v4().to_string(),
            content,
            sequence,
            created_at: now,
            updated_at: now,
        };
        inner.foods.insert(food.id.clone(), food.clone());
        Ok(food)
    }

    async fn read(&self, id: &str) -> StorageResult<Option<StoredFood>> {
        Ok(self.inner.read().foods.get(id).cloned())
    }

    async fn list(&self) -> StorageResult<Vec<StoredFood>> {
        let mut foods: Vec<StoredFood> = self.inner.read().foods.values().cloned().collect();
        foods.sort_by_key(|food| food.sequence);
        Ok(foods)
    }

    async fn update(&self, id: &str, content: Value) -> StorageResult<StoredFood> {
        let mut inner = self.inner.write();
        let food = inner
            .foods
            .get_mut(id)
            .ok_or_else(|| StorageError::NotFound { id: id.to_string() })?;
        food.content = content;
        food.updated_at = Utc::now();
        Ok(food.clone())
    }

    async fn delete(&self, id: &str) -> StorageResult<()> {
        self.inner
            .write()
            .foods
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound { id: id.to_string() })
    }
}
