use std::sync::Arc;

use chrono::Utc;
use shared::{CreateCustomListRequest, CustomFoodList};
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

/// Custom food lists, kept in memory for the lifetime of the process
#[derive(Clone, Default)]
pub struct CustomListStore {
    lists: Arc<Mutex<Vec<CustomFoodList>>>,
}

impl CustomListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an already validated request and returns the created list.
    pub async fn create(&self, request: CreateCustomListRequest) -> CustomFoodList {
        let list = CustomFoodList {
            id: Uuid::new_v4().to_string(),
            name: request.name.trim().to_string(),
            items: request.items,
            created_at: Utc::now(),
        };
        self.lists.lock().await.push(list.clone());
        info!("Created custom list {:?} with {} items", list.name, list.items.len());
        list
    }

    /// All lists in creation order
    pub async fn all(&self) -> Vec<CustomFoodList> {
        self.lists.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_come_back_in_creation_order() {
        let store = CustomListStore::new();
        let first = store
            .create(CreateCustomListRequest {
                name: "  Lunch ".into(),
                items: vec!["Pho".into(), "Banh Mi".into()],
            })
            .await;
        store
            .create(CreateCustomListRequest { name: "Dinner".into(), items: vec!["Curry".into()] })
            .await;

        assert_eq!(first.name, "Lunch");
        let all = store.all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].name, "Dinner");
        assert_ne!(all[0].id, all[1].id);
    }
}
