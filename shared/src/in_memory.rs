//! In-memory tables behaving like the DynamoDB adapters, for tests that need
//! state to carry over between requests.

use crate::codec::Item;
use crate::core::{CartEntry, CartRepository, ProductRepository, PRODUCT_ID};
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: Mutex<HashMap<String, Item>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(self, item: Item) -> Self {
        if let Some(AttributeValue::S(id)) = item.get(PRODUCT_ID) {
            self.products.lock().unwrap().insert(id.clone(), item);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.products.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_product(&self, product_id: &str) -> Result<Option<Item>, String> {
        Ok(self.products.lock().unwrap().get(product_id).cloned())
    }

    async fn update_product_attribute(
        &self,
        product_id: &str,
        attribute_name: &str,
        value: AttributeValue,
    ) -> Result<Item, String> {
        let mut products = self.products.lock().unwrap();
        let product = products.entry(product_id.to_string()).or_insert_with(|| {
            Item::from([(PRODUCT_ID.to_string(), AttributeValue::S(product_id.to_string()))])
        });
        product.insert(attribute_name.to_string(), value.clone());

        Ok(Item::from([(attribute_name.to_string(), value)]))
    }

    async fn delete_product(&self, product_id: &str) -> Result<Option<Item>, String> {
        Ok(self.products.lock().unwrap().remove(product_id))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCartRepository {
    entries: Mutex<BTreeMap<(String, String), Item>>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn list_cart_items(&self, user_id: &str) -> Result<Vec<Item>, String> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|((user, _), _)| user == user_id)
            .map(|(_, item)| item.clone())
            .collect())
    }

    async fn put_cart_item(&self, entry: CartEntry) -> Result<(), String> {
        self.entries
            .lock()
            .unwrap()
            .insert(entry.key(), Item::from(entry));
        Ok(())
    }

    async fn remove_cart_item(&self, user_id: &str, item_id: &str) -> Result<Option<Item>, String> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .remove(&(user_id.to_string(), item_id.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn update_creates_missing_products() {
        let repo = InMemoryProductRepository::new();

        let updated = repo
            .update_product_attribute("p1", "name", AttributeValue::S("Lamp".into()))
            .await
            .unwrap();

        assert_eq!(updated.len(), 1);
        let stored = repo.get_product("p1").await.unwrap().unwrap();
        assert_eq!(stored[PRODUCT_ID], AttributeValue::S("p1".into()));
        assert_eq!(stored["name"], AttributeValue::S("Lamp".into()));
    }

    #[tokio::test]
    async fn cart_listing_only_returns_the_users_entries() {
        let repo = InMemoryCartRepository::new();
        repo.put_cart_item(CartEntry::new("u1".into(), "i1".into(), 1))
            .await
            .unwrap();
        repo.put_cart_item(CartEntry::new("u2".into(), "i1".into(), 4))
            .await
            .unwrap();

        let items = repo.list_cart_items("u1").await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(repo.len(), 2);
    }
}
