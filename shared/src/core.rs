use crate::codec::Item;
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use serde::Deserialize;
use serde_json::value::RawValue;
use std::fmt::Debug;

#[cfg(any(test, feature = "mocks"))]
use mockall::{automock, predicate::*};

pub const PRODUCT_ID: &str = "productId";
pub const USER_ID: &str = "userId";
pub const ITEM_ID: &str = "itemId";
pub const QUANTITY: &str = "quantity";

#[cfg_attr(any(test, feature = "mocks"), automock)]
#[async_trait]
pub trait ProductRepository: Debug {
    async fn get_product(&self, product_id: &str) -> Result<Option<Item>, String>;
    /// Sets one attribute and returns the attributes the store reports as updated.
    async fn update_product_attribute(
        &self,
        product_id: &str,
        attribute_name: &str,
        value: AttributeValue,
    ) -> Result<Item, String>;
    /// Returns the deleted record, or `None` when nothing was stored under the key.
    async fn delete_product(&self, product_id: &str) -> Result<Option<Item>, String>;
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
#[async_trait]
pub trait CartRepository: Debug {
    async fn list_cart_items(&self, user_id: &str) -> Result<Vec<Item>, String>;
    async fn put_cart_item(&self, entry: CartEntry) -> Result<(), String>;
    async fn remove_cart_item(&self, user_id: &str, item_id: &str) -> Result<Option<Item>, String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub user_id: String,
    pub item_id: String,
    pub quantity: i64,
}

impl CartEntry {
    pub fn new(user_id: String, item_id: String, quantity: i64) -> Self {
        Self {
            user_id,
            item_id,
            quantity,
        }
    }

    pub fn key(&self) -> (String, String) {
        (self.user_id.clone(), self.item_id.clone())
    }
}

impl From<CartEntry> for Item {
    fn from(entry: CartEntry) -> Self {
        Item::from([
            (USER_ID.to_string(), AttributeValue::S(entry.user_id)),
            (ITEM_ID.to_string(), AttributeValue::S(entry.item_id)),
            (QUANTITY.to_string(), AttributeValue::N(entry.quantity.to_string())),
        ])
    }
}

/// Body of a catalog update. `updateValue` stays as raw JSON text so numbers
/// reach the store with every digit intact.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProductRequest {
    pub product_id: Option<String>,
    pub update_key: Option<String>,
    pub update_value: Option<Box<RawValue>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddToCartRequest {
    pub user_id: Option<String>,
    pub item_id: Option<String>,
    pub quantity: Option<i64>,
}

const DEFAULT_QUANTITY: i64 = 1;

impl AddToCartRequest {
    pub fn into_entry(self) -> Option<CartEntry> {
        let user_id = self.user_id.filter(|id| !id.is_empty())?;
        let item_id = self.item_id.filter(|id| !id.is_empty())?;

        Some(CartEntry::new(
            user_id,
            item_id,
            self.quantity.unwrap_or(DEFAULT_QUANTITY),
        ))
    }
}
