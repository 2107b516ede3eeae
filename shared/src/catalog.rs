use crate::codec::{attribute_from_json, Item, JsonItem};
use crate::core::{ProductRepository, UpdateProductRequest};
use crate::error::HandlerError;
use serde::Serialize;

const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Read, single-attribute update and delete of product records.
#[derive(Debug)]
pub struct ProductCatalog<R: ProductRepository> {
    product_repo: R,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdatedResponse<'a> {
    message: &'static str,
    updated_attributes: JsonItem<'a>,
}

impl<'a> ProductUpdatedResponse<'a> {
    pub fn new(updated_attributes: &'a Item) -> Self {
        Self {
            message: "Product updated successfully",
            updated_attributes: JsonItem(updated_attributes),
        }
    }
}

impl<R: ProductRepository> ProductCatalog<R> {
    pub fn new(product_repo: R) -> Self {
        Self { product_repo }
    }

    pub async fn get_product(&self, product_id: &str) -> Result<Item, HandlerError> {
        self.product_repo
            .get_product(product_id)
            .await
            .map_err(|e| HandlerError::internal("Error reading product", e))?
            .ok_or_else(|| HandlerError::NotFound(PRODUCT_NOT_FOUND.to_string()))
    }

    /// Applies an update body: `{productId, updateKey, updateValue}`.
    pub async fn update_product(&self, body: &[u8]) -> Result<Item, HandlerError> {
        let request: UpdateProductRequest = serde_json::from_slice(body)?;

        let (product_id, update_key, update_value) =
            match (request.product_id, request.update_key, request.update_value) {
                (Some(id), Some(key), Some(value)) if !id.is_empty() && !key.is_empty() => {
                    (id, key, value)
                }
                _ => return Err(HandlerError::missing_fields()),
            };
        let value = attribute_from_json(&update_value)?;

        self.product_repo
            .update_product_attribute(&product_id, &update_key, value)
            .await
            .map_err(|e| HandlerError::internal("Error updating product", e))
    }

    pub async fn delete_product(&self, product_id: &str) -> Result<(), HandlerError> {
        self.product_repo
            .delete_product(product_id)
            .await
            .map_err(|e| HandlerError::internal("Error deleting product", e))?
            .map(|_| ())
            .ok_or_else(|| HandlerError::NotFound(PRODUCT_NOT_FOUND.to_string()))
    }
}
