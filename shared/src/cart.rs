use crate::codec::Item;
use crate::core::{AddToCartRequest, CartRepository};
use crate::error::HandlerError;

const ITEM_NOT_FOUND: &str = "Item not found";

/// A user's cart: one entry per item, keyed by `(userId, itemId)`.
#[derive(Debug)]
pub struct ShoppingCart<R: CartRepository> {
    cart_repo: R,
}

impl<R: CartRepository> ShoppingCart<R> {
    pub fn new(cart_repo: R) -> Self {
        Self { cart_repo }
    }

    pub async fn get_cart(&self, user_id: &str) -> Result<Vec<Item>, HandlerError> {
        self.cart_repo
            .list_cart_items(user_id)
            .await
            .map_err(|e| HandlerError::internal("Error getting cart", e))
    }

    /// Upserts the entry described by `body`. A repeated add replaces the
    /// quantity rather than adding to it.
    pub async fn add_to_cart(&self, body: &[u8]) -> Result<(), HandlerError> {
        let request: AddToCartRequest = serde_json::from_slice(body)?;
        let entry = request
            .into_entry()
            .ok_or_else(HandlerError::missing_fields)?;

        self.cart_repo
            .put_cart_item(entry)
            .await
            .map_err(|e| HandlerError::internal("Error adding to cart", e))
    }

    pub async fn remove_from_cart(&self, user_id: &str, item_id: &str) -> Result<(), HandlerError> {
        self.cart_repo
            .remove_cart_item(user_id, item_id)
            .await
            .map_err(|e| HandlerError::internal("Error removing item", e))?
            .map(|_| ())
            .ok_or_else(|| HandlerError::NotFound(ITEM_NOT_FOUND.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CartEntry, MockCartRepository};
    use crate::in_memory::InMemoryCartRepository;
    use aws_sdk_dynamodb::types::AttributeValue;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn on_empty_cart_should_return_empty_list() {
        let mut cart_repo = MockCartRepository::new();
        cart_repo
            .expect_list_cart_items()
            .with(eq("u1"))
            .times(1)
            .returning(|_user_id| Ok(vec![]));
        let cart = ShoppingCart::new(cart_repo);

        let result = cart.get_cart("u1").await;

        assert_eq!(result, Ok(vec![]));
    }

    #[tokio::test]
    async fn on_add_without_quantity_should_store_one() {
        let mut cart_repo = MockCartRepository::new();
        cart_repo
            .expect_put_cart_item()
            .with(eq(CartEntry::new("u1".into(), "i1".into(), 1)))
            .times(1)
            .returning(|_entry| Ok(()));
        let cart = ShoppingCart::new(cart_repo);

        let result = cart.add_to_cart(br#"{"userId": "u1", "itemId": "i1"}"#).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn on_add_without_user_should_not_touch_the_store() {
        let mut cart_repo = MockCartRepository::new();
        cart_repo.expect_put_cart_item().times(0);
        let cart = ShoppingCart::new(cart_repo);

        let result = cart.add_to_cart(br#"{"itemId": "i1", "quantity": 2}"#).await;

        assert_eq!(result, Err(HandlerError::missing_fields()));
    }

    #[tokio::test]
    async fn on_store_failure_should_pass_up_with_context() {
        let mut cart_repo = MockCartRepository::new();
        cart_repo
            .expect_put_cart_item()
            .times(1)
            .returning(|_entry| Err("ResourceNotFoundException".to_string()));
        let cart = ShoppingCart::new(cart_repo);

        let result = cart.add_to_cart(br#"{"userId": "u1", "itemId": "i1"}"#).await;

        assert_eq!(
            result,
            Err(HandlerError::Internal(
                "Error adding to cart: ResourceNotFoundException".into()
            ))
        );
    }

    #[tokio::test]
    async fn repeated_add_should_overwrite_quantity() {
        let cart = ShoppingCart::new(InMemoryCartRepository::new());

        cart.add_to_cart(br#"{"userId": "u1", "itemId": "i1", "quantity": 2}"#)
            .await
            .unwrap();
        cart.add_to_cart(br#"{"userId": "u1", "itemId": "i1", "quantity": 5}"#)
            .await
            .unwrap();

        let items = cart.get_cart("u1").await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["quantity"], AttributeValue::N("5".into()));
    }

    #[tokio::test]
    async fn second_remove_should_report_not_found() {
        let cart = ShoppingCart::new(InMemoryCartRepository::new());
        cart.add_to_cart(br#"{"userId": "u1", "itemId": "i1"}"#)
            .await
            .unwrap();

        let first = cart.remove_from_cart("u1", "i1").await;
        let second = cart.remove_from_cart("u1", "i1").await;

        assert_eq!(first, Ok(()));
        assert_eq!(second, Err(HandlerError::NotFound("Item not found".into())));
    }
}
