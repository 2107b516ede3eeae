use crate::{
    codec::Item,
    configuration::Configuration,
    core::{CartEntry, CartRepository, ProductRepository, ITEM_ID, PRODUCT_ID, USER_ID},
};
use async_trait::async_trait;
use aws_sdk_dynamodb::{
    types::{AttributeValue, ReturnValue},
    Client,
};
use lambda_http::tracing;

/// Builds the process-wide DynamoDB client, honouring an endpoint override for
/// DynamoDB Local.
pub async fn dynamodb_client(configuration: &Configuration) -> Client {
    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

    match &configuration.dynamodb_endpoint {
        Some(endpoint) => {
            tracing::info!("Using DynamoDB endpoint {}", endpoint);
            let dynamodb_config = aws_sdk_dynamodb::config::Builder::from(&sdk_config)
                .endpoint_url(endpoint)
                .build();
            Client::from_conf(dynamodb_config)
        }
        None => Client::new(&sdk_config),
    }
}

#[derive(Debug)]
pub struct DynamoDbProductRepository {
    table_name: String,
    dynamodb_client: Client,
}

impl DynamoDbProductRepository {
    pub fn new(table_name: String, dynamodb_client: Client) -> Self {
        Self {
            table_name,
            dynamodb_client,
        }
    }
}

#[async_trait]
impl ProductRepository for DynamoDbProductRepository {
    async fn get_product(&self, product_id: &str) -> Result<Option<Item>, String> {
        self.dynamodb_client
            .get_item()
            .table_name(&self.table_name)
            .key(PRODUCT_ID, AttributeValue::S(product_id.to_string()))
            .send()
            .await
            .map(|output| output.item)
            .map_err(|e| format!("{:?}", e.into_service_error()))
    }

    async fn update_product_attribute(
        &self,
        product_id: &str,
        attribute_name: &str,
        value: AttributeValue,
    ) -> Result<Item, String> {
        self.dynamodb_client
            .update_item()
            .table_name(&self.table_name)
            .key(PRODUCT_ID, AttributeValue::S(product_id.to_string()))
            .update_expression("SET #attrName = :val")
            .expression_attribute_names("#attrName", attribute_name)
            .expression_attribute_values(":val", value)
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map(|output| output.attributes.unwrap_or_default())
            .map_err(|e| format!("{:?}", e.into_service_error()))
    }

    async fn delete_product(&self, product_id: &str) -> Result<Option<Item>, String> {
        self.dynamodb_client
            .delete_item()
            .table_name(&self.table_name)
            .key(PRODUCT_ID, AttributeValue::S(product_id.to_string()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map(|output| output.attributes.filter(|attributes| !attributes.is_empty()))
            .map_err(|e| format!("{:?}", e.into_service_error()))
    }
}

#[derive(Debug)]
pub struct DynamoDbCartRepository {
    table_name: String,
    dynamodb_client: Client,
}

impl DynamoDbCartRepository {
    pub fn new(table_name: String, dynamodb_client: Client) -> Self {
        Self {
            table_name,
            dynamodb_client,
        }
    }
}

#[async_trait]
impl CartRepository for DynamoDbCartRepository {
    async fn list_cart_items(&self, user_id: &str) -> Result<Vec<Item>, String> {
        let mut items = vec![];
        let mut exclusive_start_key = None;

        loop {
            let result = self
                .dynamodb_client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("userId = :uid")
                .expression_attribute_values(":uid", AttributeValue::S(user_id.to_string()))
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await
                .map_err(|e| format!("{:?}", e.into_service_error()))?;

            items.extend(result.items.unwrap_or_default());

            // a user's cart is returned whole, so keep following the cursor
            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
                _ => break,
            }
        }

        Ok(items)
    }

    async fn put_cart_item(&self, entry: CartEntry) -> Result<(), String> {
        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(Item::from(entry)))
            .send()
            .await
            .map(|_| ())
            .map_err(|e| format!("{:?}", e.into_service_error()))
    }

    async fn remove_cart_item(&self, user_id: &str, item_id: &str) -> Result<Option<Item>, String> {
        self.dynamodb_client
            .delete_item()
            .table_name(&self.table_name)
            .key(USER_ID, AttributeValue::S(user_id.to_string()))
            .key(ITEM_ID, AttributeValue::S(item_id.to_string()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map(|output| output.attributes.filter(|attributes| !attributes.is_empty()))
            .map_err(|e| format!("{:?}", e.into_service_error()))
    }
}
