use http_handler::function_handler;
use lambda_http::{run, service_fn, tracing, Error};
use shared::adapters::{dynamodb_client, DynamoDbProductRepository};
use shared::catalog::ProductCatalog;
use shared::configuration::Configuration;

mod http_handler;

const DEFAULT_TABLE_NAME: &str = "Products";

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    let configuration = Configuration::load(DEFAULT_TABLE_NAME)?;
    let dynamodb_client = dynamodb_client(&configuration).await;

    let product_repo = DynamoDbProductRepository::new(configuration.table_name, dynamodb_client);
    let catalog = ProductCatalog::new(product_repo);

    run(service_fn(|event| function_handler(&catalog, event))).await
}
