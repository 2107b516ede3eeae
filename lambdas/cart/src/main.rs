use http_handler::function_handler;
use lambda_http::{run, service_fn, tracing, Error};
use shared::adapters::{dynamodb_client, DynamoDbCartRepository};
use shared::cart::ShoppingCart;
use shared::configuration::Configuration;

mod http_handler;

const DEFAULT_TABLE_NAME: &str = "ShoppingCart";

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    let configuration = Configuration::load(DEFAULT_TABLE_NAME)?;
    let dynamodb_client = dynamodb_client(&configuration).await;

    let cart_repo = DynamoDbCartRepository::new(configuration.table_name, dynamodb_client);
    let cart = ShoppingCart::new(cart_repo);

    run(service_fn(|event| function_handler(&cart, event))).await
}
