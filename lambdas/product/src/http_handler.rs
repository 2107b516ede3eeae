use lambda_http::{Error, IntoResponse, Request, Response};
use serde_json::json;
use shared::catalog::{ProductCatalog, ProductUpdatedResponse};
use shared::codec::JsonItem;
use shared::core::{ProductRepository, PRODUCT_ID};
use shared::dispatch::{request_body, required_param, Operation, Route};
use shared::error::HandlerError;
use shared::policy::ErrorPolicy;
use shared::utils::ok_response;

const ROUTE: Route = Route {
    read_params: &[PRODUCT_ID],
    delete_params: &[PRODUCT_ID],
    delete_needs_values: false,
};

/// Same operations as the catalog handler, but every outcome is a 200.
#[tracing::instrument(skip(catalog, event))]
pub(crate) async fn function_handler<R: ProductRepository>(
    catalog: &ProductCatalog<R>,
    event: Request,
) -> Result<impl IntoResponse, Error> {
    tracing::info!("Received event: {:?}", event);

    match handle(catalog, &event).await {
        Ok(response) => Ok(response),
        Err(e) => ErrorPolicy::Lenient.respond(&e),
    }
}

async fn handle<R: ProductRepository>(
    catalog: &ProductCatalog<R>,
    event: &Request,
) -> Result<Response<String>, HandlerError> {
    match Operation::resolve(event, &ROUTE) {
        Operation::Read => {
            let product = catalog
                .get_product(required_param(event, PRODUCT_ID)?)
                .await?;
            ok_response(&JsonItem(&product))
        }
        Operation::Write => {
            let body = request_body(event).ok_or(HandlerError::Unsupported)?;
            let updated = catalog.update_product(body).await?;
            ok_response(&ProductUpdatedResponse::new(&updated))
        }
        Operation::Delete => {
            catalog
                .delete_product(required_param(event, PRODUCT_ID)?)
                .await?;
            ok_response(&json!({ "message": "Product deleted successfully" }))
        }
        Operation::Unsupported => Err(HandlerError::Unsupported),
    }
}
