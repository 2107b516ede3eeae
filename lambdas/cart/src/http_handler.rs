use lambda_http::{Error, IntoResponse, Request, Response};
use serde_json::json;
use shared::cart::ShoppingCart;
use shared::codec::JsonItem;
use shared::core::{CartRepository, ITEM_ID, USER_ID};
use shared::dispatch::{request_body, required_param, Operation, Route};
use shared::error::HandlerError;
use shared::policy::ErrorPolicy;
use shared::utils::ok_response;

const ROUTE: Route = Route {
    read_params: &[USER_ID],
    delete_params: &[USER_ID, ITEM_ID],
    delete_needs_values: true,
};

#[tracing::instrument(skip(cart, event))]
pub(crate) async fn function_handler<R: CartRepository>(
    cart: &ShoppingCart<R>,
    event: Request,
) -> Result<impl IntoResponse, Error> {
    tracing::info!("Received event: {:?}", event);

    match handle(cart, &event).await {
        Ok(response) => Ok(response),
        Err(e) => ErrorPolicy::Conventional.respond(&e),
    }
}

async fn handle<R: CartRepository>(
    cart: &ShoppingCart<R>,
    event: &Request,
) -> Result<Response<String>, HandlerError> {
    match Operation::resolve(event, &ROUTE) {
        Operation::Read => {
            let items = cart.get_cart(required_param(event, USER_ID)?).await?;
            let items: Vec<JsonItem> = items.iter().map(JsonItem).collect();
            ok_response(&items)
        }
        Operation::Write => {
            let body = request_body(event).ok_or(HandlerError::Unsupported)?;
            cart.add_to_cart(body).await?;
            ok_response(&json!({ "message": "Item added to cart" }))
        }
        Operation::Delete => {
            cart.remove_from_cart(
                required_param(event, USER_ID)?,
                required_param(event, ITEM_ID)?,
            )
            .await?;
            ok_response(&json!({ "message": "Item removed" }))
        }
        Operation::Unsupported => Err(HandlerError::Unsupported),
    }
}
