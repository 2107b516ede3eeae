use aws_sdk_cloudformation::types::Output;
use std::env;

const DEFAULT_STACK_NAME: &str = "rust-product-cart";

/// Looks up an API endpoint from the outputs of the deployed stack.
///
/// The stack name comes from `STACK_NAME`.
pub async fn retrieve_api_endpoint(output_key: &str) -> String {
    let config = aws_config::load_from_env().await;
    let cloudformation_client = aws_sdk_cloudformation::Client::new(&config);
    let stack_name = env::var("STACK_NAME").unwrap_or(DEFAULT_STACK_NAME.to_string());

    let get_stacks = cloudformation_client
        .describe_stacks()
        .set_stack_name(Some(stack_name))
        .send()
        .await
        .expect("stack should be deployed");

    let outputs: Vec<Output> = get_stacks
        .stacks
        .unwrap_or_default()
        .into_iter()
        .flat_map(|stack| stack.outputs.unwrap_or_default())
        .filter(|output| output.output_key.as_deref() == Some(output_key))
        .collect();

    outputs
        .first()
        .and_then(|output| output.output_value.clone())
        .unwrap_or_else(|| panic!("stack has no '{}' output", output_key))
}
