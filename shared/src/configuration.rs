use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Configuration {
    pub table_name: String,
    pub dynamodb_endpoint: Option<String>,
}

impl Configuration {
    /// Loads `TABLE_NAME` and `DYNAMODB_ENDPOINT` from the environment, falling
    /// back to the handler's own table.
    pub fn load(default_table_name: &str) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::default("table_name", default_table_name))
            .merge(Env::raw().only(&["TABLE_NAME", "DYNAMODB_ENDPOINT"]))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use crate::configuration::Configuration;

    #[test]
    fn when_table_name_set_should_override_default() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("TABLE_NAME", "products-test-table");

            let config = Configuration::load("Products")?;

            assert_eq!(config.table_name, "products-test-table");
            assert_eq!(config.dynamodb_endpoint, None);

            Ok(())
        });
    }

    #[test]
    fn when_nothing_set_should_use_default_table() {
        figment::Jail::expect_with(|_jail| {
            let config = Configuration::load("ShoppingCart")?;

            assert_eq!(config.table_name, "ShoppingCart");

            Ok(())
        });
    }

    #[test]
    fn when_endpoint_set_should_load_it() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("DYNAMODB_ENDPOINT", "http://localhost:8000");

            let config = Configuration::load("Products")?;

            assert_eq!(
                config.dynamodb_endpoint.as_deref(),
                Some("http://localhost:8000")
            );

            Ok(())
        });
    }
}
