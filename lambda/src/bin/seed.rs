// Lambda entry point for the seed function

use lambda_runtime::{Error, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    storefront::setup_logging();
    run(service_fn(storefront::api::seed::handler)).await
}
