use lambda_http::Response;

pub type HttpLambdaResponse = Result<Response<String>, Response<String>>;

// This macro is intended for lambdas that directly interact with the ApiGateway
// (internally named 'http lambdas'). It is used to reduce boilerplate, to
// preserve state between executions and to take advantage of the `?` operator.
//
// When using this macro, an error can be returned as a HTTP response using the
// `?` operator. This allows us to return errors in a more "rusty" way and
// reduce lines of code that handle the error cases.
//
// This macro supports request validation as a third parameter. Validations run
// before the business logic is executed, with the signature
// `Fn(&Request) -> Result<(), Response<String>>`.
//
// Example usage:
// ```
// http_lambda_main!(
// { .. State },
// main_fn,
// [
//   validation_1,
//   validation_2,
//   ..
//   validation_n
// ]
// )
#[macro_export]
macro_rules! http_lambda_main {
    ($persisted_block:block, $handler: ident) => {
        http_lambda_main!($persisted_block, $handler, []);
    };
    ($persisted_block:block, $handler: ident, [$($validation:ident),*]) => {
        #[tokio::main]
        async fn main() -> Result<(), Error> {
            use lambda_http::{Body, Response};
            use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
            use tracing_log::LogTracer;
            use tracing_subscriber::{filter::LevelFilter, prelude::*};

            LogTracer::init()?;

            let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
            let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stdout());
            let bunyan_formatting_layer =
                BunyanFormattingLayer::new(app_name.to_string(), non_blocking_writer);

            tracing_subscriber::registry()
                .with(LevelFilter::INFO)
                .with(JsonStorageLayer)
                .with(bunyan_formatting_layer)
                .init();

            let persisted = { $persisted_block };

            let service = |request: Request| async {
                let payload = match request.body() {
                    Body::Text(body) => body.clone(),
                    _ => "No Payload".to_owned(),
                };
                tracing::info!(payload = ?payload, "Execution started");

                $(
                if let Err(response) = $validation(&request) {
                    return Ok(response);
                }
                )*

                let response: Result<Response<String>, Error> =
                    match $handler(request, &persisted).await {
                        Ok(response) => Ok(response),
                        Err(response) => Ok(response),
                    };

                response
            };

            run(service_fn(service)).await
        }
    };
}
