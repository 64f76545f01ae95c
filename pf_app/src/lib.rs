use figment::{Figment, providers::Env};

pub trait ContextProvider<Config> {
    fn new(config: Config) -> impl Future<Output = Self>;
}

/// Initialize the application context with configuration from environment variables.
/// The configuration is extracted using figment.
///
/// # Arguments
/// None
///
/// # Returns
/// The application context with the configuration as specified by the
/// trait.
///
/// # Errors
/// If the configuration cannot be extracted from the environment variables.
///
pub async fn create_app_context<'a, A, Config: serde::Deserialize<'a>>()
-> Result<A, figment::Error>
where
    A: ContextProvider<Config>,
{
    tracing_subscriber::fmt()
        // allow log level to be overridden by RUST_LOG env var
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        // remove the name of the function from every log entry
        .with_target(false)
        .init();

    let figment = Figment::new().merge(Env::raw());

    let config: Config = figment.extract()?;

    let context = A::new(config).await;

    Ok(context)
}
