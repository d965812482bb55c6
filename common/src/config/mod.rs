pub mod aws_client_config;

use serde::de::DeserializeOwned;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the test configuration for the project. This is used
    /// for unit and integration tests.
    ///
    /// This will load the following files, in order:
    ///  - OS environment variables
    ///  - .env.test.local
    ///  - .env.test
    ///  - .env.local
    ///  - .env
    ///
    /// Variables are not overriden, the first file to contain
    /// a definition for a variable is the one that will be set.
    pub fn load_test<TConfig>() -> TConfig
    where
        TConfig: DeserializeOwned,
    {
        dotenv::from_filename(".env.test.local").ok();
        dotenv::from_filename(".env.test").ok();
        ConfigLoader::load::<TConfig>()
    }

    /// Loads the default configuration for the project. This is the
    /// configuration used in production.
    ///
    /// This will load the following files, in order:
    /// - OS environment variables
    /// - .env.local
    /// - .env
    ///
    /// If a variable is set in the OS environment, it will not be
    /// overriden by any file.
    pub fn load_default<TConfig>() -> TConfig
    where
        TConfig: DeserializeOwned,
    {
        ConfigLoader::load::<TConfig>()
    }

    fn load<TConfig>() -> TConfig
    where
        TConfig: DeserializeOwned,
    {
        dotenv::from_filename(".env.local").ok();
        dotenv::from_filename(".env").ok();

        envy::from_env::<TConfig>().expect("Could not load configuration")
    }
}
