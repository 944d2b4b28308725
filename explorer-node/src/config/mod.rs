pub mod settings;

use dotenvy::dotenv;
use tokio::sync::OnceCell;

use settings::{ExplorerSettings, ServerConfig};

pub const EXPLORER_ENV_PREFIX: &str = "EXPLORER_";

#[derive(Debug, Clone, Default)]
pub struct Config {
    server: ServerConfig,
    explorer: ExplorerSettings,
}

impl Config {
    /// Reads the configuration from the process environment, after loading
    /// a `.env` file if one exists. Missing variables take their defaults,
    /// unparsable ones are an error.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenv().ok();

        let server = envy::from_env::<ServerConfig>()?;
        let explorer = envy::prefixed(EXPLORER_ENV_PREFIX).from_env::<ExplorerSettings>()?;

        Ok(Self { server, explorer })
    }

    /// Same as [`Config::from_env`] but over an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: Vec<(String, String)> = vars.into_iter().collect();
        let server = envy::from_iter::<_, ServerConfig>(vars.clone())?;
        let explorer = envy::prefixed(EXPLORER_ENV_PREFIX).from_iter::<_, ExplorerSettings>(vars)?;
        Ok(Self { server, explorer })
    }

    pub fn server_host(&self) -> &str {
        &self.server.host
    }

    pub fn server_port(&self) -> u16 {
        self.server.port
    }

    pub const fn explorer(&self) -> &ExplorerSettings {
        &self.explorer
    }
}

pub static CONFIG: OnceCell<Config> = OnceCell::const_new();

async fn init_config() -> Result<Config, envy::Error> {
    Config::from_env()
}

pub async fn config() -> Result<&'static Config, envy::Error> {
    CONFIG.get_or_try_init(init_config).await
}
