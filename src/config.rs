use anyhow::Context;

pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let _ = dotenv::dotenv();

        let database_url = dotenv::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let port = match dotenv::var("PORT") {
            Ok(port) => port.parse().context("PORT is not a valid port number")?,
            Err(_) => 8080,
        };

        Ok(Self { database_url, port })
    }
}
