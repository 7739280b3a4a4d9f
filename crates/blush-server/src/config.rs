use std::path::PathBuf;

/// Runtime configuration, read once at startup and passed down explicitly —
/// no ambient globals.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:///blush.db".into());
        let host = std::env::var("BLUSH_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()?;

        Ok(Self {
            db_path: PathBuf::from(normalize_database_url(&database_url)),
            host,
            port,
        })
    }
}

/// SQLite connection strings come in two historical spellings. The legacy
/// two-slash `sqlite://path` form is rewritten to the accepted three-slash
/// form before the scheme is stripped to a plain filesystem path; bare paths
/// pass through unchanged.
pub fn normalize_database_url(url: &str) -> String {
    let url = if url.starts_with("sqlite://") && !url.starts_with("sqlite:///") {
        format!("sqlite:///{}", &url["sqlite://".len()..])
    } else {
        url.to_string()
    };

    match url.strip_prefix("sqlite:///") {
        Some(path) => path.to_string(),
        None => url,
    }
}
