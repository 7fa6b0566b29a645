use eyre::Context as _;

const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct AppConfig {
    /// Trusted footer markup. `None` when unset or empty.
    pub(crate) copyrights: Option<String>,
    pub(crate) port: u16,
}

impl AppConfig {
    pub(crate) fn from_env() -> eyre::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let copyrights = lookup("COPYRIGHTS").filter(|c| !c.is_empty());

        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {port:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { copyrights, port })
    }
}
