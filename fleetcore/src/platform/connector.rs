/// The database url for a backend, and whether the database may be
/// created if it does not yet exist.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConnectorOption {
    url: String,
    create_db: bool,
}

impl ConnectorOption {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            create_db: false,
        }
    }

    pub fn create_db(mut self, val: bool) -> Self {
        self.create_db = val;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn into_url(self) -> String {
        self.url
    }

    pub fn is_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// In-memory databases always exist, so there is never anything to
    /// create for them.
    pub fn should_create_db(&self) -> bool {
        self.create_db && !self.is_memory()
    }
}

impl From<String> for ConnectorOption {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}

impl From<&str> for ConnectorOption {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<&String> for ConnectorOption {
    fn from(url: &String) -> Self {
        Self::new(url.as_str())
    }
}
