use super::{Builder, Db};

use sitestore_core::{err, Error, Result};
use url::Url;

impl Builder {
    /// Connects to the store named by `url`, dispatching on its scheme.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        let parsed = Url::parse(url).map_err(Error::driver)?;

        match parsed.scheme() {
            "sqlite" => self.connect_sqlite(url).await,
            scheme => Err(err!("unsupported database; scheme={scheme}; url={url}")),
        }
    }

    #[cfg(feature = "sqlite")]
    async fn connect_sqlite(&mut self, url: &str) -> Result<Db> {
        self.build(sitestore_driver_sqlite::Sqlite::new(url)?).await
    }

    #[cfg(not(feature = "sqlite"))]
    async fn connect_sqlite(&mut self, _url: &str) -> Result<Db> {
        Err(err!("`sqlite` feature not enabled"))
    }
}
