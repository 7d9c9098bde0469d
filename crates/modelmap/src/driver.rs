use crate::Result;

use modelmap_core::{Connection, Error};
use url::Url;

/// Opens a connection to the store named by `url`, chosen by scheme.
pub(crate) fn connect(url: &str) -> Result<Box<dyn Connection>> {
    let parsed =
        Url::parse(url).map_err(|err| Error::invalid_connection_url(url, err.to_string()))?;

    match parsed.scheme() {
        "postgresql" | "postgres" => connect_postgresql(&parsed),
        "sqlite" => connect_sqlite(&parsed),
        scheme => Err(Error::invalid_connection_url(
            url,
            format!("unsupported scheme `{scheme}`"),
        )),
    }
}

#[cfg(feature = "postgresql")]
fn connect_postgresql(url: &Url) -> Result<Box<dyn Connection>> {
    let driver = modelmap_driver_postgresql::PostgreSQL::connect(url.as_str())?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "postgresql"))]
fn connect_postgresql(url: &Url) -> Result<Box<dyn Connection>> {
    Err(Error::invalid_connection_url(
        url.as_str(),
        "`postgresql` feature not enabled",
    ))
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &Url) -> Result<Box<dyn Connection>> {
    let driver = modelmap_driver_sqlite::Sqlite::connect(url.as_str())?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(url: &Url) -> Result<Box<dyn Connection>> {
    Err(Error::invalid_connection_url(url.as_str(), "`sqlite` feature not enabled"))
}
