//! Database transport selection.
//!
//! The PostgreSQL instance is reached either over a direct TCP endpoint
//! (INSTANCE_HOST) or through a local Unix-domain socket exposed by a
//! sidecar proxy (INSTANCE_UNIX_SOCKET, e.g. `/cloudsql/project:region:instance`).
//! Selection is a pure function over an injected variable lookup so unit
//! tests never mutate the process environment.

use std::env;
use std::fs;
use std::path::PathBuf;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

use crate::config::DEFAULT_DB_PORT;
use crate::errors::{AppError, AppResult};

/// Client TLS material for a direct TCP connection.
#[derive(Debug, Clone)]
pub struct TlsPaths {
    pub root_cert: PathBuf,
    pub client_key: PathBuf,
    pub client_cert: PathBuf,
}

/// How to reach the PostgreSQL instance.
#[derive(Debug, Clone)]
pub enum DbTransport {
    /// Direct TCP endpoint, optionally TLS-encrypted.
    Tcp {
        host: String,
        port: u16,
        user: String,
        password: String,
        database: String,
        tls: Option<TlsPaths>,
    },
    /// Unix-domain socket directory managed by a local proxy.
    UnixSocket {
        socket_dir: PathBuf,
        user: String,
        password: String,
        database: String,
    },
}

impl DbTransport {
    /// Select a transport from the process environment.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Select a transport from a variable lookup.
    ///
    /// INSTANCE_HOST wins when both transports are configured. TLS is keyed
    /// on DB_ROOT_CERT; DB_KEY and DB_CERT are expected alongside it.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let user = lookup("DB_USER").unwrap_or_default();
        let password = lookup("DB_PASS").unwrap_or_default();
        let database = lookup("DB_NAME").unwrap_or_default();

        if let Some(host) = lookup("INSTANCE_HOST") {
            let port = lookup("DB_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DB_PORT);
            let tls = lookup("DB_ROOT_CERT").map(|root_cert| TlsPaths {
                root_cert: PathBuf::from(root_cert),
                client_key: PathBuf::from(lookup("DB_KEY").unwrap_or_default()),
                client_cert: PathBuf::from(lookup("DB_CERT").unwrap_or_default()),
            });

            return Ok(DbTransport::Tcp {
                host,
                port,
                user,
                password,
                database,
                tls,
            });
        }

        if let Some(socket_dir) = lookup("INSTANCE_UNIX_SOCKET") {
            return Ok(DbTransport::UnixSocket {
                socket_dir: PathBuf::from(socket_dir),
                user,
                password,
                database,
            });
        }

        Err(AppError::config(
            "one of INSTANCE_HOST or INSTANCE_UNIX_SOCKET is required",
        ))
    }

    /// Build driver connect options for this transport.
    ///
    /// TLS certificate files are read from disk here, synchronously; a
    /// missing or unreadable file fails pool construction.
    pub fn connect_options(&self) -> AppResult<PgConnectOptions> {
        match self {
            DbTransport::Tcp {
                host,
                port,
                user,
                password,
                database,
                tls,
            } => {
                let mut options = PgConnectOptions::new_without_pgpass()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .password(password)
                    .database(database);

                if let Some(tls) = tls {
                    options = options
                        .ssl_mode(PgSslMode::VerifyCa)
                        .ssl_root_cert_from_pem(fs::read(&tls.root_cert)?)
                        .ssl_client_key_from_pem(fs::read(&tls.client_key)?)
                        .ssl_client_cert_from_pem(fs::read(&tls.client_cert)?);
                }

                Ok(options)
            }
            DbTransport::UnixSocket {
                socket_dir,
                user,
                password,
                database,
            } => Ok(PgConnectOptions::new_without_pgpass()
                .socket(socket_dir)
                .username(user)
                .password(password)
                .database(database)),
        }
    }
}
