//! Fixed catalogs of configuration blocks that can be added to an agent.
//!
//! Both catalogs are closed enums; names coming from the command line are
//! resolved with `from_name` and rejected when unknown.

use serde_yaml::Value;
use std::fmt;

use crate::augment::document::ConfigDocument;
use crate::error::{Error, Result};

/// Logging handlers available to `adev augment logging`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoggingHandler {
    Console,
    Http,
    Logfile,
}

const CONSOLE_HANDLER: &str = "
class: rich.logging.RichHandler
level: INFO
";

const HTTP_HANDLER: &str = "
class: logging.handlers.HTTPHandler
formatter: standard
level: INFO
host: ${LOG_SERVER:str:localhost:8000}
url: /log/
method: POST
";

const LOGFILE_HANDLER: &str = "
class: logging.FileHandler
formatter: standard
filename: ${LOG_FILE:str:log.txt}
level: INFO
";

impl LoggingHandler {
    pub const ALL: [Self; 3] = [Self::Console, Self::Http, Self::Logfile];

    pub fn name(self) -> &'static str {
        match self {
            LoggingHandler::Console => "console",
            LoggingHandler::Http => "http",
            LoggingHandler::Logfile => "logfile",
        }
    }

    /// Looks up a handler by name.
    ///
    /// # Errors
    /// * `Error::UnknownCatalogEntry` naming `name` and the valid handlers
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|handler| handler.name() == name)
            .ok_or_else(|| Error::UnknownCatalogEntry {
                kind: "logging handler",
                name: name.to_string(),
                available: catalog_names(Self::ALL.iter().map(|h| h.name())),
            })
    }

    /// The handler's `logging_config.handlers` entry.
    pub fn definition(self) -> Result<Value> {
        let source = match self {
            LoggingHandler::Console => CONSOLE_HANDLER,
            LoggingHandler::Http => HTTP_HANDLER,
            LoggingHandler::Logfile => LOGFILE_HANDLER,
        };
        Ok(serde_yaml::from_str(source)?)
    }
}

impl fmt::Display for LoggingHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Connection overrides available to `adev augment connection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connection {
    Abci,
    Ledger,
    P2pLibp2p,
    HttpServer,
}

const ABCI_CONNECTION: &str = "
public_id: valory/abci:0.1.0
type: connection
config:
  target_skill_id: ${str:valory/abci_skill:0.1.0}
  host: ${str:localhost}
  port: ${int:26658}
  use_tendermint: ${bool:false}
";

const LEDGER_CONNECTION: &str = "
public_id: valory/ledger:0.19.0
type: connection
config:
  ledger_apis:
    ethereum:
      address: ${str:http://localhost:8545}
      chain_id: ${int:1337}
      poa_chain: ${bool:false}
      default_gas_price_strategy: ${str:eip1559}
";

const P2P_LIBP2P_CONNECTION: &str = "
public_id: valory/p2p_libp2p_client:0.1.0
type: connection
config:
  nodes:
  - uri: ${str:acn.staging.autonolas.tech:9005}
    public_key: ${str:02d3a830c9d6ea1ae91936951430dee11f4662f33118b02190693be835359a9d77}
cert_requests:
- identifier: acn
  ledger_id: ethereum
  message_format: '{public_key}'
  not_after: '2024-01-01'
  not_before: '2023-01-01'
  public_key: ${str:02d3a830c9d6ea1ae91936951430dee11f4662f33118b02190693be835359a9d77}
  save_path: .certs/acn_cosmos_9005.txt
";

const HTTP_SERVER_CONNECTION: &str = "
public_id: valory/http_server:0.22.0
type: connection
config:
  host: ${str:0.0.0.0}
  port: ${int:8000}
  target_skill_id: ${str:valory/http_skill:0.1.0}
";

impl Connection {
    pub const ALL: [Self; 4] = [Self::Abci, Self::Ledger, Self::P2pLibp2p, Self::HttpServer];

    pub fn name(self) -> &'static str {
        match self {
            Connection::Abci => "abci",
            Connection::Ledger => "ledger",
            Connection::P2pLibp2p => "p2p_libp2p",
            Connection::HttpServer => "http_server",
        }
    }

    /// Looks up a connection by name.
    ///
    /// # Errors
    /// * `Error::UnknownCatalogEntry` naming `name` and the valid connections
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|connection| connection.name() == name)
            .ok_or_else(|| Error::UnknownCatalogEntry {
                kind: "connection",
                name: name.to_string(),
                available: catalog_names(Self::ALL.iter().map(|c| c.name())),
            })
    }

    /// The component override document appended for this connection.
    pub fn skeleton(self) -> Result<ConfigDocument> {
        let source = match self {
            Connection::Abci => ABCI_CONNECTION,
            Connection::Ledger => LEDGER_CONNECTION,
            Connection::P2pLibp2p => P2P_LIBP2P_CONNECTION,
            Connection::HttpServer => HTTP_SERVER_CONNECTION,
        };
        ConfigDocument::from_yaml(source)
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn catalog_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
