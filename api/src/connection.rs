use serde::Deserialize;
use serde::Serialize;

/// The subject of a tip: someone the user knows and wants to send a tip to.
///
/// Call sites pass this around as `Option<Connection>`. `None` means the tip
/// goes to the project itself.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Connection {
    display_name: String,
    address: String,
}

impl Connection {
    pub fn new(display_name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            address: address.into(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The receiving address a tip to this connection is paid to.
    pub fn address(&self) -> &str {
        &self.address
    }
}
