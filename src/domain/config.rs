//! Radio profiles
//!
//! A RadioProfile is one configured transceiver: the identifier the operator
//! picks it by plus whatever is needed to reach it over its transport.
//! The ProfileCollection is the ordered list stored in the config file.

use serde::{Deserialize, Serialize};

use super::{RigError, RigResult, Route};

/// How a radio is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionType {
    /// CAT over a TCP socket (e.g. a TS-890S on the LAN)
    #[serde(rename = "TCP", alias = "tcp")]
    Tcp,
    /// CAT over a local serial device
    #[serde(rename = "Serial", alias = "serial")]
    Serial,
    /// Hamlib's `rigctl` command-line tool
    #[serde(rename = "rigctl", alias = "RigctlProcess")]
    Rigctl,
}

impl std::fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConnectionType::Tcp => "TCP",
            ConnectionType::Serial => "Serial",
            ConnectionType::Rigctl => "rigctl",
        };
        f.write_str(name)
    }
}

/// A saved radio profile.
///
/// Fields that belong to another connection type are kept as-is and never
/// looked at, so they survive a load/save round trip untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioProfile {
    /// Selection key (e.g. "TS-890S Shack")
    pub rig_id: String,
    pub conn_type: ConnectionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_host: Option<String>,
    /// Kept as text, exactly as entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_port: Option<String>,
    /// Serial device path (e.g. /dev/ttyUSB0, COM3)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_port: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baud_rate: Option<u32>,
    /// Informational only; the frequency sent is always the caller's
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rigctl_freq: Option<String>,
    /// Hamlib model number passed to `rigctl -m`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rigctl_model: Option<u32>,
}

impl RadioProfile {
    fn bare(rig_id: &str, conn_type: ConnectionType) -> Self {
        Self {
            rig_id: rig_id.to_string(),
            conn_type,
            tcp_host: None,
            tcp_port: None,
            serial_port: None,
            baud_rate: None,
            rigctl_freq: None,
            rigctl_model: None,
        }
    }

    pub fn tcp(rig_id: &str, host: &str, port: &str) -> Self {
        Self {
            tcp_host: Some(host.to_string()),
            tcp_port: Some(port.to_string()),
            ..Self::bare(rig_id, ConnectionType::Tcp)
        }
    }

    pub fn serial(rig_id: &str, port: &str, baud_rate: u32) -> Self {
        Self {
            serial_port: Some(port.to_string()),
            baud_rate: Some(baud_rate),
            ..Self::bare(rig_id, ConnectionType::Serial)
        }
    }

    pub fn rigctl(rig_id: &str, model: Option<u32>, freq: Option<&str>) -> Self {
        Self {
            rigctl_model: model,
            rigctl_freq: freq.map(str::to_string),
            ..Self::bare(rig_id, ConnectionType::Rigctl)
        }
    }

    /// Resolve the transport this profile is reached through.
    ///
    /// Fails with `RigError::Selection` when a field the connection type
    /// needs is missing or empty.
    pub fn route(&self) -> RigResult<Route<'_>> {
        match self.conn_type {
            ConnectionType::Tcp => Ok(Route::Tcp {
                host: self.required(&self.tcp_host, "tcp_host")?,
                port: self.required(&self.tcp_port, "tcp_port")?,
            }),
            ConnectionType::Serial => {
                let port = self.required(&self.serial_port, "serial_port")?;
                match self.baud_rate {
                    Some(baud_rate) if baud_rate > 0 => Ok(Route::Serial { port, baud_rate }),
                    _ => Err(self.missing("baud_rate")),
                }
            }
            ConnectionType::Rigctl => Ok(Route::Rigctl {
                model: self.rigctl_model,
            }),
        }
    }

    /// Human-readable transport target, for listings
    pub fn target(&self) -> String {
        match self.route() {
            Ok(Route::Tcp { host, port }) => format!("{host}:{port}"),
            Ok(Route::Serial { port, baud_rate }) => format!("{port} @ {baud_rate} baud"),
            Ok(Route::Rigctl { model: Some(m) }) => format!("rigctl model {m}"),
            Ok(Route::Rigctl { model: None }) => "rigctl default model".to_string(),
            Err(e) => format!("unroutable ({e})"),
        }
    }

    fn required<'a>(&self, field: &'a Option<String>, name: &str) -> RigResult<&'a str> {
        match field.as_deref() {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(self.missing(name)),
        }
    }

    fn missing(&self, field: &str) -> RigError {
        RigError::Selection(format!(
            "radio '{}' ({}) is missing {field}",
            self.rig_id, self.conn_type
        ))
    }
}

/// Ordered list of radio profiles, as stored in the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCollection {
    #[serde(default)]
    radios: Vec<RadioProfile>,
}

impl ProfileCollection {
    pub fn new(radios: Vec<RadioProfile>) -> Self {
        Self { radios }
    }

    /// First profile whose `rig_id` matches, in collection order
    pub fn find(&self, rig_id: &str) -> Option<&RadioProfile> {
        self.radios.iter().find(|r| r.rig_id == rig_id)
    }

    /// Append a profile to the end of the collection, as-is.
    ///
    /// Ids are not checked here; duplicates are allowed and `find` returns
    /// the first.
    pub fn append(&mut self, profile: RadioProfile) {
        self.radios.push(profile);
    }

    pub fn radios(&self) -> &[RadioProfile] {
        &self.radios
    }

    pub fn len(&self) -> usize {
        self.radios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radios.is_empty()
    }
}
