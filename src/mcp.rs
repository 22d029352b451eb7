use std::{fmt, str::FromStr};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("invalid MCP version {0:?}, expected <channel>[_nodoc]_<number>")]
pub struct InvalidMcpVersion(pub String);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum McpChannel {
    Snapshot,
    Stable,
}

impl McpChannel {
    fn id(self) -> &'static str {
        match self {
            McpChannel::Snapshot => "snapshot",
            McpChannel::Stable => "stable",
        }
    }
}

/// An MCP release such as `snapshot_nodoc_20180925` or `stable_39`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct McpVersionSpec {
    pub channel: McpChannel,
    pub value: u32,
    pub nodoc: bool,
}

impl FromStr for McpVersionSpec {
    type Err = InvalidMcpVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidMcpVersion(s.to_string());
        let mut parts = s.split('_');

        let channel = match parts.next() {
            Some("snapshot") => McpChannel::Snapshot,
            Some("stable") => McpChannel::Stable,
            _ => return Err(invalid()),
        };
        let (nodoc, value) = match (parts.next(), parts.next()) {
            (Some("nodoc"), Some(value)) => (true, value),
            (Some(value), None) => (false, value),
            _ => return Err(invalid()),
        };
        if parts.next().is_some() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value = value.parse().map_err(|_| invalid())?;

        Ok(McpVersionSpec {
            channel,
            value,
            nodoc,
        })
    }
}

impl fmt::Display for McpVersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.channel.id())?;
        if self.nodoc {
            f.write_str("_nodoc")?;
        }
        write!(f, "_{}", self.value)
    }
}
