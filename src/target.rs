use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TargetError {
    #[error("invalid target {0:?}")]
    Target(String),
    #[error("invalid target flags {0:?}")]
    Flags(String),
}

/// A naming scheme for Minecraft code symbols.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MappingSystem {
    Srg,
    Mcp,
    Spigot,
    Obf,
}

impl MappingSystem {
    fn id(self) -> &'static str {
        match self {
            MappingSystem::Srg => "srg",
            MappingSystem::Mcp => "mcp",
            MappingSystem::Spigot => "spigot",
            MappingSystem::Obf => "obf",
        }
    }

    fn from_id(id: &str) -> Option<MappingSystem> {
        match id {
            "srg" => Some(MappingSystem::Srg),
            "mcp" => Some(MappingSystem::Mcp),
            "spigot" => Some(MappingSystem::Spigot),
            "obf" => Some(MappingSystem::Obf),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TargetFilter {
    Classes,
    Members,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TargetFlags {
    pub filter: Option<TargetFilter>,
    pub only_obf: bool,
}

impl FromStr for TargetFlags {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = TargetFlags::default();
        if s.is_empty() {
            return Ok(flags);
        }
        let invalid = || TargetError::Flags(s.to_string());

        for flag in s.split('-') {
            match flag {
                "classes" | "members" => {
                    if flags.filter.is_some() {
                        return Err(invalid());
                    }
                    flags.filter = Some(if flag == "classes" {
                        TargetFilter::Classes
                    } else {
                        TargetFilter::Members
                    });
                }
                "onlyobf" => {
                    if flags.only_obf {
                        return Err(invalid());
                    }
                    flags.only_obf = true;
                }
                _ => return Err(invalid()),
            }
        }

        Ok(flags)
    }
}

impl fmt::Display for TargetFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.filter {
            None => {}
            Some(TargetFilter::Classes) => f.write_str("classes")?,
            Some(TargetFilter::Members) => f.write_str("members")?,
        }
        if self.only_obf {
            if self.filter.is_some() {
                f.write_str("-")?;
            }
            f.write_str("onlyobf")?;
        }
        Ok(())
    }
}

/// A conversion direction between two naming schemes, such as `obf2mcp` or
/// `spigot2srg-onlyobf`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TargetMapping {
    pub original: MappingSystem,
    pub renamed: MappingSystem,
    pub flags: TargetFlags,
}

impl TargetMapping {
    pub fn new(original: MappingSystem, renamed: MappingSystem) -> Self {
        TargetMapping {
            original,
            renamed,
            flags: TargetFlags::default(),
        }
    }

    pub fn with_flags(mut self, flags: TargetFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Whether the server can only compute this target with an MCP version.
    pub fn needs_mcp_version(&self) -> bool {
        self.original == MappingSystem::Mcp || self.renamed == MappingSystem::Mcp
    }
}

impl FromStr for TargetMapping {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TargetError::Target(s.to_string());
        let (systems, flags) = match s.split_once('-') {
            Some((_, "")) => return Err(invalid()),
            Some((systems, flags)) => (systems, flags.parse()?),
            None => (s, TargetFlags::default()),
        };
        let (original, renamed) = systems.split_once('2').ok_or_else(invalid)?;

        Ok(TargetMapping {
            original: MappingSystem::from_id(original).ok_or_else(invalid)?,
            renamed: MappingSystem::from_id(renamed).ok_or_else(invalid)?,
            flags,
        })
    }
}

impl fmt::Display for TargetMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}2{}", self.original.id(), self.renamed.id())?;
        if self.flags != TargetFlags::default() {
            write!(f, "-{}", self.flags)?;
        }
        Ok(())
    }
}

impl Serialize for TargetMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TargetMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
