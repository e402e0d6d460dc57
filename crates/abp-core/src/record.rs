//! Bot metadata as published by the arena API.
//!
//! Race and runtime-type wire codes are validated here, at the deserialize
//! boundary. Everything downstream works with closed enums, so the lookup
//! tables in [`crate::launch`] are exhaustive matches.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ProvisionError;

/// Race a bot queues as on the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Race {
    Protoss,
    Terran,
    Zerg,
    Random,
}

impl Race {
    /// Parse an arena wire code (`P`/`T`/`Z`/`R`).
    pub fn parse(code: &str) -> Result<Self, ProvisionError> {
        match code {
            "P" => Ok(Race::Protoss),
            "T" => Ok(Race::Terran),
            "Z" => Ok(Race::Zerg),
            "R" => Ok(Race::Random),
            _ => Err(ProvisionError::Lookup {
                what: "race",
                code: code.to_string(),
            }),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Race::Protoss => "P",
            Race::Terran => "T",
            Race::Zerg => "Z",
            Race::Random => "R",
        }
    }

    /// Human-readable name used in the launch descriptor.
    pub fn name(self) -> &'static str {
        match self {
            Race::Protoss => "Protoss",
            Race::Terran => "Terran",
            Race::Zerg => "Zerg",
            Race::Random => "Random",
        }
    }
}

/// Language/VM/OS-ABI a bot's executable targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeType {
    Python,
    CppWin32,
    CppLinux,
    DotNetCore,
    Java,
    NodeJs,
}

impl RuntimeType {
    /// Parse an arena wire code (`python`, `cppwin32`, ...).
    pub fn parse(code: &str) -> Result<Self, ProvisionError> {
        match code {
            "python" => Ok(RuntimeType::Python),
            "cppwin32" => Ok(RuntimeType::CppWin32),
            "cpplinux" => Ok(RuntimeType::CppLinux),
            "dotnetcore" => Ok(RuntimeType::DotNetCore),
            "java" => Ok(RuntimeType::Java),
            "nodejs" => Ok(RuntimeType::NodeJs),
            _ => Err(ProvisionError::Lookup {
                what: "runtime type",
                code: code.to_string(),
            }),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            RuntimeType::Python => "python",
            RuntimeType::CppWin32 => "cppwin32",
            RuntimeType::CppLinux => "cpplinux",
            RuntimeType::DotNetCore => "dotnetcore",
            RuntimeType::Java => "java",
            RuntimeType::NodeJs => "nodejs",
        }
    }

    /// Runtime family label the process launcher keys on.
    pub fn family(self) -> &'static str {
        match self {
            RuntimeType::Python => "Python",
            RuntimeType::CppWin32 => "Wine",
            RuntimeType::CppLinux => "BinaryCpp",
            RuntimeType::DotNetCore => "DotNetCore",
            RuntimeType::Java => "Java",
            RuntimeType::NodeJs => "NodeJS",
        }
    }

    /// Entry-point filename inside the bot's install root.
    pub fn launch_filename(self, bot_name: &str) -> String {
        match self {
            RuntimeType::Python => "run.py".to_string(),
            RuntimeType::CppWin32 => format!("{}.exe", bot_name),
            RuntimeType::CppLinux => bot_name.to_string(),
            RuntimeType::DotNetCore => format!("{}.dll", bot_name),
            RuntimeType::Java => format!("{}.jar", bot_name),
            // TODO: confirm the node entry point with the arena backend
            // owners; `main.jar` matches the live ladder table but reads
            // like a leftover from the java row.
            RuntimeType::NodeJs => "main.jar".to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for Race {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Race::parse(&code).map_err(D::Error::custom)
    }
}

impl Serialize for Race {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for RuntimeType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        RuntimeType::parse(&code).map_err(D::Error::custom)
    }
}

impl Serialize for RuntimeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// One bot's provisioning metadata, in the arena API's field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotRecord {
    pub id: i64,
    pub name: String,
    pub game_display_id: String,
    /// URL of the primary bundle (executable + supporting files).
    pub bot_zip: String,
    /// Lowercase hex MD5 of the primary bundle.
    pub bot_zip_md5hash: String,
    /// Optional private-data bundle URL; `None` means nothing to install.
    #[serde(default)]
    pub bot_data: Option<String>,
    #[serde(default)]
    pub bot_data_md5hash: Option<String>,
    pub plays_race: Race,
    #[serde(rename = "type")]
    pub runtime: RuntimeType,
}
