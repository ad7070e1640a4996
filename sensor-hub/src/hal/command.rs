use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{HalError, HalResult};

/// Power state a sensor can be switched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerMode {
    Wakeup,
    Sleep,
}

impl PowerMode {
    pub const WAKEUP: u32 = 0;
    pub const SLEEP: u32 = 1;
}

impl TryFrom<u32> for PowerMode {
    type Error = HalError;

    fn try_from(value: u32) -> HalResult<Self> {
        match value {
            Self::WAKEUP => Ok(PowerMode::Wakeup),
            Self::SLEEP => Ok(PowerMode::Sleep),
            other => Err(HalError::not_supported(format!("power mode {}", other))),
        }
    }
}

/// Acquisition mode of a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingMode {
    #[default]
    Default,
    Polling,
    Interrupt,
}

impl TryFrom<u32> for OperatingMode {
    type Error = HalError;

    fn try_from(value: u32) -> HalResult<Self> {
        match value {
            0 => Ok(OperatingMode::Default),
            1 => Ok(OperatingMode::Polling),
            2 => Ok(OperatingMode::Interrupt),
            other => Err(HalError::not_supported(format!("operating mode {}", other))),
        }
    }
}

/// Measurement range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Range {
    #[default]
    Default,
    Min,
    Medium,
    Max,
}

impl TryFrom<u32> for Range {
    type Error = HalError;

    fn try_from(value: u32) -> HalResult<Self> {
        match value {
            0 => Ok(Range::Default),
            1 => Ok(Range::Min),
            2 => Ok(Range::Medium),
            3 => Ok(Range::Max),
            other => Err(HalError::not_supported(format!("range {}", other))),
        }
    }
}

/// Commands accepted by the control dispatcher of every family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    SetMode(OperatingMode),
    SetRange(Range),
    /// Output data rate in Hz.
    SetOdr(u32),
    SetPower(PowerMode),
    SelfTest,
}

impl Command {
    pub const SET_MODE: u32 = 0;
    pub const SET_RANGE: u32 = 1;
    pub const SET_ODR: u32 = 2;
    pub const SET_POWER: u32 = 3;
    pub const SELF_TEST: u32 = 4;

    /// Build a command from its numeric kind and argument.
    ///
    /// Unknown kinds and argument values that name no mode are
    /// `NotSupported`, the same outcome as sending an unsupported command.
    pub fn decode(kind: u32, arg: u32) -> HalResult<Self> {
        match kind {
            Self::SET_MODE => Ok(Command::SetMode(OperatingMode::try_from(arg)?)),
            Self::SET_RANGE => Ok(Command::SetRange(Range::try_from(arg)?)),
            Self::SET_ODR => Ok(Command::SetOdr(arg)),
            Self::SET_POWER => Ok(Command::SetPower(PowerMode::try_from(arg)?)),
            Self::SELF_TEST => Ok(Command::SelfTest),
            other => Err(HalError::not_supported(format!("command {}", other))),
        }
    }

    pub fn kind(&self) -> u32 {
        match self {
            Command::SetMode(_) => Self::SET_MODE,
            Command::SetRange(_) => Self::SET_RANGE,
            Command::SetOdr(_) => Self::SET_ODR,
            Command::SetPower(_) => Self::SET_POWER,
            Command::SelfTest => Self::SELF_TEST,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SetMode(mode) => write!(f, "set mode {:?}", mode),
            Command::SetRange(range) => write!(f, "set range {:?}", range),
            Command::SetOdr(hz) => write!(f, "set odr {}Hz", hz),
            Command::SetPower(mode) => write!(f, "set power {:?}", mode),
            Command::SelfTest => write!(f, "self test"),
        }
    }
}
