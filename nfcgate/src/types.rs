// nfcgate/src/types.rs

use std::str::FromStr;

use derive_more::Display;

use crate::Error;

/// Signalling technology a reader uses to address a target family.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ModulationType {
    #[display(fmt = "iso14443a")]
    Iso14443a,
    #[display(fmt = "iso14443b")]
    Iso14443b,
    #[display(fmt = "felica")]
    Felica,
    #[display(fmt = "jewel")]
    Jewel,
}

impl FromStr for ModulationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iso14443a" | "a" => Ok(Self::Iso14443a),
            "iso14443b" | "b" => Ok(Self::Iso14443b),
            "felica" | "f" => Ok(Self::Felica),
            "jewel" => Ok(Self::Jewel),
            other => Err(Error::InvalidConfig(format!(
                "unknown modulation type '{other}'"
            ))),
        }
    }
}

/// Bit rate, in kbps.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaudRate {
    #[display(fmt = "106")]
    Baud106,
    #[display(fmt = "212")]
    Baud212,
    #[display(fmt = "424")]
    Baud424,
    #[display(fmt = "847")]
    Baud847,
}

impl FromStr for BaudRate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "106" => Ok(Self::Baud106),
            "212" => Ok(Self::Baud212),
            "424" => Ok(Self::Baud424),
            "847" => Ok(Self::Baud847),
            other => Err(Error::InvalidConfig(format!("unknown bit rate '{other}'"))),
        }
    }
}

/// Modulation descriptor: an immutable {technology, bit rate} pair.
///
/// Parses from and displays as `type:rate`, e.g. `iso14443a:106`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{}:{}", kind, baud)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modulation {
    pub kind: ModulationType,
    pub baud: BaudRate,
}

impl Modulation {
    pub const ISO14443A_106: Self = Self::new(ModulationType::Iso14443a, BaudRate::Baud106);
    pub const ISO14443B_106: Self = Self::new(ModulationType::Iso14443b, BaudRate::Baud106);
    pub const FELICA_212: Self = Self::new(ModulationType::Felica, BaudRate::Baud212);
    pub const FELICA_424: Self = Self::new(ModulationType::Felica, BaudRate::Baud424);
    pub const JEWEL_106: Self = Self::new(ModulationType::Jewel, BaudRate::Baud106);

    pub const fn new(kind: ModulationType, baud: BaudRate) -> Self {
        Self { kind, baud }
    }
}

impl FromStr for Modulation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, baud) = s.split_once(':').ok_or_else(|| {
            Error::InvalidConfig(format!("modulation '{s}' is not of the form type:rate"))
        })?;
        Ok(Self::new(kind.parse()?, baud.parse()?))
    }
}

/// Card identifier (ISO/IEC 14443-A NFCID1): 4, 7 or 10 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uid(Vec<u8>);

impl Uid {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() < 4 || bytes.len() > crate::constants::ISO14443A_MAX_UID_LEN {
            return Err(Error::InvalidLength {
                expected: crate::constants::ISO14443A_MAX_UID_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes.to_vec()))
    }
}

/// ISO/IEC 14443-B answer to request (12 bytes, starts with 0x50).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Atqb([u8; 12]);

impl Atqb {
    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /// Pseudo-unique PICC identifier (bytes 1..5)
    pub fn pupi(&self) -> [u8; 4] {
        [self.0[1], self.0[2], self.0[3], self.0[4]]
    }
}

impl TryFrom<&[u8]> for Atqb {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 12] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 12,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// FeliCa manufacture ID (8 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Idm([u8; 8]);

impl Idm {
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 8] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 8,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// FeliCa manufacture parameter (8 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pmm([u8; 8]);

impl Pmm {
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Pmm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 8] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 8,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// FeliCa system code, big-endian on the wire in a polling response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemCode(u16);

impl SystemCode {
    pub const ANY: Self = Self(0xffff);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }
}
