//! Chain-native address checks and conversion to the 32-byte universal
//! address format.

use crate::constants::{Chain, ChainFamily};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

static EVM_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("valid EVM address pattern"));

// Base58 alphabet: no 0, O, I or l.
static SOLANA_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{32,44}$").expect("valid base58 address pattern")
});

const UNIVERSAL_ADDRESS_LEN: usize = 32;

#[derive(Error, Debug, PartialEq)]
pub enum AddressError {
    #[error("Failed to convert address: {address} is not a valid {chain} address")]
    InvalidFormat { address: String, chain: Chain },
    #[error("Failed to convert address: {0}")]
    Decode(String),
    #[error("Failed to convert address: expected {UNIVERSAL_ADDRESS_LEN} bytes, got {0}")]
    Length(usize),
}

/// A chain-independent 32-byte address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniversalAddress([u8; UNIVERSAL_ADDRESS_LEN]);

impl UniversalAddress {
    /// Right-aligns `bytes` in 32 bytes, zero padded on the left.
    pub fn from_native(bytes: &[u8]) -> Result<Self, AddressError> {
        if bytes.len() > UNIVERSAL_ADDRESS_LEN {
            return Err(AddressError::Length(bytes.len()));
        }
        let mut out = [0u8; UNIVERSAL_ADDRESS_LEN];
        out[UNIVERSAL_ADDRESS_LEN - bytes.len()..].copy_from_slice(bytes);
        Ok(Self(out))
    }

    pub fn as_bytes(&self) -> &[u8; UNIVERSAL_ADDRESS_LEN] {
        &self.0
    }
}

impl fmt::Display for UniversalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl ChainFamily {
    pub fn is_valid_format(self, address: &str) -> bool {
        match self {
            ChainFamily::Evm => EVM_ADDRESS.is_match(address),
            ChainFamily::Solana => SOLANA_ADDRESS.is_match(address),
        }
    }

    /// Decodes a native address that already passed [`Self::is_valid_format`].
    pub fn to_universal(self, address: &str) -> Result<UniversalAddress, AddressError> {
        match self {
            ChainFamily::Evm => {
                let bytes = hex::decode(&address[2..]).map_err(|e| AddressError::Decode(e.to_string()))?;
                UniversalAddress::from_native(&bytes)
            }
            ChainFamily::Solana => {
                let bytes = bs58::decode(address)
                    .into_vec()
                    .map_err(|e| AddressError::Decode(e.to_string()))?;
                // Public keys are exactly 32 bytes, never padded.
                if bytes.len() != UNIVERSAL_ADDRESS_LEN {
                    return Err(AddressError::Length(bytes.len()));
                }
                UniversalAddress::from_native(&bytes)
            }
        }
    }

    /// Explanation and example printed when an address fails the format check.
    pub fn format_hint(self) -> [&'static str; 2] {
        match self {
            ChainFamily::Evm => [
                "EVM addresses must start with 0x followed by 40 hexadecimal characters.",
                "Example: 0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
            ],
            ChainFamily::Solana => [
                "Solana addresses are base58 encoded and typically 32-44 characters long.",
                "Example: So11111111111111111111111111111111111111112",
            ],
        }
    }

    /// Short form used by interactive validation.
    pub fn invalid_message(self) -> &'static str {
        match self {
            ChainFamily::Evm => "Invalid EVM address. Must start with 0x followed by 40 hex characters.",
            ChainFamily::Solana => "Invalid Solana address. Must be base58 encoded, 32-44 characters.",
        }
    }
}

/// Address checks and conversion used by commands and the wizard.
pub trait AddressConverter {
    fn is_valid_format(&self, address: &str, chain: Chain) -> bool;

    /// Converts a native address to its universal form, `0x` + 64 hex digits.
    fn to_canonical(&self, address: &str, chain: Chain) -> Result<String, AddressError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UniversalAddressConverter;

impl AddressConverter for UniversalAddressConverter {
    fn is_valid_format(&self, address: &str, chain: Chain) -> bool {
        chain.family().is_valid_format(address)
    }

    fn to_canonical(&self, address: &str, chain: Chain) -> Result<String, AddressError> {
        let family = chain.family();
        if !family.is_valid_format(address) {
            return Err(AddressError::InvalidFormat {
                address: address.to_string(),
                chain,
            });
        }
        let universal = family.to_universal(address)?;
        debug!(%chain, address, %universal, "converted address");
        Ok(universal.to_string())
    }
}
