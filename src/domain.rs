//! Pool domains.
//!
//! Every coin pool on MiningPoolHub lives under its own sub-domain
//! (`ethereum.miningpoolhub.com`, `zcash.miningpoolhub.com`, ...). The
//! multi-coin endpoints live on the bare host, represented by [`MphDomain::Root`].

use std::fmt;
use std::str::FromStr;

/// Known MiningPoolHub sub-domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MphDomain {
    #[default]
    Root,
    Adzcoin,
    AuroracoinQubit,
    Bitcoin,
    BitcoinCash,
    BitcoinGold,
    Dash,
    DigibyteGroestl,
    DigibyteQubit,
    DigibyteSkein,
    Electroneum,
    Ethereum,
    EthereumClassic,
    Expanse,
    Feathercoin,
    Gamecredits,
    Geocoin,
    Globalboosty,
    Groestlcoin,
    Litecoin,
    Maxcoin,
    Monacoin,
    Monero,
    Musicoin,
    MyriadcoinGroestl,
    MyriadcoinSkein,
    MyriadcoinYescrypt,
    Sexcoin,
    Siacoin,
    Startcoin,
    VergeScrypt,
    Vertcoin,
    Zcash,
    Zclassic,
    Zcoin,
    Zencash,
}

impl MphDomain {
    /// Every known domain, root first
    pub const ALL: [MphDomain; 36] = [
        MphDomain::Root,
        MphDomain::Adzcoin,
        MphDomain::AuroracoinQubit,
        MphDomain::Bitcoin,
        MphDomain::BitcoinCash,
        MphDomain::BitcoinGold,
        MphDomain::Dash,
        MphDomain::DigibyteGroestl,
        MphDomain::DigibyteQubit,
        MphDomain::DigibyteSkein,
        MphDomain::Electroneum,
        MphDomain::Ethereum,
        MphDomain::EthereumClassic,
        MphDomain::Expanse,
        MphDomain::Feathercoin,
        MphDomain::Gamecredits,
        MphDomain::Geocoin,
        MphDomain::Globalboosty,
        MphDomain::Groestlcoin,
        MphDomain::Litecoin,
        MphDomain::Maxcoin,
        MphDomain::Monacoin,
        MphDomain::Monero,
        MphDomain::Musicoin,
        MphDomain::MyriadcoinGroestl,
        MphDomain::MyriadcoinSkein,
        MphDomain::MyriadcoinYescrypt,
        MphDomain::Sexcoin,
        MphDomain::Siacoin,
        MphDomain::Startcoin,
        MphDomain::VergeScrypt,
        MphDomain::Vertcoin,
        MphDomain::Zcash,
        MphDomain::Zclassic,
        MphDomain::Zcoin,
        MphDomain::Zencash,
    ];

    /// The sub-domain label; empty for [`MphDomain::Root`]
    pub fn as_str(&self) -> &'static str {
        match self {
            MphDomain::Root => "",
            MphDomain::Adzcoin => "adzcoin",
            MphDomain::AuroracoinQubit => "auroracoin-qubit",
            MphDomain::Bitcoin => "bitcoin",
            MphDomain::BitcoinCash => "bitcoin-cash",
            MphDomain::BitcoinGold => "bitcoin-gold",
            MphDomain::Dash => "dash",
            MphDomain::DigibyteGroestl => "digibyte-groestl",
            MphDomain::DigibyteQubit => "digibyte-qubit",
            MphDomain::DigibyteSkein => "digibyte-skein",
            MphDomain::Electroneum => "electroneum",
            MphDomain::Ethereum => "ethereum",
            MphDomain::EthereumClassic => "ethereum-classic",
            MphDomain::Expanse => "expanse",
            MphDomain::Feathercoin => "feathercoin",
            MphDomain::Gamecredits => "gamecredits",
            MphDomain::Geocoin => "geocoin",
            MphDomain::Globalboosty => "globalboosty",
            MphDomain::Groestlcoin => "groestlcoin",
            MphDomain::Litecoin => "litecoin",
            MphDomain::Maxcoin => "maxcoin",
            MphDomain::Monacoin => "monacoin",
            MphDomain::Monero => "monero",
            MphDomain::Musicoin => "musicoin",
            MphDomain::MyriadcoinGroestl => "myriadcoin-groestl",
            MphDomain::MyriadcoinSkein => "myriadcoin-skein",
            MphDomain::MyriadcoinYescrypt => "myriadcoin-yescrypt",
            MphDomain::Sexcoin => "sexcoin",
            MphDomain::Siacoin => "siacoin",
            MphDomain::Startcoin => "startcoin",
            MphDomain::VergeScrypt => "verge-scrypt",
            MphDomain::Vertcoin => "vertcoin",
            MphDomain::Zcash => "zcash",
            MphDomain::Zclassic => "zclassic",
            MphDomain::Zcoin => "zcoin",
            MphDomain::Zencash => "zencash",
        }
    }
}

impl fmt::Display for MphDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MphDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MphDomain::ALL
            .iter()
            .find(|domain| domain.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown MiningPoolHub domain: {}", s))
    }
}

/// The domain a client talks to: a known pool or a free-form override.
///
/// Holding a single value makes the two choices mutually exclusive; whichever
/// was set last wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Domain {
    Known(MphDomain),
    Custom(String),
}

impl Domain {
    pub fn as_str(&self) -> &str {
        match self {
            Domain::Known(domain) => domain.as_str(),
            Domain::Custom(domain) => domain,
        }
    }

    /// `"{domain}."`, or nothing for an empty domain
    pub fn host_prefix(&self) -> String {
        let domain = self.as_str();
        if domain.is_empty() {
            String::new()
        } else {
            format!("{}.", domain)
        }
    }
}

impl Default for Domain {
    fn default() -> Self {
        Domain::Known(MphDomain::Root)
    }
}

impl From<MphDomain> for Domain {
    fn from(domain: MphDomain) -> Self {
        Domain::Known(domain)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
