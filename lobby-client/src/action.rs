use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Query kinds understood by the lobby endpoint.
///
/// The wire values are fixed by the server and must match byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LobbyAction {
    /// All contracts belonging to the user.
    Contracts,
    /// The contract the user is currently signed into.
    CurrentContract,
    /// Options available on the user's contract.
    Options,
    /// The tariff catalog.
    Tariffs,
}

impl LobbyAction {
    pub const ALL: [LobbyAction; 4] = [
        LobbyAction::Contracts,
        LobbyAction::CurrentContract,
        LobbyAction::Options,
        LobbyAction::Tariffs,
    ];

    /// The value sent as the `action` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            LobbyAction::Contracts => "get_contracts",
            LobbyAction::CurrentContract => "get_current_contract",
            LobbyAction::Options => "get_options",
            LobbyAction::Tariffs => "get_tariffs",
        }
    }
}

impl fmt::Display for LobbyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown lobby action: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for LobbyAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get_contracts" => Ok(LobbyAction::Contracts),
            "get_current_contract" => Ok(LobbyAction::CurrentContract),
            "get_options" => Ok(LobbyAction::Options),
            "get_tariffs" => Ok(LobbyAction::Tariffs),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_are_exact() {
        assert_eq!(LobbyAction::Contracts.as_str(), "get_contracts");
        assert_eq!(LobbyAction::CurrentContract.as_str(), "get_current_contract");
        assert_eq!(LobbyAction::Options.as_str(), "get_options");
        assert_eq!(LobbyAction::Tariffs.as_str(), "get_tariffs");
    }

    #[test]
    fn parses_every_wire_value() {
        for action in LobbyAction::ALL {
            assert_eq!(action.as_str().parse::<LobbyAction>(), Ok(action));
        }
    }

    #[test]
    fn rejects_unknown_action() {
        let err = "get_invoices".parse::<LobbyAction>().unwrap_err();
        assert_eq!(err, UnknownAction("get_invoices".to_string()));
    }
}
