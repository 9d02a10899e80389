use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::action::LobbyAction;
use crate::client::{LobbyClient, LobbyError};

/// Shared handle on the username shown in the page header.
///
/// Lobby queries read the badge at call time, so changing it between two
/// refreshes changes which user the second one asks about.
#[derive(Debug, Clone, Default)]
pub struct UserBadge {
    text: Arc<RwLock<String>>,
}

impl UserBadge {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            text: Arc::new(RwLock::new(username.into())),
        }
    }

    pub fn set(&self, username: impl Into<String>) {
        *self.text.write() = username.into();
    }

    pub fn text(&self) -> String {
        self.text.read().clone()
    }
}

/// A named display region of the lobby page.
///
/// Responses are trusted pre-rendered fragments and are stored verbatim.
/// Concurrent renders on the same panel are last-write-wins.
#[derive(Debug, Clone)]
pub struct Panel {
    name: &'static str,
    content: Arc<RwLock<String>>,
}

impl Panel {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            content: Arc::new(RwLock::new(String::new())),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The last rendered fragment, empty until the first refresh.
    pub fn content(&self) -> String {
        self.content.read().clone()
    }

    /// Replaces the panel content wholesale.
    pub fn render(&self, fragment: impl Into<String>) {
        *self.content.write() = fragment.into();
    }
}

/// The client lobby page: one panel per lobby query, plus the user badge
/// the queries take their username from.
#[derive(Debug, Clone)]
pub struct LobbyScreen {
    client: LobbyClient,
    user: UserBadge,
    contracts: Panel,
    current_contract: Panel,
    options: Panel,
    tariffs: Panel,
}

impl LobbyScreen {
    pub fn new(client: LobbyClient, user: UserBadge) -> Self {
        Self {
            client,
            user,
            contracts: Panel::new("contracts"),
            current_contract: Panel::new("current_contract"),
            options: Panel::new("options"),
            tariffs: Panel::new("tariffs"),
        }
    }

    pub fn user(&self) -> &UserBadge {
        &self.user
    }

    pub fn contracts(&self) -> &Panel {
        &self.contracts
    }

    pub fn current_contract(&self) -> &Panel {
        &self.current_contract
    }

    pub fn options(&self) -> &Panel {
        &self.options
    }

    pub fn tariffs(&self) -> &Panel {
        &self.tariffs
    }

    pub fn panels(&self) -> [&Panel; 4] {
        [
            &self.contracts,
            &self.current_contract,
            &self.options,
            &self.tariffs,
        ]
    }

    async fn refresh(&self, action: LobbyAction, panel: &Panel) -> Result<(), LobbyError> {
        let username = self.user.text();
        match self.client.fetch(&username, action).await {
            Ok(body) => {
                info!(panel = panel.name(), bytes = body.len(), "🔄 refreshed panel");
                panel.render(body);
                Ok(())
            }
            Err(err) => {
                // Panel keeps its previous content on failure.
                warn!(panel = panel.name(), %err, "lobby query failed");
                Err(err)
            }
        }
    }

    pub async fn refresh_contracts(&self) -> Result<(), LobbyError> {
        self.refresh(LobbyAction::Contracts, &self.contracts).await
    }

    pub async fn refresh_current_contract(&self) -> Result<(), LobbyError> {
        self.refresh(LobbyAction::CurrentContract, &self.current_contract)
            .await
    }

    pub async fn refresh_options(&self) -> Result<(), LobbyError> {
        self.refresh(LobbyAction::Options, &self.options).await
    }

    pub async fn refresh_tariffs(&self) -> Result<(), LobbyError> {
        self.refresh(LobbyAction::Tariffs, &self.tariffs).await
    }

    /// Runs every lobby query concurrently, as the page does on load.
    /// Fails on the first error; panels that finished keep their content.
    pub async fn refresh_all(&self) -> Result<(), LobbyError> {
        tokio::try_join!(
            self.refresh_contracts(),
            self.refresh_current_contract(),
            self.refresh_options(),
            self.refresh_tariffs(),
        )?;
        Ok(())
    }
}
