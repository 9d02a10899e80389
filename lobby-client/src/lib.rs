//! Client-side fetcher for the eCare lobby endpoint.
//!
//! The server exposes one handler, `client_lobby`, that multiplexes four
//! read-only queries via an `action` query parameter: the user's contract
//! list, their active contract, their option list, and the tariff catalog.
//! Responses are opaque pre-rendered fragments; this crate fetches them and
//! places them into the matching screen panel.

pub mod action;
pub mod client;
pub mod screen;

pub use action::LobbyAction;
pub use client::{LobbyClient, LobbyError};
pub use screen::{LobbyScreen, Panel, UserBadge};
