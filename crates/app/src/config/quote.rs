//! Quote Config

use clap::{ArgAction, Args};
use uuid::Uuid;

use crate::{
    domain::quotes::QuoteSettings,
    session::{Session, UserUuid},
};

/// Quote submission settings.
#[derive(Debug, Args)]
pub struct QuoteConfig {
    /// Staff member recorded as the quote's author
    #[arg(long, env = "COTIZADOR_USER")]
    pub user: Uuid,

    /// Re-check stock while saving the quote (true, false)
    #[arg(
        long,
        env = "QUOTE_REVALIDATE_STOCK",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub revalidate_stock: bool,
}

impl QuoteConfig {
    #[must_use]
    pub fn session(&self) -> Session {
        Session::new(UserUuid::from_uuid(self.user))
    }

    #[must_use]
    pub fn settings(&self) -> QuoteSettings {
        QuoteSettings {
            revalidate_stock: self.revalidate_stock,
        }
    }
}
