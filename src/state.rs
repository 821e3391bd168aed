use std::sync::Arc;

use crate::config::Config;
use crate::dispatch::InvitationDispatcher;
use crate::mail::MailTransport;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dispatcher: InvitationDispatcher,
}

impl AppState {
    pub fn new(config: Config, transport: Arc<dyn MailTransport>) -> Self {
        let config = Arc::new(config);
        Self {
            dispatcher: InvitationDispatcher::new(config.clone(), transport),
            config,
        }
    }
}
