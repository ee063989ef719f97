/// Session collaborator invoked by the user menu.
pub(crate) trait SessionHandler {
    fn logout(&mut self);
}

/// Placeholder handler used until a real session backend is wired in.
#[derive(Debug, Default)]
pub(crate) struct NoopSession;

impl SessionHandler for NoopSession {
    fn logout(&mut self) {
        log::info!("logout requested; no session backend configured");
    }
}
