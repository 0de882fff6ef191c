use tokio_util::sync::CancellationToken;

use crate::pager::RevealTicket;

/// Hands out one cancellation token per refresh so superseded fade-ins stop early
#[derive(Debug, Default)]
pub struct RevealScheduler {
    token: CancellationToken,
}

impl RevealScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the previous batch and start a new one
    pub fn restart(&mut self) -> CancellationToken {
        self.token.cancel();
        self.token = CancellationToken::new();
        self.token.clone()
    }

    /// Token of the current batch
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }
}

/// Wait out the ticket's delay; `None` if the batch was superseded first
pub async fn wait_for_reveal(
    ticket: RevealTicket,
    token: CancellationToken,
) -> Option<RevealTicket> {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            log::trace!("Reveal of item {} cancelled", ticket.item);
            None
        }
        _ = tokio::time::sleep(ticket.delay) => Some(ticket),
    }
}
