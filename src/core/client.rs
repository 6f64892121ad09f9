//! Client workflow
//!
//! A client walks a small state machine against the bank:
//!
//! ```text
//! Requesting --approved--> Waiting --> Repaying --> Done
//!      |
//!      +------rejected---------------------------> Done
//! ```
//!
//! `Client::step` performs one transition and tells the caller whether it has
//! to wait. How the wait happens is the runner's business: the concurrent
//! strategy awaits a tokio timer, the sequential one blocks the thread. The
//! bank lock is never held while waiting.

use super::bank::Bank;
use crate::types::{ClientOutcome, ClientProfile};
use std::time::Duration;

/// Position of a client in its workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    /// About to ask the bank for a loan
    Requesting,
    /// Loan approved, processing delay pending
    Waiting,
    /// Delay elapsed, about to repay
    Repaying,
    /// Finished, with or without a loan
    Done,
}

/// What the runner must do after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Call `step` again right away
    Continue,
    /// Wait this long, then call `step` again
    Wait(Duration),
    /// The workflow is over
    Done,
}

/// One simulated client
#[derive(Debug, Clone)]
pub struct Client {
    profile: ClientProfile,
    state: ClientState,
    approved: bool,
}

impl Client {
    pub fn new(profile: ClientProfile) -> Self {
        Self {
            profile,
            state: ClientState::Requesting,
            approved: false,
        }
    }

    pub fn profile(&self) -> &ClientProfile {
        &self.profile
    }

    pub fn state(&self) -> ClientState {
        self.state
    }

    /// Advance the workflow by one transition
    pub fn step(&mut self, bank: &Bank) -> Step {
        match self.state {
            ClientState::Requesting => {
                self.approved = bank.request_loan(self.profile.id, self.profile.loan_amount);
                if self.approved {
                    self.state = ClientState::Waiting;
                    Step::Wait(self.profile.delay)
                } else {
                    self.state = ClientState::Done;
                    Step::Done
                }
            }
            ClientState::Waiting => {
                self.state = ClientState::Repaying;
                Step::Continue
            }
            ClientState::Repaying => {
                bank.receive_payment(self.profile.id, self.profile.repayment_amount);
                self.state = ClientState::Done;
                Step::Done
            }
            ClientState::Done => Step::Done,
        }
    }

    /// Run to completion, waiting on the tokio timer
    pub async fn run(mut self, bank: &Bank) -> ClientOutcome {
        loop {
            match self.step(bank) {
                Step::Continue => {}
                Step::Wait(delay) => tokio::time::sleep(delay).await,
                Step::Done => break,
            }
        }
        self.into_outcome()
    }

    /// Run to completion, blocking the calling thread during the wait
    pub fn run_blocking(mut self, bank: &Bank) -> ClientOutcome {
        loop {
            match self.step(bank) {
                Step::Continue => {}
                Step::Wait(delay) => std::thread::sleep(delay),
                Step::Done => break,
            }
        }
        self.into_outcome()
    }

    fn into_outcome(self) -> ClientOutcome {
        ClientOutcome {
            profile: self.profile,
            approved: self.approved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::event_log::MemoryLog;
    use crate::types::Amount;
    use std::sync::Arc;

    fn bank(funds: i64) -> Bank {
        Bank::new(Amount::from(funds), Arc::new(MemoryLog::new()))
    }

    fn client(loan: i64, delay_ms: u64) -> Client {
        Client::new(ClientProfile::new(
            1,
            Amount::from(loan),
            Duration::from_millis(delay_ms),
        ))
    }

    #[test]
    fn test_approved_transitions() {
        let bank = bank(10_000);
        let mut client = client(10_000, 250);

        assert_eq!(client.state(), ClientState::Requesting);
        assert_eq!(client.step(&bank), Step::Wait(Duration::from_millis(250)));
        assert_eq!(client.state(), ClientState::Waiting);
        assert_eq!(bank.balance(), Amount::ZERO);

        assert_eq!(client.step(&bank), Step::Continue);
        assert_eq!(client.state(), ClientState::Repaying);

        assert_eq!(client.step(&bank), Step::Done);
        assert_eq!(client.state(), ClientState::Done);
        assert_eq!(bank.balance(), Amount::from(10_500));

        // Done is terminal
        assert_eq!(client.step(&bank), Step::Done);
        assert_eq!(bank.balance(), Amount::from(10_500));
    }

    #[test]
    fn test_rejected_goes_straight_to_done() {
        let bank = bank(1_000);
        let mut client = client(5_000, 250);

        assert_eq!(client.step(&bank), Step::Done);
        assert_eq!(client.state(), ClientState::Done);
        assert_eq!(bank.balance(), Amount::from(1_000));
        assert_eq!(bank.journal().len(), 1);
    }

    #[test]
    fn test_run_blocking_outcome() {
        let bank = bank(10_000);
        let outcome = client(10_000, 1).run_blocking(&bank);

        assert!(outcome.approved);
        assert_eq!(outcome.repaid(), Amount::from(10_500));
        assert_eq!(bank.balance(), Amount::from(10_500));
    }

    #[tokio::test]
    async fn test_run_async_rejected_outcome() {
        let bank = bank(1_000);
        let outcome = client(5_000, 1).run(&bank).await;

        assert!(!outcome.approved);
        assert_eq!(bank.balance(), Amount::from(1_000));
    }

    #[tokio::test]
    async fn test_run_async_approved_outcome() {
        let bank = bank(20_000);
        let outcome = client(8_000, 1).run(&bank).await;

        assert!(outcome.approved);
        assert_eq!(bank.balance(), Amount::from(20_400));
    }
}
