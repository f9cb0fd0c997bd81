//! # Payment
//!
//! Cash payment as an explicit state machine.
//!
//! ## States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                  tender(amount >= total)                                │
//! │  AwaitingTender ───────────────────────────────► Completed { change }  │
//! │     │      ▲                                        (terminal)         │
//! │     │      │ decide_retry(true)                                        │
//! │     │      │                                                            │
//! │     │   Insufficient { tendered }                                       │
//! │     │      ▲          │                                                 │
//! │     └──────┘          │ decide_retry(false)                             │
//! │  tender(amount < total)                                                 │
//! │                       ▼                                                 │
//! │                   Cancelled (terminal)                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The machine holds no I/O. The terminal reads text, parses it with
//! [`Money::parse`], and feeds the result in; unparseable text never reaches
//! the machine, so malformed input can be retried without limit.

use std::fmt;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;

/// Where a payment currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentState {
    /// Waiting for the customer to hand over cash.
    AwaitingTender,
    /// The last tender was short; waiting for the retry decision.
    Insufficient { tendered: Money },
    /// Paid in full.
    Completed { tendered: Money, change: Money },
    /// The customer declined to retry after a short tender.
    Cancelled,
}

impl PaymentState {
    /// Completed and Cancelled accept no further input.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PaymentState::Completed { .. } | PaymentState::Cancelled)
    }
}

impl fmt::Display for PaymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentState::AwaitingTender => "awaiting tender",
            PaymentState::Insufficient { .. } => "insufficient",
            PaymentState::Completed { .. } => "completed",
            PaymentState::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// How a payment ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    Completed { tendered: Money, change: Money },
    Cancelled,
}

/// One cash payment against a fixed total.
#[derive(Debug, Clone)]
pub struct PaymentSession {
    total: Money,
    state: PaymentState,
    attempts: u32,
}

impl PaymentSession {
    /// Starts a payment for `total`.
    pub fn new(total: Money) -> Self {
        PaymentSession {
            total,
            state: PaymentState::AwaitingTender,
            attempts: 0,
        }
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn state(&self) -> PaymentState {
        self.state
    }

    /// Number of tenders offered so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Offers `amount` against the total.
    ///
    /// ## Transitions
    /// - `amount >= total` → `Completed { change: amount - total }`
    /// - `amount <  total` → `Insufficient`
    ///
    /// ## Errors
    /// - `InvalidPaymentState` unless awaiting a tender
    /// - `Validation(MustBeNonNegative)` for a negative amount
    pub fn tender(&mut self, amount: Money) -> CoreResult<PaymentState> {
        self.expect_state(matches!(self.state, PaymentState::AwaitingTender), "tender")?;

        if amount.is_negative() {
            return Err(ValidationError::MustBeNonNegative {
                field: "amount paid".to_string(),
            }
            .into());
        }

        self.attempts += 1;
        self.state = if amount >= self.total {
            PaymentState::Completed {
                tendered: amount,
                change: amount - self.total,
            }
        } else {
            PaymentState::Insufficient { tendered: amount }
        };

        Ok(self.state)
    }

    /// Answers the retry question after a short tender.
    ///
    /// `true` goes back to `AwaitingTender`; `false` cancels.
    pub fn decide_retry(&mut self, retry: bool) -> CoreResult<PaymentState> {
        self.expect_state(
            matches!(self.state, PaymentState::Insufficient { .. }),
            "decide retry",
        )?;

        self.state = if retry {
            PaymentState::AwaitingTender
        } else {
            PaymentState::Cancelled
        };

        Ok(self.state)
    }

    /// The shortfall of the last tender, while `Insufficient`.
    pub fn shortfall(&self) -> Option<Money> {
        match self.state {
            PaymentState::Insufficient { tendered } => Some(self.total - tendered),
            _ => None,
        }
    }

    /// Final result once the machine is terminal.
    pub fn outcome(&self) -> Option<PaymentOutcome> {
        match self.state {
            PaymentState::Completed { tendered, change } => {
                Some(PaymentOutcome::Completed { tendered, change })
            }
            PaymentState::Cancelled => Some(PaymentOutcome::Cancelled),
            _ => None,
        }
    }

    fn expect_state(&self, allowed: bool, action: &str) -> CoreResult<()> {
        if allowed {
            return Ok(());
        }
        Err(CoreError::InvalidPaymentState {
            state: self.state.to_string(),
            action: action.to_string(),
        })
    }
}
