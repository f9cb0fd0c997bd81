//! # Payment Commands
//!
//! Drives a [`PaymentSession`] from console input. The state machine lives in
//! quickbite-core; this module only prompts and prints.
//!
//! ## Payment Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Please proceed to payment."                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "Enter the amount paid (£): " ◄──────────────────────┐                │
//! │       │                                               │                │
//! │       ├── not an amount → "Invalid input..." ─────────┤                │
//! │       ├── >= total → "Thank you! Your change: £X.XX"  │  ──► Completed │
//! │       └── <  total → "Would you like to try again?"   │                │
//! │                        ├── yes / y ───────────────────┘                │
//! │                        └── anything else → "Transaction cancelled..."  │
//! │                                                          ──► Cancelled │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use quickbite_core::money::CURRENCY_SYMBOL;
use quickbite_core::validation::is_affirmative;
use quickbite_core::{Money, PaymentOutcome, PaymentSession, PaymentState};
use tracing::info;

use crate::console::Console;
use crate::error::TerminalResult;

/// Collects cash for `total` until it is paid or the customer gives up.
///
/// Nothing is persisted either way.
pub fn process_payment<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    total: Money,
) -> TerminalResult<PaymentOutcome> {
    let mut payment = PaymentSession::new(total);
    let amount_prompt = format!("Enter the amount paid ({}): ", CURRENCY_SYMBOL);

    console.blank()?;
    console.say("Please proceed to payment.")?;

    loop {
        let input = console.prompt(&amount_prompt)?;
        let amount = match Money::parse(&input, "amount paid") {
            Ok(amount) => amount,
            Err(_) => {
                console.say("Invalid input. Please enter a valid amount.")?;
                continue;
            }
        };

        let state = match payment.tender(amount) {
            Ok(state) => state,
            Err(e) => {
                console.say(e)?;
                continue;
            }
        };

        if let PaymentState::Insufficient { tendered } = state {
            console.say(format!(
                "Insufficient amount paid. You paid {} but the total is {}.",
                tendered, total
            ))?;
            let answer = console.prompt("Would you like to try again? (yes/no): ")?;
            if let Err(e) = payment.decide_retry(is_affirmative(&answer)) {
                console.say(e)?;
            }
        }

        match payment.outcome() {
            Some(PaymentOutcome::Completed { tendered, change }) => {
                console.say(format!("Thank you! Your change: {}", change))?;
                info!(
                    total = %total,
                    tendered = %tendered,
                    change = %change,
                    attempts = payment.attempts(),
                    "Payment completed"
                );
                return Ok(PaymentOutcome::Completed { tendered, change });
            }
            Some(PaymentOutcome::Cancelled) => {
                console.say("Transaction cancelled. Returning to the main menu.")?;
                info!(total = %total, attempts = payment.attempts(), "Payment cancelled");
                return Ok(PaymentOutcome::Cancelled);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TerminalError;
    use std::io::Cursor;

    fn pay(total_cents: i64, input: &str) -> (TerminalResult<PaymentOutcome>, String) {
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
        let result = process_payment(&mut console, Money::from_cents(total_cents));
        (result, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_exact_payment() {
        let (result, out) = pay(1000, "10\n");

        assert_eq!(
            result.unwrap(),
            PaymentOutcome::Completed {
                tendered: Money::from_cents(1000),
                change: Money::zero(),
            }
        );
        assert!(out.contains("Please proceed to payment."));
        assert!(out.contains("Enter the amount paid (£): "));
        assert!(out.contains("Thank you! Your change: £0.00"));
    }

    #[test]
    fn test_overpayment_gives_change() {
        let (result, out) = pay(1000, "15.00\n");

        assert_eq!(
            result.unwrap(),
            PaymentOutcome::Completed {
                tendered: Money::from_cents(1500),
                change: Money::from_cents(500),
            }
        );
        assert!(out.contains("Thank you! Your change: £5.00"));
    }

    #[test]
    fn test_invalid_amounts_reprompt() {
        let (result, out) = pay(1000, "abc\n-1\n1.234\n12.50\n");

        assert!(matches!(
            result.unwrap(),
            PaymentOutcome::Completed { change, .. } if change == Money::from_cents(250)
        ));
        assert_eq!(
            out.matches("Invalid input. Please enter a valid amount.").count(),
            3
        );
    }

    #[test]
    fn test_insufficient_then_retry() {
        let (result, out) = pay(1000, "5\nY\n10\n");

        assert!(matches!(
            result.unwrap(),
            PaymentOutcome::Completed { change, .. } if change.is_zero()
        ));
        assert!(out.contains("You paid £5.00 but the total is £10.00."));
        assert!(out.contains("Would you like to try again? (yes/no): "));
    }

    #[test]
    fn test_insufficient_then_decline() {
        let (result, out) = pay(1000, "5\nno\n");

        assert_eq!(result.unwrap(), PaymentOutcome::Cancelled);
        assert!(out.contains("Transaction cancelled. Returning to the main menu."));
        assert!(!out.contains("Your change"));
    }

    #[test]
    fn test_unrecognized_answer_cancels() {
        let (result, _) = pay(1000, "5\nmaybe\n");
        assert_eq!(result.unwrap(), PaymentOutcome::Cancelled);
    }

    #[test]
    fn test_input_closed_during_payment() {
        let (result, _) = pay(1000, "5\n");
        assert!(matches!(result, Err(TerminalError::InputClosed)));
    }
}
