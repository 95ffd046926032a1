//! Interactive email verification session.
//!
//! Drives `VerifyFlow` from a terminal the same way a mobile shell would:
//! each typed digit lands in the focused cell, `b` backspaces, `r` requests a
//! new code, and a one-second interval feeds the resend countdown. The
//! interval lives inside this loop, so teardown stops the ticks with it.

use crate::cli::actions::Action;
use crate::vendi::api::ApiClient;
use crate::vendi::auth::flow::{VerifiedNext, VerifyFlow};
use anyhow::{anyhow, Result};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::interval;

/// Handle the verify action
pub async fn handle(action: Action) -> Result<()> {
    let Action::Verify {
        globals,
        email,
        to_login,
    } = action
    else {
        return Err(anyhow!("unexpected action"));
    };

    let client = ApiClient::new(&globals.api_url)?;
    let next = if to_login {
        VerifiedNext::Login
    } else {
        VerifiedNext::VendorSetup
    };
    let mut flow = VerifyFlow::new(&email, next)?;

    println!("A 6-digit code was sent to {}.", flow.email());
    println!("Type digits to fill the code, 'b' to backspace, 'r' to request a new code, 'q' to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = interval(Duration::from_secs(1));
    // Consume the immediate first tick so the countdown starts a second from now
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if flow.tick() {
                    println!("You can request a new code now ('r').");
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    return Ok(());
                };

                for key in line.trim().chars() {
                    match key {
                        'q' => return Ok(()),
                        'r' => {
                            if flow.countdown().resend_allowed() {
                                match flow.trigger_resend(&client).await {
                                    Ok(()) => println!("A new code is on the way."),
                                    Err(err) => println!("{err}"),
                                }
                            } else {
                                println!(
                                    "Please wait {} more seconds before requesting a new code.",
                                    flow.countdown().remaining()
                                );
                            }
                        }
                        'b' => {
                            let index = flow.input().focus();
                            flow.on_backspace(index);
                        }
                        digit => {
                            let index = flow.input().focus();
                            flow.on_digit_changed(index, &digit.to_string());
                        }
                    }
                }

                if flow.can_submit() {
                    match flow.submit(&client).await {
                        Ok(VerifiedNext::VendorSetup) => {
                            println!("Email verified. Continue with `vendi payout` to set up your payout account.");
                            return Ok(());
                        }
                        Ok(VerifiedNext::Login) => {
                            println!("Email verified. Sign in with `vendi login`.");
                            return Ok(());
                        }
                        Err(err) => println!("{err}"),
                    }
                } else {
                    println!("Code so far: {:<6} (cell {})", flow.input().code(), flow.input().focus() + 1);
                }
            }
        }
    }
}
