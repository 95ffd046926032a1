pub mod login;
pub mod payout;
pub mod rewards;
pub mod verify;

use crate::cli::globals::GlobalArgs;
use secrecy::SecretString;

#[derive(Debug)]
pub enum Action {
    Verify {
        globals: GlobalArgs,
        email: String,
        to_login: bool,
    },
    Login {
        globals: GlobalArgs,
        email: String,
        password: SecretString,
    },
    Rewards {
        globals: GlobalArgs,
    },
    Payout {
        globals: GlobalArgs,
        provider: String,
        account_number: String,
        account_name: String,
    },
}
