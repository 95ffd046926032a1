use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

fn session_token_arg() -> Arg {
    Arg::new("session-token")
        .long("session-token")
        .help("Session token from a previous login")
        .env("VENDI_SESSION_TOKEN")
        .hide_env_values(true)
        .required(true)
}

fn email_arg() -> Arg {
    Arg::new("email")
        .short('e')
        .long("email")
        .help("Account email address")
        .env("VENDI_EMAIL")
        .required(true)
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    Command::new("vendi")
        .about("Mobile commerce client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("Base URL of the vendi commerce API")
                .default_value("https://api.vendi.dev")
                .env("VENDI_API_URL")
                .global(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("VENDI_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(
            Command::new("verify")
                .about("Verify your email address with a one-time code")
                .arg(email_arg())
                .arg(
                    Arg::new("login")
                        .long("login")
                        .help("Continue to sign-in after verification instead of vendor payout setup")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("login")
                .about("Sign in and obtain a session token")
                .arg(email_arg())
                .arg(
                    Arg::new("password")
                        .long("password")
                        .help("Account password")
                        .env("VENDI_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("rewards")
                .about("Show the rewards points history")
                .arg(session_token_arg()),
        )
        .subcommand(
            Command::new("payout")
                .about("Set up the vendor payout account")
                .arg(session_token_arg())
                .arg(
                    Arg::new("provider")
                        .long("provider")
                        .help("Payout provider, for example a mobile money network or bank")
                        .env("VENDI_PAYOUT_PROVIDER")
                        .required(true),
                )
                .arg(
                    Arg::new("account-number")
                        .long("account-number")
                        .help("Payout account number")
                        .env("VENDI_PAYOUT_ACCOUNT_NUMBER")
                        .required(true),
                )
                .arg(
                    Arg::new("account-name")
                        .long("account-name")
                        .help("Name on the payout account")
                        .env("VENDI_PAYOUT_ACCOUNT_NAME")
                        .required(true),
                ),
        )
}
