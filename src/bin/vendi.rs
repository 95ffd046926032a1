use anyhow::Result;
use vendi::cli::{actions, actions::Action, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let action = start()?;

    // Handle the action
    match action {
        Action::Verify { .. } => actions::verify::handle(action).await?,
        Action::Login { .. } => actions::login::handle(action).await?,
        Action::Rewards { .. } => actions::rewards::handle(action).await?,
        Action::Payout { .. } => actions::payout::handle(action).await?,
    }

    Ok(())
}
