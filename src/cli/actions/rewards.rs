//! Print the rewards points history.

use crate::cli::actions::Action;
use crate::vendi::api::ApiClient;
use crate::vendi::rewards::points_history;
use anyhow::{anyhow, Result};

/// Handle the rewards action
pub async fn handle(action: Action) -> Result<()> {
    let Action::Rewards { globals } = action else {
        return Err(anyhow!("unexpected action"));
    };

    let client = ApiClient::new(&globals.api_url)?;
    let history = points_history(&client, &globals.session_token).await?;

    if history.entries.is_empty() {
        println!("No rewards activity yet.");
    } else {
        for entry in &history.entries {
            println!("{:>6}  {}  {}", entry.points, entry.created_at, entry.description);
        }
    }
    println!("Total points: {}", history.total_points);

    Ok(())
}
