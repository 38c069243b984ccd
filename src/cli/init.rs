//! Init command - create the user config file

use anyhow::Result;
use console::style;

use crate::config::UserConfig;

/// Run the init command
pub(crate) fn run() -> Result<()> {
    println!("\n{} Initializing Mindgauge\n", style("◐").bold());

    let config_path = UserConfig::init_user_config()?;
    println!(
        "{} Config at {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );

    println!("\n{}", style("Next steps").bold());
    println!(
        "   • Set {} to receive the complete-data email",
        style("[contact] admin_email").cyan()
    );
    println!(
        "   • Run {} to take your first assessment",
        style("mindgauge assess").cyan()
    );

    Ok(())
}
