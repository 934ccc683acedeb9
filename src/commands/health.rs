//! Health command implementation

use crate::config::Settings;
use crate::error::Result;
use crate::operations::health;
use crate::system::Dnf;
use crate::ui::display;

/// Print the health report as text or JSON
pub fn run(settings: &Settings) -> Result<()> {
    let manager = Dnf::from_settings(settings);
    let report = health::check(settings, &manager)?;

    if settings.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", display::render_health(&report));
    }
    Ok(())
}
