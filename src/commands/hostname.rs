use anyhow::Result;

use crate::core::host;
use crate::ui;

pub fn execute() -> Result<()> {
    let name = host::hostname()?;
    ui::field("Host Name:", &name);
    Ok(())
}
