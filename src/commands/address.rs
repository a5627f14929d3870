use anyhow::Result;

use crate::core::host;
use crate::ui::{self, Severity};

pub fn execute() -> Result<()> {
    ui::heading("IP Addresses:");

    let addresses = host::list_addresses();
    if addresses.is_empty() {
        ui::report(Severity::Warning, "no non-loopback IPv4 addresses found");
        return Ok(());
    }

    for entry in &addresses {
        ui::field(
            &format!("  Interface: {}, Address:", entry.interface),
            &entry.address.to_string(),
        );
    }
    Ok(())
}
