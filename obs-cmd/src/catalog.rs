//! Human-readable dump of the static metric catalog.

use obs_core::Network;
use std::fmt::Write;

/// Render categories and their sub-metrics, optionally for one network.
pub fn render_catalog(network: Option<Network>) -> String {
    let mut out = String::new();
    for net in Network::ALL.iter().filter(|n| network.map_or(true, |w| w == **n)) {
        let _ = writeln!(out, "{} ({})", net, net.entity_table());
        for category in net.categories() {
            let _ = writeln!(out, "  {} [{}]", category.label(), category.slug());
            match category.parameter_source() {
                Some(param) => {
                    let _ = writeln!(
                        out,
                        "    <{}> from {}",
                        param.parameter_column, param.source.table
                    );
                }
                None => {
                    for kind in category.series_kinds() {
                        let _ = writeln!(
                            out,
                            "    {} ({}.{})",
                            kind.name, kind.source.table, kind.column
                        );
                    }
                }
            }
        }
    }
    out
}

pub fn run_catalog(network: Option<&str>) -> anyhow::Result<()> {
    let network = match network {
        None => None,
        Some(name) => Some(
            Network::ALL
                .iter()
                .copied()
                .find(|n| n.to_string() == name)
                .ok_or_else(|| anyhow::anyhow!("unknown network '{}'", name))?,
        ),
    };
    print!("{}", render_catalog(network));
    Ok(())
}
