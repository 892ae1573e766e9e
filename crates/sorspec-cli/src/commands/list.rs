//! Implementation of the `sorspec list` command.

use serde::Serialize;

use sorspec_adapters::{ResourceDir, builtin_requirements};
use sorspec_core::domain::{LayerCatalog, LayerDef, RequirementCatalog};

use crate::{
    cli::{ListArgs, ListFormat, ListTarget},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct RequirementRow {
    id: String,
    description: String,
    source: String,
}

#[derive(Debug, Serialize)]
struct Listing {
    #[serde(skip_serializing_if = "Option::is_none")]
    layers: Option<&'static [LayerDef]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    requirements: Option<Vec<RequirementRow>>,
}

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let show_layers = args.what != Some(ListTarget::Requirements);
    let show_requirements = args.what != Some(ListTarget::Layers);

    let layers = LayerCatalog::builtin();
    let requirements = if show_requirements {
        let resources = ResourceDir::discover(config.resources.dir.as_deref());
        Some(builtin_requirements(&resources))
    } else {
        None
    };

    match args.format {
        ListFormat::Json => {
            let listing = Listing {
                layers: show_layers.then(|| layers.definitions()),
                requirements: requirements.as_ref().map(requirement_rows),
            };
            output.json(&listing)?;
        }
        ListFormat::List => {
            if show_layers {
                for def in layers.definitions() {
                    output.document(&format!("{}\n", def.layer))?;
                }
            }
            for row in requirements.as_ref().map(requirement_rows).unwrap_or_default() {
                output.document(&format!("{}\n", row.id))?;
            }
        }
        ListFormat::Table => {
            if show_layers {
                output.header("Layers:")?;
                for def in layers.definitions() {
                    output.print(&format!(
                        "  {:<10} -{}, --{:<10} {}",
                        def.layer.as_str(),
                        def.short,
                        def.flag,
                        def.description
                    ))?;
                }
            }
            if let Some(requirements) = &requirements {
                if show_layers {
                    output.print("")?;
                }
                output.header("Requirements:")?;
                for row in requirement_rows(requirements) {
                    output.print(&format!(
                        "  {:<16} {}  ({})",
                        row.id, row.description, row.source
                    ))?;
                }
            }
        }
    }

    Ok(())
}

fn requirement_rows(catalog: &RequirementCatalog) -> Vec<RequirementRow> {
    catalog
        .iter()
        .map(|r| RequirementRow {
            id: r.id().to_string(),
            description: r.description().to_string(),
            source: r.source(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sorspec_core::domain::{Requirement, StaticConfig};

    #[test]
    fn rows_follow_catalog_order() {
        let catalog = RequirementCatalog::new()
            .with(Requirement::new("zeta", "last", StaticConfig::new("a: 1")))
            .with(Requirement::new("alpha", "first", StaticConfig::new("b: 2")));

        let rows = requirement_rows(&catalog);
        assert_eq!(rows[0].id, "alpha");
        assert_eq!(rows[1].source, "built-in");
    }

    #[test]
    fn listing_json_omits_unrequested_sections() {
        let listing = Listing {
            layers: Some(LayerCatalog::builtin().definitions()),
            requirements: None,
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["layers"][0]["layer"], "database");
        assert_eq!(json["layers"][0]["short"], "d");
        assert!(json.get("requirements").is_none());
    }
}
