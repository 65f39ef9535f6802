pub mod cli;

use crate::core::{OutputFormat, SessionConfig};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "facade-order")]
#[command(about = "Interactive facade order calculator")]
pub struct CliConfig {
    /// Preselect the material (1=Film, 2=Painted, 3=Plastic) and skip the first prompt
    #[arg(long)]
    pub material: Option<u8>,

    /// Print the order summary as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl SessionConfig for CliConfig {
    fn preselected_material(&self) -> Option<u8> {
        self.material
    }

    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(material) = self.material {
            validate_range("material", material, 1, 3)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from(["facade-order", "--material", "2", "--json"]);
        assert_eq!(config.material, Some(2));
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["facade-order"]);
        assert_eq!(config.preselected_material(), None);
        assert_eq!(config.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_material_out_of_range() {
        let config = CliConfig {
            material: Some(9),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
