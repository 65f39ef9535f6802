use crate::domain::model::{Facade, FacadeKind, Material};
use crate::utils::error::Result;

/// Produces facades priced for one material family.
pub trait MaterialFactory {
    fn material(&self) -> Material;
    fn create_solid_facade(&self, width: f64, height: f64) -> Facade;
    fn create_glass_facade(&self, width: f64, height: f64) -> Facade;

    fn create(&self, kind: FacadeKind, width: f64, height: f64) -> Facade {
        match kind {
            FacadeKind::Solid => self.create_solid_facade(width, height),
            FacadeKind::Glass => self.create_glass_facade(width, height),
        }
    }
}

/// Line-oriented terminal boundary. `read_line` returns `None` at end of input.
pub trait Console {
    /// Order output (the summary).
    fn write(&mut self, text: &str) -> Result<()>;
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Prompts and re-prompt messages. Shares the output stream unless the
    /// console routes them elsewhere.
    fn write_prompt(&mut self, text: &str) -> Result<()> {
        self.write(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub trait SessionConfig {
    fn preselected_material(&self) -> Option<u8>;
    fn output_format(&self) -> OutputFormat;
}
