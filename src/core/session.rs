use crate::core::{
    format_amount, Console, FacadeKind, Material, MaterialFactory, Order, OutputFormat, SessionConfig,
    CURRENCY_SUFFIX,
};
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::{parse_choice, parse_dimension};

pub const MATERIAL_PROMPT: &str = "Choose material type (1=Film, 2=Painted, 3=Plastic): ";
pub const FACADE_PROMPT: &str = "Choose facade type (1=Solid, 2=Glass, 0=Finish): ";
pub const WIDTH_PROMPT: &str = "Enter width (m): ";
pub const HEIGHT_PROMPT: &str = "Enter height (m): ";

const FINISH_CHOICE: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    SelectMaterial,
    SelectFacadeKind,
    ReadWidth(FacadeKind),
    ReadHeight { kind: FacadeKind, width: f64 },
    Summarize,
    Finished,
}

#[derive(Debug)]
pub struct SessionReport {
    pub material: Material,
    pub order: Order,
}

/// Drives one ordering run over a `Console`: pick a material once, then add
/// facades until the user finishes, then print the summary.
pub struct OrderSession<C: Console> {
    console: C,
    output_format: OutputFormat,
    state: SessionState,
    factory: Option<Box<dyn MaterialFactory>>,
    order: Order,
}

impl<C: Console> OrderSession<C> {
    pub fn new(console: C, config: &impl SessionConfig) -> Result<Self> {
        let mut session = Self {
            console,
            output_format: config.output_format(),
            state: SessionState::SelectMaterial,
            factory: None,
            order: Order::new(),
        };

        if let Some(choice) = config.preselected_material() {
            tracing::debug!("Material preselected by configuration: {}", choice);
            session.select_material(&choice.to_string())?;
        }

        Ok(session)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn material(&self) -> Option<Material> {
        self.factory.as_ref().map(|f| f.material())
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn run(&mut self) -> Result<SessionReport> {
        while self.state != SessionState::Finished {
            self.step()?;
        }

        let material = self.material().ok_or(OrderError::MaterialNotSelected)?;
        Ok(SessionReport {
            material,
            order: std::mem::take(&mut self.order),
        })
    }

    /// Advances the state machine by one prompt (or by printing the summary).
    pub fn step(&mut self) -> Result<()> {
        tracing::debug!("Session state: {:?}", self.state);

        match self.state {
            SessionState::SelectMaterial => match self.prompt(MATERIAL_PROMPT)? {
                Some(line) => self.select_material(&line)?,
                None => return Err(OrderError::InputClosed),
            },
            SessionState::SelectFacadeKind => match self.prompt(FACADE_PROMPT)? {
                Some(line) => self.select_facade_kind(&line)?,
                None => self.finish_early(),
            },
            SessionState::ReadWidth(kind) => match self.prompt(WIDTH_PROMPT)? {
                Some(line) => match parse_dimension("width", &line) {
                    Ok(width) => self.state = SessionState::ReadHeight { kind, width },
                    Err(e) => self.reject(e)?,
                },
                None => self.finish_early(),
            },
            SessionState::ReadHeight { kind, width } => match self.prompt(HEIGHT_PROMPT)? {
                Some(line) => match parse_dimension("height", &line) {
                    Ok(height) => self.add_facade(kind, width, height)?,
                    Err(e) => self.reject(e)?,
                },
                None => self.finish_early(),
            },
            SessionState::Summarize => {
                self.print_summary()?;
                self.state = SessionState::Finished;
            }
            SessionState::Finished => {}
        }

        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.console.write_prompt(text)?;
        self.console.read_line()
    }

    fn select_material(&mut self, input: &str) -> Result<()> {
        let material = parse_choice(input)
            .and_then(Material::from_choice)
            .ok_or_else(|| OrderError::InvalidMaterial {
                input: input.trim().to_string(),
            })?;

        tracing::info!("🏭 Using {} material factory", material);
        self.factory = Some(material.factory());
        self.state = SessionState::SelectFacadeKind;
        Ok(())
    }

    fn select_facade_kind(&mut self, input: &str) -> Result<()> {
        match parse_choice(input) {
            Some(FINISH_CHOICE) => {
                tracing::debug!("Finish requested with {} facade(s)", self.order.len());
                self.state = SessionState::Summarize;
                Ok(())
            }
            Some(choice) => match FacadeKind::from_choice(choice) {
                Some(kind) => {
                    self.state = SessionState::ReadWidth(kind);
                    Ok(())
                }
                None => self.reject(OrderError::InvalidFacadeKind {
                    input: input.trim().to_string(),
                }),
            },
            None => self.reject(OrderError::InvalidFacadeKind {
                input: input.trim().to_string(),
            }),
        }
    }

    fn add_facade(&mut self, kind: FacadeKind, width: f64, height: f64) -> Result<()> {
        let factory = self.factory.as_ref().ok_or(OrderError::MaterialNotSelected)?;
        let facade = factory.create(kind, width, height);
        tracing::info!(
            "➕ {} ({} {})",
            facade,
            format_amount(facade.calculate_cost()),
            CURRENCY_SUFFIX
        );
        self.order.add_facade(facade);
        self.state = SessionState::SelectFacadeKind;
        Ok(())
    }

    /// Recoverable input errors are shown and the same prompt is repeated.
    fn reject(&mut self, error: OrderError) -> Result<()> {
        if error.is_fatal() {
            return Err(error);
        }

        tracing::warn!("Rejected input: {}", error);
        self.console
            .write_prompt(&format!("{}\n", error.user_friendly_message()))
    }

    fn finish_early(&mut self) {
        tracing::warn!("Input closed, finishing order with {} facade(s)", self.order.len());
        self.state = SessionState::Summarize;
    }

    fn print_summary(&mut self) -> Result<()> {
        let material = self.material().ok_or(OrderError::MaterialNotSelected)?;

        let text = match self.output_format {
            OutputFormat::Text => format!(
                "{}Total: {} {}\n",
                self.order.display_order(),
                format_amount(self.order.calculate_total_cost()),
                CURRENCY_SUFFIX
            ),
            OutputFormat::Json => {
                let summary = self.order.summary(material);
                format!("{}\n", serde_json::to_string_pretty(&summary)?)
            }
        };

        self.console.write(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::StdConsole;
    use crate::CliConfig;
    use std::io::Cursor;

    #[test]
    fn test_height_without_material_is_an_error() {
        let console = StdConsole::new(Cursor::new(b"2\n".to_vec()), Vec::new());
        let mut session = OrderSession::new(console, &CliConfig::default()).unwrap();
        session.state = SessionState::ReadHeight {
            kind: FacadeKind::Solid,
            width: 1.0,
        };

        let err = session.step().unwrap_err();
        assert!(matches!(err, OrderError::MaterialNotSelected));
        assert!(err.is_fatal());
        assert!(session.order().is_empty());
    }
}
