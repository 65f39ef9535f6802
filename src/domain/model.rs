use serde::{Deserialize, Serialize};
use std::fmt;

pub const CURRENCY_SUFFIX: &str = "UAH";

/// Rounds to two decimals and drops trailing zeros: `1450`, `2.5`, `0.1`.
pub fn format_amount(value: f64) -> String {
    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacadeKind {
    Solid,
    Glass,
}

impl FacadeKind {
    pub fn label(self) -> &'static str {
        match self {
            FacadeKind::Solid => "Solid Facade",
            FacadeKind::Glass => "Glass Facade",
        }
    }

    /// Menu mapping: 1 = Solid, 2 = Glass. `0` (finish) is handled by the caller.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(FacadeKind::Solid),
            2 => Some(FacadeKind::Glass),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    Film,
    Painted,
    Plastic,
}

impl Material {
    pub fn name(self) -> &'static str {
        match self {
            Material::Film => "Film",
            Material::Painted => "Painted",
            Material::Plastic => "Plastic",
        }
    }

    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Material::Film),
            2 => Some(Material::Painted),
            3 => Some(Material::Plastic),
            _ => None,
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A rectangular panel priced by area.
#[derive(Debug, Clone, PartialEq)]
pub struct Facade {
    kind: FacadeKind,
    width: f64,
    height: f64,
    unit_price: f64,
}

impl Facade {
    pub fn new(kind: FacadeKind, width: f64, height: f64, unit_price: f64) -> Self {
        Self {
            kind,
            width,
            height,
            unit_price,
        }
    }

    pub fn kind(&self) -> FacadeKind {
        self.kind
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn calculate_cost(&self) -> f64 {
        self.width * self.height * self.unit_price
    }

    pub fn display(&self) -> String {
        format!(
            "{}: {}x{} m",
            self.kind.label(),
            format_amount(self.width),
            format_amount(self.height)
        )
    }
}

impl fmt::Display for Facade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub kind: FacadeKind,
    pub width: f64,
    pub height: f64,
    pub unit_price: f64,
    pub cost: f64,
}

impl From<&Facade> for OrderLine {
    fn from(facade: &Facade) -> Self {
        Self {
            kind: facade.kind(),
            width: facade.width(),
            height: facade.height(),
            unit_price: facade.unit_price(),
            cost: facade.calculate_cost(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub material: Material,
    pub items: Vec<OrderLine>,
    pub total: f64,
    pub currency: String,
}
