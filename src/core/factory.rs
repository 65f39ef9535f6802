use crate::core::{Facade, FacadeKind, Material, MaterialFactory};

#[derive(Debug, Clone, Copy, Default)]
pub struct FilmFactory;

impl FilmFactory {
    pub const SOLID_PRICE: f64 = 200.0;
    pub const GLASS_PRICE: f64 = 250.0;
}

impl MaterialFactory for FilmFactory {
    fn material(&self) -> Material {
        Material::Film
    }

    fn create_solid_facade(&self, width: f64, height: f64) -> Facade {
        Facade::new(FacadeKind::Solid, width, height, Self::SOLID_PRICE)
    }

    fn create_glass_facade(&self, width: f64, height: f64) -> Facade {
        Facade::new(FacadeKind::Glass, width, height, Self::GLASS_PRICE)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PaintedFactory;

impl PaintedFactory {
    pub const SOLID_PRICE: f64 = 300.0;
    pub const GLASS_PRICE: f64 = 350.0;
}

impl MaterialFactory for PaintedFactory {
    fn material(&self) -> Material {
        Material::Painted
    }

    fn create_solid_facade(&self, width: f64, height: f64) -> Facade {
        Facade::new(FacadeKind::Solid, width, height, Self::SOLID_PRICE)
    }

    fn create_glass_facade(&self, width: f64, height: f64) -> Facade {
        Facade::new(FacadeKind::Glass, width, height, Self::GLASS_PRICE)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlasticFactory;

impl PlasticFactory {
    pub const SOLID_PRICE: f64 = 400.0;
    pub const GLASS_PRICE: f64 = 450.0;
}

impl MaterialFactory for PlasticFactory {
    fn material(&self) -> Material {
        Material::Plastic
    }

    fn create_solid_facade(&self, width: f64, height: f64) -> Facade {
        Facade::new(FacadeKind::Solid, width, height, Self::SOLID_PRICE)
    }

    fn create_glass_facade(&self, width: f64, height: f64) -> Facade {
        Facade::new(FacadeKind::Glass, width, height, Self::GLASS_PRICE)
    }
}

impl Material {
    /// The factory used for every facade of an order in this material.
    pub fn factory(self) -> Box<dyn MaterialFactory> {
        match self {
            Material::Film => Box::new(FilmFactory),
            Material::Painted => Box::new(PaintedFactory),
            Material::Plastic => Box::new(PlasticFactory),
        }
    }
}
