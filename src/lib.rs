pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::StdConsole, CliConfig};
pub use core::{
    factory::{FilmFactory, PaintedFactory, PlasticFactory},
    order::Order,
    session::{OrderSession, SessionReport, SessionState},
};
pub use domain::model::{Facade, FacadeKind, Material};
pub use domain::ports::{Console, MaterialFactory};
pub use utils::error::{OrderError, Result};
