/// Factories for creating adapter instances
mod presenter_factory;

pub use presenter_factory::{PresenterFactory, PresenterType};
