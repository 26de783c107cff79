mod chart;
mod health;

pub use chart::{chart_routes, GeneratorState};
pub use health::health_routes;
