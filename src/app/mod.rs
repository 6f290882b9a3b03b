// Application layer - Use case interactors

pub mod container;
pub mod stats_interactor;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use stats_interactor::StatsInteractor;
