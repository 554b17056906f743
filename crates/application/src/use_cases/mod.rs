pub mod simulate;

pub use simulate::{DispatchOutcome, SimulateResponseUseCase};
