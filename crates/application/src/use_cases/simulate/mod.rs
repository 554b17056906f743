mod simulate_response;

pub use simulate_response::{DispatchOutcome, SimulateResponseUseCase};
