pub mod id;
pub mod latency;

pub use id::IdGenerator;
pub use latency::SimulatedLatency;
