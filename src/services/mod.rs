pub mod kernels;
pub mod session;

pub use kernels::{KernelEntry, KernelLibrary};
pub use session::{EditSession, SampleSlot};
