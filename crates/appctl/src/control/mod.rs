//! The five application operations and their dual-mode invocation contract.

pub mod args;
pub mod delivery;
mod dispatch;
pub mod errors;
pub mod handler;
pub mod normalize;
pub mod script;
pub mod types;
mod validation;

pub use args::{Arg, Callback};
pub use delivery::{Deferred, Outcome};
pub use errors::ControlError;
pub use handler::AppControl;
pub use types::{
    ListOptions, MinimizeOptions, OperationKind, OperationOptions, OperationRequest, Target,
};
