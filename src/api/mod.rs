pub mod frontend;
pub mod health;
pub mod process;

pub use frontend::handle_frontend;
pub use health::{handle_health, HealthResponse, __path_handle_health};
pub use process::{
    handle_process, resolve_phase, ErrorResponse, ProcessForm, ProcessResponse,
    __path_handle_process,
};
