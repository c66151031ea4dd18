//! CLI command handlers. Each command is in its own file.

mod check;
mod completions;
mod config;
mod icons;
mod man;
mod serve;
mod tab;

use smile_core::config::SmileConfig;
use smile_core::controller::RedirectController;
use smile_core::state::RedirectState;

pub use check::{format_decision, run_check};
pub use completions::run_completions;
pub use config::run_config;
pub use icons::run_icons;
pub use man::run_man;
pub use serve::run_serve;
pub use tab::{format_actions, run_tab};

/// Controller from config, optionally forced into the disabled state.
pub(crate) fn controller_for(cfg: &SmileConfig, disabled: bool) -> RedirectController {
    let controller = RedirectController::from_config(cfg);
    if disabled {
        controller.with_state(RedirectState::Inactive)
    } else {
        controller
    }
}
