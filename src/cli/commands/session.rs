//! Interactive session command handler

use credit_manager::config::Config;
use credit_manager::core::{CreditManager, SessionOutcome, StdConsole};
use credit_manager::{info, verbose};

/// Run the interactive grade book on stdin/stdout until `X` or end of input.
pub fn run(config: &Config) {
    verbose!("creditmanager v{}", credit_manager::get_version());

    let mut manager =
        CreditManager::new(StdConsole::stdio()).show_menu(config.session.show_menu);

    match manager.run() {
        SessionOutcome::Exited => info!("Goodbye"),
        SessionOutcome::InputExhausted => {
            verbose!("Input closed; {} student(s) discarded", manager.book().student_count());
        }
    }
}
