use crate::logging::Logger;
use crate::ui::demo::{DemoCtrl, DemoTable};

pub mod errors;
pub mod extensions;
pub mod logging;
pub mod style;
pub mod ui;

fn main() {
    let logger = Logger::new();
    let table = DemoTable::new();

    match table.print(true) {
        Ok(DemoCtrl::Exit) => std::process::exit(0),
        Ok(DemoCtrl::Continue) => {}
        Err(err) => {
            logger.error(format!("{err}"));
            std::process::exit(1);
        }
    }
}
