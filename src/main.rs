use std::io;
use std::process::ExitCode;

use log::error;

use bytestore::session::SessionLoop;
use bytestore::shared::logger::setup_logger;
use bytestore::store::BoundedStore;

fn main() -> ExitCode {
    setup_logger();

    let mut store = BoundedStore::default();
    let mut session = SessionLoop::new(&mut store);

    let stdin = io::stdin();
    let stdout = io::stdout();
    match session.run(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("session aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
