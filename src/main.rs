use code_consolidator::app;
use env_logger::Env;
use std::process::exit;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(err) = app::run() {
        log::error!("Unexpected error: {:#}", err);
        exit(1);
    }
}
