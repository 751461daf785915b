mod app;
mod case;
mod cli;
mod discovery;
mod execution;
mod panic_message;
mod runner;
mod stats;

fn main() -> std::process::ExitCode {
    app::run()
}
