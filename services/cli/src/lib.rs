mod cli;
mod commands;
mod render;

use jobcompare::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
