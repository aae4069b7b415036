mod cli;
mod demo;
mod infra;

use wardrobe_ai::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
