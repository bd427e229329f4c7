use std::process::ExitCode;

fn main() -> ExitCode {
    // A local `.env` may carry API_BASE_URL / AUTH_TOKEN.
    dotenvy::dotenv().ok();
    inventory_kpi::app::init_logging();

    match inventory_kpi::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
