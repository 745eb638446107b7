use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    patient_dashboard::init_tracing();

    match patient_dashboard::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
