use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match vessel_nav::run_with_config().await {
        Ok(report) => {
            tracing::info!(
                ticks = report.ticks,
                waypoints_reached = report.waypoints_reached,
                manual_overrides = report.manual_overrides,
                completed = report.completed,
                position = %report.final_snapshot.position,
                "simulation finished"
            );
            if report.completed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "simulation failed");
            ExitCode::FAILURE
        }
    }
}
