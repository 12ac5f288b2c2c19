use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Logs go to a daily rolling file under `log_dir` when set, otherwise to stdout.
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init_tracing(log_dir: Option<&str>, log_level: Level) -> Option<WorkerGuard> {
    match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "app.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::fmt()
                .with_writer(non_blocking)
                .with_max_level(log_level)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt().with_max_level(log_level).init();
            None
        }
    }
}
