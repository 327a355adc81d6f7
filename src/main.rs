use coinlens::app::App;
use color_eyre::Result;

// Logs go to a file: the terminal is owned by the TUI while we run.
fn init_logger() {
    let path = std::env::temp_dir().join("coinlens.log");
    if let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("info"),
        )
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
    }
}

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_logger();

    let app = App::new();
    app.run().await
}
