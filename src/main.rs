use anyhow::Result;
use flashcards::engine::core::EngineConfig;
use flashcards::engine::EngineApp;

const CONFIG_PATH: &str = "flashcards.ron";

fn main() -> Result<()> {
    init_tracing();

    let config = match EngineConfig::load(CONFIG_PATH) {
        Ok(config) => config,
        Err(err) => {
            tracing::debug!(%err, path = CONFIG_PATH, "no usable config file, using defaults");
            EngineConfig::default()
        }
    };

    let app = EngineApp::new(config);
    app.run()
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
