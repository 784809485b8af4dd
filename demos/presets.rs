use cadenza::{Composer, Preset};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    for preset in Preset::catalog() {
        let entry = Composer::with_preset(&preset).entry();
        println!("{} - {}", preset.name, preset.description);
        println!("  crontab : {}", entry.command);
        println!("  meaning : {}", entry.sentence);
    }
}
