use anyhow::Result;
use chrono::Local;
use env_logger::Env;

use jmattaa::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    jmattaa::run(&config, Local::now().date_naive()).await?;

    println!("Generated {} successfully.", config.output_path.display());

    Ok(())
}
