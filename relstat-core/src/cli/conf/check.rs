use crate::conf::load_config_file;
use std::path::PathBuf;

pub fn check(path: PathBuf) -> anyhow::Result<()> {
    let cfg = load_config_file(&path)?;

    println!("✔ Config loaded successfully");
    println!("✔ top_k = {}, report_n = {}", cfg.top_k, cfg.report_n);
    println!("✔ entity URLs under {}", cfg.base_url);
    if cfg.threaded {
        println!("✔ threaded decoding ({} batches buffered)", cfg.channel_capacity);
    }

    Ok(())
}
