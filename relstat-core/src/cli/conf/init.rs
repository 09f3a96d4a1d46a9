use crate::conf::{CONFIG_FILE_NAME, RelstatConfig};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;

pub fn init(dir: PathBuf) -> Result<()> {
    let path = dir.join(CONFIG_FILE_NAME);

    // Refuse to overwrite an existing config
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
    fs::write(&path, template(&RelstatConfig::default()))
        .with_context(|| format!("failed to create {}", path.display()))?;

    println!("✔ Wrote {}", path.display());
    println!();
    println!("Next steps:");
    println!("  relstat config check {}", path.display());
    println!("  relstat analyze checks.log.gz");

    Ok(())
}

/// HCL rendering of `cfg`, one commented key per line.
pub fn template(cfg: &RelstatConfig) -> String {
    format!(
        r#"# Slowest checks kept by the analysis.
top_k = {top_k}

# Entries per ranked list in the report.
report_n = {report_n}

# Prefix of entity URLs in the report.
base_url = "{base_url}"

# Shorter lines are skipped without parsing.
min_line_len = {min_line_len}

# Decode on a reader thread.
threaded         = {threaded}
channel_capacity = {channel_capacity}

progress {{
  enabled         = {enabled}
  tick_every      = {tick_every}
  milestone_every = {milestone_every}
}}
"#,
        top_k = cfg.top_k,
        report_n = cfg.report_n,
        base_url = cfg.base_url,
        min_line_len = cfg.min_line_len,
        threaded = cfg.threaded,
        channel_capacity = cfg.channel_capacity,
        enabled = cfg.progress.enabled,
        tick_every = cfg.progress.tick_every,
        milestone_every = cfg.progress.milestone_every,
    )
}
