use crate::analyze::{DotProgress, NoProgress, Progress, expand_inputs, run};
use crate::conf::{RelstatConfig, load_config};
use crate::report::{OutputFormat, Report, render_json, render_text, render_yaml};
use anyhow::Result;
use clap::Args;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Event logs to read: paths, glob patterns, or `-` for stdin.
    /// Gzip input is detected automatically.
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// How many slowest checks to keep
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Entries per ranked list
    #[arg(short = 'n', long)]
    pub report_n: Option<usize>,

    /// Prefix of the entity URLs in the report
    #[arg(long)]
    pub base_url: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Path to a relstat.hcl config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not print progress dots on stderr
    #[arg(long)]
    pub no_progress: bool,

    /// Decode on a reader thread
    #[arg(long)]
    pub threaded: bool,
}

impl AnalyzeArgs {
    /// Command line flags on top of the loaded config.
    pub fn apply(&self, cfg: &mut RelstatConfig) {
        if let Some(k) = self.top_k {
            cfg.top_k = k;
        }
        if let Some(n) = self.report_n {
            cfg.report_n = n;
        }
        if let Some(url) = &self.base_url {
            cfg.base_url = url.clone();
        }
        if self.no_progress {
            cfg.progress.enabled = false;
        }
        if self.threaded {
            cfg.threaded = true;
        }
    }
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let mut cfg = load_config(args.config.as_deref(), Path::new("."))?;
    args.apply(&mut cfg);
    cfg.validate()?;

    let inputs = expand_inputs(&args.inputs)?;

    let mut dots = DotProgress::new(io::stderr());
    let mut quiet = NoProgress;
    let progress: &mut dyn Progress = if cfg.progress.enabled {
        &mut dots
    } else {
        &mut quiet
    };

    let analysis = run(&inputs, cfg.analyze_options(), cfg.threaded, progress)?;
    let report = Report::build(&analysis, cfg.report_n, &cfg.base_url);

    let out = match args.format {
        OutputFormat::Text => render_text(&report, io::stdout().is_terminal()),
        OutputFormat::Json => render_json(&report)?,
        OutputFormat::Yaml => render_yaml(&report)?,
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    if !out.ends_with('\n') {
        writeln!(stdout)?;
    }
    Ok(())
}
