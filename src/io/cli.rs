//! Command-line interface for generating texture variations from a prompt

use crate::advisory::ollama::OllamaAdvisory;
use crate::advisory::requester::ParameterRequester;
use crate::advisory::service::{AdvisoryService, UnavailableAdvisory};
use crate::engine::batch::synthesize_batch;
use crate::engine::synthesizer::Synthesizer;
use crate::io::cleanup::prune_stale;
use crate::io::configuration::{
    AdvisoryConfig, DEFAULT_MODEL, DEFAULT_OLLAMA_URL, DEFAULT_OUTPUT_DIR, DEFAULT_TEXTURE_COUNT,
    DEFAULT_TEXTURE_SIZE, MAX_TEXTURE_DIMENSION, OUTPUT_PREFIX, STALE_ARTIFACT_MINUTES,
    SynthesisConfig,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_png, texture_filename};
use crate::io::manifest::{RunManifest, TextureEntry};
use crate::io::progress::BatchProgress;
use clap::Parser;
use log::{LevelFilter, debug, info};
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

#[derive(Parser, Debug)]
#[command(name = "texsynth")]
#[command(
    author,
    version,
    about = "Generate tileable textures from a text description"
)]
/// Command-line arguments for the texture generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Description of the texture, e.g. "mossy stone wall"
    #[arg(value_name = "PROMPT", required_unless_present = "status")]
    pub prompt: Option<String>,

    /// Texture width in pixels
    #[arg(
        short = 'w',
        long,
        default_value_t = DEFAULT_TEXTURE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_TEXTURE_DIMENSION))
    )]
    pub width: u32,

    /// Texture height in pixels (defaults to the width)
    #[arg(
        short = 'H',
        long,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_TEXTURE_DIMENSION))
    )]
    pub height: Option<u32>,

    /// Number of variations to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_TEXTURE_COUNT)]
    pub count: usize,

    /// Directory that receives the PNG files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Random seed for reproducible rendering
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Base URL of the Ollama server
    #[arg(long, env = "OLLAMA_URL", default_value = DEFAULT_OLLAMA_URL)]
    pub ollama_url: String,

    /// Model used to interpret the prompt
    #[arg(short, long, env = "OLLAMA_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Skip the advisory service and use keyword matching only
    #[arg(long)]
    pub offline: bool,

    /// Report whether the advisory service is reachable and exit
    #[arg(long)]
    pub status: bool,

    /// Delete stale PNG files in the output directory before generating
    #[arg(long)]
    pub prune: bool,

    /// Age in minutes after which a PNG counts as stale
    #[arg(
        long,
        value_name = "MINUTES",
        default_value_t = STALE_ARTIFACT_MINUTES,
        requires = "prune"
    )]
    pub prune_minutes: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log advisory and rendering decisions
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level implied by the flags, used when `RUST_LOG` is unset
    pub const fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        }
    }

    /// Advisory connection settings from the flags
    pub fn advisory_config(&self) -> AdvisoryConfig {
        AdvisoryConfig::new(self.ollama_url.clone(), self.model.clone())
    }

    /// Synthesis settings from the flags; a missing height means square
    pub fn synthesis_config(&self) -> SynthesisConfig {
        SynthesisConfig {
            width: self.width,
            height: self.height.unwrap_or(self.width),
            count: self.count,
            seed: self.seed,
        }
    }
}

/// Install the `env_logger` backend honouring `RUST_LOG` over the CLI flags
pub fn init_logging(cli: &Cli) {
    let _ = env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .try_init();
}

/// Runs one CLI invocation end to end
pub struct TextureRunner {
    cli: Cli,
}

impl TextureRunner {
    /// Create a runner for parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the requested action
    ///
    /// # Errors
    ///
    /// Returns an error if pruning, exporting or manifest serialisation fails.
    /// Advisory and rendering failures never surface here.
    pub fn run(&self) -> Result<()> {
        if self.cli.status {
            return self.report_status();
        }

        let prompt = self
            .cli
            .prompt
            .as_deref()
            .ok_or_else(|| invalid_parameter("prompt", &"", &"a prompt is required"))?;

        if self.cli.prune {
            let removed = prune_stale(
                &self.cli.output,
                Duration::from_secs(self.cli.prune_minutes.saturating_mul(60)),
                SystemTime::now(),
            )?;
            info!("Pruned {} stale texture(s)", removed.len());
        }

        let service: Box<dyn AdvisoryService> = if self.cli.offline {
            Box::new(UnavailableAdvisory)
        } else {
            Box::new(OllamaAdvisory::new(self.cli.advisory_config())?)
        };
        let synthesizer = Synthesizer::from_requester(ParameterRequester::new(service));

        let manifest = self.generate(&synthesizer, prompt)?;
        Self::print_manifest(&manifest)
    }

    fn generate(
        &self,
        synthesizer: &Synthesizer<Box<dyn AdvisoryService>>,
        prompt: &str,
    ) -> Result<RunManifest> {
        let config = self.cli.synthesis_config();
        let progress = if self.cli.should_show_progress() {
            BatchProgress::new(config.count, prompt)
        } else {
            BatchProgress::hidden(config.count)
        };

        info!(
            "Generating {} texture(s) for \"{prompt}\" at {}x{}",
            config.count, config.width, config.height
        );
        let textures = synthesize_batch(synthesizer, prompt, &config, |_| {
            progress.complete_one();
        });
        debug!(
            "Rendered {} of {} texture(s)",
            progress.completed(),
            progress.total()
        );
        progress.finish();

        let now = chrono::Utc::now();
        let stamp = now.timestamp_millis();
        let mut entries = Vec::with_capacity(textures.len());
        for (index, texture) in textures.iter().enumerate() {
            let id = index + 1;
            let filename = texture_filename(OUTPUT_PREFIX, id, stamp);
            let path = self.cli.output.join(&filename);
            export_png(&texture.buffer, &path)?;
            entries.push(TextureEntry::new(id, filename, path, texture));
        }

        Ok(RunManifest {
            success: true,
            prompt: prompt.to_string(),
            width: config.width,
            height: config.height,
            generated_at: now.to_rfc3339(),
            textures: entries,
        })
    }

    // Allow print for the machine-readable manifest on stdout
    #[allow(clippy::print_stdout)]
    fn print_manifest(manifest: &RunManifest) -> Result<()> {
        println!("{}", manifest.to_json()?);
        Ok(())
    }

    // Allow print for the status report
    #[allow(clippy::print_stdout)]
    fn report_status(&self) -> Result<()> {
        let config = self.cli.advisory_config();
        let advisory = OllamaAdvisory::new(config.clone())?;
        match advisory.list_capabilities() {
            Ok(capabilities) if capabilities.is_usable() => {
                println!("connected {} ({})", config.base_url, capabilities.models.join(", "));
            }
            Ok(_) => {
                println!("disconnected {}: no models installed", config.base_url);
            }
            Err(err) => {
                println!("disconnected {}: {err}", config.base_url);
            }
        }
        Ok(())
    }
}
