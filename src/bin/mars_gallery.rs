use clap::Parser;
use coursework_kit::domain::ports::GalleryConfigProvider;
use coursework_kit::utils::{logger, validation::Validate};
use coursework_kit::{FailurePolicy, GalleryToml, MarsGallery, MarsPhotosRepository, MarsUiState, RoverName};

#[derive(Parser)]
#[command(name = "mars-gallery")]
#[command(about = "Mars rover photo gallery with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "mars-gallery.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the rover from config
    #[arg(long, value_enum, ignore_case = true)]
    rover: Option<RoverName>,

    /// Override the sol from config
    #[arg(long)]
    sol: Option<u32>,

    /// Report fetch failures instead of showing placeholder photos
    #[arg(long)]
    strict: bool,

    /// Open the detail view for this photo id after loading
    #[arg(long)]
    photo: Option<u64>,

    /// Show the resolved configuration without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match GalleryToml::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    let verbose = args.verbose || config.verbose();
    if config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Some(rover) = args.rover {
        config.gallery.rover = rover;
        tracing::info!("🔧 Rover overridden to: {}", rover);
    }
    if let Some(sol) = args.sol {
        config.gallery.sol = sol;
        tracing::info!("🔧 Sol overridden to: {}", sol);
    }
    if args.strict {
        config.gallery.on_failure = FailurePolicy::Surface;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let options = config.options();
    if args.dry_run {
        println!("🔍 Dry run");
        println!("  Endpoint:   {}", options.base_url());
        println!("  Rover:      {}", config.gallery.rover);
        println!("  Sol:        {}", config.gallery.sol);
        println!("  Timeout:    {:?}", options.timeout());
        println!("  On failure: {:?}", options.failure_policy());
        return Ok(());
    }

    let repository = MarsPhotosRepository::new(options)?;
    let mut gallery = MarsGallery::open(repository, config.gallery.rover, config.gallery.sol).await;
    if let Some(id) = args.photo {
        if !gallery.select_photo(id) {
            tracing::warn!("Photo #{} is not in the loaded result", id);
        }
    }
    println!("{}", gallery.render());

    if let MarsUiState::Error(message) = gallery.state() {
        tracing::error!("❌ {}", message);
        std::process::exit(2);
    }

    Ok(())
}
