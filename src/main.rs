use clap::Parser;
use coursework_kit::config::cli::{Command, MarsArgs};
use coursework_kit::core::{currency, dedup, dinner::DinnerDecider, palette::ColorDemo, planet};
use coursework_kit::core::storefront::GroceryStore;
use coursework_kit::domain::library::book_demo;
use coursework_kit::utils::error::CourseError;
use coursework_kit::utils::{logger, validation::Validate};
use coursework_kit::{CliConfig, MarsGallery, MarsPhotosRepository, MarsUiState};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn report_and_exit(e: &CourseError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

async fn run_mars(args: &MarsArgs) -> Result<(), CourseError> {
    let options = args.options();
    options.validate()?;

    let repository = MarsPhotosRepository::new(options)?;
    let mut gallery = MarsGallery::open(repository, args.rover, args.sol).await;
    if let Some(id) = args.photo {
        if !gallery.select_photo(id) {
            tracing::warn!("Photo #{} is not in the loaded result", id);
        }
    }

    println!("{}", gallery.render());
    if let MarsUiState::Error(_) = gallery.state() {
        std::process::exit(2);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config (api key redacted): {:?}", config);

    match &config.command {
        Command::Dedup { input } => println!("{}", dedup::render_dedup(input)),
        Command::Currency { amount } => println!("{}", currency::render_currency(amount)),
        Command::Weight {
            weight,
            planet: selection,
        } => println!("{}", planet::render_weight(weight, *selection)),
        Command::Planets => {
            for (index, entry) in planet::PLANETS.iter().enumerate() {
                println!("{}. {} (x{})", index + 1, entry.name, entry.gravity_ratio);
            }
        }
        Command::Book => {
            for line in book_demo() {
                println!("{}", line);
            }
        }
        Command::Dinner { add, seed } => {
            let mut decider = DinnerDecider::default();
            for food in add {
                if !decider.add_food(food) {
                    tracing::warn!("Ignoring blank dinner option");
                }
            }
            decider.decide(&mut rng_from(*seed));
            println!("{}", decider.render());
        }
        Command::Colors {
            layout_taps,
            image_taps,
            seed,
        } => {
            let mut rng = rng_from(*seed);
            let mut demo = ColorDemo::default();
            for _ in 0..*layout_taps {
                demo.change_layout_background(&mut rng);
            }
            for _ in 0..*image_taps {
                demo.change_image_background(&mut rng);
            }
            println!("{}", demo.render());
        }
        Command::Grocery { tab, product } => {
            let mut store = GroceryStore::default();
            store.select_tab(*tab);
            if let Some(name) = product {
                if store.open_product(name).is_none() {
                    let e = CourseError::invalid_input("product", name, "not in the catalog");
                    report_and_exit(&e);
                }
            }
            match store.render() {
                Ok(text) => println!("{}", text),
                Err(e) => report_and_exit(&e),
            }
        }
        Command::Mars(args) => {
            if let Err(e) = run_mars(args).await {
                report_and_exit(&e);
            }
        }
    }

    Ok(())
}
