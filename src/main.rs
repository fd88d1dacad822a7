use anyhow::Context;
use restaurant_swipe::domain::deck::DeckStatus;
use restaurant_swipe::domain::favorites::FavoritesService;
use restaurant_swipe::domain::listing::ListingService;
use restaurant_swipe::domain::location::LocationStatus;
use restaurant_swipe::domain::restaurant::RestaurantRecord;
use restaurant_swipe::domain::session::{SearchPreferences, SwipeSession, QUICK_PICK_RADII};
use restaurant_swipe::error::AppError;
use restaurant_swipe::infrastructure::config::{Config, LogFormat};
use restaurant_swipe::infrastructure::repositories::{
    CatalogListingRepository, ListingRepository, YelpListingRepository,
};
use restaurant_swipe::infrastructure::storage::FileKeyValueStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "commands: like | pass | swipe <dx> | reset | refresh | radius <miles> | \
cuisine [term] | favorites | unfavorite <id> | clear | help | quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("loading configuration")?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        live_search = config.is_yelp_configured(),
        favorites_dir = %config.favorites_dir.display(),
        "Starting restaurant swipe"
    );

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Storage and favorites
    let store = Arc::new(
        FileKeyValueStore::new(&config.favorites_dir).context("opening favorites storage")?,
    );
    tracing::info!(dir = %store.dir().display(), "Favorites storage ready");
    let favorites = FavoritesService::new(store);

    // 2. Listing strategies
    let remote: Option<Arc<dyn ListingRepository>> = match config.yelp_key() {
        Some(key) => Some(Arc::new(YelpListingRepository::new(
            key.to_string(),
            config.yelp_base_url.clone(),
            Duration::from_secs(config.http_timeout_secs),
        )?)),
        None => {
            tracing::info!("No Yelp API key configured, using offline catalog");
            None
        }
    };
    let listing = Arc::new(ListingService::new(
        remote,
        Arc::new(CatalogListingRepository::new()),
    ));

    // 3. Session
    let preferences = SearchPreferences::new(config.default_radius_miles);
    let mut session = SwipeSession::new(listing, favorites, preferences);
    let location = LocationStatus::from_parts(config.latitude, config.longitude);
    tracing::info!(available = location.is_available(), "Location resolved");

    println!("{}", HELP);
    refresh(&mut session, &location).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.trim().splitn(2, ' ');
        let command = parts.next().unwrap_or_default();
        let argument = parts.next().map(str::trim);

        match command {
            "" => continue,
            "quit" | "q" => break,
            "help" => println!("{}", HELP),
            "like" | "l" => match session.like() {
                Ok(record) => println!("Saved {} to favorites", record.name()),
                Err(e) => report(e.into()),
            },
            "pass" | "p" => {
                if let Err(e) = session.pass() {
                    report(e.into());
                }
            }
            "swipe" => match argument.map(str::parse::<f64>) {
                Some(Ok(dx)) => match session.swipe(dx) {
                    Ok(Some(decision)) => println!("Swiped: {:?}", decision),
                    Ok(None) => println!("Card snapped back"),
                    Err(e) => report(e.into()),
                },
                _ => println!("usage: swipe <dx>"),
            },
            "reset" => session.reset(),
            "refresh" | "r" => refresh(&mut session, &location).await,
            "radius" => match argument.map(str::parse::<f64>) {
                Some(Ok(miles)) => {
                    session.preferences_mut().set_radius(miles);
                    refresh(&mut session, &location).await;
                }
                _ => println!("usage: radius <miles> (quick picks: {:?})", QUICK_PICK_RADII),
            },
            "cuisine" => {
                session
                    .preferences_mut()
                    .set_cuisine(argument.map(str::to_string));
                refresh(&mut session, &location).await;
            }
            "favorites" | "f" => print_favorites(session.favorites()),
            "unfavorite" => match argument {
                Some(id) => {
                    if session.favorites_mut().remove(id) {
                        println!("Removed {}", id);
                    } else {
                        println!("{} is not a favorite", id);
                    }
                }
                None => println!("usage: unfavorite <id>"),
            },
            "clear" => session.favorites_mut().clear(),
            other => println!("unknown command '{}'. {}", other, HELP),
        }

        print_deck(&session);
    }

    tracing::info!(favorites = session.favorites().len(), "Session finished");
    Ok(())
}

async fn refresh(session: &mut SwipeSession, location: &LocationStatus) {
    println!(
        "Finding restaurants within {} mi...",
        session.preferences().radius_miles()
    );
    match session.refresh(location).await {
        Ok(_) => {
            if let Some(notice) = session.notice() {
                println!("{}", notice);
            }
        }
        Err(e) => {
            report(e.into());
            println!("Set LATITUDE and LONGITUDE to discover nearby restaurants.");
        }
    }
}

fn report(error: AppError) {
    tracing::debug!(error = %error, "Command rejected");
    println!("{}", error);
}

fn print_card(record: &RestaurantRecord) {
    println!(
        "  {} [{}] {:.1}* {} | {}",
        record.name(),
        record.categories_string(),
        record.rating(),
        record.formatted_distance(),
        record.address()
    );
}

fn print_deck(session: &SwipeSession) {
    let deck = session.deck();
    match deck.status() {
        DeckStatus::Loading => println!("Finding nearby restaurants..."),
        DeckStatus::Error(message) => println!("Something went wrong: {} (refresh to retry)", message),
        DeckStatus::Empty => println!("No restaurants found. Try a larger radius."),
        DeckStatus::Exhausted => println!("You've seen all restaurants! 'reset' to search again."),
        DeckStatus::Active { current_index } => {
            println!("Card {} of {}:", current_index + 1, deck.candidates().len());
            for record in deck.visible() {
                print_card(record);
            }
        }
    }
}

fn print_favorites(favorites: &FavoritesService) {
    if favorites.is_empty() {
        println!("No favorites yet. Like a restaurant to save it.");
        return;
    }
    for record in favorites.favorites() {
        print!("  ({}) ", record.id());
        print_card(record);
    }
}

fn init_logging(config: &Config) {
    let default_filter = if config.is_development() {
        "restaurant_swipe=debug"
    } else {
        "restaurant_swipe=info"
    };

    // Logs go to stderr so they do not interleave with the card output
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
