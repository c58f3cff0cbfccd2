//! Walkthrough Sample Entry Point
//!
//! Runs every lesson and reports the results through `tracing`.
//! `RUST_LOG` controls the filter; the default also shows the currying
//! events emitted by kleisli.

use kleisli::control::Maybe;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use walkthrough::lessons::{
    audited_addition, concat_list, count_steps, singleton, square_list, square_maybe,
    sum_list, sum_maybe, sum_of_squares_list, sum_of_squares_value,
};
use walkthrough::{WalkthroughConfig, WalkthroughError};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,kleisli=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match WalkthroughConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!("Failed to load configuration from environment: {error}");
            tracing::info!("Using default configuration");
            WalkthroughConfig::default()
        }
    };
    tracing::info!(count = config.count, start = ?config.start, "Configuration loaded");

    if let Err(error) = run(config) {
        tracing::error!("Walkthrough failed: {error}");
        std::process::exit(1);
    }
}

fn run(config: WalkthroughConfig) -> Result<(), WalkthroughError> {
    tracing::info!("Testing square over Maybe...");
    tracing::info!("{}", square_maybe(Maybe::Just(8)));
    tracing::info!("{}", square_maybe(Maybe::Nothing));

    tracing::info!("Testing sum over Maybe...");
    tracing::info!("{}", sum_maybe(Maybe::Just(41), Maybe::Just(1)));
    tracing::info!("{}", sum_maybe(Maybe::Nothing, Maybe::Just(1)));
    tracing::info!("{}", sum_maybe(Maybe::Just(41), Maybe::Nothing));
    tracing::info!("{}", sum_maybe(Maybe::<f32>::Nothing, Maybe::Nothing));

    tracing::info!("Testing sum of squares over Maybe...");
    tracing::info!("Just {}", sum_of_squares_value(Maybe::Just(3), Maybe::Just(4))?);

    tracing::info!("Testing square over lists...");
    tracing::info!("{:?}", square_list(vec![1, 2, 3, 4]));
    tracing::info!("{:?}", square_list(Vec::new()));

    tracing::info!("Testing sum over lists...");
    tracing::info!("{:?}", sum_list(vec![1.0, 3.3], vec![4.0, -1.0]));
    tracing::info!(
        "{:?}",
        concat_list(
            vec!["Hello_".into(), "Bye_".into()],
            vec!["World".into(), "Galaxy".into(), "Universe".into()],
        )
    );

    tracing::info!("Testing sum of squares over lists...");
    tracing::info!("{:?}", sum_of_squares_list(singleton(-10), vec![3, 4, 5]));

    let (first, second) = config.start;
    let (result, log) = audited_addition(first, second);
    tracing::info!("Result of logAddition({first}, {second}): {result}");
    for line in &log {
        tracing::info!("  {line}");
    }

    let (payload, count) = count_steps(config.count);
    tracing::info!("Result of computation: {payload}");
    tracing::info!("'log' of computation: {count}");

    Ok(())
}
