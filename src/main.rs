mod config;
mod core;
mod models;
mod services;
mod views;

use crate::config::Settings;
use crate::core::refresh::RefreshBus;
use crate::services::ServiceClient;
use crate::views::{AnalyticsView, CatalogView, ContactView, FeedbackView, PredictorView};
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting houseboard dashboard...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");
    info!(
        "Prediction endpoint: {}, analytics endpoint: {}",
        settings.service.predictor_url, settings.service.analytics_url
    );

    let client = Arc::new(ServiceClient::from_settings(&settings.service));
    let refresh = RefreshBus::default();

    let mut predictor = PredictorView::new(client.clone(), refresh.clone());
    let mut catalog = CatalogView::new(client.clone());
    let mut analytics = AnalyticsView::new(client.clone(), refresh.subscribe());
    let mut feedback = FeedbackView::new(client.clone());
    let mut contact = ContactView::new(client.clone());

    match client.health().await {
        Ok(health) => info!("Prediction service reachable: {}", health.status),
        Err(e) => warn!("Prediction service health check failed: {}", e),
    }

    // Initial mount: catalog and analytics both fetch on startup
    catalog.load().await;
    analytics.refresh().await;

    println!(
        "houseboard {} - type 'help' for commands",
        env!("CARGO_PKG_VERSION")
    );

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("").to_lowercase();
        let args: Vec<&str> = parts.collect();

        match command.as_str() {
            "exit" | "quit" | "q" => break,
            "help" => print_help(),
            "predict" => {
                for index in 0..3 {
                    predictor.set_field(index, args.get(index).copied().unwrap_or(""));
                }
                match predictor.submit().await {
                    Ok(_) => {
                        if let Some(result) = predictor.render_result() {
                            println!("{}", result);
                        }
                    }
                    Err(e) => println!("[!] {}", e),
                }
            }
            "houses" => {
                if catalog.is_loading() {
                    println!("(no houses loaded)");
                }
                for row in catalog.render_rows() {
                    println!("{}", row);
                }
            }
            "analytics" => {
                if analytics.is_loading() {
                    println!("(loading analytics...)");
                }
                print!("{}", analytics.render());
            }
            "refresh" => {
                analytics.refresh().await;
                print!("{}", analytics.render());
            }
            "delete" => {
                let id = args.first().copied().unwrap_or("");
                if id.is_empty() {
                    println!("usage: delete <id>");
                } else {
                    match analytics.delete(id).await {
                        Ok(()) => println!("Prediction deleted"),
                        Err(e) => println!("[!] {}", e),
                    }
                }
            }
            "feedback" => {
                let rating = args.first().and_then(|raw| raw.parse().ok()).unwrap_or(0);
                feedback.set_rating(rating);
                feedback.set_comment(&args.get(1..).unwrap_or(&[]).join(" "));
                let label = FeedbackView::rating_label(rating);
                match feedback.submit().await {
                    Ok(()) => println!(
                        "Feedback submitted successfully ({})",
                        label.unwrap_or("?")
                    ),
                    Err(e) => println!("[!] {}", e),
                }
            }
            "contact" => {
                contact.set_name(args.first().copied().unwrap_or(""));
                contact.set_email(args.get(1).copied().unwrap_or(""));
                contact.set_message(&args.get(2..).unwrap_or(&[]).join(" "));
                match contact.submit().await {
                    Ok(()) => println!("Message sent successfully"),
                    Err(e) => println!("[!] {}", e),
                }
            }
            _ => println!("Unknown command '{}', try 'help'", command),
        }

        // A completed prediction queues a refresh event; consume them here
        // so the analytics view stays current.
        let refreshed = analytics.drain_refresh_events().await;
        if refreshed > 0 {
            tracing::debug!("Analytics refreshed {} time(s)", refreshed);
        }
    }

    info!("Shutting down");
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  predict <area> <bedrooms> <bathrooms>  - request a price prediction");
    println!("  houses                                 - list available houses");
    println!("  analytics                              - show the analytics snapshot");
    println!("  refresh                                - re-fetch the analytics snapshot");
    println!("  delete <id>                            - delete one prediction record");
    println!("  feedback <rating 1-5> <comment>        - submit feedback");
    println!("  contact <name> <email> <message>       - send a contact message");
    println!("  quit                                   - exit");
}
