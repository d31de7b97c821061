//! Interactive booking client
//!
//! Prompts for a booking, submits it and prints the confirmation. Failed
//! submissions show the form's errors and prompt again with the previous
//! answers as defaults.
//!
//! Run: cargo run --bin strike

use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use strike_client::{App, BookingApi, BookingForm, ClientConfig, NetworkBookingClient, SubmitOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "strike=info,strike_client=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(key_url = %config.key_url, booking_url = %config.booking_url, "Using booking service");

    let api = NetworkBookingClient::new(&config)?;
    let mut app = App::new(api);

    println!("\n🎳 Strike Bowling - book lanes & shoes");
    println!("=====================================\n");

    while let Some(form) = app.form_mut() {
        fill_form(form)?;

        println!("\nBooking...");
        match app.submit().await {
            Some(SubmitOutcome::Booked(_)) | None => {}
            Some(SubmitOutcome::AlreadySubmitting) => println!("A booking is already in progress."),
            Some(SubmitOutcome::Invalid(_) | SubmitOutcome::Failed(_)) => {
                if let Some(form) = app.form() {
                    print_errors(form);
                }
            }
        }
    }

    if let Some(confirmation) = app.confirmation() {
        println!("\n{}\n", confirmation);
    }

    Ok(())
}

fn fill_form<A: BookingApi>(form: &mut BookingForm<A>) -> anyhow::Result<()> {
    let date = prompt("Date (YYYY-MM-DD)", form.draft().date())?;
    form.set_date(date);

    let time = prompt("Time (HH:MM)", form.draft().time())?;
    form.set_time(time);

    let lanes = prompt("Lanes", &form.draft().lane_count().to_string())?;
    match lanes.parse() {
        Ok(lanes) => form.set_lane_count(lanes),
        Err(_) => println!("  '{}' is not a number, keeping {}", lanes, form.draft().lane_count()),
    }

    let people = prompt("Players", &form.draft().party_size().to_string())?;
    match people.parse() {
        Ok(people) => form.change_party_size(people),
        Err(_) => println!("  '{}' is not a number, keeping {}", people, form.draft().party_size()),
    }

    for index in 0..form.draft().shoe_sizes().len() {
        let current = form.draft().shoe_sizes()[index].clone();
        let size = prompt(&format!("Shoe size, player {}", index + 1), &current)?;
        form.change_shoe_size(index, size);
    }

    Ok(())
}

fn print_errors<A: BookingApi>(form: &BookingForm<A>) {
    if let Some(error) = form.shoe_error() {
        println!("❌ Shoes: {}", error);
    }
    if let Some(error) = form.general_error() {
        println!("❌ {}", error);
    }
    println!();
}

/// Read one trimmed line, falling back to `default` on an empty answer
fn prompt(label: &str, default: &str) -> anyhow::Result<String> {
    if default.is_empty() {
        print!("{}: ", label);
    } else {
        print!("{} [{}]: ", label, default);
    }
    io::stdout().flush().context("flush stdout")?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read stdin")?;
    if read == 0 {
        bail!("input closed before the booking was completed");
    }

    let answer = line.trim();
    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    })
}
