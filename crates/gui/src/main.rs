// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;

#[derive(Debug, Parser)]
struct Cli {
    /// RNG seed for a reproducible session.
    #[arg(long, short)]
    seed: Option<u64>,
}

fn main() -> eframe::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let init_size = [800.0, 600.0];
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(init_size)
            .with_min_inner_size(init_size)
            .with_max_inner_size(init_size)
            .with_title("Higher or Lower"),
        ..Default::default()
    };

    let cli = Cli::parse();
    let config = hilo_gui::Config { seed: cli.seed };

    eframe::run_native(
        "hilo",
        native_options,
        Box::new(|cc| Ok(Box::new(hilo_gui::AppFrame::new(config, cc)))),
    )
}
