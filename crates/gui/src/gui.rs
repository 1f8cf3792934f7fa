// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Higher or Lower egui app implementation.
use eframe::egui::*;
use rand::{SeedableRng, rngs::StdRng};

use crate::game_view::GameView;

/// App configuration parameters.
#[derive(Debug)]
pub struct Config {
    /// Optional RNG seed for a reproducible session.
    pub seed: Option<u64>,
}

/// The UI main frame.
pub struct AppFrame {
    view: GameView,
}

impl AppFrame {
    /// Creates a new App instance.
    pub fn new(config: Config, cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_theme(Theme::Light);

        log::info!("Creating new app with config: {config:?}");

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        AppFrame {
            view: GameView::new(rng),
        }
    }
}

impl eframe::App for AppFrame {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.view.update(ctx);
    }
}
