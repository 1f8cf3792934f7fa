// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game view.
use eframe::egui::*;
use log::info;
use rand::rngs::StdRng;

use hilo_cards::Card;
use hilo_core::{Action, Guess, Outcome, Round, RoundState};

/// The game table view.
///
/// Owns the round state and the session RNG, maps keyboard and pointer input
/// to round actions, and paints the table as a projection of the round state.
pub struct GameView {
    round: Round,
    rng: StdRng,
}

impl GameView {
    const CANVAS: Vec2 = vec2(800.0, 600.0);
    const TABLE_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

    const CARD_SIZE: Vec2 = vec2(100.0, 150.0);
    const CARDS_X: [f32; Round::CARDS] = [150.0, 350.0, 550.0];
    const CARDS_Y: f32 = 200.0;

    const BUTTON_SIZE: Vec2 = vec2(150.0, 60.0);

    const GREEN: Color32 = Color32::from_rgb(0, 180, 0);
    const RED: Color32 = Color32::from_rgb(200, 0, 0);
    const BLUE: Color32 = Color32::from_rgb(0, 120, 200);

    const MSG_FONT: FontId = FontId::new(36.0, FontFamily::Proportional);
    const SMALL_FONT: FontId = FontId::new(20.0, FontFamily::Proportional);
    const SUIT_FONT: FontId = FontId::new(40.0, FontFamily::Proportional);

    /// Creates a new [GameView] dealing the first round.
    pub fn new(mut rng: StdRng) -> Self {
        let round = Round::deal(&mut rng);
        info!("Dealt {:?}", round.cards());

        Self { round, rng }
    }

    /// Process a view update.
    pub fn update(&mut self, ctx: &Context) {
        if let Some(action) = self.poll_keyboard(ctx) {
            self.apply(action);
        }

        Window::new("Higher or Lower")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .title_bar(false)
            .frame(Frame::NONE.fill(Self::TABLE_COLOR))
            .show(ctx, |ui| {
                let (rect, _) = ui.allocate_exact_size(Self::CANVAS, Sense::hover());
                self.paint_cards(ui, &rect);

                let action = match self.round.state() {
                    RoundState::Resolved(outcome) => self.paint_resolved(ui, &rect, outcome),
                    _ => self.paint_guess_controls(ui, &rect),
                };

                if let Some(action) = action {
                    self.apply(action);
                }
            });
    }

    /// Applies an input action, both input paths end up here.
    fn apply(&mut self, action: Action) {
        self.round.apply(action, &mut self.rng);

        match self.round.state() {
            RoundState::Resolved(outcome) => info!("{action:?}: {}", outcome.message()),
            state => info!("{action:?}: {state:?} {:?}", self.round.cards()),
        }
    }

    fn poll_keyboard(&self, ctx: &Context) -> Option<Action> {
        let resolved = matches!(self.round.state(), RoundState::Resolved(_));

        ctx.input(|input| {
            input.events.iter().find_map(|event| match event {
                // Skip held key repeats so one press is one action.
                Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => key_action(*key, resolved),
                _ => None,
            })
        })
    }

    fn paint_cards(&self, ui: &mut Ui, rect: &Rect) {
        for (slot, card) in self.round.cards().iter().enumerate() {
            let card_rect = Rect::from_min_size(
                rect.left_top() + vec2(Self::CARDS_X[slot], Self::CARDS_Y),
                Self::CARD_SIZE,
            );

            if self.round.revealed(slot) {
                self.paint_card_face(ui, &card_rect, *card);
            } else {
                self.paint_card_back(ui, &card_rect);
            }
        }
    }

    fn paint_card_face(&self, ui: &mut Ui, rect: &Rect, card: Card) {
        paint_card_frame(ui, rect);

        let label = card.rank().label();

        ui.painter().text(
            rect.left_top() + vec2(8.0, 8.0),
            Align2::LEFT_TOP,
            label,
            Self::SMALL_FONT,
            Color32::BLACK,
        );

        let suit_color = if card.suit().is_red() {
            Self::RED
        } else {
            Color32::BLACK
        };

        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            card.suit().symbol(),
            Self::SUIT_FONT,
            suit_color,
        );

        ui.painter().text(
            rect.right_bottom() - vec2(8.0, 8.0),
            Align2::RIGHT_BOTTOM,
            label,
            Self::SMALL_FONT,
            Color32::BLACK,
        );
    }

    fn paint_card_back(&self, ui: &mut Ui, rect: &Rect) {
        paint_card_frame(ui, rect);

        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            "?",
            Self::MSG_FONT,
            Self::RED,
        );
    }

    fn paint_guess_controls(&self, ui: &mut Ui, rect: &Rect) -> Option<Action> {
        ui.painter().text(
            rect.left_top() + vec2(rect.width() / 2.0, 360.0),
            Align2::CENTER_TOP,
            "Or use ↑ for Higher, ↓ for Lower",
            Self::SMALL_FONT,
            Color32::BLACK,
        );

        // Vertical buttons, higher on top, lower below.
        let higher_rect = Rect::from_min_size(
            rect.left_top() + vec2((rect.width() - Self::BUTTON_SIZE.x) / 2.0, 400.0),
            Self::BUTTON_SIZE,
        );

        let lower_rect = Rect::from_min_size(
            rect.left_top() + vec2((rect.width() - Self::BUTTON_SIZE.x) / 2.0, 480.0),
            Self::BUTTON_SIZE,
        );

        let mut action = None;

        if self.paint_button(ui, &higher_rect, "Higher", Self::GREEN) {
            action = Some(Action::Guess(Guess::Higher));
        }

        if self.paint_button(ui, &lower_rect, "Lower", Self::RED) {
            action = Some(Action::Guess(Guess::Lower));
        }

        action
    }

    fn paint_resolved(&self, ui: &mut Ui, rect: &Rect, outcome: Outcome) -> Option<Action> {
        let color = if outcome.is_win() {
            Self::GREEN
        } else {
            Self::RED
        };

        ui.painter().text(
            rect.left_top() + vec2(rect.width() / 2.0, 100.0),
            Align2::CENTER_TOP,
            outcome.message(),
            Self::MSG_FONT,
            color,
        );

        let reset_rect = Rect::from_min_size(
            rect.left_top() + vec2((rect.width() - Self::BUTTON_SIZE.x) / 2.0, 450.0),
            Self::BUTTON_SIZE,
        );

        let clicked = self.paint_button(ui, &reset_rect, "Reset", Self::BLUE);

        ui.painter().text(
            rect.left_top() + vec2(rect.width() / 2.0, 520.0),
            Align2::CENTER_TOP,
            "Press SPACE to play again",
            Self::SMALL_FONT,
            Color32::BLACK,
        );

        clicked.then_some(Action::Reset)
    }

    fn paint_button(&self, ui: &mut Ui, rect: &Rect, label: &str, fill: Color32) -> bool {
        let btn = Button::new(
            RichText::new(label)
                .font(Self::MSG_FONT)
                .color(Color32::WHITE),
        )
        .fill(fill)
        .corner_radius(8.0);

        ui.put(*rect, btn).clicked()
    }
}

/// Maps a key press to a round action.
///
/// Arrows guess while the round is live, space resets once resolved, any
/// other key is a no-op.
fn key_action(key: Key, resolved: bool) -> Option<Action> {
    match key {
        Key::ArrowUp if !resolved => Some(Action::Guess(Guess::Higher)),
        Key::ArrowDown if !resolved => Some(Action::Guess(Guess::Lower)),
        Key::Space if resolved => Some(Action::Reset),
        _ => None,
    }
}

fn paint_card_frame(ui: &mut Ui, rect: &Rect) {
    ui.painter().rect(
        *rect,
        8.0,
        Color32::WHITE,
        Stroke::new(3.0, Color32::BLACK),
        StrokeKind::Inside,
    );
}
