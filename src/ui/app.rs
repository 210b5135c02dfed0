//! Main application for the Tic-Tac-Toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::{GameMode, GameOutcome, Player, PlayerKind, SearchType};
use super::board_view::{BoardView, MoveAnimation};
use super::controller::{GameController, StartOptions};
use super::theme::*;

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    controller: GameController,
    board_view: BoardView,
    animation: MoveAnimation,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self::with_options(StartOptions::default())
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, options: StartOptions) -> Self {
        Self::with_options(options)
    }

    fn with_options(options: StartOptions) -> Self {
        Self {
            controller: GameController::new(options),
            board_view: BoardView::default(),
            animation: MoveAnimation::default(),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.controller.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.controller.undo();
                        ui.close_menu();
                    }
                    if ui.button("Redo (R)").clicked() {
                        self.controller.redo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Settings", |ui| {
                    let mode_label = format!("Mode: {} (M)", self.controller.session.mode());
                    if ui.button(mode_label).clicked() {
                        self.controller.toggle_mode();
                        ui.close_menu();
                    }
                    let difficulty_label =
                        format!("Difficulty: {} (D)", self.controller.session.difficulty());
                    if ui.button(difficulty_label).clicked() {
                        self.controller.cycle_difficulty();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let session = &self.controller.session;
                    let mode_text = match session.mode() {
                        GameMode::PvC => format!("PvC - {}", session.difficulty()),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.controller.session.mode() == GameMode::PvC {
                    ui.add_space(10.0);
                    self.render_computer_card(ui);
                }

                let outcome = self.controller.session.outcome();
                if outcome.is_terminal() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = self.controller.message.clone() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn mark_color(player: Player) -> egui::Color32 {
        match player {
            Player::One => X_COLOR,
            Player::Two => O_COLOR,
        }
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X").size(22.0).strong().color(X_COLOR));
            ui.label(RichText::new("O").size(22.0).strong().color(O_COLOR));
            ui.add_space(4.0);
            ui.label(RichText::new("TIC-TAC-TOE").size(20.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.controller.session.current_player();

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, BG_COLOR);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    player.symbol(),
                    egui::FontId::proportional(28.0),
                    Self::mark_color(player),
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("{} to move", player.symbol()))
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if let Some(elapsed) = self.controller.ai_thinking_elapsed() {
                        (format!("Computer thinking... {:.2}s", elapsed.as_secs_f32()), STATUS_WARNING)
                    } else if self.controller.session.is_game_over() {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else if self.controller.is_human_turn() {
                        ("Your turn".to_string(), STATUS_OK)
                    } else {
                        ("Computer's turn".to_string(), STATUS_WARNING)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render the session scoreboard
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let session = &self.controller.session;
            for (player, wins) in session.scores().iter() {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(player.symbol().to_string())
                            .size(18.0)
                            .strong()
                            .color(Self::mark_color(player)),
                    );
                    let who = match session.player_kind(player) {
                        PlayerKind::Human => "Human",
                        PlayerKind::Computer => "Computer",
                    };
                    ui.label(RichText::new(who).size(11.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(wins.to_string()).size(16.0).strong().color(TEXT_PRIMARY));
                    });
                });
            }

            let draws = session
                .games()
                .iter()
                .filter(|g| g.outcome == GameOutcome::Draw)
                .count();
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Games: {}  Draws: {}", session.games().len(), draws))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(BUTTON_COLOR)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            ui.horizontal(|ui| {
                if Self::action_button(ui, btn_frame, "Undo") {
                    self.controller.undo();
                }
                ui.add_space(4.0);
                if Self::action_button(ui, btn_frame, "Redo") {
                    self.controller.redo();
                }
            });
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if Self::action_button(ui, btn_frame, "Mode") {
                    self.controller.toggle_mode();
                }
                ui.add_space(4.0);
                if Self::action_button(ui, btn_frame, "Difficulty") {
                    self.controller.cycle_difficulty();
                }
            });

            ui.add_space(8.0);
            let state = self.controller.session.state();
            ui.label(
                RichText::new(format!("Move #{}", state.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn action_button(ui: &mut egui::Ui, frame: Frame, text: &str) -> bool {
        frame
            .show(ui, |ui| {
                ui.add(
                    egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY))
                        .sense(egui::Sense::click()),
                )
                .clicked()
            })
            .inner
    }

    /// Render stats of the computer's last move
    fn render_computer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("COMPUTER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.controller.last_ai_result else {
                ui.label(RichText::new("No move yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            let rule = match result.search_type {
                SearchType::Random => "Random",
                SearchType::ImmediateWin => "Winning move",
                SearchType::Block => "Block",
                SearchType::Minimax => "Minimax",
            };
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(rule).size(11.0).strong().color(STATUS_OK));
                    ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                        ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                    });
                });
            });

            if let Some(pos) = result.best_move {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("-> {}", pos)).size(12.0).strong().color(WIN_HIGHLIGHT));
            }
            if let Some(elapsed) = self.controller.last_ai_time {
                ui.label(
                    RichText::new(format!("Wall time: {:.3}s", elapsed.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: GameOutcome) {
        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);

                    match outcome {
                        GameOutcome::Win(winner) => {
                            ui.horizontal(|ui| {
                                ui.add_space(ui.available_width() / 2.0 - 50.0);
                                ui.label(
                                    RichText::new(winner.symbol().to_string())
                                        .size(32.0)
                                        .strong()
                                        .color(Self::mark_color(winner)),
                                );
                                ui.add_space(8.0);
                                ui.label(RichText::new("WINS!").size(18.0).strong().color(WIN_HIGHLIGHT));
                            });
                        }
                        _ => {
                            ui.label(RichText::new("DRAW").size(18.0).strong().color(TEXT_PRIMARY));
                        }
                    }

                    ui.add_space(12.0);
                    let btn_frame = Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0);
                    if Self::action_button(ui, btn_frame, "New Game") {
                        self.controller.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG).inner_margin(16.0))
            .show(ctx, |ui| {
                let accept_input = self.controller.is_human_turn()
                    && !self.controller.session.is_game_over()
                    && !self.controller.is_ai_thinking();

                let clicked = self.board_view.show(
                    ui,
                    self.controller.session.board(),
                    self.controller.session.winning_cells(),
                    &self.animation,
                    accept_input,
                );

                if let Some(pos) = clicked {
                    if let Err(err) = self.controller.try_place(pos) {
                        self.controller.message = Some(err.to_string());
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, undo, redo, mode, difficulty) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::M),
                i.key_pressed(egui::Key::D),
            )
        });

        if new_game {
            self.controller.reset();
        }
        if undo {
            self.controller.undo();
        }
        if redo {
            self.controller.redo();
        }
        if mode {
            self.controller.toggle_mode();
        }
        if difficulty {
            self.controller.cycle_difficulty();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.controller.check_ai_result();

        // Computer replies once the last mark has finished drawing
        self.animation
            .track(self.controller.session.last_move().map(|record| record.pos));
        if !self.animation.is_complete() {
            self.animation.tick();
        } else {
            self.controller.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.controller.is_ai_thinking() || !self.animation.is_complete() {
            ctx.request_repaint();
        }
    }
}
