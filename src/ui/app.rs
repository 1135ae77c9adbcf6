//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardFrame, BoardView};
use super::game_state::GameState;
use super::theme::*;
use crate::config::AppConfig;
use crate::game::{GameMode, GameOutcome};
use crate::Stone;

/// Depths offered in the search menu
const DEPTH_CHOICES: [u8; 4] = [1, 2, 3, 4];

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self {
            state: GameState::new(GameMode::default(), &config),
            board_view: BoardView::default(),
            show_debug: config.gui.show_debug,
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    let modes = [
                        ("New Game (vs AI - Black)", GameMode::HumanVsAi { human: Stone::Black }),
                        ("New Game (vs AI - White)", GameMode::HumanVsAi { human: Stone::White }),
                        ("New Game (AI vs AI)", GameMode::AiVsAi),
                        ("New Game (Human vs Human)", GameMode::HumanVsHuman),
                    ];
                    for (label, mode) in modes {
                        if ui.button(label).clicked() {
                            self.state.restart(mode);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Search", |ui| {
                    let current = self.state.search_config().max_depth;
                    for depth in DEPTH_CHOICES {
                        if ui.radio(current == depth, format!("Depth {depth}")).clicked() {
                            self.state.set_depth(depth);
                        }
                    }
                    ui.separator();
                    let mut pruning = self.state.search_config().pruning;
                    if ui.checkbox(&mut pruning, "Alpha-beta pruning").changed() {
                        self.state.set_pruning(pruning);
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.state.mode.label());
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(SIDE_PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_timer_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.game.outcome().cloned() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &outcome);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        let config = self.state.search_config();
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!(
                    "{0}x{0} board, {1} in a row",
                    config.board_size, config.win_length
                ))
                .size(11.0)
                .color(TEXT_MUTED),
            );
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn();
            let (accent, glyph_color) = if turn == Stone::Black {
                (egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY)
            } else {
                (egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35))
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    turn.symbol(),
                    egui::FontId::proportional(28.0),
                    glyph_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(turn.name().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_ai_turn() {
                        ("AI to move", TEXT_SECONDARY)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 1.0 {
                    TIMER_NORMAL
                } else if secs < 5.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{secs:.2}s")).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .color(TEXT_PRIMARY),
                );
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);
            let button = |ui: &mut egui::Ui, text: &str| {
                btn_frame
                    .show(ui, |ui| {
                        ui.add(
                            egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY))
                                .sense(egui::Sense::click()),
                        )
                        .clicked()
                    })
                    .inner
            };

            ui.horizontal(|ui| {
                if button(ui, "Undo") {
                    self.state.undo();
                }
                ui.add_space(4.0);
                if self.state.mode == GameMode::HumanVsHuman && button(ui, "Hint") {
                    self.state.request_suggestion();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.game.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(DEBUG_CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                let config = self.state.search_config();
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.label(
                    RichText::new(format!(
                        "depth {} / pruning {}",
                        config.max_depth,
                        if config.pruning { "on" } else { "off" }
                    ))
                    .size(10.0)
                    .color(TEXT_MUTED),
                );
                ui.add_space(6.0);

                let Some(result) = &self.state.last_ai_result else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("{:?}", result.search_type))
                                .size(11.0)
                                .strong()
                                .color(TIMER_NORMAL),
                        );
                        ui.label(
                            RichText::new(format!("Score: {}", result.score))
                                .size(10.0)
                                .color(TEXT_SECONDARY),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{}ms", result.time_ms))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                            ui.label(
                                RichText::new(format!("{} nodes", result.nodes))
                                    .size(10.0)
                                    .color(TEXT_MUTED),
                            );
                            ui.label(
                                RichText::new(format!("{} cutoffs", result.cutoffs))
                                    .size(10.0)
                                    .color(TEXT_MUTED),
                            );
                        });
                    });
                });

                if let Some(pos) = result.best_move {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("-> {pos}")).size(12.0).strong().color(WIN_HIGHLIGHT));
                }
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: &GameOutcome) {
        let headline = match outcome {
            GameOutcome::Win { winner, .. } => format!("{} WINS!", winner.name().to_uppercase()),
            GameOutcome::Draw => "DRAW".to_string(),
        };

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);

                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = BOARD_AREA_BG;

            let accepting_input =
                !self.state.is_over() && self.state.is_human_turn() && !self.state.is_ai_thinking();
            let frame = BoardFrame {
                board: self.state.game.board(),
                current_turn: self.state.current_turn(),
                last_move: self.state.game.last_move(),
                suggested_move: self.state.suggested_move,
                winning_line: self.state.winning_line(),
                accepting_input,
            };

            let clicked = self.board_view.show(ui, &frame);

            if let Some(pos) = clicked {
                if let Err(e) = self.state.try_place_stone(pos) {
                    self.state.message = Some(e.to_string());
                }
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::H) {
                self.state.request_suggestion();
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.state.check_ai_result();
        self.state.start_ai_thinking();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling while the engine runs or waits out the AI vs AI delay
        if self.state.is_ai_thinking() || (self.state.is_ai_turn() && !self.state.is_over()) {
            ctx.request_repaint();
        }
    }
}
