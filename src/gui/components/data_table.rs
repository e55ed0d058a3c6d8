// src/gui/components/data_table.rs
//
// Draws the records grid. Click/ctrl/shift select rows, double-click edits a
// cell in place. Widget callbacks only record what happened; the actions run
// after the table is drawn, once the borrows on App are released.

use eframe::egui::{self, Align, Key, Layout, RichText, Sense};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::consts::{CODE_COL_WIDTH, NUMERIC_COL_WIDTH, ROW_HEIGHT, TEXT_COL_MIN_WIDTH},
    gui::{
        actions,
        app::{App, rows_of},
    },
    record::Field,
};

enum Intent {
    Select { row: usize, toggle: bool, range: bool },
    Edit { row: usize, field: Field },
    Commit,
    Cancel,
}

fn column_for(field: Field) -> Column {
    match field {
        Field::Code => Column::exact(CODE_COL_WIDTH),
        f if f.is_numeric() => Column::exact(NUMERIC_COL_WIDTH),
        _ => Column::remainder().at_least(TEXT_COL_MIN_WIDTH).clip(true),
    }
}

fn layout_for(field: Field) -> Layout {
    match field {
        Field::Code => Layout::centered_and_justified(egui::Direction::LeftToRight),
        f if f.is_numeric() => Layout::right_to_left(Align::Center),
        _ => Layout::left_to_right(Align::Center),
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let columns = app.columns();
    let busy = app.busy();
    let mut intent: Option<Intent> = None;

    {
        let App { state, session, snapshot, edit, .. } = &mut *app;
        let rows = rows_of(session, snapshot);
        let gui = &state.gui;

        let mut table = TableBuilder::new(ui)
            .striped(true)
            .sense(Sense::click())
            .min_scrolled_height(0.0)
            .cell_layout(Layout::left_to_right(Align::Center));
        for &field in columns {
            table = table.column(column_for(field));
        }

        table
            .header(ROW_HEIGHT + 4.0, |mut header| {
                for &field in columns {
                    header.col(|ui| {
                        ui.with_layout(layout_for(field), |ui| {
                            ui.add(egui::Label::new(RichText::new(field.key()).strong()).selectable(false))
                                .on_hover_text(field.label());
                        });
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let ix = row.index();
                    let Some(record) = rows.get(ix) else { return };
                    row.set_selected(gui.is_selected(ix));

                    for &field in columns {
                        let editing = edit.as_mut().filter(|e| e.row == ix && e.field == field);
                        let (_, resp) = row.col(|ui| match editing {
                            Some(e) => {
                                let te = ui.add(egui::TextEdit::singleline(&mut e.text).desired_width(f32::INFINITY));
                                if e.focus {
                                    te.request_focus();
                                    e.focus = false;
                                } else if te.lost_focus() {
                                    let esc = ui.input(|i| i.key_pressed(Key::Escape));
                                    intent = Some(if esc { Intent::Cancel } else { Intent::Commit });
                                }
                            }
                            None => {
                                ui.with_layout(layout_for(field), |ui| {
                                    ui.add(egui::Label::new(record.get(field)).selectable(false).truncate());
                                });
                            }
                        });

                        if resp.double_clicked() && !busy {
                            intent = Some(Intent::Edit { row: ix, field });
                        } else if resp.clicked() && intent.is_none() {
                            let m = ui_modifiers(&resp);
                            intent = Some(Intent::Select { row: ix, toggle: m.command, range: m.shift });
                        }
                    }
                });
            });

        if rows.is_empty() {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.weak("No rows yet. Paste a URL (or leave it blank) and press Fetch.");
            });
        }
    }

    match intent {
        Some(Intent::Select { row, toggle, range }) => app.state.gui.click_row(row, toggle, range),
        Some(Intent::Edit { row, field }) => actions::begin_edit(app, row, field),
        Some(Intent::Commit) => actions::commit_edit(app),
        Some(Intent::Cancel) => actions::cancel_edit(app),
        None => {}
    }
}

fn ui_modifiers(resp: &egui::Response) -> egui::Modifiers {
    resp.ctx.input(|i| i.modifiers)
}
