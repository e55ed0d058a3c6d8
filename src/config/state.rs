// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// URL text box; cleared after a successful fetch or by Clear.
    pub url_input: String,

    /// Selected table rows (positions into the store)
    pub selected_rows: Vec<usize>,
    /// Anchor for shift-click ranges
    pub last_clicked: Option<usize>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            url_input: s!(),
            selected_rows: Vec::new(),
            last_clicked: None,
        }
    }
}

impl GuiState {
    /// Forget the row selection (after rows move or disappear).
    pub fn clear_selection(&mut self) {
        self.selected_rows.clear();
        self.last_clicked = None;
    }

    /// Apply a click on `row`: plain selects just it, `toggle` (ctrl/cmd)
    /// flips it, `range` (shift) selects from the last plain/toggle click.
    pub fn click_row(&mut self, row: usize, toggle: bool, range: bool) {
        match (range, self.last_clicked) {
            (true, Some(anchor)) => {
                self.selected_rows = (anchor.min(row)..=anchor.max(row)).collect();
                return;
            }
            _ if toggle => {
                match self.selected_rows.iter().position(|&r| r == row) {
                    Some(i) => { self.selected_rows.remove(i); }
                    None => self.selected_rows.push(row),
                }
            }
            _ => self.selected_rows = vec![row],
        }
        self.last_clicked = Some(row);
    }

    pub fn is_selected(&self, row: usize) -> bool {
        self.selected_rows.contains(&row)
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_click_replaces_selection() {
        let mut gui = GuiState::default();
        gui.click_row(2, false, false);
        gui.click_row(0, false, false);
        assert_eq!(gui.selected_rows, [0]);
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut gui = GuiState::default();
        gui.click_row(0, false, false);
        gui.click_row(2, true, false);
        assert_eq!(gui.selected_rows, [0, 2]);
        gui.click_row(0, true, false);
        assert_eq!(gui.selected_rows, [2]);
    }

    #[test]
    fn shift_selects_range_from_anchor() {
        let mut gui = GuiState::default();
        gui.click_row(3, false, false);
        gui.click_row(1, false, true);
        assert_eq!(gui.selected_rows, [1, 2, 3]);
        // anchor stays put
        gui.click_row(4, false, true);
        assert_eq!(gui.selected_rows, [3, 4]);
    }

    #[test]
    fn shift_without_anchor_is_a_plain_click() {
        let mut gui = GuiState::default();
        gui.click_row(1, false, true);
        assert_eq!(gui.selected_rows, [1]);
        assert_eq!(gui.last_clicked, Some(1));
    }
}
