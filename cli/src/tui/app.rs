use ratatui::widgets::TableState;
use fantasy_card_core::{PlayerCardUseCase, PlayerCardView, PlayerRecord, PlayerSource};

pub struct App<'a, S: PlayerSource> {
    usecase: PlayerCardUseCase<'a, S>,
    pub players: Vec<PlayerRecord>,
    pub state: TableState,
    pub view: Option<PlayerCardView>,
}

impl<'a, S: PlayerSource> App<'a, S> {
    pub fn new(usecase: PlayerCardUseCase<'a, S>, players: Vec<PlayerRecord>) -> Self {
        let mut app = App {
            usecase,
            players,
            state: TableState::default(),
            view: None,
        };
        if !app.players.is_empty() {
            app.select(0);
        }
        app
    }

    pub fn next(&mut self) {
        if self.players.is_empty() { return; }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.players.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.select(i);
    }

    pub fn previous(&mut self) {
        if self.players.is_empty() { return; }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.players.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.select(i);
    }

    // The view is replaced before the next draw, so a stale card is never shown.
    fn select(&mut self, i: usize) {
        self.state.select(Some(i));
        self.view = self.players.get(i).map(|player| self.usecase.build_view(player));
    }

    pub fn rebuilds(&self) -> usize {
        self.usecase.rebuilds()
    }
}
