//! Terminal front-end state and key handling.

use crossterm::event::KeyCode;
use heropath::character::prestige::{can_rebirth, required_level};
use heropath::{ActionRejected, Command, GameEngine, GameEvent};

pub struct App {
    pub engine: GameEngine,
    /// Row highlighted in the shop listing.
    pub selected_item: usize,
    pub confirm_rebirth: bool,
    /// Last rejection or notice, shown in the status line.
    pub notice: Option<String>,
}

impl App {
    pub fn new(engine: GameEngine) -> Self {
        let mut app = Self {
            engine,
            selected_item: 0,
            confirm_rebirth: false,
            notice: None,
        };
        app.collect_events();
        app
    }

    /// Handles one key press. Returns false when the player quits.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if let KeyCode::Char(c) = code {
            self.run(Command::KeyPressed(c));
        }

        if self.confirm_rebirth {
            match code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.confirm_rebirth = false;
                    self.run(Command::ConfirmRebirth);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.confirm_rebirth = false;
                }
                _ => {}
            }
            return true;
        }

        match code {
            KeyCode::Char('q') => return false,
            KeyCode::Char('a') => self.run(Command::Attack),
            KeyCode::Char('s') => self.run(Command::UseSpecialAbility),
            KeyCode::Char('R') => self.open_rebirth_confirm(),
            KeyCode::Up => self.selected_item = self.selected_item.saturating_sub(1),
            KeyCode::Down => {
                let len = self.engine.shop_listing().len();
                if self.selected_item + 1 < len {
                    self.selected_item += 1;
                }
            }
            KeyCode::Enter => self.buy_selected(),
            KeyCode::Tab => {
                self.run(Command::SwitchShop);
                self.selected_item = 0;
            }
            KeyCode::Char('[') | KeyCode::Char(']') => {
                let view = self.engine.shop_view();
                let shop = view.active;
                let category = view.adjacent_category(code == KeyCode::Char(']'));
                self.run(Command::SwitchCategory { shop, category });
                self.selected_item = 0;
            }
            KeyCode::F(9) => self.run(Command::DevMode),
            _ => {}
        }
        true
    }

    /// Advances the game clock and picks up whatever the timers produced.
    pub fn tick(&mut self, elapsed_ms: u64) {
        self.engine.advance(elapsed_ms);
        self.collect_events();
    }

    fn buy_selected(&mut self) {
        let listing = self.engine.shop_listing();
        let Some(row) = listing.get(self.selected_item) else {
            return;
        };
        let shop = self.engine.shop_view().active;
        let item_id = row.item.id.to_string();
        self.run(Command::Buy { shop, item_id });
    }

    fn open_rebirth_confirm(&mut self) {
        let state = self.engine.state();
        if can_rebirth(state) {
            self.confirm_rebirth = true;
        } else {
            let rejection = ActionRejected::RebirthLocked {
                required_level: required_level(state.player.rebirth_count),
                level: state.player.level,
            };
            self.notice = Some(rejection.to_string());
        }
    }

    fn run(&mut self, command: Command) {
        if let Err(rejection) = self.engine.execute(command) {
            self.notice = Some(rejection.to_string());
        }
        self.collect_events();
    }

    fn collect_events(&mut self) {
        for event in self.engine.drain_events() {
            match event {
                GameEvent::RebirthAvailable { .. } => self.confirm_rebirth = true,
                GameEvent::SaveFailed { .. } | GameEvent::LoadFailed { .. } => {
                    self.notice = Some(event.message());
                }
                GameEvent::Purchased { .. } | GameEvent::Reborn { .. } => self.notice = None,
                _ => {}
            }
        }
    }
}
