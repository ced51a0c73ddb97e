//! État de navigation du lanceur: pile de navigation du jeu et panneaux de l'écran titre.
//!
//! Les animations restent côté frontend; ici seule la transition en cours est
//! suivie, et c'est le frontend qui signale sa fin.

use serde::{Deserialize, Serialize};

/// Destination poussée sur la pile de navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameDestination {
    Game,
    LoadGame,
    Settings,
}

/// Pile de navigation du lanceur.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameNavigator {
    path: Vec<GameDestination>,
}

impl GameNavigator {
    pub fn navigate_to(&mut self, destination: GameDestination) {
        self.path.push(destination);
    }

    /// Retire la dernière destination; sans effet sur une pile vide.
    pub fn navigate_back(&mut self) -> Option<GameDestination> {
        self.path.pop()
    }

    pub fn navigate_to_root(&mut self) {
        self.path.clear();
    }

    pub fn current(&self) -> Option<GameDestination> {
        self.path.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn is_in_game(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Panneaux de l'écran titre.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TitlePanel {
    #[default]
    Main,
    LoadGame,
    Settings,
}

impl TitlePanel {
    pub const ALL: [TitlePanel; 3] = [TitlePanel::Main, TitlePanel::LoadGame, TitlePanel::Settings];

    pub fn title(self) -> &'static str {
        match self {
            TitlePanel::Main => "NativeGame",
            TitlePanel::LoadGame => "Load Game",
            TitlePanel::Settings => "Settings",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            TitlePanel::Main => "Ultimate Darwin ARM64 Gaming",
            TitlePanel::LoadGame => "Select Your Save File",
            TitlePanel::Settings => "Configure Your Experience",
        }
    }

    /// Texte complet de la barre de titre pour ce panneau.
    pub fn title_bar(self) -> TitleBar {
        TitleBar {
            title: self.title(),
            subtitle: self.subtitle(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TitleBar {
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelNavigator {
    current: TitlePanel,
    is_transitioning: bool,
}

impl PanelNavigator {
    /// Démarre une transition vers `destination`.
    ///
    /// Ignoré (retourne `false`) pendant une transition ou si le panneau est déjà affiché.
    pub fn navigate_to_panel(&mut self, destination: TitlePanel) -> bool {
        if self.is_transitioning || self.current == destination {
            return false;
        }
        self.is_transitioning = true;
        self.current = destination;
        true
    }

    pub fn finish_transition(&mut self) {
        self.is_transitioning = false;
    }

    pub fn navigate_to_main(&mut self) -> bool {
        self.navigate_to_panel(TitlePanel::Main)
    }

    pub fn navigate_to_load_game(&mut self) -> bool {
        self.navigate_to_panel(TitlePanel::LoadGame)
    }

    pub fn navigate_to_settings(&mut self) -> bool {
        self.navigate_to_panel(TitlePanel::Settings)
    }

    pub fn current(&self) -> TitlePanel {
        self.current
    }

    pub fn title_bar(&self) -> TitleBar {
        self.current.title_bar()
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    pub fn is_main(&self) -> bool {
        self.current == TitlePanel::Main
    }

    pub fn is_load_game(&self) -> bool {
        self.current == TitlePanel::LoadGame
    }

    pub fn is_settings(&self) -> bool {
        self.current == TitlePanel::Settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_push_pop_and_reset() {
        let mut nav = GameNavigator::default();
        assert!(!nav.is_in_game());

        nav.navigate_to(GameDestination::Game);
        nav.navigate_to(GameDestination::Settings);
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.current(), Some(GameDestination::Settings));

        assert_eq!(nav.navigate_back(), Some(GameDestination::Settings));
        assert!(nav.is_in_game());

        nav.navigate_to_root();
        assert!(!nav.is_in_game());
        assert_eq!(nav.navigate_back(), None);
    }

    #[test]
    fn panel_changes_are_blocked_during_transition() {
        let mut panels = PanelNavigator::default();
        assert!(panels.is_main());

        assert!(panels.navigate_to_settings());
        assert!(panels.is_transitioning());
        assert!(!panels.navigate_to_load_game());
        assert!(panels.is_settings());

        panels.finish_transition();
        assert!(panels.navigate_to_load_game());
        assert!(panels.is_load_game());
    }

    #[test]
    fn same_panel_is_ignored() {
        let mut panels = PanelNavigator::default();
        assert!(!panels.navigate_to_main());
        assert!(!panels.is_transitioning());
    }

    #[test]
    fn panel_titles() {
        let titles: Vec<_> = TitlePanel::ALL.iter().map(|panel| panel.title()).collect();
        assert_eq!(titles, ["NativeGame", "Load Game", "Settings"]);
    }

    #[test]
    fn title_bar_follows_current_panel() {
        let mut panels = PanelNavigator::default();
        assert_eq!(panels.title_bar().subtitle, "Ultimate Darwin ARM64 Gaming");

        panels.navigate_to_load_game();
        assert_eq!(
            panels.title_bar(),
            TitleBar {
                title: "Load Game",
                subtitle: "Select Your Save File",
            }
        );
        assert_eq!(TitlePanel::Settings.subtitle(), "Configure Your Experience");
    }

    #[test]
    fn destinations_deserialize_from_frontend_names() {
        let destination: GameDestination = serde_json::from_str("\"loadGame\"").unwrap();
        assert_eq!(destination, GameDestination::LoadGame);
    }
}
