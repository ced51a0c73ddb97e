use std::sync::Mutex;

use tauri::State;

use crate::navigation::{GameDestination, GameNavigator, PanelNavigator, TitleBar, TitlePanel};

/// Verrouille un état partagé et applique `f`, sans paniquer sur un verrou empoisonné.
fn with_state<S, T>(state: &Mutex<S>, f: impl FnOnce(&mut S) -> T) -> Result<T, String> {
    let mut guard = state
        .lock()
        .map_err(|_| "Navigation state is unavailable".to_string())?;
    Ok(f(&mut guard))
}

#[tauri::command]
pub fn navigate(
    destination: GameDestination,
    navigator: State<'_, Mutex<GameNavigator>>,
) -> Result<GameNavigator, String> {
    with_state(navigator.inner(), |nav| {
        nav.navigate_to(destination);
        nav.clone()
    })
}

#[tauri::command]
pub fn navigate_back(navigator: State<'_, Mutex<GameNavigator>>) -> Result<GameNavigator, String> {
    with_state(navigator.inner(), |nav| {
        nav.navigate_back();
        nav.clone()
    })
}

#[tauri::command]
pub fn navigate_to_root(
    navigator: State<'_, Mutex<GameNavigator>>,
) -> Result<GameNavigator, String> {
    with_state(navigator.inner(), |nav| {
        nav.navigate_to_root();
        nav.clone()
    })
}

#[tauri::command]
pub fn navigation_state(
    navigator: State<'_, Mutex<GameNavigator>>,
) -> Result<GameNavigator, String> {
    with_state(navigator.inner(), |nav| nav.clone())
}

/// Demande un changement de panneau; l'état retourné indique si la transition a démarré.
#[tauri::command]
pub fn select_panel(
    panel: TitlePanel,
    panels: State<'_, Mutex<PanelNavigator>>,
) -> Result<PanelNavigator, String> {
    with_state(panels.inner(), |nav| {
        if !nav.navigate_to_panel(panel) {
            log::debug!("Panel change to {:?} ignored", panel);
        }
        nav.clone()
    })
}

/// Appelée par le frontend à la fin de l'animation de transition.
#[tauri::command]
pub fn finish_panel_transition(
    panels: State<'_, Mutex<PanelNavigator>>,
) -> Result<PanelNavigator, String> {
    with_state(panels.inner(), |nav| {
        nav.finish_transition();
        nav.clone()
    })
}

#[tauri::command]
pub fn panel_state(panels: State<'_, Mutex<PanelNavigator>>) -> Result<PanelNavigator, String> {
    with_state(panels.inner(), |nav| nav.clone())
}

/// Titre et sous-titre du panneau affiché.
#[tauri::command]
pub fn panel_title_bar(panels: State<'_, Mutex<PanelNavigator>>) -> Result<TitleBar, String> {
    with_state(panels.inner(), |nav| nav.title_bar())
}
