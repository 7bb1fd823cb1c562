// ============================================================================
// Gestion des événements
// ============================================================================
// Gère les événements clavier et les ticks de l'application
//
// CONCEPTS RUST :
// 1. Enums avec variants : représenter différents types d'événements
// 2. Error handling avec Result
// 3. Pattern matching : un helper par touche, combinables dans des guards
// ============================================================================

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};

/// Événements de l'application
#[derive(Debug, Clone)]
pub enum Event {
    /// Touche pressée
    Key(KeyEvent),

    /// Tick régulier (pas d'entrée pendant le délai de poll)
    Tick,
}

/// Gestionnaire d'événements
pub struct EventHandler {
    /// Délai maximum d'attente d'un événement
    tick_rate: Duration,
}

impl EventHandler {
    /// Crée un gestionnaire avec un tick de 250ms
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
        }
    }

    /// Lit le prochain événement (bloquant avec timeout)
    ///
    /// CONCEPT : Non-blocking I/O avec timeout
    /// - poll(timeout) attend au plus tick_rate
    /// - Si pas d'événement, retourne Ok(Event::Tick)
    pub fn next(&self) -> Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }

        match event::read()? {
            // Sur certains OS, on reçoit Press ET Release : on ne garde que Press
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),
            _ => Ok(Event::Tick),
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Helpers : Convertir Event en action
// ============================================================================

/// Code de la touche, None pour un Tick
fn key_code(event: &Event) -> Option<KeyCode> {
    match event {
        Event::Key(key) => Some(key.code),
        Event::Tick => None,
    }
}

/// Vérifie si l'événement est la touche 'q' (quitter)
pub fn is_quit_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('q') | KeyCode::Char('Q')))
}

/// Vérifie si l'événement est Échap
pub fn is_escape_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Esc))
}

/// Vérifie si l'événement est Entrée
pub fn is_enter_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Enter))
}

/// Vérifie si l'événement est Backspace
pub fn is_backspace_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Backspace))
}

/// Vérifie si l'événement est Tab (écran suivant)
pub fn is_next_screen_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Tab))
}

/// Vérifie si l'événement est Shift+Tab (écran précédent)
pub fn is_previous_screen_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::BackTab))
}

/// Vérifie si l'événement est la flèche vers le haut ou 'k' (vim)
pub fn is_up_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K')))
}

/// Vérifie si l'événement est la flèche vers le bas ou 'j' (vim)
pub fn is_down_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J')))
}

/// Vérifie si l'événement est la flèche gauche ou 'h' (vim)
pub fn is_left_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Left | KeyCode::Char('h')))
}

/// Vérifie si l'événement est la flèche droite ou 'l' (vim)
pub fn is_right_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Right | KeyCode::Char('l')))
}

/// Vérifie si l'événement est '/' (recherche)
pub fn is_search_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('/')))
}

/// Vérifie si l'événement est 's' (trier sur la colonne du curseur)
pub fn is_sort_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('s') | KeyCode::Char('S')))
}

/// Vérifie si l'événement est ']' (catégorie / coin / actif suivant)
pub fn is_next_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char(']')))
}

/// Vérifie si l'événement est '[' (catégorie / coin / actif précédent)
pub fn is_previous_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('[')))
}

/// Vérifie si l'événement est 'c' (devise d'affichage suivante)
pub fn is_currency_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('c') | KeyCode::Char('C')))
}

/// Vérifie si l'événement est 'x' (inverser le convertisseur)
pub fn is_swap_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('x') | KeyCode::Char('X')))
}

/// Onglet du tableau demandé par les touches '1' à '4'
pub fn get_tab_digit(event: &Event) -> Option<char> {
    match key_code(event) {
        Some(KeyCode::Char(c @ '1'..='4')) => Some(c),
        _ => None,
    }
}

/// Caractère accepté dans un champ numérique (chiffres, '.', ',', '-')
pub fn get_numeric_char(event: &Event) -> Option<char> {
    match key_code(event) {
        Some(KeyCode::Char(c)) if c.is_ascii_digit() || matches!(c, '.' | ',' | '-') => Some(c),
        _ => None,
    }
}

/// Extrait le caractère d'un événement clavier si c'est un caractère
pub fn get_char_from_event(event: &Event) -> Option<char> {
    match key_code(event) {
        Some(KeyCode::Char(c)) => Some(c),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, event::KeyModifiers::empty()))
    }

    #[test]
    fn test_is_quit_event() {
        assert!(is_quit_event(&key(KeyCode::Char('q'))));
        assert!(!is_quit_event(&key(KeyCode::Char('a'))));
        assert!(!is_quit_event(&Event::Tick));
    }

    #[test]
    fn test_navigation_events() {
        assert!(is_up_event(&key(KeyCode::Char('k'))));
        assert!(is_down_event(&key(KeyCode::Down)));
        assert!(is_left_event(&key(KeyCode::Char('h'))));
        assert!(is_right_event(&key(KeyCode::Right)));
        assert!(is_next_screen_event(&key(KeyCode::Tab)));
        assert!(is_previous_screen_event(&key(KeyCode::BackTab)));
    }

    #[test]
    fn test_tab_digit() {
        assert_eq!(get_tab_digit(&key(KeyCode::Char('3'))), Some('3'));
        assert_eq!(get_tab_digit(&key(KeyCode::Char('5'))), None);
        assert_eq!(get_tab_digit(&Event::Tick), None);
    }

    #[test]
    fn test_numeric_char() {
        assert_eq!(get_numeric_char(&key(KeyCode::Char('7'))), Some('7'));
        assert_eq!(get_numeric_char(&key(KeyCode::Char('.'))), Some('.'));
        assert_eq!(get_numeric_char(&key(KeyCode::Char('z'))), None);
        assert_eq!(get_char_from_event(&key(KeyCode::Char('z'))), Some('z'));
    }
}
