// ============================================================================
// Coinboard - Tableau de bord crypto dans le terminal
// ============================================================================
// Tableau des coins par catégorie + calculateurs ROI, staking et conversion
// Les données viennent d'un catalogue JSON (embarqué ou fichier)
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : boucle qui gère événements et rendering
// 3. Pull model : tout est recalculé depuis App au moment du rendu
// ============================================================================

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info};

use coinboard::app::{App, Screen};
use coinboard::calculator::{AmountUnit, RateBasis};
use coinboard::catalog::load_catalog;
use coinboard::config::Config;
use coinboard::table::Tab;
use coinboard::ui::events::{
    get_char_from_event, get_numeric_char, get_tab_digit, is_backspace_event, is_currency_event,
    is_down_event, is_enter_event, is_escape_event, is_left_event, is_next_event,
    is_next_screen_event, is_previous_event, is_previous_screen_event, is_quit_event,
    is_right_event, is_search_event, is_sort_event, is_swap_event, is_up_event, Event,
    EventHandler,
};
use coinboard::ui::render;

// ============================================================================
// Initialisation du logging
// ============================================================================
// CONCEPT : Logging dans une app TUI
// - Les println! ne fonctionnent pas une fois le TUI lancé
// - On log vers un fichier à la place, avec rotation quotidienne
// ============================================================================

/// Initialise le système de logging vers fichier
///
/// Les logs sont écrits dans le répertoire configuré :
/// - Linux : ~/.local/share/coinboard/logs/coinboard.log
/// - COINBOARD_LOG_DIR ou "log_dir" dans config.json pour changer
///
/// # Utilisation
/// ```bash
/// # Voir les logs en temps réel
/// tail -f ~/.local/share/coinboard/logs/coinboard.log.*
///
/// # Contrôler le niveau de log
/// RUST_LOG=coinboard=trace cargo run
/// ```
fn init_logging(log_dir: &Path) -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    std::fs::create_dir_all(log_dir).context("Échec de la création du répertoire de logs")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "coinboard.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender) // Écrit dans le fichier
                .with_ansi(false) // Pas de codes couleur dans le fichier
                .with_target(true) // Inclut le module (ex: coinboard::catalog::loader)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .with(
            // Par défaut : debug pour coinboard, info pour les dépendances
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coinboard=debug,info".into()),
        )
        .try_init()
        .context("Échec de l'initialisation du subscriber")?;

    info!(log_dir = %log_dir.display(), "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    // La config est lue avant le logging : elle donne le répertoire des logs
    let config = Config::load()?;

    init_logging(&config.log_dir).unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {:#}", e);
        eprintln!("   Continuing without logging...");
    });

    info!(?config, "Coinboard starting up");

    // Catalogue : fichier configuré ou catalogue embarqué
    let catalog = load_catalog(config.catalog_path.as_deref())?;
    let mut app = App::new(catalog, &config);

    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    let events = EventHandler::new();

    info!("Starting event loop");
    let result = run(&mut terminal, &mut app, &events);

    // Restaure le terminal (même en cas d'erreur)
    debug!("Restoring terminal");
    restore_terminal(&mut terminal)?;

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result
}

// ============================================================================
// Event Loop Principal
// ============================================================================
// À chaque itération :
//   1. Dessiner l'interface (render) depuis l'état courant
//   2. Attendre un événement (input, max 250ms)
//   3. Mettre à jour l'état (handle_event)
// ============================================================================

/// Exécute la boucle principale de l'application
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    while app.is_running() {
        terminal
            .draw(|frame| render(frame, app))
            .context("Échec du rendu")?;

        let event = events.next()?;
        handle_event(app, event);
    }

    Ok(())
}

// ============================================================================
// Gestion des événements
// ============================================================================
// L'ordre des branches compte :
//   1. mode recherche (toutes les touches vont dans la saisie)
//   2. quit, changement d'écran
//   3. touches propres à l'écran courant
// ============================================================================

/// Traite un événement et met à jour l'état de l'application
fn handle_event(app: &mut App, event: Event) {
    if matches!(event, Event::Tick) {
        return;
    }

    // ========================================
    // Mode recherche : capture toutes les touches
    // ========================================
    if app.is_in_input_mode() {
        if is_escape_event(&event) {
            info!("User cancelled search");
            app.cancel_input();
        } else if is_enter_event(&event) {
            let query = app.submit_input();
            info!(%query, "User submitted search");
        } else if is_backspace_event(&event) {
            app.backspace();
        } else if let Some(c) = get_char_from_event(&event) {
            app.append_char(c);
        }
        return;
    }

    // ========================================
    // Quit two-step
    // ========================================
    if is_quit_event(&event) {
        if app.is_awaiting_quit_confirmation() {
            info!("User confirmed quit");
            app.quit();
        } else {
            info!("User requested quit (awaiting confirmation)");
            app.request_quit();
        }
        return;
    }

    // Toute autre touche annule la confirmation
    app.cancel_quit();

    if is_next_screen_event(&event) {
        app.next_screen();
        debug!(screen = ?app.current_screen, "User switched screen");
        return;
    }
    if is_previous_screen_event(&event) {
        app.previous_screen();
        debug!(screen = ?app.current_screen, "User switched screen");
        return;
    }

    match app.current_screen {
        Screen::Table => handle_table_event(app, &event),
        Screen::Roi | Screen::Staking | Screen::Converter => handle_form_event(app, &event),
    }
}

/// Touches de l'écran tableau
fn handle_table_event(app: &mut App, event: &Event) {
    if let Some(tab) = get_tab_digit(event).and_then(Tab::from_digit) {
        info!(tab = tab.label(), "User selected tab");
        app.select_tab(tab);
    } else if is_search_event(event) {
        info!("User started search");
        app.start_input();
    } else if is_next_event(event) {
        app.next_category();
        info!(category = app.table.category.label(), "User changed category");
    } else if is_previous_event(event) {
        app.previous_category();
        info!(category = app.table.category.label(), "User changed category");
    } else if is_up_event(event) {
        app.navigate_up();
    } else if is_down_event(event) {
        app.navigate_down();
    } else if is_left_event(event) {
        app.column_left();
    } else if is_right_event(event) {
        app.column_right();
    } else if is_sort_event(event) {
        app.sort_by_cursor();
        info!(sort = ?app.table.sort, "User sorted column");
    } else if is_enter_event(event) {
        app.open_roi_for_selection();
        info!(token = %app.roi_form.token, "User opened ROI calculator");
    }
}

/// Touches des écrans de saisie (ROI, Staking, Convertisseur)
fn handle_form_event(app: &mut App, event: &Event) {
    let on_converter = app.current_screen == Screen::Converter;

    if is_up_event(event) {
        app.focus_up();
    } else if is_down_event(event) || is_enter_event(event) {
        app.focus_down();
    } else if is_backspace_event(event) {
        app.erase_char();
    } else if let Some(c) = get_numeric_char(event) {
        app.type_char(c);
    } else if is_next_event(event) {
        if on_converter {
            app.next_asset();
        } else {
            app.next_calculator_coin();
        }
    } else if is_previous_event(event) {
        if on_converter {
            app.previous_asset();
        } else {
            app.previous_calculator_coin();
        }
    } else if is_swap_event(event) && on_converter {
        app.swap_converter();
        debug!("User swapped converter sides");
    } else if is_currency_event(event) && !on_converter {
        app.next_currency();
        info!(currency = %app.display_currency, "User changed display currency");
    } else if app.current_screen == Screen::Staking {
        handle_staking_toggle(app, event);
    }
}

/// Bascules du formulaire de staking
fn handle_staking_toggle(app: &mut App, event: &Event) {
    let form = &mut app.staking_form;
    match get_char_from_event(event) {
        Some('u') => form.amount_unit = form.amount_unit.toggle(),
        Some('r') => form.basis = form.basis.toggle(),
        Some('f') => form.compounding = form.compounding.next(),
        Some('d') => form.duration_unit = form.duration_unit.next(),
        _ => return,
    }
    debug!(
        fiat_amount = form.amount_unit == AmountUnit::Fiat,
        apy = form.basis == RateBasis::Apy,
        compounding = form.compounding.label(),
        duration_unit = form.duration_unit.label(),
        "User toggled staking option"
    );
}

// ============================================================================
// Setup et restauration du terminal
// ============================================================================
// IMPORTANT : Toujours restaurer le terminal avant de quitter !
// ============================================================================

/// Configure le terminal en mode TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Impossible d'activer le raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Impossible d'ouvrir l'écran alternatif")?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Impossible de créer le terminal")
}

/// Restaure le terminal à son état normal
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
