use arboard::Clipboard;
use exitmatrix::codec::to_layout;
use exitmatrix::config::{init_logging, Config, ConfigSource};
use exitmatrix::layout::{from_compact, load_text_file, to_compact};
use exitmatrix::{parse_symbols, plan_route, PolicyTable, Symbol, SymbolGrid};
use macroquad::prelude::*;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Read once, before the window opens
static CONFIG: OnceLock<(Config, ConfigSource)> = OnceLock::new();

const DEFAULT_ROWS: usize = 10;
const DEFAULT_COLS: usize = 10;

/// Symbols selectable with the number keys
const BRUSHES: [(KeyCode, Symbol); 5] = [
    (KeyCode::Key1, Symbol::Open),
    (KeyCode::Key2, Symbol::Obstacle),
    (KeyCode::Key3, Symbol::Fire),
    (KeyCode::Key4, Symbol::Exit),
    (KeyCode::Key5, Symbol::Occupant),
];

/// Editor and viewer state
struct ViewerState {
    symbols: SymbolGrid,
    route: Option<SymbolGrid>,
    policy: Option<PolicyTable>,
    brush: Symbol,
    status: String,
    cell_size: f32,
    background: Color,
}

impl ViewerState {
    fn new(config: &Config) -> Self {
        let symbols = match load_text_file(&config.layout.default_file)
            .and_then(|layout| parse_symbols(&layout))
        {
            Ok(symbols) => symbols,
            Err(e) => {
                info!("Starting with an empty floor ({}: {})", config.layout.default_file, e);
                empty_floor(DEFAULT_ROWS, DEFAULT_COLS)
            }
        };

        let (policy, status) = match PolicyTable::load(&config.policy.path) {
            Ok(policy) => (Some(policy), "Policy loaded".to_string()),
            Err(e) => {
                warn!("{}", e);
                (None, format!("No policy: {}", e))
            }
        };

        let viewer = &config.viewer;
        ViewerState {
            symbols,
            route: None,
            policy,
            brush: Symbol::Obstacle,
            status,
            cell_size: viewer.cell_size,
            background: Color::from_rgba(viewer.background_r, viewer.background_g, viewer.background_b, 255),
        }
    }

    fn rows(&self) -> usize {
        self.symbols.len()
    }

    fn cols(&self) -> usize {
        self.symbols.first().map(Vec::len).unwrap_or(0)
    }

    fn handle_click(&mut self, mouse_x: f32, mouse_y: f32) {
        if mouse_x < 0.0 || mouse_y < 0.0 {
            return;
        }
        let col = (mouse_x / self.cell_size) as usize;
        let row = (mouse_y / self.cell_size) as usize;
        if row >= self.rows() || col >= self.cols() {
            return;
        }

        let symbol = if is_mouse_button_pressed(MouseButton::Right) {
            Symbol::Open
        } else {
            self.brush
        };
        self.paint(row, col, symbol);
    }

    /// Paint a cell; occupant and exit markers move rather than multiply
    fn paint(&mut self, row: usize, col: usize, symbol: Symbol) {
        if matches!(symbol, Symbol::Occupant | Symbol::Exit) {
            for cell in self.symbols.iter_mut().flatten() {
                if *cell == symbol {
                    *cell = Symbol::Open;
                }
            }
        }
        self.symbols[row][col] = symbol;
        self.route = None;
    }

    fn plan(&mut self) {
        let Some(policy) = &self.policy else {
            self.status = "No policy table loaded".to_string();
            return;
        };

        match plan_route(&to_layout(&self.symbols), policy) {
            Ok(outcome) => {
                self.status = if outcome.reaches_exit() {
                    format!("Route found: {} steps", outcome.path.len().saturating_sub(1))
                } else {
                    "Route ends on a hazard".to_string()
                };
                self.route = Some(outcome.symbols);
            }
            Err(e) => {
                self.status = e.to_string();
                self.route = None;
            }
        }
    }

    fn copy_to_clipboard(&mut self) {
        let shown = self.route.as_ref().unwrap_or(&self.symbols);
        let compact = to_compact(&to_layout(shown));
        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(compact) {
                    self.status = format!("Failed to copy to clipboard: {}", e);
                } else {
                    self.status = "Layout copied to clipboard".to_string();
                    // Keep clipboard alive for a moment to ensure clipboard managers can capture it
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
            }
            Err(e) => {
                self.status = format!("Failed to access clipboard: {}", e);
            }
        }
    }

    fn paste_from_clipboard(&mut self) {
        let text = match Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
            Ok(text) => text,
            Err(e) => {
                self.status = format!("Failed to read clipboard: {}", e);
                return;
            }
        };

        match parse_symbols(&from_compact(text.trim())) {
            Ok(symbols) => {
                self.status = format!("Pasted {}x{} layout", symbols.len(), symbols[0].len());
                self.symbols = symbols;
                self.route = None;
            }
            Err(e) => self.status = format!("Paste rejected: {}", e),
        }
    }

    fn draw(&self) {
        clear_background(self.background);

        let shown = self.route.as_ref().unwrap_or(&self.symbols);
        for (row, line) in shown.iter().enumerate() {
            for (col, &symbol) in line.iter().enumerate() {
                let px = col as f32 * self.cell_size;
                let py = row as f32 * self.cell_size;
                draw_rectangle(px, py, self.cell_size - 1.0, self.cell_size - 1.0, symbol_color(symbol));
                draw_text(
                    &symbol.to_string(),
                    px + self.cell_size * 0.35,
                    py + self.cell_size * 0.65,
                    self.cell_size * 0.5,
                    BLACK,
                );
            }
        }

        let info = [
            format!("Brush: {}", self.brush),
            "1 open  2 obstacle  3 fire".to_string(),
            "4 exit  5 occupant".to_string(),
            "Left click: paint  Right click: clear".to_string(),
            "Enter: plan route  R: clear route".to_string(),
            "C: copy  V: paste  Esc: quit".to_string(),
            self.status.clone(),
        ];
        let x = self.cols() as f32 * self.cell_size + 16.0;
        for (i, line) in info.iter().enumerate() {
            draw_text(line, x, 24.0 + i as f32 * 22.0, 20.0, WHITE);
        }
    }
}

fn empty_floor(rows: usize, cols: usize) -> SymbolGrid {
    let mut symbols = vec![vec![Symbol::Open; cols]; rows];
    symbols[rows - 1][0] = Symbol::Occupant;
    symbols[0][cols - 1] = Symbol::Exit;
    symbols
}

fn symbol_color(symbol: Symbol) -> Color {
    match symbol {
        Symbol::Exit => GREEN,
        Symbol::Fire => RED,
        Symbol::Obstacle => Color::from_rgba(60, 60, 60, 255),
        Symbol::Open => Color::from_rgba(200, 200, 200, 255),
        Symbol::Path => SKYBLUE,
        Symbol::Occupant => BLUE,
        Symbol::Hazard => ORANGE,
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: CONFIG.get_or_init(Config::locate).0.viewer.window_title.clone(),
        window_width: 960,
        window_height: 640,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let (config, source) = CONFIG.get_or_init(Config::locate);
    init_logging(&config.logging.filter);
    source.log();

    let mut state = ViewerState::new(config);

    loop {
        if is_mouse_button_pressed(MouseButton::Left) || is_mouse_button_pressed(MouseButton::Right) {
            let (mouse_x, mouse_y) = mouse_position();
            state.handle_click(mouse_x, mouse_y);
        }

        for (key, symbol) in BRUSHES {
            if is_key_pressed(key) {
                state.brush = symbol;
            }
        }

        if is_key_pressed(KeyCode::Enter) {
            state.plan();
        }
        if is_key_pressed(KeyCode::R) {
            state.route = None;
        }
        if is_key_pressed(KeyCode::C) {
            state.copy_to_clipboard();
        }
        if is_key_pressed(KeyCode::V) {
            state.paste_from_clipboard();
        }

        // Close window on Escape
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        state.draw();

        next_frame().await
    }
}
