//! Interactive terminal viewer.
//!
//! [`CatalogApp`] is a bubbletea model. On start it fetches the product list
//! once through the configured repository, then maps key presses onto the
//! [`InputHandlers`] and redraws through the terminal surface.
//!
//! The bubbletea runtime constructs the model through the parameterless
//! [`Model::init`], so the binary hands over its settings with [`configure`]
//! before starting the program.

use crate::catalog::Model as Catalog;
use crate::config::Settings;
use crate::handlers::{InitialInput, InputHandlers, SortControl};
use crate::key::{self, KeyMap, KeyPress};
use crate::product::Product;
use crate::render::terminal::{self, TerminalStyles, DEFAULT_WIDTH};
use crate::render::ViewModel;
use crate::repository::{load_products, HttpProductRepository, ProductRepository};
use bubbletea_rs::{Cmd, KeyMsg, Model, Msg, WindowSizeMsg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::debug;

/// Startup parameters handed to [`CatalogApp::init`].
#[derive(Clone)]
pub struct Launch {
    pub settings: Settings,
    pub initial: InitialInput,
    pub repository: Arc<dyn ProductRepository>,
}

static LAUNCH: OnceCell<Launch> = OnceCell::new();

/// Stores the startup parameters. Returns `false` if already configured.
pub fn configure(launch: Launch) -> bool {
    LAUNCH.set(launch).is_ok()
}

/// Sent once the product list has been fetched.
#[derive(Debug, Clone)]
pub struct ProductsLoadedMsg(pub Vec<Product>);

/// Command that loads the products and yields a [`ProductsLoadedMsg`].
pub fn fetch_products(repository: Arc<dyn ProductRepository>) -> Cmd {
    Box::pin(async move {
        let products = load_products(repository.as_ref()).await;
        Some(Box::new(ProductsLoadedMsg(products)) as Msg)
    })
}

#[derive(Debug, Clone)]
pub struct CatalogKeyMap {
    pub search: key::Binding,
    pub leave_search: key::Binding,
    pub prev_page: key::Binding,
    pub next_page: key::Binding,
    pub first_page: key::Binding,
    pub last_page: key::Binding,
    pub price_asc: key::Binding,
    pub price_desc: key::Binding,
    pub name_asc: key::Binding,
    pub name_desc: key::Binding,
    pub larger_pages: key::Binding,
    pub smaller_pages: key::Binding,
    pub quit: key::Binding,
    pub force_quit: key::Binding,
}

impl Default for CatalogKeyMap {
    fn default() -> Self {
        Self {
            search: key::Binding::new(vec![KeyCode::Char('/')]).with_help("/", "search"),
            leave_search: key::Binding::new(vec![KeyCode::Enter, KeyCode::Esc])
                .with_help("enter/esc", "done"),
            prev_page: key::Binding::new(vec![KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: key::Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
                .with_help("→/l", "next page"),
            first_page: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "first"),
            last_page: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "last"),
            price_asc: key::Binding::new(vec![KeyCode::Char('p')]).with_help("p/P", "price"),
            price_desc: key::Binding::new(vec![KeyCode::Char('P')]),
            name_asc: key::Binding::new(vec![KeyCode::Char('n')]).with_help("n/N", "name"),
            name_desc: key::Binding::new(vec![KeyCode::Char('N')]),
            larger_pages: key::Binding::new(vec![KeyCode::Char('+'), KeyCode::Char('=')])
                .with_help("+/-", "page size"),
            smaller_pages: key::Binding::new(vec![KeyCode::Char('-')]),
            quit: key::Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
            force_quit: key::Binding::new(vec![KeyPress::from((
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))]),
        }
    }
}

impl KeyMap for CatalogKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.search,
            &self.prev_page,
            &self.next_page,
            &self.first_page,
            &self.last_page,
            &self.price_asc,
            &self.name_asc,
            &self.larger_pages,
            &self.quit,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Waiting for the product list.
    Loading,
    Browsing,
    /// Keystrokes edit the search term.
    Searching,
}

/// The terminal catalog viewer.
#[derive(Debug, Clone)]
pub struct CatalogApp {
    catalog: Catalog,
    handlers: InputHandlers,
    initial: InitialInput,
    keymap: CatalogKeyMap,
    styles: TerminalStyles,
    mode: Mode,
    search: String,
    page_size: usize,
    width: usize,
}

impl CatalogApp {
    /// Creates a viewer in the loading state.
    pub fn new(settings: &Settings, initial: InitialInput) -> Self {
        Self {
            catalog: Catalog::default(),
            handlers: InputHandlers::new(settings.page_size_choices.clone()),
            search: initial.search.clone().unwrap_or_default(),
            initial,
            keymap: CatalogKeyMap::default(),
            styles: TerminalStyles::default(),
            mode: Mode::Loading,
            page_size: settings.page_size,
            width: DEFAULT_WIDTH,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn handlers(&self) -> &InputHandlers {
        &self.handlers
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn on_loaded(&mut self, products: Vec<Product>) {
        debug!(count = products.len(), "products received");
        self.catalog = Catalog::new(products, self.page_size);
        self.initial.apply(&mut self.handlers, &mut self.catalog);
        self.mode = Mode::Browsing;
    }

    /// Enables page navigation only while there is more than one page.
    fn update_keybindings(&mut self) {
        let paged = self.catalog.total_pages() > 1;
        let km = &mut self.keymap;
        for binding in [
            &mut km.prev_page,
            &mut km.next_page,
            &mut km.first_page,
            &mut km.last_page,
        ] {
            binding.set_enabled(paged);
        }
    }

    fn on_search_key(&mut self, msg: &KeyMsg) {
        if self.keymap.leave_search.matches(msg) {
            self.mode = Mode::Browsing;
            return;
        }
        match msg.key {
            KeyCode::Backspace => {
                if self.search.pop().is_some() {
                    self.handlers.on_search(&mut self.catalog, &self.search);
                }
            }
            KeyCode::Char(c) if !msg.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.push(c);
                self.handlers.on_search(&mut self.catalog, &self.search);
            }
            _ => {}
        }
    }

    fn on_browse_key(&mut self, msg: &KeyMsg) -> Option<Cmd> {
        let km = &self.keymap;
        let catalog = &mut self.catalog;
        let handlers = &mut self.handlers;

        if km.quit.matches(msg) {
            return Some(bubbletea_rs::quit());
        } else if km.search.matches(msg) {
            self.mode = Mode::Searching;
        } else if km.prev_page.matches(msg) {
            let target = catalog.page().saturating_sub(1);
            handlers.on_page(catalog, target);
        } else if km.next_page.matches(msg) {
            let target = catalog.page() + 1;
            handlers.on_page(catalog, target);
        } else if km.first_page.matches(msg) {
            handlers.on_page(catalog, 1);
        } else if km.last_page.matches(msg) {
            let target = catalog.total_pages();
            handlers.on_page(catalog, target);
        } else if km.price_asc.matches(msg) {
            handlers.on_sort(catalog, SortControl::PriceAsc);
        } else if km.price_desc.matches(msg) {
            handlers.on_sort(catalog, SortControl::PriceDesc);
        } else if km.name_asc.matches(msg) {
            handlers.on_sort(catalog, SortControl::NameAsc);
        } else if km.name_desc.matches(msg) {
            handlers.on_sort(catalog, SortControl::NameDesc);
        } else if km.larger_pages.matches(msg) {
            handlers.step_page_size(catalog, true);
        } else if km.smaller_pages.matches(msg) {
            handlers.step_page_size(catalog, false);
        }
        None
    }

    fn view_controls(&self) -> String {
        let label = Style::new().foreground(AdaptiveColor {
            Light: "#04B575",
            Dark: "#ECFD65",
        });
        let cursor = if self.mode == Mode::Searching { "█" } else { "" };
        let sort = self
            .handlers
            .active_sort()
            .map(SortControl::label)
            .unwrap_or("none");
        let choices = self
            .handlers
            .page_size_choices()
            .iter()
            .map(|c| {
                if *c == self.catalog.page_size() {
                    format!("[{c}]")
                } else {
                    c.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        format!(
            "{} {}{}\n{} {}   {} {}",
            label.clone().render("Search:"),
            self.search,
            cursor,
            label.clone().render("Sort:"),
            sort,
            label.render("Per page:"),
            choices
        )
    }
}

impl Model for CatalogApp {
    fn init() -> (Self, Option<Cmd>) {
        let (settings, initial, repository) = match LAUNCH.get() {
            Some(launch) => (
                launch.settings.clone(),
                launch.initial.clone(),
                Arc::clone(&launch.repository),
            ),
            None => {
                let settings = Settings::default();
                let repository: Arc<dyn ProductRepository> = Arc::new(
                    HttpProductRepository::new(settings.api_url.clone(), settings.timeout()),
                );
                (settings, InitialInput::default(), repository)
            }
        };
        (
            Self::new(&settings, initial),
            Some(fetch_products(repository)),
        )
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(loaded) = msg.downcast_ref::<ProductsLoadedMsg>() {
            self.on_loaded(loaded.0.clone());
            self.update_keybindings();
            return None;
        }
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.width = size.width as usize;
            return None;
        }

        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if self.keymap.force_quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }
        let cmd = match self.mode {
            Mode::Loading => {
                if self.keymap.quit.matches(key_msg) {
                    return Some(bubbletea_rs::quit());
                }
                None
            }
            Mode::Searching => {
                self.on_search_key(key_msg);
                None
            }
            Mode::Browsing => self.on_browse_key(key_msg),
        };
        self.update_keybindings();
        cmd
    }

    fn view(&self) -> String {
        if self.mode == Mode::Loading {
            return self.styles.info.clone().render("Loading products...");
        }

        let view = ViewModel::from_state(&self.catalog);
        let help = key::help_line(&self.keymap.short_help(), " • ");
        format!(
            "{}\n\n{}\n\n{}",
            self.view_controls(),
            terminal::render(&view, self.width, &self.styles),
            self.styles.info.clone().render(&help)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::StaticProductRepository;

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg
    }

    fn products(n: i64) -> Vec<Product> {
        (1..=n)
            .map(|i| Product::new(i, format!("Product {i}"), (i % 7) as f64))
            .collect()
    }

    fn loaded_app(n: i64) -> CatalogApp {
        let mut app = CatalogApp::new(&Settings::default(), InitialInput::default());
        app.update(Box::new(ProductsLoadedMsg(products(n))) as Msg);
        app
    }

    #[test]
    fn test_starts_loading() {
        let app = CatalogApp::new(&Settings::default(), InitialInput::default());
        assert_eq!(app.mode(), Mode::Loading);
        assert!(app.view().contains("Loading products..."));
    }

    #[test]
    fn test_keys_ignored_while_loading() {
        let mut app = CatalogApp::new(&Settings::default(), InitialInput::default());
        assert!(app.update(key(KeyCode::Right)).is_none());
        assert!(app.update(key(KeyCode::Char('q'))).is_some());
    }

    #[tokio::test]
    async fn test_fetch_command_yields_products() {
        let repository: Arc<dyn ProductRepository> =
            Arc::new(StaticProductRepository::new(products(3)));
        let msg = fetch_products(repository).await.unwrap();
        let loaded = msg.downcast_ref::<ProductsLoadedMsg>().unwrap();
        assert_eq!(loaded.0.len(), 3);
    }

    #[test]
    fn test_loaded_products_apply_initial_input() {
        let mut app = CatalogApp::new(
            &Settings::default(),
            InitialInput {
                search: Some("product 2".into()),
                sort: Some(SortControl::PriceDesc),
            },
        );
        app.update(Box::new(ProductsLoadedMsg(products(30))) as Msg);

        assert_eq!(app.mode(), Mode::Browsing);
        assert_eq!(app.catalog().search_term(), "product 2");
        assert_eq!(app.handlers().active_sort(), Some(SortControl::PriceDesc));
        let out = strip_ansi_escapes::strip_str(app.view());
        assert!(out.contains("Search: product 2"));
        assert!(out.contains("Price ↓"));
    }

    #[test]
    fn test_page_keys() {
        let mut app = loaded_app(35);
        app.update(key(KeyCode::Right));
        assert_eq!(app.catalog().page(), 2);
        app.update(key(KeyCode::Char('l')));
        assert_eq!(app.catalog().page(), 3);
        app.update(key(KeyCode::Char('G')));
        assert_eq!(app.catalog().page(), 4);
        app.update(key(KeyCode::Right));
        assert_eq!(app.catalog().page(), 4);
        app.update(key(KeyCode::Left));
        assert_eq!(app.catalog().page(), 3);
        app.update(key(KeyCode::Home));
        assert_eq!(app.catalog().page(), 1);
        app.update(key(KeyCode::Char('h')));
        assert_eq!(app.catalog().page(), 1);
    }

    #[test]
    fn test_sort_keys() {
        let mut app = loaded_app(20);
        app.update(key(KeyCode::Char('P')));
        assert_eq!(app.handlers().active_sort(), Some(SortControl::PriceDesc));
        let prices: Vec<f64> = app
            .catalog()
            .visible_items()
            .iter()
            .map(|p| p.price)
            .collect();
        assert!(prices.windows(2).all(|w| w[0] >= w[1]));

        app.update(key(KeyCode::Char('n')));
        assert_eq!(app.handlers().active_sort(), Some(SortControl::NameAsc));
        assert_eq!(app.catalog().current_slice()[0].title(), "Product 1");
    }

    #[test]
    fn test_page_size_keys() {
        let mut app = loaded_app(60);
        app.update(key(KeyCode::Char('+')));
        assert_eq!(app.catalog().page_size(), 20);
        app.update(key(KeyCode::Char('-')));
        app.update(key(KeyCode::Char('-')));
        assert_eq!(app.catalog().page_size(), 5);
        assert_eq!(app.catalog().total_pages(), 12);
    }

    #[test]
    fn test_search_mode_edits_term() {
        let mut app = loaded_app(25);
        app.update(key(KeyCode::Char('/')));
        assert_eq!(app.mode(), Mode::Searching);

        for c in "product 1".chars() {
            app.update(key(KeyCode::Char(c)));
        }
        assert_eq!(app.catalog().search_term(), "product 1");
        assert_eq!(app.catalog().len(), 11);

        // 'q' is text while searching
        assert!(app.update(key(KeyCode::Char('q'))).is_none());
        assert!(app.catalog().is_empty());
        app.update(key(KeyCode::Backspace));
        assert_eq!(app.catalog().len(), 11);

        app.update(key(KeyCode::Enter));
        assert_eq!(app.mode(), Mode::Browsing);
        assert_eq!(app.catalog().search_term(), "product 1");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = loaded_app(5);
        app.update(key(KeyCode::Char('/')));
        let ctrl_c = Box::new(KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        }) as Msg;
        assert!(app.update(ctrl_c).is_some());

        let mut app = loaded_app(5);
        assert!(app.update(key(KeyCode::Char('q'))).is_some());
    }

    #[test]
    fn test_window_size_sets_width() {
        let mut app = loaded_app(5);
        app.update(Box::new(WindowSizeMsg {
            width: 90,
            height: 30,
        }) as Msg);
        assert_eq!(app.width(), 90);
    }

    #[test]
    fn test_page_bindings_follow_page_count() {
        let mut app = loaded_app(12);
        let out = strip_ansi_escapes::strip_str(app.view());
        assert!(out.contains("→/l next page"));

        app.update(key(KeyCode::Char('+')));
        assert_eq!(app.catalog().total_pages(), 1);
        let out = strip_ansi_escapes::strip_str(app.view());
        assert!(!out.contains("next page"));
        assert!(out.contains("/ search"));

        app.update(key(KeyCode::Char('-')));
        assert_eq!(app.catalog().total_pages(), 2);
        app.update(key(KeyCode::Right));
        assert_eq!(app.catalog().page(), 2);
    }

    #[test]
    fn test_view_shows_no_results() {
        let mut app = loaded_app(0);
        let out = strip_ansi_escapes::strip_str(app.view());
        assert!(out.contains("Showing 0-0 of 0 products"));
        assert!(out.contains("No products found!"));
        app.update(key(KeyCode::Right));
        assert_eq!(app.catalog().page(), 1);
    }
}
