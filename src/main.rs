//! Wrap Snake entry point
//!
//! In the browser: ticks on a `setInterval` timer, reads the keyboard and
//! redraws after every tick or key press. Natively: runs the autopilot
//! headless and prints the final board as JSON.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use wrap_snake::Settings;
    use wrap_snake::input::{InputHandler, KeyAction};
    use wrap_snake::renderer::RenderState;
    use wrap_snake::sim::{SnakeEngine, TickOutcome, choose_direction};

    fn js_err(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    /// Game instance holding all state
    struct Game {
        engine: SnakeEngine,
        render_state: Option<RenderState>,
        input: InputHandler,
        paused: bool,
        idle_mode: bool,
    }

    impl Game {
        fn new(engine: SnakeEngine) -> Self {
            Self {
                engine,
                render_state: None,
                input: InputHandler::new(),
                paused: false,
                idle_mode: false,
            }
        }

        /// One timer beat: advance, then redraw
        fn step(&mut self) {
            if self.paused {
                return;
            }

            if self.idle_mode {
                if let Some(dir) = self.engine.state().map(choose_direction) {
                    let _ = self.engine.set_direction(dir);
                }
            }

            match self.engine.tick() {
                Ok(TickOutcome::Reset { final_score }) => {
                    log::info!("Round over with score {}", final_score);
                }
                Ok(_) => {}
                Err(e) => log::warn!("Tick failed: {}", e),
            }

            self.render();
            self.update_hud();
        }

        /// Returns true when the key was consumed
        fn handle_key(&mut self, key: &str) -> bool {
            match self.input.handle_key(key) {
                KeyAction::Turn(dir) => {
                    if let Err(e) = self.engine.set_direction(dir) {
                        log::warn!("Turn ignored: {}", e);
                    }
                }
                KeyAction::TogglePause => {
                    self.paused = !self.paused;
                    log::info!("Paused: {}", self.paused);
                }
                KeyAction::ToggleIdle => {
                    self.idle_mode = !self.idle_mode;
                    log::info!("Idle mode: {}", self.idle_mode);
                }
                KeyAction::None => return false,
            }
            self.render();
            self.update_hud();
            true
        }

        /// Render the current board
        fn render(&mut self) {
            let Ok(snapshot) = self.engine.snapshot() else {
                return;
            };
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&snapshot) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let (Some(el), Ok(snapshot)) =
                (document.get_element_by_id("score"), self.engine.snapshot())
            {
                el.set_text_content(Some(&format!("Score: {}", snapshot.score)));
            }

            if let Some(el) = document.get_element_by_id("paused") {
                let class = if self.paused { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(js_err)?;

        log::info!("Wrap Snake starting...");

        let settings = Settings::load();
        let window = web_sys::window().ok_or_else(|| js_err("no window"))?;
        let document = window.document().ok_or_else(|| js_err("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| js_err("no canvas"))?
            .dyn_into()?;

        // Canvas backing store in device pixels, CSS size in board pixels
        let dpr = window.device_pixel_ratio();
        let (board_w, board_h) = settings.pixel_size();
        let width = (board_w as f64 * dpr) as u32;
        let height = (board_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        let _ = canvas.set_attribute(
            "style",
            &format!("width: {}px; height: {}px", board_w, board_h),
        );

        // Initialize game
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let mut engine = SnakeEngine::seeded(seed);
        engine
            .initialize(settings.width, settings.height)
            .map_err(js_err)?;
        let game = Rc::new(RefCell::new(Game::new(engine)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(js_err)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(js_err)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let cell_size = settings.cell_size as f32 * dpr as f32;
        let render_state = RenderState::new(surface, &adapter, width, height, cell_size)
            .await
            .map_err(js_err)?;
        game.borrow_mut().render_state = Some(render_state);

        setup_keyboard(game.clone());
        setup_auto_pause(game.clone());
        start_ticker(game.clone(), settings.tick_interval_ms)?;

        {
            let mut g = game.borrow_mut();
            g.render();
            g.update_hud();
        }

        log::info!("Wrap Snake running!");
        Ok(())
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if game.borrow_mut().handle_key(&event.key()) {
                event.prevent_default();
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Pause when the window loses focus
    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            let mut g = game.borrow_mut();
            if !g.paused {
                g.paused = true;
                g.update_hud();
                log::info!("Auto-paused (window blur)");
            }
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Fixed-cadence tick source
    fn start_ticker(game: Rc<RefCell<Game>>, interval_ms: u32) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| js_err("no window"))?;
        let closure = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().step();
        });
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            i32::try_from(interval_ms).map_err(js_err)?,
        )?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(not(target_arch = "wasm32"))]
const DEMO_TICKS: u32 = 2_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Wrap Snake (native) starting...");
    log::info!("Native mode plays headless on autopilot - run with `trunk serve` for the web version");

    if let Err(e) = run_headless() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Autopilot demo; the first CLI argument overrides the tick count
#[cfg(not(target_arch = "wasm32"))]
fn run_headless() -> Result<(), Box<dyn std::error::Error>> {
    use std::time::{SystemTime, UNIX_EPOCH};
    use wrap_snake::Settings;
    use wrap_snake::sim::{SnakeEngine, TickOutcome, choose_direction};

    let ticks: u32 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(DEMO_TICKS);

    let settings = Settings::load();
    settings.validate()?;
    let seed = match settings.seed {
        Some(seed) => seed,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as u64,
    };
    log::info!("Seed {}, {} ticks", seed, ticks);

    let mut engine = SnakeEngine::seeded(seed);
    engine.initialize(settings.width, settings.height)?;

    let mut best = 0;
    let mut rounds = 1;
    for _ in 0..ticks {
        if let Some(dir) = engine.state().map(choose_direction) {
            engine.set_direction(dir)?;
        }
        if let TickOutcome::Reset { final_score } = engine.tick()? {
            log::info!("Round {} over with score {}", rounds, final_score);
            best = best.max(final_score);
            rounds += 1;
        }
    }

    let snapshot = engine.snapshot()?;
    best = best.max(snapshot.score);
    log::info!("Played {} rounds, best score {}", rounds, best);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
