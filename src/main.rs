//! Coin Dash entry point
//!
//! On the web this wires the canvas, keyboard, HUD and buttons to a
//! [`Driver`](coin_dash::Driver) and starts the frame loop. Natively it plays
//! a short scripted session headlessly and logs a summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

    use coin_dash::platform::{FrameLoop, PlatformError};
    use coin_dash::renderer::{Canvas2dSurface, Surface};
    use coin_dash::ui::DomHud;
    use coin_dash::{Driver, Tuning};

    thread_local! {
        /// Running loop; taking it out of the slot stops it
        static FRAME_LOOP: RefCell<Option<FrameLoop>> = const { RefCell::new(None) };
    }

    /// Game instance holding the driver and its drawing target
    struct Game {
        driver: Driver,
        surface: Canvas2dSurface,
    }

    impl Game {
        fn frame(&mut self) {
            let surface = if self.surface.is_available() {
                Some(&mut self.surface as &mut dyn Surface)
            } else {
                None
            };
            self.driver.frame(surface);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Coin Dash starting...");

        match start() {
            Ok(()) => log::info!("Coin Dash running!"),
            Err(e) => log::error!("Coin Dash failed to start: {}", e),
        }
    }

    fn start() -> Result<(), PlatformError> {
        let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
        let document = window.document().ok_or(PlatformError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or(PlatformError::MissingElement("canvas"))?
            .dyn_into()
            .map_err(|_| PlatformError::NotACanvas("canvas"))?;
        let surface = Canvas2dSurface::new(canvas)?;

        let hud = DomHud::new(document.clone());
        let game = Rc::new(RefCell::new(Game {
            driver: Driver::new(Tuning::default(), Box::new(hud)),
            surface,
        }));

        setup_keyboard(&window, game.clone())?;
        setup_buttons(&document, game.clone())?;

        let frame_game = game.clone();
        let frame_loop = FrameLoop::start(move |_time| frame_game.borrow_mut().frame())?;
        FRAME_LOOP.with(|slot| *slot.borrow_mut() = Some(frame_loop));

        setup_teardown(&window)?;
        Ok(())
    }

    fn setup_keyboard(window: &Window, game: Rc<RefCell<Game>>) -> Result<(), PlatformError> {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().driver.key_down(&event.key()) {
                    // Keep arrows and space from scrolling the page
                    event.prevent_default();
                }
            });
            window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                .map_err(PlatformError::from_js)?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().driver.key_up(&event.key());
            });
            window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())
                .map_err(PlatformError::from_js)?;
            closure.forget();
        }

        // Focus lost: keyup events will not arrive
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().driver.clear_input();
            });
            window
                .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())
                .map_err(PlatformError::from_js)?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), PlatformError> {
        if let Some(btn) = document.get_element_by_id("pause-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().driver.toggle_pause();
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .map_err(PlatformError::from_js)?;
            closure.forget();
        } else {
            log::warn!("No #pause-btn on the page");
        }

        if let Some(btn) = document.get_element_by_id("reset-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().driver.reset();
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .map_err(PlatformError::from_js)?;
            closure.forget();
        } else {
            log::warn!("No #reset-btn on the page");
        }

        Ok(())
    }

    /// Stop scheduling frames when the page goes away
    fn setup_teardown(window: &Window) -> Result<(), PlatformError> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let frame_loop = FRAME_LOOP.with(|slot| slot.borrow_mut().take());
            drop(frame_loop);
        });
        window
            .add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())
            .map_err(PlatformError::from_js)?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::cell::RefCell;
    use std::rc::Rc;

    use serde::Serialize;

    use coin_dash::platform::FrameLoop;
    use coin_dash::renderer::DrawRecorder;
    use coin_dash::sim::Outcome;
    use coin_dash::ui::HudState;
    use coin_dash::{Driver, Tuning};

    /// Keys held for a number of frames
    const SCRIPT: &[(u64, &[&str])] = &[
        (40, &[]),
        (8, &["ArrowRight"]),
        (30, &["ArrowRight", "ArrowUp"]),
        (20, &["d"]),
        (30, &["d", " "]),
        (40, &["a"]),
        (60, &[]),
    ];

    #[derive(Debug, Serialize)]
    struct Summary {
        frames: u64,
        ticks: u64,
        outcome: Outcome,
        score: u32,
        lives: u8,
        coins_taken: usize,
        coins_total: usize,
        hud: HudState,
        last_frame_draw_calls: usize,
    }

    pub fn run(tuning: Tuning) {
        let hud = Rc::new(RefCell::new(HudState::default()));
        let mut driver = Driver::new(tuning, Box::new(hud.clone()));
        let mut recorder = DrawRecorder::new();
        let mut frame_loop = FrameLoop::headless();
        let stop = frame_loop.stop_handle();

        for (frames, keys) in SCRIPT {
            driver.clear_input();
            for key in keys.iter() {
                driver.key_down(key);
            }
            log::debug!("Holding {:?} for {} frames", keys, frames);

            frame_loop.run_headless(*frames, |_time| {
                recorder.begin_frame();
                driver.frame(Some(&mut recorder));
                if driver.engine().is_terminal() {
                    stop.stop();
                }
            });
        }
        frame_loop.stop();

        let state = driver.engine().state();
        let summary = Summary {
            frames: frame_loop.frames(),
            ticks: state.time_ticks,
            outcome: state.outcome,
            score: state.score,
            lives: state.lives,
            coins_taken: state.coins_taken(),
            coins_total: state.level.coins.len(),
            hud: *hud.borrow(),
            last_frame_draw_calls: recorder.commands().len(),
        };

        match serde_json::to_string_pretty(&summary) {
            Ok(json) => log::info!("Session summary:\n{}", json),
            Err(e) => log::error!("Failed to serialize summary: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Coin Dash (headless) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match coin_dash::Tuning::load(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::error!("Failed to load tuning from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => coin_dash::Tuning::default(),
    };

    headless::run(tuning);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main
}
