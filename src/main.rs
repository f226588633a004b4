//! Dino Adventure entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use dino_adventure::consts::*;
    use dino_adventure::platform::{FrameLoop, FrameOutcome};
    use dino_adventure::renderer::{CanvasRenderer, FrameView, RenderSink};
    use dino_adventure::{AssetManager, Game, GameConfig, GameError};

    /// Keys whose default browser action (page scroll) is suppressed
    const NO_SCROLL_KEYS: [&str; 5] = ["ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight", " "];

    /// DOM elements outside the canvas
    #[derive(Default)]
    struct Hud {
        // Last values written, to skip redundant DOM updates
        shown_score: Option<u64>,
        shown_paused: Option<bool>,
    }

    impl Hud {
        fn update(&mut self, view: &FrameView) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if self.shown_score != Some(view.score) {
                if let Some(el) = document.get_element_by_id(SCORE_ID) {
                    el.set_text_content(Some(&view.score.to_string()));
                }
                self.shown_score = Some(view.score);
            }

            if self.shown_paused != Some(view.paused) {
                if let Some(el) = document.get_element_by_id(PAUSE_OVERLAY_ID) {
                    let classes = el.class_list();
                    let _ = if view.paused {
                        classes.remove_1("hidden")
                    } else {
                        classes.add_1("hidden")
                    };
                }
                self.shown_paused = Some(view.paused);
            }
        }
    }

    /// Canvas plus HUD
    struct Screen {
        canvas: CanvasRenderer,
        hud: Hud,
    }

    impl RenderSink for Screen {
        fn present(&mut self, view: &FrameView) {
            self.canvas.present(view);
            self.hud.update(view);
        }
    }

    /// Everything the browser callbacks share
    struct App {
        game: Game,
        frame_loop: FrameLoop,
        screen: Screen,
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Starting Dino Adventure...");

        if let Err(e) = start().await {
            log::error!("Failed to start game: {}", e);
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(
                    "Failed to start the game. Please check the console for details.",
                );
            }
        }
    }

    async fn start() -> Result<(), GameError> {
        let config = GameConfig::load();

        let canvas = CanvasRenderer::from_element_id(
            CANVAS_ID,
            config.canvas_width as u32,
            config.canvas_height as u32,
        )?;

        let mut assets = AssetManager::new();
        let mut game = Game::init(&config, &mut assets).await?;

        let mut frame_loop = FrameLoop::new();
        frame_loop.start(&mut game);

        let app = Rc::new(RefCell::new(App {
            game,
            frame_loop,
            screen: Screen {
                canvas,
                hud: Hud::default(),
            },
        }));

        setup_input_handlers(app.clone());
        setup_shutdown(&app);

        request_animation_frame(app);

        log::info!("Game started successfully!");
        Ok(())
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                let mut app = app.borrow_mut();
                if NO_SCROLL_KEYS.contains(&key.as_str()) || app.game.bindings.is_pause(&key) {
                    event.prevent_default();
                }
                app.game.key_down(&key, event.repeat());
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.key_up(&event.key());
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyup events are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().game.input.release_all();
                log::debug!("Released all keys (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Stop the loop when the page is being unloaded
    fn setup_shutdown(app: &Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let handle = app.borrow().frame_loop.handle();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            handle.stop();
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let outcome = {
            let mut guard = app.borrow_mut();
            let App {
                game,
                frame_loop,
                screen,
            } = &mut *guard;
            frame_loop.frame(game, time, screen)
        };

        if outcome == FrameOutcome::Continue {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use dino_adventure::platform::{FrameLoop, FrameOutcome};
    use dino_adventure::renderer::{FrameView, RenderSink};
    use dino_adventure::{AssetManager, Game, GameConfig, GameError};

    /// Virtual 60 Hz refresh
    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// A stretch of frames with a fixed set of held keys
    struct Phase {
        frames: u32,
        keys: &'static [&'static str],
        paused: bool,
    }

    const SCRIPT: [Phase; 4] = [
        // Run into the right wall; the tail of this phase is blocked
        Phase {
            frames: 120,
            keys: &["ArrowRight"],
            paused: false,
        },
        Phase {
            frames: 60,
            keys: &["w", "a"],
            paused: false,
        },
        // Held key while paused: no movement, no score
        Phase {
            frames: 30,
            keys: &["ArrowDown"],
            paused: true,
        },
        Phase {
            frames: 30,
            keys: &["ArrowDown"],
            paused: false,
        },
    ];

    /// Logs score changes instead of drawing
    #[derive(Default)]
    struct LogSink {
        last_score: u64,
    }

    impl RenderSink for LogSink {
        fn present(&mut self, view: &FrameView) {
            if view.score != self.last_score && view.score % 25 == 0 {
                log::debug!(
                    "score {} at ({}, {})",
                    view.score,
                    view.player.x,
                    view.player.y
                );
            }
            self.last_score = view.score;
        }
    }

    pub fn run() -> Result<(), GameError> {
        let config = GameConfig::load();
        let mut assets = AssetManager::new();
        let mut game = pollster::block_on(Game::init(&config, &mut assets))?;

        let mut frame_loop = FrameLoop::new();
        let mut sink = LogSink::default();
        let mut now = 0.0;

        frame_loop.start(&mut game);
        for phase in &SCRIPT {
            if game.state.run.paused != phase.paused {
                game.toggle_pause();
            }
            for key in phase.keys {
                game.key_down(key, false);
            }
            for _ in 0..phase.frames {
                if frame_loop.frame(&mut game, now, &mut sink) == FrameOutcome::Stopped {
                    break;
                }
                now += FRAME_MS;
            }
            for key in phase.keys {
                game.key_up(key);
            }
            log::info!(
                "Phase done: player at ({}, {}), score {}",
                game.state.player.pos.x,
                game.state.player.pos.y,
                game.score()
            );
        }
        frame_loop.stop();

        log::info!(
            "Session over after {} frames: score {}, {} fps",
            frame_loop.frames(),
            game.score(),
            game.clock.fps()
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Dino Adventure (native) starting...");
    log::info!("Native mode runs a scripted headless session - build for wasm32 to play in the browser");

    if let Err(e) = headless::run() {
        log::error!("Failed to start game: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
