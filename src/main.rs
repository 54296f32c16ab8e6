//! Star Invader entry point
//!
//! Hosts the game in a browser canvas on wasm32; on native targets it plays a
//! short headless session and logs how it ended.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, Element, HtmlCanvasElement, HtmlInputElement, KeyboardEvent, TouchEvent,
    };

    use star_invader::commands::{ResponseKind, dispatch};
    use star_invader::platform::keymap::TOUCH_BUTTONS;
    use star_invader::platform::{
        GameLoop, WebScheduler, captured_key, control_for_key_code, playfield_for_viewport,
    };
    use star_invader::renderer::{RenderState, build_frame};
    use star_invader::sim::{EndReason, Phase, Playfield, SeededRandom, Session};
    use star_invader::{HostError, Tuning};

    type SharedHost = Rc<RefCell<Host>>;

    /// Everything one mounted game component owns
    struct Host {
        game: GameLoop<WebScheduler, SeededRandom>,
        renderer: RenderState,
        /// Starfield randomness, separate from gameplay randomness
        stars: SeededRandom,
        tuning: Tuning,
        window: web_sys::Window,
        document: Document,
        canvas: HtmlCanvasElement,
    }

    impl Host {
        fn new_session(tuning: &Tuning, playfield: Playfield) -> Session<SeededRandom> {
            let seed = js_sys::Date::now() as u64;
            log::debug!("New session seeded with {}", seed);
            Session::new(tuning.clone(), playfield, SeededRandom::new(seed))
        }

        fn on_frame(&mut self, timestamp_ms: f64) {
            match self.game.on_frame(timestamp_ms) {
                Ok(_) => {}
                Err(e) => {
                    // The loop has already put the session back to Idle
                    log::error!("Frame loop stopped: {}", e);
                    self.game.stop();
                }
            }
            self.render();
            self.update_hud();
        }

        fn render(&mut self) {
            let vertices = build_frame(self.game.session().state(), &mut self.stars);
            match self.renderer.render(&vertices) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    self.renderer.reconfigure();
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        fn start(&mut self) {
            match self.game.start() {
                Ok(true) => {}
                Ok(false) => log::debug!("Start pressed outside Idle"),
                Err(e) => log::error!("Could not schedule the first frame: {}", e),
            }
            self.update_hud();
        }

        fn restart(&mut self) {
            self.game.restart();
            self.render();
            self.update_hud();
        }

        /// Size the canvas to the viewport and carry the new playfield through
        fn resize(&mut self) {
            let (width, height) = viewport_size(&self.window);
            let playfield = playfield_for_viewport(width, height, &self.tuning);

            let (px_w, px_h) = (playfield.width as u32, playfield.height as u32);
            self.canvas.set_width(px_w);
            self.canvas.set_height(px_h);
            self.renderer.resize(px_w, px_h, playfield);
            self.game.session_mut().resize(playfield);
            log::debug!("Playfield resized to {}x{}", playfield.width, playfield.height);

            if !self.game.session().is_running() {
                self.render();
            }
        }

        /// Tear the running game down and mount a fresh Idle one
        fn remount(&mut self) {
            let playfield = self.game.session().state().playfield;
            self.game
                .replace_session(Self::new_session(&self.tuning, playfield));
            self.render();
            self.update_hud();
        }

        fn update_hud(&self) {
            let session = self.game.session();
            if let Some(el) = self.document.get_element_by_id("time-remaining") {
                let text = format!("Time: {}s", session.remaining_whole_secs());
                el.set_text_content(Some(&text));
            }

            let phase = session.phase();
            if let Some(el) = self.document.get_element_by_id("start-overlay") {
                set_hidden(&el, phase != Phase::Idle);
            }
            if let Some(el) = self.document.get_element_by_id("game-over-overlay") {
                set_hidden(&el, !matches!(phase, Phase::Ended(_)));
            }
            if let Phase::Ended(reason) = phase
                && let Some(el) = self.document.get_element_by_id("game-over-message")
            {
                el.set_text_content(Some(end_message(reason)));
            }
        }
    }

    fn end_message(reason: EndReason) -> &'static str {
        match reason {
            EndReason::Breach => "Game Over! An invader got through.",
            EndReason::PlayerHit => "Game Over! Your ship was hit.",
            EndReason::TimeUp => "Time's up!",
        }
    }

    fn set_hidden(el: &Element, hidden: bool) {
        let classes = el.class_list();
        let result = if hidden {
            classes.add_1("hidden")
        } else {
            classes.remove_1("hidden")
        };
        if let Err(e) = result {
            log::warn!("Could not toggle visibility of #{}: {:?}", el.id(), e);
        }
    }

    fn viewport_size(window: &web_sys::Window) -> (f32, f32) {
        let read = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
        };
        (read(window.inner_width()), read(window.inner_height()))
    }

    fn element(document: &Document, id: &'static str) -> Result<Element, HostError> {
        document
            .get_element_by_id(id)
            .ok_or(HostError::MissingElement(id))
    }

    /// Tuning from the canvas `data-tuning` attribute, defaults otherwise
    fn load_tuning(canvas: &HtmlCanvasElement) -> Tuning {
        match canvas.get_attribute("data-tuning") {
            Some(json) => Tuning::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring data-tuning override: {}", e);
                Tuning::default()
            }),
            None => Tuning::default(),
        }
    }

    pub async fn run() -> Result<(), HostError> {
        log::info!("Star Invader starting...");

        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let document = window.document().ok_or(HostError::NoDocument)?;

        let canvas: HtmlCanvasElement = element(&document, "canvas")?
            .dyn_into()
            .map_err(|_| HostError::WrongElementType("canvas", "canvas"))?;
        let start_btn = element(&document, "start-btn")?;
        let restart_btn = element(&document, "restart-btn")?;

        let tuning = load_tuning(&canvas);
        let (viewport_w, viewport_h) = viewport_size(&window);
        let playfield = playfield_for_viewport(viewport_w, viewport_h, &tuning);
        let (width, height) = (playfield.width as u32, playfield.height as u32);
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| HostError::Surface(e.to_string()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| HostError::Adapter(e.to_string()))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let renderer = RenderState::new(surface, &adapter, width, height, playfield).await?;

        let scheduler = WebScheduler::new()?;
        let session = Host::new_session(&tuning, playfield);
        let stars = SeededRandom::new(js_sys::Date::now() as u64 ^ 0x5EED);
        let host: SharedHost = Rc::new(RefCell::new(Host {
            game: GameLoop::new(scheduler, session),
            renderer,
            stars,
            tuning,
            window: window.clone(),
            document: document.clone(),
            canvas,
        }));

        install_frame_callback(&host);
        setup_keyboard(&document, &host);
        setup_touch_buttons(&document, &host);
        setup_button(&start_btn, &host, Host::start);
        setup_button(&restart_btn, &host, Host::restart);
        setup_resize(&window, &host);
        setup_command_input(&document, &host);

        {
            let mut h = host.borrow_mut();
            h.render();
            h.update_hud();
        }

        log::info!("Star Invader ready");
        Ok(())
    }

    fn install_frame_callback(host: &SharedHost) {
        let weak: Weak<RefCell<Host>> = Rc::downgrade(host);
        let closure = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            if let Some(host) = weak.upgrade() {
                host.borrow_mut().on_frame(timestamp);
            }
        });
        host.borrow_mut().game.scheduler_mut().set_callback(closure);
    }

    fn setup_keyboard(document: &Document, host: &SharedHost) {
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let running = host.borrow().game.session().is_running();
                if let Some(control) = captured_key(&event.code(), running) {
                    event.prevent_default();
                    host.borrow_mut().game.session_mut().press(control);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(control) = control_for_key_code(&event.code()) {
                    host.borrow_mut().game.session_mut().release(control);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_touch_buttons(document: &Document, host: &SharedHost) {
        for (id, control) in TOUCH_BUTTONS {
            let Some(button) = document.get_element_by_id(id) else {
                log::debug!("No #{} touch button, skipping", id);
                continue;
            };

            let pressed = {
                let host = host.clone();
                Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    host.borrow_mut().game.session_mut().press(control);
                })
            };
            let _ = button
                .add_event_listener_with_callback("touchstart", pressed.as_ref().unchecked_ref());
            pressed.forget();

            let released = {
                let host = host.clone();
                Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                    host.borrow_mut().game.session_mut().release(control);
                })
            };
            for event in ["touchend", "touchcancel"] {
                let _ = button
                    .add_event_listener_with_callback(event, released.as_ref().unchecked_ref());
            }
            released.forget();
        }
    }

    fn setup_button(button: &Element, host: &SharedHost, action: fn(&mut Host)) {
        let host = host.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            action(&mut host.borrow_mut());
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_resize(window: &web_sys::Window, host: &SharedHost) {
        let host = host.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            host.borrow_mut().resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Terminal line: `game` reveals the component, `clear` hides and unmounts it
    fn setup_command_input(document: &Document, host: &SharedHost) {
        let Some(input) = document
            .get_element_by_id("command-input")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            log::debug!("No #command-input, game is shown directly");
            return;
        };

        let host = host.clone();
        let document = document.clone();
        let field = input.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.key() != "Enter" {
                return;
            }
            let line = field.value();
            field.set_value("");
            let response = dispatch(&line);

            let container = document.get_element_by_id("game-container");
            match response.kind {
                ResponseKind::Game => {
                    if let Some(el) = &container {
                        set_hidden(el, false);
                    }
                }
                ResponseKind::Clear => {
                    if let Some(el) = &container {
                        set_hidden(el, true);
                    }
                    if let Some(output) = document.get_element_by_id("command-output") {
                        output.set_text_content(None);
                    }
                    host.borrow_mut().remount();
                }
                _ => print_response(&document, &line, &response.content),
            }
        });
        let _ = input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn print_response(document: &Document, line: &str, content: &serde_json::Value) {
        let Some(output) = document.get_element_by_id("command-output") else {
            return;
        };
        let body = match content {
            serde_json::Value::String(text) => text.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_default(),
        };
        match document.create_element("pre") {
            Ok(entry) => {
                entry.set_text_content(Some(&format!("$ {}\n{}", line.trim(), body)));
                let _ = output.append_child(&entry);
            }
            Err(e) => log::warn!("Could not append command output: {:?}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(e) = wasm_game::run().await {
        log::error!("Star Invader failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use star_invader::Tuning;
    use star_invader::sim::{Control, Phase, Playfield, SeededRandom, Session};

    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(42);
    log::info!("Star Invader (native) headless demo, seed {}", seed);

    let mut session = Session::new(
        Tuning::default(),
        Playfield::new(800.0, 600.0),
        SeededRandom::new(seed),
    );
    session.start();
    session.press(Control::Fire);

    // Chase the lowest enemy while firing continuously
    let dt = 1.0 / 60.0;
    let mut frames = 0u32;
    while session.is_running() {
        let player_x = session.state().player.pos.x;
        let target = session
            .state()
            .enemies
            .iter()
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|enemy| enemy.pos.x);
        session.release(Control::Left);
        session.release(Control::Right);
        match target {
            Some(x) if x < player_x - 5.0 => session.press(Control::Left),
            Some(x) if x > player_x + 5.0 => session.press(Control::Right),
            _ => {}
        }
        session.advance(dt);
        frames += 1;
    }

    if let Phase::Ended(reason) = session.phase() {
        log::info!(
            "Demo ended after {} frames ({:.2}s): {:?}",
            frames,
            session.elapsed().as_secs_f32(),
            reason
        );
        println!("{:?} after {:.2}s", reason, session.elapsed().as_secs_f32());
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
