//! Pitch Duel entry point
//!
//! Opens the window, loads assets and runs the fixed-timestep game loop.

use env_logger::Env;
use macroquad::time::{get_frame_time, get_time};
use macroquad::window::{Conf, clear_background, next_frame};
use rand_pcg::Pcg32;

use pitch_duel::Settings;
use pitch_duel::audio::AudioManager;
use pitch_duel::consts::*;
use pitch_duel::platform::{Assets, draw, input};
use pitch_duel::renderer::compose;
use pitch_duel::sim::{Flow, MatchPhase, MatchState, RngState, TickInput, tick};

/// Game instance holding all state
struct Game {
    state: MatchState,
    rng: Pcg32,
    accumulator: f32,
    input: TickInput,
    audio: AudioManager,
    last_phase: MatchPhase,
}

impl Game {
    fn new(seed: u64, settings: &Settings, audio: AudioManager) -> Self {
        let mut rng = RngState::new(seed).to_rng();
        let state = MatchState::with_tuning(Default::default(), settings.tuning, get_time(), &mut rng);
        Self {
            state,
            rng,
            accumulator: 0.0,
            input: TickInput::default(),
            audio,
            last_phase: MatchPhase::Playing,
        }
    }

    /// Run simulation ticks; returns `Flow::Quit` once the player leaves
    fn update(&mut self, dt: f32, now: f64) -> Flow {
        self.accumulator += dt.min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let flow = tick(&mut self.state, &self.input, now, &mut self.rng);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.restart = false;
            self.input.quit = false;

            if flow == Flow::Quit {
                return Flow::Quit;
            }
        }

        let events = self.state.drain_events();
        self.audio.play_events(&events);

        if self.state.phase != self.last_phase {
            if self.state.phase == MatchPhase::Ended {
                match serde_json::to_string(&self.state.score) {
                    Ok(json) => log::info!("Match summary: {}", json),
                    Err(e) => log::warn!("Could not serialize match summary: {}", e),
                }
            }
            self.last_phase = self.state.phase;
        }

        Flow::Continue
    }

    /// Merge this frame's keys into pending input (one-shots stay set until used)
    fn read_input(&mut self) {
        let fresh = input::poll();
        self.input = TickInput {
            restart: self.input.restart || fresh.restart,
            quit: self.input.quit || fresh.quit,
            ..fresh
        };
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "2D Football Game".to_owned(),
        window_width: FIELD_WIDTH,
        window_height: FIELD_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::info!("Pitch Duel starting...");

    let settings = Settings::load();
    let assets = match Assets::load(&settings.assets).await {
        Ok(assets) => assets,
        Err(e) => {
            match std::error::Error::source(&e) {
                Some(cause) => log::error!("{}: {}", e, cause),
                None => log::error!("{}", e),
            }
            std::process::exit(1);
        }
    };

    let audio = AudioManager::new(assets.sounds, &settings);
    audio.start_music();

    let seed: u64 = rand::random();
    log::info!("Match initialized with seed: {}", seed);
    let mut game = Game::new(seed, &settings, audio);

    loop {
        game.read_input();
        if game.update(get_frame_time(), get_time()) == Flow::Quit {
            break;
        }

        clear_background(macroquad::color::Color::new(0.0, 0.0, 0.0, 1.0));
        draw::execute(&compose(&game.state, get_time()), &assets.background);

        next_frame().await;
    }

    log::info!("Pitch Duel exiting");
}
