use crate::render;
use crate::settings;
use crate::theme::Theme;
use crate::utils::*;
use clap::Args;
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use mazerun_core as game;
use game::MazeGenerator;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent};
use yew::prelude::*;

/// The countdown advances once per interval.
const TICK_MILLIS: u32 = 1000;

/// Arrow keys and WASD steer the player.
pub(crate) fn direction_for_key(key: &str) -> Option<game::Direction> {
    use game::Direction::*;
    match key {
        "ArrowUp" | "w" | "W" => Some(North),
        "ArrowRight" | "d" | "D" => Some(East),
        "ArrowDown" | "s" | "S" => Some(South),
        "ArrowLeft" | "a" | "A" => Some(West),
        _ => None,
    }
}

fn state_class(state: game::EngineState) -> &'static str {
    use game::EngineState::*;
    match state {
        Ready => "not-started",
        Active => "in-progress",
        Won => "win",
        Lost => "lose",
    }
}

fn result_banner(state: game::EngineState) -> Option<&'static str> {
    use game::EngineState::*;
    match state {
        Won => Some("You Won!"),
        Lost => Some("Game Over!"),
        Ready | Active => None,
    }
}

fn new_engine(seed: u64, config: &game::GameConfig) -> game::PlayEngine {
    log::debug!("new {}x{} maze, seed: {}", config.size, config.size, seed);
    let maze = game::DfsMazeGenerator::new(seed).generate(config);
    game::PlayEngine::new(maze, config)
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl HasUpdate for game::Result<game::MoveOutcome> {
    fn has_update(self) -> bool {
        match self {
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::debug!("move ignored: {}", err);
                false
            }
        }
    }
}

impl HasUpdate for game::Result<game::TickOutcome> {
    fn has_update(self) -> bool {
        match self {
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::debug!("tick ignored: {}", err);
                false
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Move(game::Direction),
    Tick,
    NewGame,
    ToggleSettings,
    UpdateSettings(settings::Settings),
    SetTheme(Option<Theme>),
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    #[prop_or_default]
    pub seed: Option<u64>,

    /// Force the maze side length instead of the stored setting
    #[arg(long)]
    #[prop_or_default]
    pub size: Option<game::Coord>,
}

impl GameProps {
    /// Pins the first maze to a seed so it can be logged and replayed.
    pub(crate) fn with_seed(self, fallback: impl FnOnce() -> u64) -> Self {
        Self {
            seed: self.seed.or_else(|| Some(fallback())),
            ..self
        }
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    settings: settings::Settings,
    config: game::GameConfig,
    engine: game::PlayEngine,
    seed: u64,
    palette_theme: Theme,
    settings_open: bool,
    canvas: NodeRef,
    _timer_interval: Interval,
    _key_listener: EventListener,
}

impl GameView {
    fn create_timer(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(TICK_MILLIS, move || link.send_message(Msg::Tick))
    }

    fn create_key_listener(ctx: &Context<Self>) -> EventListener {
        let link = ctx.link().clone();
        EventListener::new(&gloo::utils::document(), "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = event.key();
            log::trace!("key down: {}", key);
            if let Some(dir) = direction_for_key(&key) {
                event.prevent_default();
                link.send_message(Msg::Move(dir));
            }
        })
    }

    fn config_for(settings: &settings::Settings, props: &GameProps) -> game::GameConfig {
        let mut config = settings.game_config();
        if let Some(size) = props.size {
            config = game::GameConfig::new(size, config.duration_secs, config.score_increment);
        }
        config
    }

    /// Starts a fresh maze with a full countdown aligned to a new interval.
    fn restart(&mut self, ctx: &Context<Self>, seed: u64) {
        self.seed = seed;
        self.engine = new_engine(seed, &self.config);
        self._timer_interval = Self::create_timer(ctx);
    }

    fn draw(&self) {
        if let Some(canvas) = self.canvas.cast::<HtmlCanvasElement>() {
            render::draw(&canvas, &self.engine, self.palette_theme.palette());
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let settings: settings::Settings = LocalOrDefault::local_or_default();
        let config = Self::config_for(&settings, ctx.props());
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);

        Self {
            settings,
            config,
            engine: new_engine(seed, &config),
            seed,
            palette_theme: Theme::effective(Theme::current()),
            settings_open: false,
            canvas: NodeRef::default(),
            _timer_interval: GameView::create_timer(ctx),
            _key_listener: GameView::create_key_listener(ctx),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Move(_) | Tick if self.settings_open => false,
            Move(dir) => {
                let updated = self.engine.move_player(dir).has_update();
                if updated && self.engine.is_finished() {
                    log::info!(
                        "won with {} points, {}s left",
                        self.engine.score(),
                        self.engine.time_left()
                    );
                }
                updated
            }
            Tick => {
                let updated = self.engine.tick().has_update();
                if updated && self.engine.is_finished() {
                    log::info!("time expired with {} points", self.engine.score());
                }
                updated
            }
            NewGame => {
                self.restart(ctx, js_random_seed());
                true
            }
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                true
            }
            UpdateSettings(settings) => {
                self.settings_open = false;
                if self.settings != settings {
                    settings.local_save();
                    self.settings = settings;
                    self.config = Self::config_for(&settings, ctx.props());
                    self.restart(ctx, js_random_seed());
                }
                true
            }
            SetTheme(theme) => {
                Theme::apply(theme);
                self.palette_theme = Theme::effective(theme);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use settings::SettingsView;
        use Msg::*;

        let state = self.engine.state();
        let game_state_class = classes!(state_class(state));
        let score = format_score(self.engine.score());
        let time_left = format_time_left(self.engine.time_left());
        let side = render::canvas_side(self.engine.size()).to_string();

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGame
        });
        let cb_show_settings = ctx.link().callback(|_: MouseEvent| ToggleSettings);
        let cb_apply = ctx.link().callback(UpdateSettings);
        let cb_theme = ctx.link().callback(SetTheme);
        let cb_cancel = ctx.link().callback(|_: ()| ToggleSettings);

        html! {
            <div class="mazerun">
                <small onclick={cb_show_settings}>{"···"}</small>
                <nav>
                    <aside title="Score">{score}</aside>
                    <span><button class={game_state_class} onclick={cb_new_game}/></span>
                    <aside title="Time">{time_left}</aside>
                </nav>
                <canvas
                    ref={self.canvas.clone()}
                    width={side.clone()}
                    height={side}
                    title={format!("seed {}", self.seed)}
                />
                if let Some(banner) = result_banner(state) {
                    <output class="result">{banner}</output>
                }
                <SettingsView
                    open={self.settings_open}
                    settings={self.settings}
                    on_apply={cb_apply}
                    on_theme={cb_theme}
                    on_cancel={cb_cancel}
                />
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        self.draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_and_wasd_map_to_directions() {
        use game::Direction::*;
        assert_eq!(direction_for_key("ArrowUp"), Some(North));
        assert_eq!(direction_for_key("d"), Some(East));
        assert_eq!(direction_for_key("S"), Some(South));
        assert_eq!(direction_for_key("ArrowLeft"), Some(West));
        assert_eq!(direction_for_key("Enter"), None);
    }

    #[test]
    fn banner_only_shows_when_finished() {
        use game::EngineState::*;
        assert_eq!(result_banner(Ready), None);
        assert_eq!(result_banner(Active), None);
        assert_eq!(result_banner(Won), Some("You Won!"));
        assert_eq!(result_banner(Lost), Some("Game Over!"));
        assert_eq!(state_class(Lost), "lose");
    }

    #[test]
    fn seeded_engine_is_reproducible() {
        let config = game::GameConfig::new(9, 30, 10);
        assert_eq!(new_engine(7, &config), new_engine(7, &config));
    }

    #[test]
    fn forced_seed_wins_over_fallback() {
        let forced = GameProps {
            seed: Some(42),
            size: Some(9),
        };
        assert_eq!(forced.clone().with_seed(|| 7), forced);

        let open = GameProps {
            seed: None,
            size: None,
        };
        assert_eq!(open.with_seed(|| 7).seed, Some(7));
    }

    #[test]
    fn new_game_restores_full_countdown() {
        let config = game::GameConfig::new(5, 3, 10);
        let mut engine = new_engine(3, &config);
        engine.tick().unwrap();
        engine.tick().unwrap();
        assert_eq!(engine.time_left(), 1);

        let engine = new_engine(4, &config);
        assert_eq!(engine.time_left(), 3);
        assert!(!engine.is_finished());
    }

    #[test]
    fn blocked_and_finished_moves_do_not_redraw() {
        let config = game::GameConfig::new(2, 1, 10);
        let mut engine = new_engine(1, &config);

        assert!(!engine.move_player(game::Direction::North).has_update());
        assert!(!engine.move_player(game::Direction::West).has_update());
        assert!(engine.tick().has_update());
        assert!(engine.is_finished());
        assert!(!engine.tick().has_update());
        assert!(!engine.move_player(game::Direction::North).has_update());
    }
}
