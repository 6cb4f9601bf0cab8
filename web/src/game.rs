use crate::utils::*;
use clap::Args;
use gloo::timers::callback::Timeout;
use memgrid_core as game;
use game::{BoardGenerator, GameUi};
use yew::html::Scope;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct TileDisplay {
    text: AttrValue,
    enabled: bool,
}

impl Default for TileDisplay {
    fn default() -> Self {
        Self {
            text: AttrValue::default(),
            enabled: true,
        }
    }
}

/// What the grid and the moves label currently show.
#[derive(Clone, Debug, Default, PartialEq)]
struct BoardDisplay {
    tiles: Vec<TileDisplay>,
    moves: game::MoveCount,
}

impl BoardDisplay {
    fn render_tile(&mut self, index: game::TileIndex, face: game::TileFace, enabled: bool) {
        if index >= self.tiles.len() {
            self.tiles.resize_with(index + 1, Default::default);
        }
        self.tiles[index] = TileDisplay {
            text: face.to_string().into(),
            enabled,
        };
    }

    fn rows(&self) -> impl Iterator<Item = &[TileDisplay]> {
        self.tiles.chunks(game::GRID_COLUMNS)
    }

    fn moves_label(&self) -> String {
        game::moves_label(self.moves)
    }
}

/// `GameUi` over the view's own fields, borrowed for the length of one controller call.
struct ViewUi<'a> {
    display: &'a mut BoardDisplay,
    mismatch_timeout: &'a mut Option<Timeout>,
    link: &'a Scope<GameView>,
}

impl GameUi for ViewUi<'_> {
    fn render_tile(&mut self, index: game::TileIndex, face: game::TileFace, enabled: bool) {
        self.display.render_tile(index, face, enabled);
    }

    fn show_moves_count(&mut self, moves: game::MoveCount) {
        self.display.moves = moves;
    }

    fn show_completion_message(&mut self, moves: game::MoveCount) {
        log::info!("board completed in {} moves", moves);
        gloo::dialogs::alert(&format!(
            "{}\n\n{}",
            game::COMPLETION_TITLE,
            game::completion_message(moves)
        ));
    }

    fn schedule_delay(&mut self, delay_ms: u32, token: game::DelayToken) {
        let link = self.link.clone();
        *self.mismatch_timeout = Some(Timeout::new(delay_ms, move || {
            link.send_message(Msg::MismatchTimeout(token))
        }));
    }

    fn cancel_delay(&mut self, token: game::DelayToken) {
        // dropping a gloo timeout clears it
        if self.mismatch_timeout.take().is_some() {
            log::trace!("cancelled mismatch timer {:?}", token);
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    TileClicked(game::TileIndex),
    MismatchTimeout(game::DelayToken),
    NewGame,
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    index: game::TileIndex,
    text: AttrValue,
    enabled: bool,
    callback: Callback<game::TileIndex>,
}

#[function_component(TileView)]
fn tile_component(props: &TileProps) -> Html {
    let TileProps {
        index,
        text,
        enabled,
        callback,
    } = props.clone();

    let class = classes!("tile", (!text.is_empty()).then_some("face-up"));
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("tile {} clicked", index);
        callback.emit(index);
    });

    html! {
        <button {class} {onclick} disabled={!enabled}>{text.to_string()}</button>
    }
}

/// Styling hook for the grid, `gated` while a mismatched pair waits to be hidden.
fn grid_class(controller: &game::RoundController) -> Classes {
    classes!("grid", controller.is_input_gated().then_some("gated"))
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    game: game::RoundController,
    display: BoardDisplay,
    mismatch_timeout: Option<Timeout>,
}

impl GameView {
    fn with_ui<R>(
        &mut self,
        ctx: &Context<Self>,
        f: impl FnOnce(&mut game::RoundController, &mut ViewUi<'_>) -> R,
    ) -> R {
        let Self {
            game,
            display,
            mismatch_timeout,
        } = self;

        let mut ui = ViewUi {
            display,
            mismatch_timeout,
            link: ctx.link(),
        };
        f(game, &mut ui)
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        let board = game::RandomBoardGenerator::new(seed)
            .generate(game::PAIR_COUNT)
            .expect("standard pair count must be dealable");

        let mut view = Self {
            game: game::RoundController::new(board),
            display: Default::default(),
            mismatch_timeout: None,
        };
        view.with_ui(ctx, |game, ui| game.start_new_game(ui));
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        log::trace!("msg: {:?}", msg);
        match msg {
            TileClicked(index) => self
                .with_ui(ctx, |game, ui| game.on_tile_clicked(index, ui))
                .unwrap_or_else(|err| panic!("tile grid out of sync with board: {}", err))
                .has_update(),
            MismatchTimeout(token) => {
                let outcome = self.with_ui(ctx, |game, ui| game.on_mismatch_timeout(token, ui));
                if outcome.has_update() {
                    self.mismatch_timeout = None;
                }
                outcome.has_update()
            }
            NewGame => {
                self.with_ui(ctx, |game, ui| game.start_new_game(ui));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let cb_new_game = ctx.link().callback(|_: MouseEvent| NewGame);

        html! {
            <div class="memgrid">
                <header>{game::WINDOW_TITLE}</header>
                <section class={grid_class(&self.game)}>
                    {
                        for self.display.rows().enumerate().map(|(row, tiles)| html! {
                            <div class="row">
                                {
                                    for tiles.iter().enumerate().map(|(col, tile)| {
                                        let index = row * game::GRID_COLUMNS + col;
                                        let callback = ctx.link().callback(TileClicked);
                                        html! {
                                            <TileView
                                                {index}
                                                text={tile.text.clone()}
                                                enabled={tile.enabled}
                                                {callback}
                                            />
                                        }
                                    })
                                }
                            </div>
                        })
                    }
                </section>
                <footer>
                    <span>{self.display.moves_label()}</span>
                    <button onclick={cb_new_game}>{"New game"}</button>
                </footer>
            </div>
        }
    }
}
