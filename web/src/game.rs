use serde::{Deserialize, Serialize};
use tictac_core as game;
use yew::prelude::*;

pub(crate) trait HasUpdate {
    fn has_update(self) -> bool;
}

impl HasUpdate for game::Result<game::PlayOutcome> {
    fn has_update(self) -> bool {
        match self {
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::debug!("play ignored: {}", err);
                false
            }
        }
    }
}

impl HasUpdate for game::Result<game::JumpOutcome> {
    fn has_update(self) -> bool {
        match self {
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::debug!("jump ignored: {}", err);
                false
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Msg {
    Play(game::CellIndex),
    JumpTo(game::MoveIndex),
    NewGame,
}

/// Label of the history button leading to `move_index`.
pub(crate) fn move_label(move_index: game::MoveIndex) -> String {
    if move_index > 0 {
        format!("Go to move #{}", move_index)
    } else {
        "Go to game start".to_string()
    }
}

fn cell_classes(cell: game::Cell, winning: bool, locked: bool) -> Classes {
    let mut class = classes!(
        "cell",
        match cell {
            game::Cell::Empty => classes!(),
            game::Cell::Marked(game::Mark::X) => classes!("x"),
            game::Cell::Marked(game::Mark::O) => classes!("o"),
        }
    );
    if winning {
        class.push("win");
    }
    if locked {
        class.push("locked");
    }
    class
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: game::CellIndex,
    cell: game::Cell,
    #[prop_or_default]
    winning: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::CellIndex>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        cell,
        winning,
        locked,
        callback,
    } = props.clone();

    let class = cell_classes(cell, winning, locked);
    let label = cell.mark().map_or("", game::Mark::symbol);

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} clicked", index);
        callback.emit(index);
    });

    html! {
        <button {class} {onclick}>{label}</button>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct HistoryProps {
    len: usize,
    current_move: game::MoveIndex,
    callback: Callback<game::MoveIndex>,
}

#[function_component(HistoryView)]
fn history_component(props: &HistoryProps) -> Html {
    let HistoryProps {
        len,
        current_move,
        callback,
    } = props.clone();

    html! {
        <ol>
            {
                for (0..len).map(|move_index| {
                    let callback = callback.clone();
                    let onclick = Callback::from(move |_: MouseEvent| callback.emit(move_index));
                    let class = (move_index == current_move).then_some("current");
                    html! {
                        <li key={move_index}>
                            <button {class} {onclick}>{move_label(move_index)}</button>
                        </li>
                    }
                })
            }
        </ol>
    }
}

/// Sole owner of the game engine; child components only get props and callbacks.
#[derive(Debug, Default)]
pub(crate) struct GameView {
    engine: game::GameEngine,
}

impl GameView {
    fn handle(&mut self, msg: Msg) -> bool {
        use Msg::*;

        match msg {
            Play(cell) => {
                log::debug!("play cell: {}", cell);
                self.engine.play(cell).has_update()
            }
            JumpTo(move_index) => {
                log::debug!("jump to move: {}", move_index);
                self.engine.jump_to(move_index).has_update()
            }
            NewGame => {
                log::debug!("new game");
                let started = self.engine.move_count() > 0;
                self.engine.reset();
                started
            }
        }
    }

    fn get_game_state_class(&self) -> Classes {
        use game::EngineState::*;
        classes!(match self.engine.state() {
            Playing if self.engine.current_move() == 0 => "not-started",
            Playing => "in-progress",
            Won(_) => "win",
        })
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.handle(msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let board = self.engine.current_board();
        let winning_line = self.engine.winning_line();
        let is_finished = self.engine.is_finished();
        let status = self.engine.status().to_string();

        let cb_play = ctx.link().callback(Play);
        let cb_jump = ctx.link().callback(JumpTo);
        let cb_new_game = ctx.link().callback(|_: MouseEvent| NewGame);

        html! {
            <div class={classes!("game", self.get_game_state_class())}>
                <div class="game-board">
                    <div class="status">{status}</div>
                    {
                        for (0..game::SIDE).map(|row| html! {
                            <div key={row} class="board-row">
                                {
                                    for board.row(row).map(|(index, cell)| {
                                        let winning = winning_line.is_some_and(|line| line.contains(&index));
                                        let locked = is_finished || !cell.is_empty();
                                        let callback = cb_play.clone();
                                        html! {
                                            <CellView {index} {cell} {winning} {locked} {callback}/>
                                        }
                                    })
                                }
                            </div>
                        })
                    }
                </div>
                <div class="game-info">
                    <HistoryView
                        len={self.engine.history().len()}
                        current_move={self.engine.current_move()}
                        callback={cb_jump}
                    />
                    <button class="new-game" onclick={cb_new_game}>{"New game"}</button>
                </div>
            </div>
        }
    }
}
