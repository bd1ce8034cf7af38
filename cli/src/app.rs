use std::io::{self, BufRead};

use anyhow::Context;
use buscaminas_core::{
    Board, BoardSnapshot, GameConfig, RandomMineSeeder, RevealOutcome,
};

use crate::parse::{self, Move};
use crate::player::Player;
use crate::storage::SaveManager;
use crate::view;

/// Menu-driven controller wiring the board to the console view, the save
/// manager, and the player record.
pub struct App {
    seed: Option<u64>,
    saves: SaveManager,
    player: Player,
}

impl App {
    pub fn new(seed: Option<u64>, saves: SaveManager) -> Self {
        Self {
            seed,
            saves,
            player: Player::default(),
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();

        view::prompt_name();
        let Some(name) = read_trimmed(&mut input)? else {
            return Ok(());
        };
        if !name.is_empty() {
            self.player.name = name;
        }
        let config = GameConfig::default();
        view::show_welcome(&self.player.name, config.size(), config.mines());

        loop {
            view::show_menu();
            let Some(choice) = read_trimmed(&mut input)? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.new_game(&mut input)?,
                "2" => self.load_game(&mut input)?,
                "3" => view::show_stats(&self.player),
                "4" => {
                    view::show_message("Thanks for playing!");
                    return Ok(());
                }
                _ => view::show_error("pick an option from 1 to 4"),
            }
        }
    }

    fn new_game(&mut self, input: &mut impl BufRead) -> anyhow::Result<()> {
        let seeder = match self.seed {
            Some(seed) => RandomMineSeeder::new(seed),
            None => RandomMineSeeder::from_entropy(),
        };
        let board = Board::with_seeder(GameConfig::default(), seeder);
        let config = board.game_config();
        log::info!(
            "New game started: {}x{} board, {} mines",
            config.size(),
            config.size(),
            config.mines()
        );
        view::show_message("New game started!");
        self.play(board, input)
    }

    fn load_game(&mut self, input: &mut impl BufRead) -> anyhow::Result<()> {
        match self.saves.load()? {
            Some(saved) => {
                let board =
                    Board::from_snapshot(&saved.board).context("save file holds an invalid board")?;
                self.player = saved.player;
                log::info!(
                    "Saved game loaded, {} of {} safe cells revealed",
                    board.revealed_count(),
                    board.game_config().safe_cells()
                );
                view::show_message("Game loaded!");
                self.play(board, input)
            }
            None => {
                view::show_error("no saved game found");
                Ok(())
            }
        }
    }

    fn play(&mut self, mut board: Board, input: &mut impl BufRead) -> anyhow::Result<()> {
        while !board.is_terminal() {
            view::show_board(&board);
            view::show_move_help();
            let Some(line) = read_trimmed(input)? else {
                return Ok(());
            };

            match parse::parse_move(&line) {
                Ok(Move::Menu) => return Ok(()),
                Ok(Move::Save) => {
                    self.saves
                        .save(BoardSnapshot::from_board(&board), &self.player)?;
                    view::show_message("Game saved.");
                }
                Ok(Move::Flag(coords)) => match board.toggle_flag(coords) {
                    Ok(outcome) if outcome.has_update() => view::show_message("Flag toggled."),
                    Ok(_) => view::show_message("Revealed cells cannot be flagged."),
                    Err(err) => view::show_error(&err.to_string()),
                },
                Ok(Move::Reveal(coords)) => match board.reveal(coords) {
                    Ok(RevealOutcome::HitMine) => view::show_message("You revealed a mine!"),
                    Ok(outcome) if !outcome.has_update() => {
                        view::show_message("That cell is flagged; unflag it first.")
                    }
                    Ok(_) => {}
                    // AlreadyRevealed and OutOfBounds are expected player
                    // slips: report and keep playing.
                    Err(err) => view::show_error(&err.to_string()),
                },
                Err(err) => view::show_error(&err.to_string()),
            }
        }

        view::show_board(&board);
        self.finish(&board)
    }

    fn finish(&mut self, board: &Board) -> anyhow::Result<()> {
        if board.is_victory() {
            view::show_victory();
            self.player.record_win();
        } else {
            view::show_defeat();
            self.player.record_loss();
        }
        view::show_stats(&self.player);

        // A finished game makes the save file stale.
        self.saves.delete()?;
        Ok(())
    }
}

fn read_trimmed(input: &mut impl BufRead) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line).context("reading input")? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}
