use crate::*;

/// One play-through of a level: the current board, its undo/redo history, and the level it
/// was started from.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    level: LevelDescriptor,
    board: Board,
    history: History,
    config: SessionConfig,
}

impl GameSession {
    pub fn new(level: LevelDescriptor) -> Result<Self> {
        Self::with_config(level, SessionConfig::default())
    }

    pub fn with_config(level: LevelDescriptor, config: SessionConfig) -> Result<Self> {
        let board = Self::start_board(&level)?;
        Ok(Self {
            level,
            board,
            history: History::new(config.history_limit),
            config,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn level(&self) -> &LevelDescriptor {
        &self.level
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_board(&self.board)
    }

    /// Plays one move: the owned region takes `color` and absorbs every reachable cell of that
    /// color.
    ///
    /// Picking the color that is already selected takes no step and captures nothing, but is
    /// still recorded in the history unless the config says otherwise. Any other move on a
    /// finished board fails with [`GameError::AlreadyEnded`].
    pub fn select_color(&mut self, color: Color) -> Result<GameStatus> {
        if !is_palette_color(color) {
            return Err(GameError::InvalidColor(color));
        }

        if color == self.board.selected_color() {
            if self.config.record_noop_moves {
                self.history.record_noop(self.board.clone());
            }
            log::debug!("Color {} is already selected, no step taken", color);
            return Ok(self.status());
        }

        self.check_not_finished()?;
        self.history.record(self.board.clone());

        self.board.set_selected_color(color)?;
        let captured = flood_fill(&mut self.board);
        self.board.record_step();

        let status = self.status();
        log::debug!(
            "Step {}: color {} captured {} cells, {}/{} owned, {:?}",
            self.board.step_count(),
            color,
            captured,
            self.board.captured_count(),
            self.board.total_cells(),
            status
        );
        Ok(status)
    }

    pub fn undo(&mut self) -> HistoryOutcome {
        if self.history.undo(&mut self.board) {
            log::debug!("Undo to step {}", self.board.step_count());
            HistoryOutcome::Changed
        } else {
            HistoryOutcome::NoChange
        }
    }

    pub fn redo(&mut self) -> HistoryOutcome {
        if self.history.redo(&mut self.board) {
            log::debug!("Redo to step {}", self.board.step_count());
            HistoryOutcome::Changed
        } else {
            HistoryOutcome::NoChange
        }
    }

    /// Starts over on `level`, discarding the board and all history.
    pub fn reset(&mut self, level: LevelDescriptor) -> Result<()> {
        self.board = Self::start_board(&level)?;
        self.level = level;
        self.history.clear();
        Ok(())
    }

    /// Starts the current level over.
    pub fn restart(&mut self) -> Result<()> {
        self.reset(self.level.clone())
    }

    /// Gives back one step of the budget, e.g. after the player earned a continue. Captures are
    /// kept and no history entry is made.
    ///
    /// Only budgeted boards that are not yet won can be granted a step, so a finished score
    /// never changes.
    pub fn grant_extra_step(&mut self) -> Result<GameStatus> {
        if self.board.step_budget().is_none() {
            return Err(GameError::NoStepBudget);
        }
        if self.board.is_won() {
            return Err(GameError::AlreadyEnded);
        }

        self.board.remove_step();
        log::debug!(
            "Granted an extra step, {} steps used",
            self.board.step_count()
        );
        Ok(self.status())
    }

    /// Fresh board with the origin's own color region already absorbed, so the first move
    /// grows the whole connected region.
    fn start_board(level: &LevelDescriptor) -> Result<Board> {
        let mut board = Board::from_level(level)?;
        flood_fill(&mut board);

        match level.id {
            Some(id) => log::info!("Started level {}", id),
            None => log::info!(
                "Started {}x{} {} board",
                board.size(),
                board.size(),
                board.adjacency()
            ),
        }
        Ok(board)
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
