use crate::algorithm::collapse::{CollapseEngine, NoSolution};
use crate::algorithm::selection::RandomSelector;
use crate::io::error::{Result, TilingError};
use crate::spatial::board::Board;
use crate::spatial::tiles::Catalog;
use rand::{SeedableRng, rngs::StdRng};

/// Completed board and the number of attempts it took
#[derive(Clone, Debug)]
pub struct Solution {
    /// Fully assigned board
    pub board: Board,
    /// Attempts made, including the successful one
    pub attempts: usize,
}

/// Repeats solve attempts with fresh state until one succeeds
///
/// Every attempt gets a new board and its own random stream drawn from the
/// driver's seeded generator, so a whole run is reproducible from one seed
/// while consecutive attempts stay uncorrelated.
pub struct Driver<'a> {
    catalog: &'a Catalog,
    width: usize,
    height: usize,
    max_attempts: Option<usize>,
    rng: StdRng,
}

impl<'a> Driver<'a> {
    /// Create an unbounded driver
    pub fn new(catalog: &'a Catalog, width: usize, height: usize, seed: u64) -> Self {
        Self {
            catalog,
            width,
            height,
            max_attempts: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Limit the number of attempts; `None` retries until success
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Configured attempt limit
    pub const fn max_attempts(&self) -> Option<usize> {
        self.max_attempts
    }

    /// Run a single attempt on a fresh board
    ///
    /// The outer result carries precondition failures, the inner one the
    /// retryable outcome of the attempt.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCatalog` or `InvalidParameter` if the engine rejects its
    /// inputs.
    pub fn attempt(&mut self) -> Result<std::result::Result<Board, NoSolution>> {
        let selector = RandomSelector::from_parent(&mut self.rng);
        let engine = CollapseEngine::new(self.catalog, self.width, self.height, selector)?;
        Ok(engine.solve())
    }

    /// Attempt until a board is solved or the limit is reached
    ///
    /// `on_failure` receives the 1-based attempt number and the failure after
    /// each unsuccessful attempt.
    ///
    /// # Errors
    ///
    /// Returns `AttemptsExhausted` when the limit is reached and propagates
    /// precondition failures from the engine.
    pub fn run<F>(&mut self, mut on_failure: F) -> Result<Solution>
    where
        F: FnMut(usize, &NoSolution),
    {
        let mut attempts = 0;

        loop {
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(TilingError::AttemptsExhausted { attempts });
            }
            attempts += 1;

            match self.attempt()? {
                Ok(board) => return Ok(Solution { board, attempts }),
                Err(failure) => on_failure(attempts, &failure),
            }
        }
    }
}
