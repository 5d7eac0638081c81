use super::*;

/// Where the session loop currently stands.
///
/// `Init → RoundPrompt → Resolved → ContinuePrompt → {RoundPrompt | Summary}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Init,
    RoundPrompt,
    Resolved(Choice, Choice),
    ContinuePrompt,
    Summary,
}

/// What the player is told when the session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Cumulative record, including earlier sessions.
    pub score: Score,
    /// Who is ahead on the cumulative record.
    pub verdict: Outcome,
    /// Rounds played this session, draws included.
    pub rounds: usize,
    /// Series winner, when the mode is best-of-n and it was decided.
    pub series: Option<Outcome>,
}

/// One program run, from loading the score to the final summary.
///
/// The score is owned here and threaded through every phase; the store,
/// both players, the console and the screen are injected so the whole
/// loop runs the same against a terminal or a test transcript.
pub struct Session<C, S, U, P, D> {
    console: C,
    store: S,
    user: U,
    rival: P,
    screen: D,
    mode: Mode,
    name: String,
    reset: bool,
    start: Score,
    score: Score,
    history: History,
    rounds: usize,
}

impl<C, S, U, P, D> Session<C, S, U, P, D>
where
    C: Console,
    S: Store,
    U: Player,
    P: Player,
    D: Screen,
{
    pub fn new(console: C, store: S, user: U, rival: P, screen: D) -> Self {
        Self {
            console,
            store,
            user,
            rival,
            screen,
            mode: Mode::default(),
            name: String::from("Player"),
            reset: false,
            start: Score::default(),
            score: Score::default(),
            history: History::default(),
            rounds: 0,
        }
    }
    pub fn mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }
    pub fn name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }
    /// Zero the persisted record before the first round.
    pub fn reset(self, reset: bool) -> Self {
        Self { reset, ..self }
    }

    /// Play until the player declines another round or a series is
    /// decided. Only a failed save or closed input stops it early.
    pub fn run(mut self) -> Result<Summary, Error> {
        let mut phase = Phase::Init;
        loop {
            phase = match phase {
                Phase::Summary => return Ok(self.summary()),
                phase => self.step(phase)?,
            };
        }
    }
}

impl<C, S, U, P, D> Session<C, S, U, P, D>
where
    C: Console,
    S: Store,
    U: Player,
    P: Player,
    D: Screen,
{
    fn step(&mut self, phase: Phase) -> Result<Phase, Error> {
        match phase {
            Phase::Init => self.init(),
            Phase::RoundPrompt => self.prompt(),
            Phase::Resolved(user, computer) => self.resolve(user, computer),
            Phase::ContinuePrompt => self.proceed(),
            Phase::Summary => Ok(Phase::Summary),
        }
    }

    fn init(&mut self) -> Result<Phase, Error> {
        if self.reset {
            log::info!("resetting persisted score");
            self.store.save(&Score::default())?;
        }
        self.score = self.store.load();
        self.start = self.score;
        log::info!("session start {:?} mode {}", self.score, self.mode);
        Ok(Phase::RoundPrompt)
    }

    fn prompt(&mut self) -> Result<Phase, Error> {
        self.screen.clear();
        self.console.say(HEAVY_RULE);
        self.console.say("  Welcome to Stone, Paper, Scissors!");
        self.console.say(HEAVY_RULE);
        self.console.say(&format!("Score: {}", self.score));
        if !self.history.is_empty() {
            self.console.say("Recent rounds:");
            self.console.say(self.history.to_string().trim_end());
        }
        self.console.say(LIGHT_RULE);
        let user = self.user.choose(&mut self.console)?;
        let computer = self.rival.choose(&mut self.console)?;
        Ok(Phase::Resolved(user, computer))
    }

    fn resolve(&mut self, user: Choice, computer: Choice) -> Result<Phase, Error> {
        self.screen.animate();
        self.screen.render(user, computer);
        let round = Round::from((user, computer));
        self.console.say(&format!("\n{}", round.outcome().headline()));
        self.score.apply(round.outcome());
        self.store.save(&self.score)?;
        self.history.push(round);
        self.rounds += 1;
        log::info!("round {}: {} -> {:?}", self.rounds, round, self.score);
        self.console.say(&format!("Score: {}", self.score));
        self.console.say(LIGHT_RULE);
        Ok(Phase::ContinuePrompt)
    }

    fn proceed(&mut self) -> Result<Phase, Error> {
        if let Some(winner) = self.mode.winner(&self.start, &self.score) {
            log::info!("series decided: {}", winner);
            return Ok(Phase::Summary);
        }
        match self.console.ask(CONTINUE_PROMPT, continuation)? {
            true => Ok(Phase::RoundPrompt),
            false => Ok(Phase::Summary),
        }
    }

    fn summary(&mut self) -> Summary {
        let summary = Summary {
            score: self.score,
            verdict: self.score.verdict(),
            rounds: self.rounds,
            series: self.mode.winner(&self.start, &self.score),
        };
        self.screen.clear();
        self.console.say(HEAVY_RULE);
        self.console.say("           Game Over!");
        self.console.say(HEAVY_RULE);
        self.console.say(&format!("Final Score: {}", summary.score));
        if let Some(winner) = summary.series {
            let name = match winner {
                Outcome::UserWins => self.name.as_str(),
                _ => "Computer",
            };
            self.console.say(&format!("{} wins the series!", name));
        }
        self.console.say(&summary.verdict.verdict().to_string());
        self.console.say(HEAVY_RULE);
        log::info!("session end {:?} after {} rounds", summary.score, summary.rounds);
        summary
    }
}

/// Case-insensitive yes/no.
fn continuation(line: &str) -> Result<bool, Error> {
    match line.trim().to_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(Error::InvalidContinuation(line.trim().to_string())),
    }
}
