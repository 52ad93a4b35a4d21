//! Round-by-round expansion driver.
//!
//! The driver owns one generation of partial matches at a time. Each call to
//! [`ExpandDriver::step`] runs one hop: fetch candidate edges for the current
//! frontier, join them on `endpoint == tie_point`, grow every pair, apply the
//! path policy, report what qualifies and keep the rest for the next round.
//! A generation is complete before the next round starts, so a caller may
//! stop stepping between rounds and drop the driver at any time.

use crate::policy::{HopOutcome, HopPolicy};
use crate::{
    CandidateEdges, EdgeWithTiePoint, ExpandConfig, ExpandError, ExpandResult, HopBounds, KeyJoin,
    PartialPathMatch,
};
use rayon::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use varlen_core::{Embedding, GraphId};

#[derive(Debug, Clone, PartialEq, Eq)]
enum SeedStart {
    Ids(Vec<GraphId>),
    Column(usize),
}

/// A starting point: a base embedding and the node(s) to expand from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    base: Arc<Embedding>,
    start: SeedStart,
}

impl Seed {
    /// Seed with explicit identifiers. The last one becomes the endpoint.
    pub fn new(base: impl Into<Arc<Embedding>>, ids: impl IntoIterator<Item = GraphId>) -> Self {
        Self {
            base: base.into(),
            start: SeedStart::Ids(ids.into_iter().collect()),
        }
    }

    /// Seed from the node bound at `column` of the base embedding.
    pub fn from_column(base: impl Into<Arc<Embedding>>, column: usize) -> Self {
        Self {
            base: base.into(),
            start: SeedStart::Column(column),
        }
    }

    pub fn base(&self) -> &Embedding {
        &self.base
    }

    fn resolve(self) -> ExpandResult<PartialPathMatch> {
        match self.start {
            SeedStart::Ids(ids) => PartialPathMatch::new(self.base, &ids),
            SeedStart::Column(column) => {
                let start = self.base.id_at(column).map_err(|e| {
                    ExpandError::invalid_seed(format!("start column unusable: {}", e))
                })?;
                PartialPathMatch::new(self.base, &[start])
            }
        }
    }
}

/// A seed that could not be expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRejection {
    /// Position of the seed in the seeding input.
    pub index: usize,
    pub error: ExpandError,
}

/// Driver lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Waiting for seeds.
    Seeding,
    /// The next `step` runs this round.
    Expanding(usize),
    /// Nothing left to do.
    Done,
}

/// Counters for one expansion round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundStats {
    pub round: usize,
    /// Distinct endpoints in the incoming generation.
    pub frontier: usize,
    /// Candidate edges returned for the frontier.
    pub candidates: usize,
    /// Pairs produced by the join.
    pub joined: usize,
    /// Hops refused by the path policy.
    pub rejected: usize,
    /// Matches carried into the next generation.
    pub carried: usize,
    /// Embeddings reported in this round.
    pub emitted: usize,
}

/// Everything an expansion produced.
#[derive(Debug, Clone, Default)]
pub struct ExpandOutput {
    /// Final embeddings: base entries, path list, endpoint.
    pub results: Vec<Embedding>,
    pub rejected_seeds: Vec<SeedRejection>,
    pub rounds: Vec<RoundStats>,
}

/// Drives a variable-length expansion to completion.
pub struct ExpandDriver<J, C> {
    config: ExpandConfig,
    bounds: HopBounds,
    policy: HopPolicy,
    join: J,
    candidates: C,
    state: DriverState,
    generation: Vec<PartialPathMatch>,
    output: ExpandOutput,
}

impl<J: KeyJoin, C: CandidateEdges> ExpandDriver<J, C> {
    /// Create a driver. Fails if the configuration is unusable.
    pub fn new(config: ExpandConfig, join: J, candidates: C) -> ExpandResult<Self> {
        let bounds = config.validate()?;
        let policy = HopPolicy::new(&config);

        Ok(Self {
            config,
            bounds,
            policy,
            join,
            candidates,
            state: DriverState::Seeding,
            generation: Vec::new(),
            output: ExpandOutput::default(),
        })
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn bounds(&self) -> HopBounds {
        self.bounds
    }

    /// The current generation of partial matches.
    pub fn generation(&self) -> &[PartialPathMatch] {
        &self.generation
    }

    /// Embeddings reported so far.
    pub fn results(&self) -> &[Embedding] {
        &self.output.results
    }

    pub fn rejected_seeds(&self) -> &[SeedRejection] {
        &self.output.rejected_seeds
    }

    pub fn rounds(&self) -> &[RoundStats] {
        &self.output.rounds
    }

    /// Build generation 0.
    ///
    /// Seeds that cannot be turned into a match are recorded and skipped.
    /// A base that does not fit the configured columns aborts the run.
    pub fn seed(&mut self, seeds: impl IntoIterator<Item = Seed>) -> ExpandResult<DriverState> {
        if self.state != DriverState::Seeding {
            return Err(ExpandError::configuration("driver has already been seeded"));
        }

        let mut seeded = Vec::new();
        for (index, seed) in seeds.into_iter().enumerate() {
            if let Err(e) = self.config.check_base(seed.base()) {
                return Err(self.fail(e));
            }
            match seed.resolve() {
                Ok(m) => seeded.push(m),
                Err(error) => {
                    warn!(index, %error, "rejected seed");
                    self.output.rejected_seeds.push(SeedRejection { index, error });
                }
            }
        }

        let accepted = seeded.len();
        let mut generation = Vec::new();
        let mut emitted = 0;
        for m in seeded {
            if self.settle(m, false, &mut generation) {
                emitted += 1;
            }
        }
        self.generation = generation;

        debug!(
            seeds = accepted,
            rejected = self.output.rejected_seeds.len(),
            emitted,
            "seeded generation 0"
        );

        self.state = if self.generation.is_empty() {
            self.finish()
        } else {
            DriverState::Expanding(1)
        };
        Ok(self.state)
    }

    /// Run one round. Returns the state after the round.
    ///
    /// A fatal error discards every result reported so far and leaves the
    /// driver `Done`.
    pub fn step(&mut self) -> ExpandResult<DriverState> {
        match self.state {
            DriverState::Seeding => Err(ExpandError::configuration(
                "driver must be seeded before expanding",
            )),
            DriverState::Done => Ok(DriverState::Done),
            DriverState::Expanding(round) => match self.expand_round(round) {
                Ok(state) => {
                    self.state = state;
                    Ok(state)
                }
                Err(e) => Err(self.fail(e)),
            },
        }
    }

    /// Seed, then step until done.
    pub fn run(mut self, seeds: impl IntoIterator<Item = Seed>) -> ExpandResult<ExpandOutput> {
        self.seed(seeds)?;
        while self.step()? != DriverState::Done {}
        Ok(self.into_output())
    }

    pub fn into_output(self) -> ExpandOutput {
        self.output
    }

    fn expand_round(&mut self, round: usize) -> ExpandResult<DriverState> {
        let frontier: HashSet<GraphId> = self
            .generation
            .iter()
            .map(PartialPathMatch::endpoint)
            .collect();

        let candidates = self.candidates.candidates(&frontier)?;
        if let Some(stray) = candidates
            .iter()
            .find(|e| !frontier.contains(&e.tie_point))
        {
            return Err(ExpandError::join_contract_violation(format!(
                "candidate edge {} has tie-point {} outside the round {} frontier",
                stray.edge_id, stray.tie_point, round
            )));
        }

        let pairs = self.join.join_on_key(
            &self.generation,
            &candidates,
            |m: &PartialPathMatch| m.endpoint(),
            |e: &EdgeWithTiePoint| e.tie_point,
        );

        let policy = &self.policy;
        let outcomes: Vec<HopOutcome> = pairs
            .par_iter()
            .map(|(m, edge)| policy.apply(m, edge))
            .collect();

        let mut stats = RoundStats {
            round,
            frontier: frontier.len(),
            candidates: candidates.len(),
            joined: outcomes.len(),
            ..RoundStats::default()
        };

        let mut next = Vec::new();
        for outcome in outcomes {
            match outcome {
                HopOutcome::Rejected => stats.rejected += 1,
                HopOutcome::Accepted { grown, terminal } => {
                    if self.settle(grown, terminal, &mut next) {
                        stats.emitted += 1;
                    }
                }
            }
        }
        stats.carried = next.len();

        debug!(
            round,
            frontier = stats.frontier,
            candidates = stats.candidates,
            joined = stats.joined,
            rejected = stats.rejected,
            carried = stats.carried,
            emitted = stats.emitted,
            "expansion round complete"
        );

        self.output.rounds.push(stats);
        self.generation = next;

        if self.generation.is_empty() {
            Ok(self.finish())
        } else {
            Ok(DriverState::Expanding(round + 1))
        }
    }

    /// Report `m` if its own hop count is within bounds and keep it if it
    /// may grow further. Returns whether it was reported.
    fn settle(
        &mut self,
        m: PartialPathMatch,
        terminal: bool,
        next: &mut Vec<PartialPathMatch>,
    ) -> bool {
        let hops = m.hops();
        let report = self.bounds.reports(hops) && self.policy.closes(&m);
        let grows = !terminal && self.bounds.grows(hops);

        match (report, grows) {
            (true, true) => {
                self.output.results.push(m.to_embedding());
                next.push(m);
            }
            (true, false) => self.output.results.push(m.into_embedding()),
            (false, true) => next.push(m),
            (false, false) => {}
        }
        report
    }

    fn finish(&mut self) -> DriverState {
        self.generation.clear();
        self.state = DriverState::Done;
        info!(
            results = self.output.results.len(),
            rounds = self.output.rounds.len(),
            rejected_seeds = self.output.rejected_seeds.len(),
            "expansion finished"
        );
        self.state
    }

    fn fail(&mut self, e: ExpandError) -> ExpandError {
        error!(error = %e, "expansion aborted");
        self.generation.clear();
        self.output.results.clear();
        self.state = DriverState::Done;
        e
    }
}

/// Expand `seeds` with a fresh driver.
pub fn expand<J: KeyJoin, C: CandidateEdges>(
    config: ExpandConfig,
    join: J,
    candidates: C,
    seeds: impl IntoIterator<Item = Seed>,
) -> ExpandResult<ExpandOutput> {
    ExpandDriver::new(config, join, candidates)?.run(seeds)
}
