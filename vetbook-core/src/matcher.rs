//! Escalation path matching.
//!
//! Given a playbook's ordered escalation paths and the conditions a user
//! has affirmed so far, decide which single path best represents the
//! validation guidance. Three pure functions do the work; [`DecisionFlow`]
//! wraps them in the question-at-a-time protocol the presentation layer
//! drives.

use crate::entities::EscalationPath;

/// Distinct condition strings across all paths, in first-appearance
/// order (paths in declared order, conditions in sequence order).
///
/// Duplicates collapse by exact string equality. This is the question
/// set: each entry is asked once per interactive session.
pub fn question_set(paths: &[EscalationPath]) -> Vec<String> {
    let mut questions: Vec<String> = Vec::new();
    for path in paths {
        for condition in &path.conditions {
            if !questions.iter().any(|q| q == condition) {
                questions.push(condition.clone());
            }
        }
    }
    questions
}

/// Scan paths in reverse declared order for one containing `condition`.
///
/// Later-declared paths are treated as higher priority (the most severe
/// path is conventionally declared last), so a single affirmed condition
/// resolves the flow without asking the remaining questions. The reverse
/// scan order is load-bearing and must not be "fixed" to forward order.
pub fn short_circuit<'a>(
    paths: &'a [EscalationPath],
    condition: &str,
) -> Option<&'a EscalationPath> {
    paths
        .iter()
        .rev()
        .find(|path| path.conditions.iter().any(|c| c == condition))
}

/// Pick the path whose conditions overlap the affirmed set the most.
///
/// Strictly-greater comparison: the first path reaching the maximum
/// count is kept, and a path with zero matches never wins. When nothing
/// matches (empty or disjoint affirmed set) the first declared path is
/// the default. Returns `None` only for an empty path slice, which
/// callers are expected to rule out.
pub fn best_match<'a>(
    paths: &'a [EscalationPath],
    affirmed: &[String],
) -> Option<&'a EscalationPath> {
    let mut best: Option<&EscalationPath> = None;
    let mut max_matches = 0usize;

    for path in paths {
        let matches = path
            .conditions
            .iter()
            .filter(|c| affirmed.iter().any(|a| &a == c))
            .count();
        if matches > max_matches {
            max_matches = matches;
            best = Some(path);
        }
    }

    best.or_else(|| paths.first())
}

/// Terminal outcome of a decision flow.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// No conditions are defined anywhere: present every path as a flat
    /// informational list, there is no single winner.
    PathListing(Vec<EscalationPath>),
    /// A single selected path.
    Selected(EscalationPath),
}

/// Question-at-a-time wrapper around the matcher.
///
/// Holds only per-session answer state; the presentation layer owns the
/// instance and feeds it yes/no answers. Nothing here is persisted, and
/// discarding the instance discards in-progress answers.
#[derive(Debug, Clone)]
pub struct DecisionFlow {
    paths: Vec<EscalationPath>,
    questions: Vec<String>,
    affirmed: Vec<String>,
    cursor: usize,
    outcome: Option<MatchOutcome>,
}

impl DecisionFlow {
    /// Build a flow over a playbook's paths. An empty question set is
    /// immediately terminal with [`MatchOutcome::PathListing`].
    pub fn new(paths: Vec<EscalationPath>) -> Self {
        let questions = question_set(&paths);
        let outcome = if questions.is_empty() {
            Some(MatchOutcome::PathListing(paths.clone()))
        } else {
            None
        };
        Self {
            paths,
            questions,
            affirmed: Vec::new(),
            cursor: 0,
            outcome,
        }
    }

    /// The condition currently being asked, or `None` once terminal.
    pub fn current_question(&self) -> Option<&str> {
        if self.outcome.is_some() {
            return None;
        }
        self.questions.get(self.cursor).map(String::as_str)
    }

    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    /// Zero-based index of the current question and the total count.
    pub fn progress(&self) -> (usize, usize) {
        (self.cursor, self.questions.len())
    }

    pub fn affirmed_count(&self) -> usize {
        self.affirmed.len()
    }

    pub fn affirmed(&self) -> &[String] {
        &self.affirmed
    }

    /// Record an answer for the current question and advance.
    ///
    /// On "yes" the condition joins the affirmed list and the reverse
    /// short-circuit scan runs; a hit terminates the flow, skipping all
    /// remaining questions. On "no" nothing changes. After the final
    /// question the exhaustive best match decides.
    pub fn answer(&mut self, yes: bool) {
        if self.outcome.is_some() {
            return;
        }
        let Some(condition) = self.questions.get(self.cursor).cloned() else {
            return;
        };

        if yes {
            self.affirmed.push(condition.clone());
            if let Some(path) = short_circuit(&self.paths, &condition) {
                self.outcome = Some(MatchOutcome::Selected(path.clone()));
                return;
            }
        }

        if self.cursor + 1 < self.questions.len() {
            self.cursor += 1;
        } else {
            self.outcome = match best_match(&self.paths, &self.affirmed) {
                Some(path) => Some(MatchOutcome::Selected(path.clone())),
                None => Some(MatchOutcome::PathListing(Vec::new())),
            };
        }
    }

    /// Clear affirmed conditions and restart at question 1.
    pub fn reset(&mut self) {
        self.affirmed.clear();
        self.cursor = 0;
        if !self.questions.is_empty() {
            self.outcome = None;
        }
    }
}
