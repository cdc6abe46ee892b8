//! RankAlternativesHandler - Ranks the alternatives of one workbook.
//!
//! Reads the workbook through the `WorkbookReader` port, builds the decision
//! matrix, runs WISP scoring, and attaches the winner's commentary. Each call
//! is independent; the handler holds no per-run state.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::RankingSettings;
use crate::domain::analysis::{
    AnalysisError, CriteriaWeights, DecisionMatrix, Ranking, ValidationMode, WispAnalyzer,
};
use crate::domain::commute::CommuteCategory;
use crate::domain::foundation::{AlternativeId, CriterionId, DomainError};
use crate::domain::fuzzy::Ivpfn;
use crate::ports::{DecisionInputs, IngestionError, WorkbookReader};

/// Command to rank the alternatives in a workbook.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    /// Path of the workbook to read.
    pub workbook_path: PathBuf,
}

/// The top-ranked alternative and what to say about it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Winner {
    pub alternative: AlternativeId,
    pub category: CommuteCategory,
    pub commentary: &'static str,
    /// True if another alternative has the same score.
    pub tied: bool,
}

/// Result of a successful ranking run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingReport {
    /// Alternatives by descending score.
    pub ranking: Ranking,
    /// Criterion labels in matrix order.
    pub criteria: Vec<CriterionId>,
    /// Normalized criterion weights, in criterion order.
    pub weights: CriteriaWeights,
    /// Category of each alternative, keyed by label.
    pub categories: BTreeMap<String, CommuteCategory>,
    /// None when there are no alternatives.
    pub winner: Option<Winner>,
}

impl RankingReport {
    /// Category attached to an alternative at ingestion.
    pub fn category_of(&self, alternative: &str) -> Option<CommuteCategory> {
        self.categories.get(alternative).copied()
    }
}

/// Error type for ranking operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RankingFailure {
    /// The workbook could not be read or decoded.
    Ingestion(IngestionError),
    /// The inputs could not be scored.
    Analysis(AnalysisError),
}

impl RankingFailure {
    /// Message suitable for showing to the person who supplied the workbook.
    pub fn user_message(&self) -> String {
        match self {
            RankingFailure::Ingestion(err) => format!("Error loading data: {}", err),
            RankingFailure::Analysis(err) => format!("Error ranking alternatives: {}", err),
        }
    }
}

impl std::fmt::Display for RankingFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankingFailure::Ingestion(err) => write!(f, "{}", err),
            RankingFailure::Analysis(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RankingFailure {}

impl From<IngestionError> for RankingFailure {
    fn from(err: IngestionError) -> Self {
        RankingFailure::Ingestion(err)
    }
}

impl From<AnalysisError> for RankingFailure {
    fn from(err: AnalysisError) -> Self {
        RankingFailure::Analysis(err)
    }
}

impl From<RankingFailure> for DomainError {
    fn from(err: RankingFailure) -> Self {
        match err {
            RankingFailure::Ingestion(inner) => inner.into(),
            RankingFailure::Analysis(inner) => inner.into(),
        }
    }
}

/// Handler for ranking workbook alternatives.
pub struct RankAlternativesHandler {
    reader: Arc<dyn WorkbookReader>,
    settings: RankingSettings,
}

impl RankAlternativesHandler {
    pub fn new(reader: Arc<dyn WorkbookReader>, settings: RankingSettings) -> Self {
        Self { reader, settings }
    }

    pub fn handle(&self, cmd: RankAlternativesCommand) -> Result<RankingReport, RankingFailure> {
        let inputs = self.reader.read(&cmd.workbook_path)?;
        debug!(
            path = %cmd.workbook_path.display(),
            alternatives = inputs.alternatives.len(),
            criteria = inputs.criterion_count(),
            "Workbook decoded"
        );

        rank_inputs(&inputs, self.settings.validation)
    }
}

/// Ranks already-decoded inputs. Performs no I/O.
///
/// # Errors
/// - `ShapeMismatch` if the weight count differs from the criterion count
/// - any other `AnalysisError` from the scoring pipeline
pub fn rank_inputs(
    inputs: &DecisionInputs,
    mode: ValidationMode,
) -> Result<RankingReport, RankingFailure> {
    let criterion_count = inputs.criterion_count();
    if inputs.weights.len() != criterion_count {
        return Err(AnalysisError::shape_mismatch("weights", criterion_count, inputs.weights.len()).into());
    }

    let matrix = inputs
        .alternatives
        .iter()
        .fold(
            DecisionMatrix::builder()
                .criteria(inputs.weights.iter().map(|w| w.label.clone()).collect::<Vec<String>>()),
            |builder, alternative| {
                builder.alternative(alternative.label.clone(), alternative.judgments.clone())
            },
        )
        .build()?;
    let fuzzy_weights: Vec<Ivpfn> = inputs.weights.iter().map(|w| w.judgment).collect();

    if mode == ValidationMode::Permissive {
        warn_invalid_judgments(&matrix, &fuzzy_weights);
    }

    let weights = WispAnalyzer::validated_weights(&matrix, &fuzzy_weights, mode)?;
    debug!(weights = ?weights.as_slice(), "Normalized criterion weights");
    let ranking = WispAnalyzer::rank_matrix(&matrix, &weights)?;

    let categories: BTreeMap<String, CommuteCategory> = inputs
        .alternatives
        .iter()
        .zip(matrix.alternatives())
        .map(|(input, id)| (id.to_string(), input.category))
        .collect();

    let winner = ranking.best().map(|best| {
        let category = categories
            .get(best.alternative.as_str())
            .copied()
            .unwrap_or_default();
        Winner {
            alternative: best.alternative.clone(),
            category,
            commentary: category.commentary(),
            tied: ranking.is_tied_at_top(),
        }
    });

    info!(
        alternatives = matrix.alternative_count(),
        criteria = matrix.criterion_count(),
        winner = winner.as_ref().map(|w| w.alternative.as_str()).unwrap_or("-"),
        "Ranking completed"
    );

    Ok(RankingReport {
        ranking,
        criteria: matrix.criteria().to_vec(),
        weights,
        categories,
        winner,
    })
}

fn warn_invalid_judgments(matrix: &DecisionMatrix, fuzzy_weights: &[Ivpfn]) {
    for (a, c) in matrix.invalid_cells() {
        warn!(
            alternative = %matrix.alternatives()[a],
            criterion = %matrix.criteria()[c],
            "Judgment violates fuzzy constraints; scoring as given"
        );
    }
    for (criterion, weight) in matrix.criteria().iter().zip(fuzzy_weights) {
        if !weight.is_valid() {
            warn!(criterion = %criterion, "Weight violates fuzzy constraints; scoring as given");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{AlternativeInput, WeightInput};
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const BALANCED: Ivpfn = Ivpfn::new(0.5, 0.5, 0.5, 0.5);
    const STRONG: Ivpfn = Ivpfn::new(0.9, 0.9, 0.1, 0.1);
    const FULL_WEIGHT: Ivpfn = Ivpfn::new(1.0, 1.0, 0.0, 0.0);

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct MockWorkbookReader {
        result: Result<DecisionInputs, IngestionError>,
        reads: AtomicUsize,
    }

    impl MockWorkbookReader {
        fn returning(inputs: DecisionInputs) -> Self {
            Self {
                result: Ok(inputs),
                reads: AtomicUsize::new(0),
            }
        }

        fn failing(err: IngestionError) -> Self {
            Self {
                result: Err(err),
                reads: AtomicUsize::new(0),
            }
        }
    }

    impl WorkbookReader for MockWorkbookReader {
        fn read(&self, _path: &Path) -> Result<DecisionInputs, IngestionError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn alternative(label: &str, judgments: Vec<Ivpfn>) -> AlternativeInput {
        AlternativeInput {
            label: label.to_string(),
            category: CommuteCategory::from_known_label(label),
            judgments,
        }
    }

    fn weight(label: &str, judgment: Ivpfn) -> WeightInput {
        WeightInput {
            label: label.to_string(),
            judgment,
        }
    }

    fn two_alternatives() -> DecisionInputs {
        DecisionInputs {
            alternatives: vec![
                alternative("Walking", vec![BALANCED]),
                alternative("Private Car", vec![STRONG]),
            ],
            weights: vec![weight("Cost", FULL_WEIGHT)],
        }
    }

    fn command() -> RankAlternativesCommand {
        RankAlternativesCommand {
            workbook_path: PathBuf::from("survey.yaml"),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn ranks_and_names_winner() {
        let reader = Arc::new(MockWorkbookReader::returning(two_alternatives()));
        let handler = RankAlternativesHandler::new(reader.clone(), RankingSettings::default());

        let report = handler.handle(command()).unwrap();

        assert_eq!(reader.reads.load(Ordering::SeqCst), 1);
        let order: Vec<_> = report.ranking.iter().map(|e| e.alternative.as_str()).collect();
        assert_eq!(order, vec!["Private Car", "Walking"]);

        let winner = report.winner.unwrap();
        assert_eq!(winner.alternative.as_str(), "Private Car");
        assert_eq!(winner.category, CommuteCategory::Car);
        assert_eq!(winner.commentary, CommuteCategory::Car.commentary());
        assert!(!winner.tied);
    }

    #[test]
    fn report_carries_criteria_and_weights() {
        let inputs = DecisionInputs {
            alternatives: vec![alternative("Walking", vec![BALANCED, STRONG])],
            weights: vec![weight("Cost", BALANCED), weight("Time", BALANCED)],
        };

        let report = rank_inputs(&inputs, ValidationMode::Strict).unwrap();

        let labels: Vec<_> = report.criteria.iter().map(|c| c.as_str()).collect();
        assert_eq!(labels, vec!["Cost", "Time"]);
        assert_eq!(report.weights.as_slice(), &[0.5, 0.5]);
        assert_eq!(report.category_of("Walking"), Some(CommuteCategory::Walking));
    }

    #[test]
    fn report_weights_are_the_weights_used_for_scoring() {
        let inputs = DecisionInputs {
            alternatives: vec![alternative("Walking", vec![BALANCED, STRONG])],
            weights: vec![weight("Cost", BALANCED), weight("Time", STRONG)],
        };

        let report = rank_inputs(&inputs, ValidationMode::Strict).unwrap();

        let entry = report.ranking.best().unwrap();
        let expected_sum: f64 = report
            .weights
            .as_slice()
            .iter()
            .zip([BALANCED.score(), STRONG.score()])
            .map(|(w, c)| w * c)
            .sum();
        assert!((entry.breakdown.unwrap().weighted_sum - expected_sum).abs() < 1e-12);
    }

    #[test]
    fn no_alternatives_yields_empty_report() {
        let inputs = DecisionInputs {
            alternatives: vec![],
            weights: vec![weight("Cost", FULL_WEIGHT)],
        };

        let report = rank_inputs(&inputs, ValidationMode::Strict).unwrap();
        assert!(report.ranking.is_empty());
        assert!(report.winner.is_none());
    }

    #[test]
    fn tie_at_top_is_flagged() {
        let inputs = DecisionInputs {
            alternatives: vec![
                alternative("Walking", vec![STRONG]),
                alternative("University Shuttle", vec![STRONG]),
            ],
            weights: vec![weight("Cost", FULL_WEIGHT)],
        };

        let report = rank_inputs(&inputs, ValidationMode::Strict).unwrap();
        let winner = report.winner.unwrap();
        assert_eq!(winner.alternative.as_str(), "Walking");
        assert!(winner.tied);
    }

    #[test]
    fn permissive_mode_scores_invalid_judgment() {
        let inputs = DecisionInputs {
            alternatives: vec![alternative("Walking", vec![Ivpfn::new(0.9, 0.9, 0.9, 0.9)])],
            weights: vec![weight("Cost", FULL_WEIGHT)],
        };

        assert!(rank_inputs(&inputs, ValidationMode::Strict).is_err());
        assert!(rank_inputs(&inputs, ValidationMode::Permissive).is_ok());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn weight_count_mismatch_fails() {
        let mut inputs = two_alternatives();
        inputs.weights.push(weight("Time", FULL_WEIGHT));

        let result = rank_inputs(&inputs, ValidationMode::Strict);
        assert_eq!(
            result,
            Err(RankingFailure::Analysis(AnalysisError::shape_mismatch("weights", 1, 2)))
        );
    }

    #[test]
    fn ragged_rows_fail() {
        let mut inputs = two_alternatives();
        inputs.alternatives[1].judgments.push(STRONG);

        let result = rank_inputs(&inputs, ValidationMode::Strict);
        assert!(matches!(
            result,
            Err(RankingFailure::Analysis(AnalysisError::ShapeMismatch { .. }))
        ));
    }

    #[test]
    fn ingestion_failure_has_user_message() {
        let reader = Arc::new(MockWorkbookReader::failing(IngestionError::MissingSheet(
            "weights".to_string(),
        )));
        let handler = RankAlternativesHandler::new(reader, RankingSettings::default());

        let err = handler.handle(command()).unwrap_err();
        assert_eq!(
            err.user_message(),
            "Error loading data: Workbook is missing the 'weights' sheet"
        );
    }

    #[test]
    fn failure_converts_to_domain_error() {
        let err = RankingFailure::Analysis(AnalysisError::DegenerateWeights { sum: 0.0 });
        let domain: DomainError = err.into();
        assert_eq!(domain.code, crate::domain::foundation::ErrorCode::DegenerateWeights);
    }
}
