use crate::core::{emit, format, introspect, validate};
use crate::domain::model::{
    AnnotatedType, Diagnostic, RoundOutcome, RoundReport, ValidationResult,
};
use crate::domain::ports::{DiagnosticSink, SourceWriter};

/// Pure per-round pipeline: validate every candidate in iteration order,
/// then introspect, synthesize and emit each one.
///
/// The first rejection aborts the whole round: no unit is produced for any
/// candidate, including ones that validated cleanly before the failure.
pub fn process(candidates: &[AnnotatedType], facility: &str) -> RoundOutcome {
    for candidate in candidates {
        if let ValidationResult::Rejected { reason } = validate::validate(candidate) {
            return RoundOutcome::Aborted {
                diagnostic: Diagnostic {
                    type_name: candidate.name.clone(),
                    message: reason,
                },
            };
        }
    }

    let units = candidates
        .iter()
        .map(|candidate| {
            let fields = introspect::fields(candidate);
            let expr = format::synthesize(&fields);
            emit::emit(candidate, &expr, facility)
        })
        .collect();

    RoundOutcome::Completed { units }
}

/// Round driver: runs the pure pipeline, forwards diagnostics to the host
/// sink and hands generated units to the host writer. Holds no state across
/// rounds.
pub struct Generator<W: SourceWriter, D: DiagnosticSink> {
    writer: W,
    diagnostics: D,
    log_facility: String,
}

impl<W: SourceWriter, D: DiagnosticSink> Generator<W, D> {
    pub fn new(writer: W, diagnostics: D, log_facility: impl Into<String>) -> Self {
        Self {
            writer,
            diagnostics,
            log_facility: log_facility.into(),
        }
    }

    /// Processes one compilation round. The round is always reported as
    /// handled, aborted or not, so no other generator picks up the marker.
    pub fn run_round(&self, candidates: &[AnnotatedType]) -> RoundReport {
        tracing::info!("Processing round with {} candidate(s)", candidates.len());

        match process(candidates, &self.log_facility) {
            RoundOutcome::Aborted { diagnostic } => {
                self.diagnostics.error(&diagnostic);
                tracing::debug!("Round aborted by candidate {}", diagnostic.type_name);
                RoundReport {
                    handled: true,
                    aborted: true,
                    candidates: candidates.len(),
                    generated: 0,
                    written: Vec::new(),
                    failed_writes: 0,
                    diagnostics: vec![diagnostic.to_string()],
                }
            }
            RoundOutcome::Completed { units } => {
                let mut written = Vec::new();
                let mut failed_writes = 0;

                for unit in &units {
                    match self.writer.write_unit(unit) {
                        Ok(path) => {
                            tracing::debug!("Wrote {}", path);
                            written.push(path);
                        }
                        Err(e) => {
                            // A failed write stays on the internal trace and
                            // does not stop the remaining units, unlike a
                            // validation failure.
                            tracing::error!("Failed to write {}: {}", unit.file_name, e);
                            failed_writes += 1;
                        }
                    }
                }

                tracing::info!(
                    "Round complete: {} unit(s) generated, {} written",
                    units.len(),
                    written.len()
                );

                RoundReport {
                    handled: true,
                    aborted: false,
                    candidates: candidates.len(),
                    generated: units.len(),
                    written,
                    failed_writes,
                    diagnostics: Vec::new(),
                }
            }
        }
    }
}
