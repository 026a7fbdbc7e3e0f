// self
use crate::obs::{Outcome, Stage};

/// Records a stage outcome via the global metrics recorder (when enabled).
pub fn record_outcome(stage: Stage, outcome: Outcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"myjohndeere_oauth1_stage_total",
			"stage" => stage.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (stage, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_outcome_without_recorder_is_silent() {
		record_outcome(Stage::UserProfile, Outcome::ParseError);
		record_outcome(Stage::Authenticate, Outcome::Rejected);
	}
}
