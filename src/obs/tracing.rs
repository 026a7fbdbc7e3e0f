// self
use crate::{_prelude::*, obs::Stage};

/// Future type produced by [`StageSpan::instrument`]; instrumented only with `tracing`.
#[cfg(feature = "tracing")]
pub type InstrumentedStage<F> = tracing::instrument::Instrumented<F>;
/// Future type produced by [`StageSpan::instrument`]; passthrough without `tracing`.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedStage<F> = F;

/// Span wrapping one strategy stage.
#[derive(Clone, Debug)]
pub struct StageSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl StageSpan {
	/// Opens a span for `stage` against the given provider endpoint.
	pub fn new(stage: Stage, endpoint: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"myjohndeere_oauth1.strategy",
				stage = stage.as_str(),
				endpoint
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (stage, endpoint);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedStage<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn instrument_preserves_output() {
		let span = StageSpan::new(Stage::UserProfile, "https://example.com/users/@currentUser");
		let value = span.instrument(async { "profile" }).await;

		assert_eq!(value, "profile");
	}
}
