use serde::Serialize;

///
/// Result of token or message operation.
///
/// Store and provider failures do not fail the request,
/// they are reported here instead.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub status: OutcomeStatus,
    pub failures: Vec<Failure>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Completed,
    /// Audience resolved to zero tokens, nothing was sent
    NoRecipients,
    Degraded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub stage: Stage,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    TokenLookup,
    TokenInsert,
    TokenUpdate,
    TokenDelete,
    TopicSubscribe,
    TopicUnsubscribe,
    Send,
}

impl Outcome {
    pub fn completed() -> Self {
        Self {
            status: OutcomeStatus::Completed,
            failures: Vec::new(),
        }
    }

    pub fn no_recipients() -> Self {
        Self {
            status: OutcomeStatus::NoRecipients,
            failures: Vec::new(),
        }
    }

    pub fn degraded(stage: Stage, reasons: impl IntoIterator<Item = String>) -> Self {
        let mut outcome = Self::completed();
        outcome.add_failures(stage, reasons);

        outcome
    }

    ///
    /// Records failures, outcome becomes degraded
    /// as soon as at least one failure is recorded
    ///
    pub fn add_failures(&mut self, stage: Stage, reasons: impl IntoIterator<Item = String>) {
        self.failures
            .extend(reasons.into_iter().map(|reason| Failure { stage, reason }));

        if !self.failures.is_empty() {
            self.status = OutcomeStatus::Degraded;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_failures_degrades() {
        let mut outcome = Outcome::completed();

        outcome.add_failures(Stage::Send, ["index: 0, reason: NOT_FOUND".to_string()]);

        assert_eq!(outcome.status, OutcomeStatus::Degraded);
        assert_eq!(outcome.failures.len(), 1);
    }

    #[test]
    fn add_failures_nothing_recorded() {
        let mut outcome = Outcome::completed();

        outcome.add_failures(Stage::Send, Vec::new());

        assert_eq!(outcome, Outcome::completed());
    }

    #[test]
    fn outcome_json_serialize() {
        let outcome = Outcome::degraded(
            Stage::TopicSubscribe,
            ["index: 1, reason: NOT_FOUND".to_string()],
        );

        let value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(
            value,
            json!({
                "status": "degraded",
                "failures": [
                    { "stage": "topic_subscribe", "reason": "index: 1, reason: NOT_FOUND" }
                ]
            })
        );
    }

    #[test]
    fn no_recipients_json_serialize() {
        let value = serde_json::to_value(Outcome::no_recipients()).unwrap();

        assert_eq!(value, json!({ "status": "no_recipients", "failures": [] }));
    }
}
