use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("unknown scenario '{id}' (known: {known})")]
    UnknownScenario { id: String, known: String },
}
