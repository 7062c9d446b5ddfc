use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConstantsError {
    #[error("unknown provisioning action: {0}")]
    UnknownAction(String),
}
