use tracing::info;

use super::signature::{PetitionError, Signature, SignatureInput};

/// The session's view of the petition: a running count and this visitor's
/// signature, if any. One signature per session.
#[derive(Debug, Clone)]
pub struct Petition {
    signature_count: u64,
    goal: u64,
    signature: Option<Signature>,
}

impl Petition {
    pub fn new(initial_count: u64, goal: u64) -> Self {
        Self {
            signature_count: initial_count,
            goal,
            signature: None,
        }
    }

    pub fn sign(&mut self, input: SignatureInput) -> Result<&Signature, PetitionError> {
        if self.signature.is_some() {
            return Err(PetitionError::AlreadySigned);
        }
        input.validate()?;

        self.signature_count += 1;
        let signature = self.signature.insert(Signature::from(input));

        info!(
            signature_id = %signature.id,
            total = self.signature_count,
            "Petition signed"
        );
        Ok(signature)
    }

    pub fn signature_count(&self) -> u64 {
        self.signature_count
    }

    pub fn goal(&self) -> u64 {
        self.goal
    }

    pub fn has_signed(&self) -> bool {
        self.signature.is_some()
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    /// Share of the goal reached, capped at 100.
    pub fn progress_percent(&self) -> f64 {
        if self.goal == 0 {
            return 100.0;
        }
        (self.signature_count as f64 / self.goal as f64 * 100.0).min(100.0)
    }
}
