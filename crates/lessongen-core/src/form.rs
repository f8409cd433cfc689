use crate::credential::Credential;
use crate::difficulty::Difficulty;
use crate::error::FormError;
use crate::material::Material;

/// Where the page is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingCredential,
    AwaitingRequest,
    Ready,
    Generating,
    Displayed,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::AwaitingCredential => "awaiting_credential",
            Phase::AwaitingRequest => "awaiting_request",
            Phase::Ready => "ready",
            Phase::Generating => "generating",
            Phase::Displayed => "displayed",
        }
    }
}

/// Snapshot of the inputs for one completion call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub credential: Credential,
    pub difficulty: Difficulty,
    pub prompt: String,
}

/// Input values and the displayed result for one page session.
///
/// A key typed into the masked field is never stored here. Callers pass it
/// in with the submission that carried it.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    stored_credential: Option<Credential>,
    pub difficulty: Difficulty,
    pub request: String,
    in_flight: usize,
    material: Option<Material>,
}

impl FormState {
    /// `stored` is the credential from the secret store, if any.
    pub fn new(stored: Option<Credential>) -> Self {
        Self {
            stored_credential: stored,
            ..Default::default()
        }
    }

    pub fn has_stored_credential(&self) -> bool {
        self.stored_credential.is_some()
    }

    /// Stored secret first, then the key typed into this submission.
    pub fn credential<'a>(&'a self, entered: Option<&'a Credential>) -> Option<&'a Credential> {
        self.stored_credential.as_ref().or(entered)
    }

    pub fn material(&self) -> Option<&Material> {
        self.material.as_ref()
    }

    /// Number of completion calls started but not yet completed.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Current phase, given the key (if any) typed into this submission.
    ///
    /// `Generating` holds while any call is still running. Overlapping
    /// calls each replace the result when they finish, so the last one to
    /// finish is what gets displayed.
    pub fn phase(&self, entered: Option<&Credential>) -> Phase {
        if self.credential(entered).is_none() {
            Phase::AwaitingCredential
        } else if self.in_flight > 0 {
            Phase::Generating
        } else if self.material.is_some() {
            Phase::Displayed
        } else if self.request.trim().is_empty() {
            Phase::AwaitingRequest
        } else {
            Phase::Ready
        }
    }

    /// Button press. Refuses without a credential or request text;
    /// otherwise moves to `Generating` and hands back the call inputs.
    pub fn begin_generation(
        &mut self,
        entered: Option<&Credential>,
    ) -> Result<GenerationRequest, FormError> {
        let credential = self
            .credential(entered)
            .cloned()
            .ok_or(FormError::MissingCredential)?;
        if self.request.trim().is_empty() {
            return Err(FormError::EmptyRequest);
        }
        self.in_flight += 1;
        Ok(GenerationRequest {
            credential,
            difficulty: self.difficulty,
            prompt: self.request.clone(),
        })
    }

    /// Store the result of one call, discarding the previous one.
    pub fn complete(&mut self, material: Material) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.material = Some(material);
    }
}
