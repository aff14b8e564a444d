//! Validation rules for operation creation requests.
//!
//! Rules are read-only checks over the request: no rule may depend on another
//! rule's side effects. New rules implement [`OperationRequestValidator`] and
//! are appended to the composite's list.

use rust_decimal::Decimal;

use crate::domain::money::round_half_up;
use crate::domain::{CreateOperationRequest, ValidationError};

/// One validation rule over a [`CreateOperationRequest`].
pub trait OperationRequestValidator: Send + Sync {
    fn validate(&self, request: &CreateOperationRequest) -> Result<(), ValidationError>;
}

/// Requires the detail costs to reconcile with the top-level estimate.
///
/// An empty detail list passes unconditionally: a request without an
/// itemized breakdown places no constraint on the estimate. Otherwise the
/// detail sum and the estimate are each rounded half-up to two decimals
/// before comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedAmountEqualToDetailsSumValidator;

impl OperationRequestValidator for EstimatedAmountEqualToDetailsSumValidator {
    fn validate(&self, request: &CreateOperationRequest) -> Result<(), ValidationError> {
        if request.details.is_empty() {
            return Ok(());
        }

        let details_sum = round_half_up(
            request
                .details
                .iter()
                .map(|detail| detail.estimated_cost.amount)
                .sum::<Decimal>(),
        );
        let estimate = request.estimated_cost.rounded_amount();

        if details_sum != estimate {
            return Err(ValidationError::EstimatedAmountMismatch {
                message: format!(
                    "details sum to {details_sum} {currency}, estimate is {estimate} {currency}",
                    currency = request.estimated_cost.currency,
                ),
            });
        }
        Ok(())
    }
}

/// Runs an ordered list of independent rules, stopping at the first failure.
pub struct CompositeOperationRequestValidator {
    validators: Vec<Box<dyn OperationRequestValidator>>,
}

impl CompositeOperationRequestValidator {
    /// Compose an explicit rule list. Rules run in the order given.
    pub fn new(validators: Vec<Box<dyn OperationRequestValidator>>) -> Self {
        Self { validators }
    }

    /// Apply every rule in order; the first failing rule's error propagates
    /// and the remaining rules do not run.
    pub fn validate(&self, request: &CreateOperationRequest) -> Result<(), ValidationError> {
        for validator in &self.validators {
            validator.validate(request)?;
        }
        Ok(())
    }
}

impl Default for CompositeOperationRequestValidator {
    fn default() -> Self {
        Self::new(vec![Box::new(EstimatedAmountEqualToDetailsSumValidator)])
    }
}
