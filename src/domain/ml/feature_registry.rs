use crate::domain::errors::InferenceError;

/// Ordered list of loan applicant feature names.
/// This order MUST match exactly with the order the scaler and classifier were fitted on.
/// Any change here is a breaking change for model artifacts.
pub const FEATURE_NAMES: [&str; 16] = [
    "Age",
    "Income",
    "LoanAmount",
    "CreditScore",
    "MonthsEmployed",
    "NumCreditLines",
    "InterestRate",
    "LoanTerm",
    "DTIRatio",
    "Education",
    "EmploymentType",
    "MaritalStatus",
    "HasMortgage",
    "HasDependents",
    "LoanPurpose",
    "HasCoSigner",
];

pub const FEATURE_COUNT: usize = FEATURE_NAMES.len();

/// A raw applicant vector whose length has been checked against the registry.
///
/// Values are positional: index `i` is the feature named `FEATURE_NAMES[i]`.
/// No range checks are applied (a negative age passes through to the model).
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Value of a named feature, if the name is registered.
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|idx| self.0[idx])
    }
}

impl TryFrom<Vec<f64>> for FeatureVector {
    type Error = InferenceError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        let actual = values.len();
        let array: [f64; FEATURE_COUNT] =
            values.try_into().map_err(|_| InferenceError::FeatureCount {
                expected: FEATURE_COUNT,
                actual,
            })?;
        Ok(Self(array))
    }
}

/// Checks an artifact's optional `feature_names` against the registry order.
pub fn check_feature_names(names: &[String]) -> Result<(), String> {
    if names.len() != FEATURE_COUNT {
        return Err(format!(
            "feature_names has {} entries, expected {}",
            names.len(),
            FEATURE_COUNT
        ));
    }
    for (idx, (got, want)) in names.iter().zip(FEATURE_NAMES.iter()).enumerate() {
        if got != want {
            return Err(format!(
                "feature_names[{}] is '{}', expected '{}'",
                idx, got, want
            ));
        }
    }
    Ok(())
}
